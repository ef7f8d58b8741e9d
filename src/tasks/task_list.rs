use std::fmt;

use super::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskEvent {
    Added(usize),
    Updated(usize),
    Removed(usize),
}

type Listener = Box<dyn FnMut(&TaskEvent)>;

/// Ordered tasks backing the table. Listeners run after every mutation.
#[derive(Default)]
pub struct TaskList {
    items: Vec<Task>,
    listeners: Vec<Listener>,
}

impl fmt::Debug for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskList")
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&TaskEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn append(&mut self, task: Task) {
        self.items.push(task);
        self.notify(TaskEvent::Added(self.items.len() - 1));
    }

    /// Removes the task at `index`. Returns `None` when out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<Task> {
        if index >= self.items.len() {
            return None;
        }
        let task = self.items.remove(index);
        self.notify(TaskEvent::Removed(index));
        Some(task)
    }

    /// Mutates the task at `index` in place. Returns `None` when out of range.
    pub fn update<R>(&mut self, index: usize, f: impl FnOnce(&mut Task) -> R) -> Option<R> {
        let result = f(self.items.get_mut(index)?);
        self.notify(TaskEvent::Updated(index));
        Some(result)
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.items.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(Task::name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn notify(&mut self, event: TaskEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

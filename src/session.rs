use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::{info, warn};

use crate::{
    config::Config,
    error::{Action, Result, TodoError},
    tasks::{Priority, TaskForm, TaskList},
};

/// Application state shared by the command handlers: the task store, the
/// input form and where exports go.
#[derive(Debug)]
pub struct Session {
    pub tasks: TaskList,
    pub form: TaskForm,
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            tasks: TaskList::new(),
            form: TaskForm::default(),
            config,
        }
    }

    pub fn save_path(&self) -> &Path {
        &self.config.save_path
    }

    pub fn require_selection(&self, selection: Option<usize>, action: Action) -> Result<usize> {
        match selection {
            Some(index) if index < self.tasks.len() => Ok(index),
            _ => {
                warn!(%action, "no task selected");
                Err(TodoError::NoSelection(action))
            }
        }
    }

    pub fn add(&mut self) -> Result<()> {
        let task = self
            .form
            .build()
            .inspect_err(|err| warn!(%err, "add rejected"))?;
        info!(name = task.name(), "adding task");
        self.tasks.append(task);
        self.form.clear();
        Ok(())
    }

    /// `prompt` gets the current name and returns the replacement, or `None`
    /// when the user cancels.
    pub fn edit(
        &mut self,
        selection: Option<usize>,
        prompt: impl FnOnce(&str) -> Option<String>,
    ) -> Result<()> {
        let index = self.require_selection(selection, Action::Edit)?;
        let current = self
            .tasks
            .get(index)
            .map(|t| t.name().to_string())
            .unwrap_or_default();
        let Some(name) = prompt(&current) else {
            return Ok(());
        };
        if name.is_empty() {
            warn!(index, "task renamed to an empty name");
        }
        info!(index, from = %current, to = %name, "renaming task");
        self.tasks.update(index, |task| task.set_name(name));
        Ok(())
    }

    /// `prompt` gets the offered default (`Low`) and returns the chosen
    /// priority, or `None` when the user cancels.
    pub fn prioritize(
        &mut self,
        selection: Option<usize>,
        prompt: impl FnOnce(Priority) -> Option<Priority>,
    ) -> Result<()> {
        let index = self.require_selection(selection, Action::Prioritize)?;
        let Some(priority) = prompt(Priority::default()) else {
            return Ok(());
        };
        info!(index, %priority, "setting priority");
        self.tasks.update(index, |task| task.set_priority(Some(priority)));
        Ok(())
    }

    pub fn delete(&mut self, selection: Option<usize>) -> Result<()> {
        let index = self.require_selection(selection, Action::Delete)?;
        let task = self
            .tasks
            .remove_at(index)
            .ok_or(TodoError::NoSelection(Action::Delete))?;
        info!(index, name = task.name(), "deleted task");
        Ok(())
    }

    /// Overwrites the export file with one task name per line. Returns the
    /// number of lines written.
    pub fn save(&self) -> Result<usize> {
        let path = self.save_path();
        let written = write_names(path, self.tasks.names()).map_err(|source| {
            warn!(path = %path.display(), %source, "save failed");
            TodoError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        info!(path = %path.display(), written, "saved tasks");
        Ok(written)
    }
}

fn write_names<'a>(
    path: &Path,
    names: impl Iterator<Item = &'a str>,
) -> std::io::Result<usize> {
    let mut writer = BufWriter::new(File::create(path)?);
    let mut count = 0;
    for name in names {
        writer.write_all(name.as_bytes())?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

pub mod category;
pub mod priority;
pub mod task;
pub mod task_list;

pub use category::Category;
pub use priority::Priority;
pub use task::{Task, TaskForm};
pub use task_list::{TaskEvent, TaskList};

/// Moves through `[unset, values...]` one step, wrapping at either end.
fn cycle_choice<T: Copy + PartialEq>(
    values: &[T],
    current: Option<T>,
    forward: bool,
) -> Option<T> {
    let slots = values.len() + 1;
    let at = match current {
        None => 0,
        Some(v) => values.iter().position(|x| *x == v).map_or(0, |i| i + 1),
    };
    let next = if forward {
        (at + 1) % slots
    } else {
        (at + slots - 1) % slots
    };
    next.checked_sub(1).map(|i| values[i])
}

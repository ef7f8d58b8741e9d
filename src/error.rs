use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Commands that need a selected task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Edit,
    Prioritize,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Action::Edit => "edit",
            Action::Prioritize => "prioritize",
            Action::Delete => "delete",
        };
        f.write_str(verb)
    }
}

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("{0}")]
    Validation(String),
    #[error("Please select a task to {0}.")]
    NoSelection(Action),
    #[error("Error saving tasks: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not determine the home directory")]
    NoHomeDir,
}

pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_selection_messages() {
        assert_eq!(
            TodoError::NoSelection(Action::Edit).to_string(),
            "Please select a task to edit."
        );
        assert_eq!(
            TodoError::NoSelection(Action::Prioritize).to_string(),
            "Please select a task to prioritize."
        );
        assert_eq!(
            TodoError::NoSelection(Action::Delete).to_string(),
            "Please select a task to delete."
        );
    }

    #[test]
    fn io_message_carries_cause() {
        let err = TodoError::Io {
            path: PathBuf::from("/nowhere/ToDoList.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Error saving tasks: denied");
    }
}

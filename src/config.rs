use std::path::{Path, PathBuf};

use crate::error::{Result, TodoError};

const SAVE_DIR: &str = "Desktop";
const SAVE_FILE: &str = "ToDoList.txt";

#[derive(Debug, Clone)]
pub struct Config {
    pub save_path: PathBuf,
}

impl Config {
    pub fn new(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    /// Export target under the user's home directory: `~/Desktop/ToDoList.txt`.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(TodoError::NoHomeDir)?;
        Ok(Self::in_dir(&home))
    }

    fn in_dir(home: &Path) -> Self {
        Self::new(home.join(SAVE_DIR).join(SAVE_FILE))
    }
}

use std::{fs::File, sync::Mutex};

use anyhow::{Context, Result};
use todo_list::{config::Config, tui::App};

const DEBUG_ENV: &str = "TODO_LIST_DEBUG";
const LOG_FILE: &str = "todo-list.log";

/// Logs go to a file so they never draw over the terminal UI.
fn init_logging() -> Result<()> {
    if std::env::var(DEBUG_ENV).is_err() {
        return Ok(());
    }
    let path = std::env::temp_dir().join(LOG_FILE);
    let file = File::create(&path)
        .with_context(|| format!("could not create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter("todo_list=debug")
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    let config = Config::from_home()?;
    tracing::info!(save_path = %config.save_path.display(), "starting");

    let mut terminal = ratatui::init();
    terminal.clear()?;
    let app_result = App::new(config).run(&mut terminal);
    ratatui::restore();
    app_result
}

pub mod app;
pub mod dialogs;
mod text_input;

pub use app::App;

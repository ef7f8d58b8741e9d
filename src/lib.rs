//! Terminal to-do list: a task table with add, edit, prioritize, delete and
//! a plain-text export of task names.

pub mod config;
pub mod error;
pub mod session;
pub mod tasks;
pub mod tui;

pub mod commands;
pub mod core;
pub mod forms;
pub mod io;
pub mod menus;
pub mod output;
mod shell;
pub mod shell_context;
pub mod ui;

pub use shell::run_cli;
pub use shell_context::ShellContext;

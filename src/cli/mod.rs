//! Interactive shell and script runner around a single menu page.

pub mod core;
pub mod output;
mod shell;

pub use self::core::{CliError, CliMode, ShellContext};
pub use shell::run_cli;

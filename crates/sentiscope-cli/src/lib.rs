//! Sentiscope CLI library.
//!
//! Configuration, session wiring, command execution and output formatting
//! for the `sentiscope` command-line interface.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;
pub mod session;

pub use cli::{Cli, Command};
pub use config::{Config, OutputFormat};
pub use error::{CliError, Result};
pub use output::Formatter;
pub use session::Session;

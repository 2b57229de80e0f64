//! Command-line interface.
//!
//! With no command, netlock runs the update service in the foreground.

mod commands;
mod output;

use clap::Parser;
pub use commands::{Cli, Commands};

use crate::error::NetlockError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), NetlockError> {
    let cli = Cli::parse();
    cli.execute()
}

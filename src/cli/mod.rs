//! CLI module for cardsort.
//!
//! Flags are handled before the terminal is touched:
//!
//! ```ignore
//! use cardsort::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&command) {
//!     return result;
//! }
//! // No CLI-only command, continue to the TUI
//! ```

pub mod args;

pub use args::{parse_args, CliCommand, RunOptions, USAGE};

use color_eyre::Result;

/// Crate version, from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a CLI-only command if applicable.
///
/// * `None` - the command is [`CliCommand::Run`]; start the TUI
/// * `Some(result)` - the command was handled and the process should exit
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("cardsort {}", VERSION);
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Run(_) => None,
    }
}

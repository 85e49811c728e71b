//! CLI module for horizon-stream.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version and usage display
//! - The streaming command that prints records as JSON lines
//!
//! # Usage
//!
//! ```ignore
//! use horizon_client::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args())?;
//! if run_cli_command(&command) {
//!     return Ok(());
//! }
//! // CliCommand::Stream: set up the client and stream
//! ```

pub mod args;
pub mod stream;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, Resource, StreamArgs};
pub use stream::{build_config, stream_to};
pub use version::{version_line, USAGE, VERSION};

/// Run a command that needs no network access.
///
/// Returns `true` when the command was handled (version or help was
/// printed) and `false` for [`CliCommand::Stream`].
pub fn run_cli_command(command: &CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            true
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            true
        }
        CliCommand::Stream(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_is_not_handled() {
        let command = CliCommand::Stream(StreamArgs::new(Resource::Ledgers));
        assert!(!run_cli_command(&command));
    }

    #[test]
    fn test_version_and_help_are_handled() {
        assert!(run_cli_command(&CliCommand::Version));
        assert!(run_cli_command(&CliCommand::Help));
    }
}

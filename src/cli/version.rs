//! Version and usage text for horizon-stream.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed by `--help` and on invalid arguments.
pub const USAGE: &str = "\
Stream Horizon records as JSON lines.

Usage: horizon-stream <RESOURCE> [OPTIONS]

Resources:
  effects, operations, payments, transactions, ledgers

Options:
  --testnet          Use the test network
  --url <URL>        Horizon base URL (overrides --testnet and HORIZON_URL)
  --account <ID>     Only records of this account
  --cursor <CURSOR>  Start position (default: now)
  --seconds <N>      Stop after N seconds
  -h, --help         Print help
  -V, --version      Print version

Logs go to stderr; set RUST_LOG to adjust verbosity.";

/// Version line printed by `--version`.
pub fn version_line() -> String {
    format!("horizon-stream {}", VERSION)
}

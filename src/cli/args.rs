//! Command-line argument parsing for horizon-stream.

use std::str::FromStr;

/// Streamable resource selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Effects,
    Operations,
    Payments,
    Transactions,
    Ledgers,
}

impl FromStr for Resource {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "effects" => Ok(Resource::Effects),
            "operations" => Ok(Resource::Operations),
            "payments" => Ok(Resource::Payments),
            "transactions" => Ok(Resource::Transactions),
            "ledgers" => Ok(Resource::Ledgers),
            other => Err(ArgsError::UnknownResource(other.to_string())),
        }
    }
}

/// Options of a streaming run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamArgs {
    pub resource: Resource,
    /// Use the test network instead of the public one
    pub testnet: bool,
    /// Explicit Horizon URL, overrides `--testnet`
    pub url: Option<String>,
    /// Restrict the stream to one account
    pub account: Option<String>,
    /// Starting cursor; the stream starts at `now` when unset
    pub cursor: Option<String>,
    /// Stop after this many seconds
    pub seconds: Option<u64>,
}

impl StreamArgs {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            testnet: false,
            url: None,
            account: None,
            cursor: None,
            seconds: None,
        }
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Stream a resource to stdout
    Stream(StreamArgs),
}

/// Invalid command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("missing resource to stream")]
    MissingResource,
    #[error("unknown resource '{0}'")]
    UnknownResource(String),
    #[error("option {0} requires a value")]
    MissingValue(&'static str),
    #[error("invalid value '{value}' for {option}")]
    InvalidValue { option: &'static str, value: String },
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("ledgers cannot be filtered by account")]
    AccountNotSupported,
}

/// Parse command-line arguments and return the command to run.
///
/// # Examples
///
/// ```
/// use horizon_client::cli::args::{parse_args, CliCommand, Resource};
///
/// let args = vec!["horizon-stream".to_string(), "effects".to_string()];
/// match parse_args(args.into_iter()).unwrap() {
///     CliCommand::Stream(stream) => assert_eq!(stream.resource, Resource::Effects),
///     other => panic!("unexpected command: {:?}", other),
/// }
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut resource = None;
    let mut testnet = false;
    let mut url = None;
    let mut account = None;
    let mut cursor = None;
    let mut seconds = None;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--testnet" => testnet = true,
            "--url" => url = Some(args.next().ok_or(ArgsError::MissingValue("--url"))?),
            "--account" => {
                account = Some(args.next().ok_or(ArgsError::MissingValue("--account"))?)
            }
            "--cursor" => cursor = Some(args.next().ok_or(ArgsError::MissingValue("--cursor"))?),
            "--seconds" => {
                let value = args.next().ok_or(ArgsError::MissingValue("--seconds"))?;
                let parsed = value.parse::<u64>().map_err(|_| ArgsError::InvalidValue {
                    option: "--seconds",
                    value: value.clone(),
                })?;
                seconds = Some(parsed);
            }
            flag if flag.starts_with('-') => return Err(ArgsError::UnknownOption(flag.to_string())),
            name if resource.is_none() => resource = Some(name.parse::<Resource>()?),
            extra => return Err(ArgsError::UnknownOption(extra.to_string())),
        }
    }

    let resource = resource.ok_or(ArgsError::MissingResource)?;
    if resource == Resource::Ledgers && account.is_some() {
        return Err(ArgsError::AccountNotSupported);
    }

    Ok(CliCommand::Stream(StreamArgs {
        resource,
        testnet,
        url,
        account,
        cursor,
        seconds,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ArgsError> {
        let args: Vec<String> = std::iter::once("horizon-stream")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["--help"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["effects", "-h"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_resource_only() {
        assert_eq!(
            parse(&["payments"]),
            Ok(CliCommand::Stream(StreamArgs::new(Resource::Payments)))
        );
    }

    #[test]
    fn test_parse_all_options() {
        let command = parse(&[
            "--testnet",
            "effects",
            "--account",
            "GBNZN27NAOHRJRCMHQF2ZN2F6TAPVEWKJIGZIRNKIADWIS2HDENIS6CI",
            "--cursor",
            "2531135896703017-1",
            "--seconds",
            "60",
            "--url",
            "http://localhost:8000",
        ])
        .unwrap();

        assert_eq!(
            command,
            CliCommand::Stream(StreamArgs {
                resource: Resource::Effects,
                testnet: true,
                url: Some("http://localhost:8000".to_string()),
                account: Some("GBNZN27NAOHRJRCMHQF2ZN2F6TAPVEWKJIGZIRNKIADWIS2HDENIS6CI".to_string()),
                cursor: Some("2531135896703017-1".to_string()),
                seconds: Some(60),
            })
        );
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Err(ArgsError::MissingResource));
    }

    #[test]
    fn test_parse_unknown_resource() {
        assert_eq!(
            parse(&["trades"]),
            Err(ArgsError::UnknownResource("trades".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["effects", "--follow"]),
            Err(ArgsError::UnknownOption("--follow".to_string()))
        );
    }

    #[test]
    fn test_parse_missing_and_invalid_values() {
        assert_eq!(parse(&["effects", "--cursor"]), Err(ArgsError::MissingValue("--cursor")));
        assert_eq!(
            parse(&["effects", "--seconds", "soon"]),
            Err(ArgsError::InvalidValue {
                option: "--seconds",
                value: "soon".to_string()
            })
        );
    }

    #[test]
    fn test_parse_ledgers_reject_account() {
        assert_eq!(
            parse(&["ledgers", "--account", "GA"]),
            Err(ArgsError::AccountNotSupported)
        );
    }

    #[test]
    fn test_parse_second_positional_is_rejected() {
        assert_eq!(
            parse(&["effects", "ledgers"]),
            Err(ArgsError::UnknownOption("ledgers".to_string()))
        );
    }
}

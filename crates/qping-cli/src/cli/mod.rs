//! Command line for qping.

use clap::error::ErrorKind;
use clap::Parser;
use qping_core::flags::{self, Flags, FlagsError, DEFAULT_TIMEOUT_SECS, DEFAULT_URL};
use std::ffi::OsString;
use thiserror::Error;

const ABOUT: &str = "qping: Quick internet status checkup.

Connects to a given URL directly. Helps you see if your internet is out, \
or your browsers are just being silly.";

/// Top-level CLI. No subcommands, no positional arguments.
#[derive(Debug, Parser)]
#[command(name = "qping")]
#[command(about = ABOUT, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Set a custom URL to try connecting to.
    #[arg(
        short = 'u',
        long = "url",
        value_name = "URL",
        default_value = DEFAULT_URL,
        value_parser = flags::parse_url
    )]
    pub url: String,

    /// Connect only mode; no request is sent and nothing is downloaded.
    #[arg(short = 'c', long = "connect-only")]
    pub connect_only: bool,

    /// Timeout for connecting and for downloading, in seconds. Must be >= 0; 0 disables it.
    #[arg(
        short = 't',
        long = "timeout",
        value_name = "SECONDS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = flags::parse_timeout
    )]
    pub timeout: u64,
}

impl Cli {
    pub fn into_flags(self) -> Result<Flags, FlagsError> {
        Flags::new(self.url, self.connect_only, self.timeout)
    }
}

/// What the command line asked for.
#[derive(Debug)]
pub enum Parsed {
    Run(Flags),
    /// `-h`: rendered help text, to be printed before exiting successfully.
    Help(String),
}

/// The command line could not be turned into flags.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct InvalidArgument {
    message: String,
}

impl From<clap::Error> for InvalidArgument {
    fn from(err: clap::Error) -> Self {
        Self {
            message: err.to_string().trim_end().to_string(),
        }
    }
}

impl From<FlagsError> for InvalidArgument {
    fn from(err: FlagsError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Parses `args` (program name first).
pub fn parse_args<I, T>(args: I) -> Result<Parsed, InvalidArgument>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Parsed::Run(cli.into_flags()?)),
        Err(err) if err.kind() == ErrorKind::DisplayHelp => Ok(Parsed::Help(err.to_string())),
        Err(err) => Err(err.into()),
    }
}

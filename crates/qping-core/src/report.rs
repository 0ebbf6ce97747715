//! Human-readable rendering of probe outcomes.

use anyhow::Result;
use std::fmt;
use std::io::Write;

use crate::probe::FetchResult;

/// What a probe phase ended with. Rendered as one or two lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'a> {
    Connected { url: &'a str, elapsed_millis: u64 },
    ConnectFailed { url: &'a str },
    Fetched(FetchResult),
    FetchTimedOut { timeout_secs: u64 },
    FetchFailed { reason: String },
}

impl fmt::Display for Outcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Connected {
                url,
                elapsed_millis,
            } => write!(f, "Successful connect to {} in {}ms.", url, elapsed_millis),
            Outcome::ConnectFailed { url } => {
                writeln!(f, "Unsuccessful connect to {}.", url)?;
                write!(f, "Consider checking your connection status.")
            }
            Outcome::Fetched(r) => {
                write!(f, "{} bytes received in {}ms", r.byte_count, r.elapsed_millis)
            }
            Outcome::FetchTimedOut { timeout_secs } => {
                writeln!(
                    f,
                    "Connected, but didn't download resource in required {} second timeout.",
                    timeout_secs
                )?;
                write!(f, "Consider checking your connection speed.")
            }
            Outcome::FetchFailed { reason } => {
                writeln!(f, "Connected, but download failed: {}.", reason)?;
                write!(f, "Consider checking your connection status.")
            }
        }
    }
}

/// Writes `outcome` to `out` and flushes, so each phase shows up before the next starts.
pub fn emit<W: Write>(out: &mut W, outcome: &Outcome<'_>) -> Result<()> {
    writeln!(out, "{}", outcome)?;
    out.flush()?;
    Ok(())
}

//! Run flags: target URL, connect-only mode and timeout.
//!
//! Built once at startup from the command line and passed by reference to
//! each probe phase. Nothing mutates a `Flags` after construction.

use std::time::Duration;
use thiserror::Error;

/// URL probed when `-u` is not given.
pub const DEFAULT_URL: &str = "https://en.wikipedia.org/wiki/Cat";

/// Timeout in seconds when `-t` is not given.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Largest accepted timeout. curl takes the timeout in milliseconds as a C
/// `long`, which is 32 bits on some targets.
pub const MAX_TIMEOUT_SECS: u64 = i32::MAX as u64 / 1000;

/// Rejected flag values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagsError {
    #[error("empty URL given")]
    EmptyUrl,
    #[error("timeout given must be numeric, and >= 0 (got {0:?})")]
    InvalidTimeout(String),
    #[error("timeout must be at most {max} seconds (got {0})", max = MAX_TIMEOUT_SECS)]
    TimeoutTooLarge(u64),
}

/// Immutable configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flags {
    url: String,
    connect_only: bool,
    timeout_secs: u64,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            connect_only: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Flags {
    /// Builds flags, rejecting an empty URL or a timeout above `MAX_TIMEOUT_SECS`.
    pub fn new(
        url: impl Into<String>,
        connect_only: bool,
        timeout_secs: u64,
    ) -> Result<Self, FlagsError> {
        let url = parse_url(&url.into())?;
        check_timeout(timeout_secs)?;
        Ok(Self {
            url,
            connect_only,
            timeout_secs,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn connect_only(&self) -> bool {
        self.connect_only
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Timeout handed to curl. Zero means no limit.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Accepts any non-empty URL token. Scheme and host are left for curl to judge.
pub fn parse_url(s: &str) -> Result<String, FlagsError> {
    if s.is_empty() {
        return Err(FlagsError::EmptyUrl);
    }
    Ok(s.to_string())
}

/// Accepts a non-empty run of ASCII digits no greater than `MAX_TIMEOUT_SECS`.
///
/// Signs are rejected outright, so `-1` and `+1` both fail.
pub fn parse_timeout(s: &str) -> Result<u64, FlagsError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FlagsError::InvalidTimeout(s.to_string()));
    }
    let secs = s
        .parse::<u64>()
        .map_err(|_| FlagsError::InvalidTimeout(s.to_string()))?;
    check_timeout(secs)
}

fn check_timeout(secs: u64) -> Result<u64, FlagsError> {
    if secs > MAX_TIMEOUT_SECS {
        return Err(FlagsError::TimeoutTooLarge(secs));
    }
    Ok(secs)
}

//! Probe error type and failure classification.

use thiserror::Error;

/// Error from a probe phase.
///
/// `Setup` means the curl handle could not be configured and the run cannot
/// continue. `Transfer` is a network outcome (refused, timed out, reset) and
/// gets reported to the user rather than treated as a program failure.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("curl setup failed")]
    Setup(#[source] curl::Error),
    #[error("transfer failed")]
    Transfer(#[source] curl::Error),
}

/// What a transfer failure means for the report: only a timeout gets its own
/// message, the rest are split for the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    /// Refused, unresolvable, reset, or the peer hung up.
    Connection,
    Other,
}

impl FailureKind {
    pub fn of(e: &curl::Error) -> Self {
        if e.is_operation_timedout() {
            FailureKind::Timeout
        } else if e.is_couldnt_connect()
            || e.is_couldnt_resolve_host()
            || e.is_ssl_connect_error()
            || e.is_got_nothing()
            || e.is_recv_error()
            || e.is_send_error()
        {
            FailureKind::Connection
        } else {
            FailureKind::Other
        }
    }
}

impl ProbeError {
    pub fn is_setup(&self) -> bool {
        matches!(self, ProbeError::Setup(_))
    }

    /// The underlying curl error, whose message names the actual cause.
    pub fn curl_error(&self) -> &curl::Error {
        match self {
            ProbeError::Setup(e) | ProbeError::Transfer(e) => e,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            ProbeError::Setup(_) => FailureKind::Other,
            ProbeError::Transfer(e) => FailureKind::of(e),
        }
    }
}

//! Two-phase connectivity probe.
//!
//! Phase one opens a connection to the target without sending a request.
//! Phase two, unless the run is connect-only, downloads the target with a
//! plain GET. Both phases are bounded by the run's timeout and timed with
//! wall-clock time. Network failures end the run normally after being
//! reported; only curl setup failures are returned as errors.

mod connect;
mod error;
mod fetch;

use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;

use crate::flags::Flags;
use crate::report::{self, Outcome};

pub use connect::connect;
pub use error::{FailureKind, ProbeError};
pub use fetch::{fetch, FetchResult, USER_AGENT};

/// Whole milliseconds in `d`, saturating.
pub fn whole_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Runs the probe described by `flags`, writing each phase's outcome to `out`
/// as soon as it is known.
pub fn run<W: Write>(flags: &Flags, out: &mut W) -> Result<()> {
    let url = flags.url();
    tracing::info!(
        url,
        connect_only = flags.connect_only(),
        timeout_secs = flags.timeout_secs(),
        "starting probe"
    );

    match connect(url, flags.timeout()) {
        Ok(elapsed) => {
            let elapsed_millis = whole_millis(elapsed);
            tracing::info!(elapsed_ms = elapsed_millis, "connected to {}", url);
            report::emit(out, &Outcome::Connected { url, elapsed_millis })?;
        }
        Err(e) if e.is_setup() => return Err(e).context("connect probe"),
        Err(e) => {
            tracing::warn!(
                kind = ?e.kind(),
                "connect to {} failed: {}",
                url,
                e.curl_error()
            );
            return report::emit(out, &Outcome::ConnectFailed { url });
        }
    }

    if flags.connect_only() {
        tracing::debug!("connect-only run; skipping fetch");
        return Ok(());
    }

    let outcome = match fetch(url, flags.timeout()) {
        Ok(result) => {
            tracing::info!(
                bytes = result.byte_count,
                elapsed_ms = result.elapsed_millis,
                response_code = result.response_code,
                "fetched {}",
                url
            );
            Outcome::Fetched(result)
        }
        Err(e) if e.is_setup() => return Err(e).context("fetch"),
        Err(e) => {
            let kind = e.kind();
            tracing::warn!(?kind, "fetch of {} failed: {}", url, e.curl_error());
            match kind {
                FailureKind::Timeout => Outcome::FetchTimedOut {
                    timeout_secs: flags.timeout_secs(),
                },
                FailureKind::Connection | FailureKind::Other => Outcome::FetchFailed {
                    reason: e.curl_error().to_string(),
                },
            }
        }
    };
    report::emit(out, &outcome)
}

//! Connect-only probe: open a transport connection, send nothing.

use std::time::{Duration, Instant};

use super::ProbeError;

/// Connects to the host/port of `url` without issuing a request and returns
/// the time it took. For `https` the TLS handshake is part of the connect.
///
/// `timeout` bounds the whole operation; zero means no limit.
pub fn connect(url: &str, timeout: Duration) -> Result<Duration, ProbeError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(ProbeError::Setup)?;
    easy.connect_only(true).map_err(ProbeError::Setup)?;
    easy.timeout(timeout).map_err(ProbeError::Setup)?;

    let start = Instant::now();
    easy.perform().map_err(ProbeError::Transfer)?;
    Ok(start.elapsed())
}

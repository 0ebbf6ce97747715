//! Full GET of the target, counting body bytes.

use std::time::{Duration, Instant};

use super::{whole_millis, ProbeError};

/// User agent sent with the GET.
pub const USER_AGENT: &str = "chicken/1.0";

/// Outcome of a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchResult {
    /// Body bytes received (headers excluded).
    pub byte_count: u64,
    pub elapsed_millis: u64,
    /// HTTP status of the final response. Not used to judge success.
    pub response_code: u32,
}

/// Downloads `url` with a single GET and no redirects.
///
/// The body is collected into a buffer owned by this call and dropped on
/// return; only its length survives in the result.
pub fn fetch(url: &str, timeout: Duration) -> Result<FetchResult, ProbeError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(ProbeError::Setup)?;
    easy.timeout(timeout).map_err(ProbeError::Setup)?;
    easy.useragent(USER_AGENT).map_err(ProbeError::Setup)?;

    let start = Instant::now();
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(ProbeError::Setup)?;
        transfer.perform().map_err(ProbeError::Transfer)?;
    }
    let elapsed = start.elapsed();

    let response_code = easy.response_code().map_err(ProbeError::Transfer)?;
    tracing::debug!(response_code, bytes = body.len(), "GET {} finished", url);

    Ok(FetchResult {
        byte_count: body.len() as u64,
        elapsed_millis: whole_millis(elapsed),
        response_code,
    })
}

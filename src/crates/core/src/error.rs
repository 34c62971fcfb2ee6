use std::time::Duration;
use thiserror::Error;

pub type FinverseResult<T> = Result<T, FinverseError>;

/// Errors surfaced by the FinVerse client.
///
/// Only transport-level failures reach this type. Frame-level problems
/// (malformed `data:` payloads, bad byte sequences) are recovered inside the
/// stream layer and never escape it.
#[derive(Debug, Error)]
pub enum FinverseError {
    /// Network failure, non-2xx status, or a body read failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// No bytes arrived on the stream within the configured idle window.
    #[error("stream idle for {}s without data", .0.as_secs())]
    StreamIdle(Duration),
}

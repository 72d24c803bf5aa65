//! Bridge error definitions.

use thiserror::Error;

/// Errors that abort an invocation.
///
/// Unsupported input shapes (binary bodies, trailers, malformed header
/// names) are dropped silently rather than rejected; the only fatal
/// condition is an unreadable captured body.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The captured response body could not be read back as a string. The
    /// body is always fully buffered in memory by the time it is read, so
    /// this is an invariant violation, not an expected runtime condition.
    #[error("captured response body is not valid UTF-8: {0}")]
    BodyNotUtf8(#[from] std::string::FromUtf8Error),
}

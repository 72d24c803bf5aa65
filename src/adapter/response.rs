//! Captured response to outbound event translation.
//!
//! # Responsibilities
//! - Copy the status code verbatim
//! - Collapse multi-valued headers into one comma-joined string per name
//! - Reject a non-UTF-8 body as a fatal invariant violation
//!
//! # Design Decisions
//! - Comma-joining loses the line structure of genuinely repeated headers
//!   (e.g. Set-Cookie); kept for outbound-schema compatibility and documented
//!   as a limitation rather than fixed
//! - Header names come out lowercase (`http::HeaderName` normalization);
//!   HTTP header names are case-insensitive so consumers must not rely on
//!   casing
//! - `isBase64Encoded` is always false; binary bodies are unsupported

use std::collections::HashMap;

use crate::error::BridgeError;
use crate::event::ProxyResponse;
use crate::handler::ResponseRecorder;

/// Convert everything the handler wrote into the outbound event shape.
pub fn outbound_response(recorder: ResponseRecorder) -> Result<ProxyResponse, BridgeError> {
    let (status, header_map, body) = recorder.into_parts();

    let mut headers = HashMap::with_capacity(header_map.keys_len());
    for name in header_map.keys() {
        let joined = header_map
            .get_all(name)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect::<Vec<_>>()
            .join(",");
        headers.insert(name.as_str().to_owned(), joined);
    }

    let body = String::from_utf8(body)?;

    Ok(ProxyResponse {
        status_code: status.as_u16(),
        headers,
        body,
        is_base64_encoded: false,
    })
}

//! Inbound event to synthetic request translation.
//!
//! # Responsibilities
//! - Copy method, path and body verbatim
//! - Pin the protocol to HTTP/1.0 (single-shot, no keep-alive)
//! - Preserve multi-value header semantics via `append`
//! - Carry source IP and invocation deadline as request extensions
//!
//! # Design Decisions
//! - Total mapping: an unrecognizable method falls back to GET and an
//!   unparsable path to "/" instead of failing the invocation
//! - Content-Length and Transfer-Encoding are derived fields and override
//!   any event-supplied values of the same name
//! - Trailers and TLS metadata are not modeled

use http::header::{HeaderName, HeaderValue, CONTENT_LENGTH, TRANSFER_ENCODING};
use http::{Method, Request, Uri, Version};

use super::context::InvocationContext;
use crate::event::ProxyRequest;

/// Remote peer address of the synthetic request, as reported by the gateway.
///
/// Stored as a request extension since the request never had a real socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAddr(pub String);

/// Build the in-memory request the handler will see.
pub fn synthetic_request(ctx: InvocationContext, event: &ProxyRequest) -> Request<String> {
    let method = Method::from_bytes(event.http_method.as_bytes()).unwrap_or_else(|_| {
        tracing::debug!(method = %event.http_method, "unrecognized method, falling back to GET");
        Method::GET
    });
    let uri = event.path.parse::<Uri>().unwrap_or_else(|_| {
        tracing::debug!(path = %event.path, "unparsable path, falling back to /");
        Uri::from_static("/")
    });

    let mut request = Request::new(event.body.clone());
    *request.method_mut() = method;
    *request.uri_mut() = uri;
    // The platform holds no persistent connection and speaks no HTTP/2;
    // HTTP/1.0 makes that visible to the handler.
    *request.version_mut() = Version::HTTP_10;

    for (name, value) in &event.headers {
        match (
            HeaderName::try_from(name.as_str()),
            HeaderValue::try_from(value.as_str()),
        ) {
            (Ok(parsed_name), Ok(parsed_value)) => {
                request.headers_mut().append(parsed_name, parsed_value);
            }
            _ => tracing::debug!(header = %name, "dropping header that is not valid HTTP"),
        }
    }

    request
        .headers_mut()
        .insert(CONTENT_LENGTH, HeaderValue::from(event.body.len()));
    // The full body is already materialized, so chunking never applies.
    request
        .headers_mut()
        .insert(TRANSFER_ENCODING, HeaderValue::from_static("identity"));

    request.extensions_mut().insert(SourceAddr(
        event.request_context.identity.source_ip.clone(),
    ));
    request.extensions_mut().insert(ctx);

    request
}

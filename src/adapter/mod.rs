//! Event-to-HTTP translation pipeline.
//!
//! # Responsibilities
//! - Adapt the inbound proxy event into a synthetic `http::Request`
//! - Run the handler against it, recording all output
//! - Adapt the recording back into the outbound proxy response
//!
//! # Design Decisions
//! - Strictly linear per invocation: adapt, invoke, adapt
//! - No state survives an invocation; every structure is built fresh
//! - The only fatal error is a non-UTF-8 captured body

pub mod context;
pub mod request;
pub mod response;

pub use context::InvocationContext;
pub use request::{synthetic_request, SourceAddr};
pub use response::outbound_response;

use crate::error::BridgeError;
use crate::event::{ProxyRequest, ProxyResponse};
use crate::handler::{invoke, Handler};

/// Translate one inbound event through `handler` into an outbound response.
///
/// This is the whole program: one translation pass per invocation, no
/// retries, no cross-invocation state.
pub fn proxy<H>(
    ctx: InvocationContext,
    handler: &H,
    event: ProxyRequest,
) -> Result<ProxyResponse, BridgeError>
where
    H: Handler + ?Sized,
{
    tracing::debug!(
        request_id = %ctx.request_id,
        method = %event.http_method,
        path = %event.path,
        source_ip = %event.request_context.identity.source_ip,
        "translating inbound event"
    );

    let request = synthetic_request(ctx, &event);
    let recorder = invoke(handler, &request);
    let response = outbound_response(recorder)?;

    tracing::info!(status = response.status_code, "invocation complete");
    Ok(response)
}

//! Handler contract and invocation.
//!
//! # Responsibilities
//! - Define the response-sink capability handlers write to
//! - Define the single-method handler trait
//! - Run a handler exactly once, recording its output
//!
//! # Design Decisions
//! - The sink is a trait so handlers stay decoupled from the recorder type
//! - Handlers are synchronous; async work belongs to the platform driver
//! - Writes are recorded in the order issued, never reordered

mod hello;
mod recorder;

pub use hello::HelloWorld;
pub use recorder::ResponseRecorder;

use http::{HeaderMap, Request, StatusCode};

/// Mutable response sink a handler writes into.
pub trait ResponseWriter {
    /// Set the response status. The last call wins; never calling it leaves
    /// the status at 200.
    fn set_status(&mut self, status: StatusCode);

    /// Response headers, multi-valued. Use `append` to repeat a name.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Append a chunk to the response body.
    fn write(&mut self, chunk: &[u8]);
}

/// A synchronous request handler.
///
/// The single pluggable unit of the bridge: anything that can serve one
/// request by writing into a [`ResponseWriter`]. Handler-internal failures
/// are the handler's own business; the pipeline neither inspects nor wraps
/// them.
pub trait Handler {
    /// Serve one request, writing the response into `writer`.
    fn handle(&self, writer: &mut dyn ResponseWriter, request: &Request<String>);
}

impl<F> Handler for F
where
    F: Fn(&mut dyn ResponseWriter, &Request<String>),
{
    fn handle(&self, writer: &mut dyn ResponseWriter, request: &Request<String>) {
        self(writer, request)
    }
}

/// Run `handler` against `request` exactly once, capturing everything it
/// writes. No retries and no timeout of its own; the request already carries
/// whatever deadline the platform granted.
pub fn invoke<H>(handler: &H, request: &Request<String>) -> ResponseRecorder
where
    H: Handler + ?Sized,
{
    let mut recorder = ResponseRecorder::new();
    handler.handle(&mut recorder, request);
    recorder
}

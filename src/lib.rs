//! Gateway-event to HTTP-handler bridge.
//!
//! Runs a synchronous HTTP handler inside an event-driven serverless
//! platform. Each invocation delivers one structured proxy event; the bridge
//! translates it into an in-memory request, serves it, and translates the
//! captured output back into the response shape the platform expects.
//!
//! ```text
//!   ProxyRequest ──▶ adapter::request ──▶ http::Request<String>
//!                                               │
//!                                         handler::invoke
//!                                               │
//!   ProxyResponse ◀── adapter::response ◀── ResponseRecorder
//! ```
//!
//! The pipeline is strictly linear and stateless: nothing survives an
//! invocation, and no concurrency coordination happens here. Streaming,
//! chunked transfer, binary (base64) bodies and trailers are out of scope.

pub mod adapter;
pub mod error;
pub mod event;
pub mod handler;

pub use adapter::{proxy, InvocationContext, SourceAddr};
pub use error::BridgeError;
pub use event::{ProxyRequest, ProxyResponse};
pub use handler::{Handler, HelloWorld, ResponseRecorder, ResponseWriter};

//! Reference handler.

use http::header::HeaderValue;
use http::Request;

use super::{Handler, ResponseWriter};

/// Default handler: one fixed header, one fixed greeting, implicit 200.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelloWorld;

impl Handler for HelloWorld {
    fn handle(&self, writer: &mut dyn ResponseWriter, _request: &Request<String>) {
        writer.headers_mut().insert(
            "x-mycustom-header",
            HeaderValue::from_static("This is the value of my custom header"),
        );
        writer.write(b"Hello World");
    }
}

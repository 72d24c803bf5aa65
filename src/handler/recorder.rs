//! In-memory response recorder.

use http::{HeaderMap, StatusCode};

use super::ResponseWriter;

/// Captures everything a handler writes, standing in for a live socket.
///
/// This is the canonical adapter boundary, not a test utility: the platform
/// never hands us a connection, so all handler output lands here before the
/// response adapter reads it back out. The status starts at 200, so a handler
/// that only writes a body still produces a well-formed response.
#[derive(Debug)]
pub struct ResponseRecorder {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseRecorder {
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consume the recorder once the handler is done with it.
    pub fn into_parts(self) -> (StatusCode, HeaderMap, Vec<u8>) {
        (self.status, self.headers, self.body)
    }
}

impl Default for ResponseRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseWriter for ResponseRecorder {
    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write(&mut self, chunk: &[u8]) {
        self.body.extend_from_slice(chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_status_defaults_to_200() {
        assert_eq!(ResponseRecorder::new().status(), StatusCode::OK);
    }

    #[test]
    fn test_last_status_set_wins() {
        let mut recorder = ResponseRecorder::new();
        recorder.set_status(StatusCode::NOT_FOUND);
        recorder.set_status(StatusCode::BAD_GATEWAY);
        assert_eq!(recorder.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_writes_accumulate_in_order() {
        let mut recorder = ResponseRecorder::new();
        recorder.write(b"one");
        recorder.write(b"two");
        recorder.write(b"three");
        assert_eq!(recorder.body(), b"onetwothree");
    }

    #[test]
    fn test_appended_headers_keep_all_values() {
        let mut recorder = ResponseRecorder::new();
        recorder
            .headers_mut()
            .append("set-cookie", HeaderValue::from_static("a=1"));
        recorder
            .headers_mut()
            .append("set-cookie", HeaderValue::from_static("b=2"));

        let values: Vec<_> = recorder.headers().get_all("set-cookie").iter().collect();
        assert_eq!(values, vec!["a=1", "b=2"]);
    }
}

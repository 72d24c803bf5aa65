//! Gateway proxy event wire types.
//!
//! # Responsibilities
//! - Deserialize the inbound proxy request event
//! - Serialize the outbound proxy response
//! - Tolerate absent or `null` fields so no event shape panics
//!
//! # Design Decisions
//! - Field names follow the gateway schema (camelCase) via serde renames
//! - `null` and missing fields collapse to defaults rather than erroring
//! - Headers are a single-valued map on the wire; multi-value handling
//!   happens in the adapter

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Inbound gateway-style proxy request event.
///
/// Represents exactly one HTTP-like request and is never mutated after
/// deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    /// HTTP method, e.g. `GET`.
    #[serde(default, deserialize_with = "null_default")]
    pub http_method: String,
    /// Request path, e.g. `/`.
    #[serde(default, deserialize_with = "null_default")]
    pub path: String,
    /// Header name to single value, as delivered by the gateway.
    #[serde(default, deserialize_with = "null_default")]
    pub headers: HashMap<String, String>,
    /// Request body. The gateway sends `null` for bodyless requests.
    #[serde(default, deserialize_with = "null_default")]
    pub body: String,
    /// Whether `body` is base64-encoded. Binary bodies are not supported,
    /// so a `true` here is ignored and the body treated as text.
    #[serde(default, deserialize_with = "null_default")]
    pub is_base64_encoded: bool,
    /// Invocation metadata supplied by the gateway.
    #[serde(default, deserialize_with = "null_default")]
    pub request_context: RequestContext,
}

/// Gateway-supplied context for one request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default, deserialize_with = "null_default")]
    pub identity: Identity,
}

/// Caller identity as reported by the gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Source IP of the original client.
    #[serde(default, deserialize_with = "null_default")]
    pub source_ip: String,
}

/// Outbound proxy response event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// Header name to single (comma-joined) value.
    pub headers: HashMap<String, String>,
    /// Response body as text.
    pub body: String,
    /// Always `false`: binary-safe encoding is out of scope.
    pub is_base64_encoded: bool,
}

/// Treat JSON `null` as the field's default value.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_gateway_event() {
        let json = r#"{
            "httpMethod": "POST",
            "path": "/orders",
            "headers": {"Host": "example.com", "Content-Type": "application/json"},
            "body": "{\"id\":1}",
            "isBase64Encoded": false,
            "requestContext": {"identity": {"sourceIp": "203.0.113.10"}}
        }"#;

        let event: ProxyRequest = serde_json::from_str(json).unwrap();
        assert_eq!(event.http_method, "POST");
        assert_eq!(event.path, "/orders");
        assert_eq!(event.headers.get("Host").unwrap(), "example.com");
        assert_eq!(event.body, "{\"id\":1}");
        assert!(!event.is_base64_encoded);
        assert_eq!(event.request_context.identity.source_ip, "203.0.113.10");
    }

    #[test]
    fn test_null_and_missing_fields_default() {
        // Bodyless GET as the gateway actually sends it
        let json = r#"{
            "httpMethod": "GET",
            "path": "/",
            "headers": null,
            "body": null,
            "requestContext": {"identity": {"sourceIp": null}}
        }"#;

        let event: ProxyRequest = serde_json::from_str(json).unwrap();
        assert_eq!(event.body, "");
        assert!(event.headers.is_empty());
        assert_eq!(event.request_context.identity.source_ip, "");

        let empty: ProxyRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.http_method, "");
        assert_eq!(empty.path, "");
    }

    #[test]
    fn test_serialize_response_uses_gateway_key_spelling() {
        let response = ProxyResponse {
            status_code: 200,
            headers: HashMap::new(),
            body: "ok".into(),
            is_base64_encoded: false,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["body"], "ok");
        assert_eq!(value["isBase64Encoded"], false);
        assert!(value["headers"].is_object());
    }
}

//! Lambda proxy response builders.

use serde_json::{Value, json};

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Returns a 200 response with the given content type and body.
///
/// Summaries are per-visitor, so responses are never cached.
#[must_use]
pub fn ok_body(content_type: &str, body: &str) -> Value {
    json!({
        "statusCode": 200,
        "headers": {
            "Content-Type": content_type,
            "Cache-Control": "no-store"
        },
        "body": body
    })
}

#[must_use]
pub fn ok_html(body: &str) -> Value {
    ok_body(HTML_CONTENT_TYPE, body)
}

#[must_use]
pub fn ok_text(body: &str) -> Value {
    ok_body(TEXT_CONTENT_TYPE, body)
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "error": message }).to_string()
    })
}

/// Drops the body for `HEAD` requests, keeping status and headers.
#[must_use]
pub fn without_body(mut response: Value) -> Value {
    if let Some(obj) = response.as_object_mut() {
        obj.insert("body".to_string(), Value::String(String::new()));
    }
    response
}

use serde_json::Value;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Finds `name` in a single `Cookie` header value (`a=1; b=2`).
pub fn find_cookie<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key.trim() == name).then(|| value.trim())
    })
}

/// Extracts a cookie from a Lambda proxy event.
///
/// HTTP API (v2) and Function URL events carry a `cookies` array; REST (v1)
/// events only have the raw `Cookie` header.
pub fn extract_cookie<'a>(payload: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(cookies) = payload.get("cookies").and_then(Value::as_array) {
        let found = cookies
            .iter()
            .filter_map(Value::as_str)
            .find_map(|c| find_cookie(c, name));
        if found.is_some() {
            return found;
        }
    }

    payload
        .get("headers")
        .and_then(|h| get_header_value(h, "Cookie"))
        .and_then(|header| find_cookie(header, name))
}

pub fn request_path(payload: &Value) -> Option<&str> {
    payload
        .get("rawPath")
        .and_then(|v| v.as_str())
        .or_else(|| payload.get("path").and_then(|v| v.as_str()))
}

/// HTTP method of the request, defaulting to `GET` when the event omits it.
pub fn request_method(payload: &Value) -> &str {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .unwrap_or("GET")
}

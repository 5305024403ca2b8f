use percent_encoding::percent_decode_str;
use serde::Deserialize;

use crate::errors::SummaryError;

/// Name of the cookie the Autochart tracking script sets on the visitor.
pub const VISITOR_COOKIE_NAME: &str = "ac_visitor";

/// Decoded contents of the `ac_visitor` cookie, e.g. `{"id":"59cd3ce65242b75baf000001"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VisitorCookie {
    pub id: String,
}

impl VisitorCookie {
    /// Parses a raw cookie value, which is URL-encoded JSON.
    ///
    /// # Errors
    ///
    /// [`SummaryError::MissingCookie`] for an absent or blank value,
    /// [`SummaryError::MalformedCookie`] when decoding, JSON parsing or the
    /// `id` field fail.
    pub fn parse(raw: Option<&str>) -> Result<Self, SummaryError> {
        let raw = raw.map(str::trim).filter(|v| !v.is_empty());
        let Some(raw) = raw else {
            return Err(SummaryError::MissingCookie);
        };

        let decoded = decode_cookie_value(raw)?;
        let cookie: VisitorCookie = serde_json::from_str(&decoded)?;

        if cookie.id.is_empty() {
            return Err(SummaryError::MalformedCookie("empty visitor id".to_string()));
        }

        Ok(cookie)
    }
}

/// Form-style URL decoding: `+` is a space and `%XX` escapes are expanded.
///
/// ```
/// use visitor_summary::core::models::decode_cookie_value;
///
/// let decoded = decode_cookie_value("{%22id%22:%22abc+123%22}").unwrap();
/// assert_eq!(decoded, r#"{"id":"abc 123"}"#);
/// ```
///
/// # Errors
///
/// Returns [`SummaryError::MalformedCookie`] if the decoded bytes are not UTF-8.
pub fn decode_cookie_value(input: &str) -> Result<String, SummaryError> {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| SummaryError::MalformedCookie(format!("invalid URL encoding: {e}")))
}

/// Outcome of a summary lookup as seen by the page renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitorSummary {
    Available(String),
    Unavailable,
}

impl VisitorSummary {
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, VisitorSummary::Available(_))
    }
}

impl From<Result<String, SummaryError>> for VisitorSummary {
    fn from(result: Result<String, SummaryError>) -> Self {
        match result {
            Ok(body) => VisitorSummary::Available(body),
            Err(_) => VisitorSummary::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_url_encoded_cookie() {
        let cookie = VisitorCookie::parse(Some("%7B%22id%22%3A%22abc123%22%7D")).unwrap();
        assert_eq!(cookie.id, "abc123");
    }

    #[test]
    fn ignores_extra_fields() {
        let cookie =
            VisitorCookie::parse(Some(r#"{"id":"abc123","firstSeen":"2017-09-28"}"#)).unwrap();
        assert_eq!(cookie.id, "abc123");
    }

    #[test]
    fn absent_or_blank_cookie_is_missing() {
        assert!(matches!(VisitorCookie::parse(None), Err(SummaryError::MissingCookie)));
        assert!(matches!(VisitorCookie::parse(Some("")), Err(SummaryError::MissingCookie)));
        assert!(matches!(VisitorCookie::parse(Some("  ")), Err(SummaryError::MissingCookie)));
    }

    #[test]
    fn bad_json_or_missing_id_is_malformed() {
        for raw in ["not-json", "%7B%22name%22%3A%22x%22%7D", r#"{"id":42}"#, r#"{"id":""}"#, "null"] {
            assert!(
                matches!(VisitorCookie::parse(Some(raw)), Err(SummaryError::MalformedCookie(_))),
                "expected malformed for {raw}"
            );
        }
    }

    #[test]
    fn invalid_utf8_escape_is_malformed() {
        assert!(matches!(
            decode_cookie_value("%FF%FE"),
            Err(SummaryError::MalformedCookie(_))
        ));
    }

    #[test]
    fn encoded_plus_survives_decoding() {
        assert_eq!(decode_cookie_value("a%2Bb").unwrap(), "a+b");
    }
}

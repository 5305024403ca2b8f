use thiserror::Error;

/// Reasons a visitor summary could not be produced.
///
/// These never reach the page renderer; the fetcher collapses them into
/// [`crate::core::models::VisitorSummary::Unavailable`] after logging.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Visitor cookie is missing")]
    MissingCookie,

    #[error("Visitor cookie is malformed: {0}")]
    MalformedCookie(String),

    #[error("Failed to reach the visitor summary API: {0}")]
    TransportFailure(String),

    #[error("Visitor summary API returned status {0}")]
    NonSuccessStatus(u16),

    #[error("Visitor summary exceeds {0} bytes")]
    OversizedBody(usize),
}

impl SummaryError {
    /// Short label used as a structured logging field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            SummaryError::MissingCookie => "missing_cookie",
            SummaryError::MalformedCookie(_) => "malformed_cookie",
            SummaryError::TransportFailure(_) => "transport_failure",
            SummaryError::NonSuccessStatus(_) => "non_success_status",
            SummaryError::OversizedBody(_) => "oversized_body",
        }
    }
}

impl From<reqwest::Error> for SummaryError {
    fn from(error: reqwest::Error) -> Self {
        SummaryError::TransportFailure(error.to_string())
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(error: serde_json::Error) -> Self {
        SummaryError::MalformedCookie(format!("invalid JSON: {error}"))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}: environment variable not set")]
    Missing(&'static str),

    #[error("{var}: {reason}")]
    Invalid { var: &'static str, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

impl From<reqwest::Error> for ConfigError {
    fn from(error: reqwest::Error) -> Self {
        ConfigError::HttpClient(error.to_string())
    }
}

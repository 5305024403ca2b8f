//! Autochart API client
//!
//! Fetches the text summary for the visitor identified by the `ac_visitor`
//! cookie. Every failure degrades to [`VisitorSummary::Unavailable`] so the
//! page still renders when the API is down.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::redirect::Policy;
use reqwest::{Client, Response, StatusCode};
use tracing::{info, warn};

use crate::core::config::AppConfig;
use crate::core::models::{VisitorCookie, VisitorSummary};
use crate::errors::{ConfigError, SummaryError};

/// Largest summary body accepted from the API.
pub const MAX_SUMMARY_BYTES: usize = 256 * 1024;

/// Anything that can turn a raw visitor cookie into a summary.
#[async_trait]
pub trait SummarySource: Send + Sync {
    async fn fetch(&self, visitor_cookie: Option<&str>) -> VisitorSummary;
}

/// Builds `{base}/api/1/accounts/{account_id}/visitors/{visitor_id}/text-summary`.
///
/// Segments are interpolated as given; nothing is percent-encoded here.
#[must_use]
pub fn build_summary_url(base_url: &str, account_id: &str, visitor_id: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!("{base}/api/1/accounts/{account_id}/visitors/{visitor_id}/text-summary")
}

pub struct VisitorSummaryFetcher {
    http: Client,
    config: AppConfig,
}

impl VisitorSummaryFetcher {
    /// Creates a fetcher with a pooled HTTP client honouring the configured timeouts.
    ///
    /// Redirects are not followed: a 3xx is reported as a non-200 status and
    /// the bearer key is never resent to another location.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the TLS backend cannot be initialised.
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .redirect(Policy::none())
            .build()?;
        Ok(Self { http, config })
    }

    /// Looks up the summary, keeping the specific failure reason.
    ///
    /// # Errors
    ///
    /// Any [`SummaryError`]; cookie problems are detected before any network I/O.
    pub async fn try_fetch(&self, visitor_cookie: Option<&str>) -> Result<String, SummaryError> {
        let cookie = VisitorCookie::parse(visitor_cookie)?;
        let url = build_summary_url(
            &self.config.api_base_url,
            &self.config.account_id,
            &cookie.id,
        );

        let resp = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_read_key))
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(SummaryError::NonSuccessStatus(status.as_u16()));
        }

        let body = read_body(resp, MAX_SUMMARY_BYTES).await?;
        info!(
            visitor_id = %cookie.id,
            body_len = body.len(),
            "Fetched visitor summary"
        );
        Ok(body)
    }
}

/// Reads the body chunk by chunk, giving up once it exceeds `limit` bytes.
async fn read_body(mut resp: Response, limit: usize) -> Result<String, SummaryError> {
    if let Some(len) = resp.content_length() {
        if len > limit as u64 {
            return Err(SummaryError::OversizedBody(limit));
        }
    }

    let mut buf = Vec::new();
    while let Some(chunk) = resp.chunk().await? {
        if buf.len() + chunk.len() > limit {
            return Err(SummaryError::OversizedBody(limit));
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[async_trait]
impl SummarySource for VisitorSummaryFetcher {
    async fn fetch(&self, visitor_cookie: Option<&str>) -> VisitorSummary {
        let result = self.try_fetch(visitor_cookie).await;
        if let Err(e) = &result {
            warn!(kind = e.kind(), "Visitor summary unavailable: {}", e);
        }
        result.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_follows_template_exactly() {
        assert_eq!(
            build_summary_url(
                "https://portal.autochart.io",
                "512345678901234567890123",
                "59cd3ce65242b75baf000001"
            ),
            "https://portal.autochart.io/api/1/accounts/512345678901234567890123/visitors/59cd3ce65242b75baf000001/text-summary"
        );
    }

    #[test]
    fn url_does_not_re_encode_segments() {
        assert_eq!(
            build_summary_url("http://localhost:9000/", "acc%20one", "vis it"),
            "http://localhost:9000/api/1/accounts/acc%20one/visitors/vis it/text-summary"
        );
    }
}

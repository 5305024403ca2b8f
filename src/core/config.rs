use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

use crate::errors::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://portal.autochart.io";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct AppConfig {
    pub account_id: String,
    pub api_read_key: String,
    pub api_base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

// Keeps the read key out of logs.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("account_id", &self.account_id)
            .field("api_read_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let account_id = required(&lookup, "AUTOCHART_ACCOUNT_ID")?;
        let api_read_key = required(&lookup, "AUTOCHART_API_READ_KEY")?;

        let api_base_url = match non_empty(&lookup, "AUTOCHART_API_BASE_URL") {
            Some(raw) => parse_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        let connect_timeout = timeout_secs(&lookup, "AUTOCHART_CONNECT_TIMEOUT_SECS")?;
        let request_timeout = timeout_secs(&lookup, "AUTOCHART_REQUEST_TIMEOUT_SECS")?;

        Ok(Self {
            account_id,
            api_read_key,
            api_base_url,
            connect_timeout,
            request_timeout,
        })
    }
}

fn non_empty<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, var).ok_or(ConfigError::Missing(var))
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let var = "AUTOCHART_API_BASE_URL";
    let url = Url::parse(raw).map_err(|e| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(ConfigError::Invalid {
            var,
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(raw.trim_end_matches('/').to_string())
}

fn timeout_secs<F>(lookup: &F, var: &'static str) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = non_empty(lookup, var) else {
        return Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    };

    match raw.parse::<u64>() {
        Ok(0) => Err(ConfigError::Invalid {
            var,
            reason: "must be greater than zero".to_string(),
        }),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(ConfigError::Invalid {
            var,
            reason: format!("'{raw}' is not a number of seconds: {e}"),
        }),
    }
}

/// Visitor Summary - embeds an Autochart visitor profile summary into a web page.
///
/// The API Lambda reads the `ac_visitor` cookie set by the Autochart tracking
/// script, looks up the visitor's text summary and renders it into an HTML
/// page. When the cookie is missing or the API is unreachable the page falls
/// back to a fixed sentence instead of failing.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (`lambda_runtime`) for serverless execution
/// - reqwest for the outbound Autochart API call
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use visitor_summary::clients::{SummarySource, VisitorSummaryFetcher};
/// use visitor_summary::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     visitor_summary::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let fetcher = VisitorSummaryFetcher::new(config)?;
///
///     let summary = fetcher.fetch(Some("%7B%22id%22%3A%22abc123%22%7D")).await;
///     println!("{}", visitor_summary::views::render_page(&summary));
///     Ok(())
/// }
/// ```
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod views;

pub use clients::{SummarySource, VisitorSummaryFetcher};
pub use errors::{ConfigError, SummaryError};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Log level comes from `RUST_LOG`, defaulting to `info`. Calling this more
/// than once is harmless; only the first call installs the subscriber.
///
/// # Example
///
/// ```
/// visitor_summary::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::{error, info};
use visitor_summary::api::function_handler;
use visitor_summary::clients::VisitorSummaryFetcher;
use visitor_summary::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    visitor_summary::setup_logging();

    // Loaded once; shared by every invocation on this instance.
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e.to_string())
    })?;
    info!(?config, "Configuration loaded");

    let fetcher = Arc::new(VisitorSummaryFetcher::new(config).map_err(|e| {
        error!("Failed to initialize fetcher: {}", e);
        Error::from(e.to_string())
    })?);

    run(service_fn(move |event: LambdaEvent<Value>| {
        let fetcher = Arc::clone(&fetcher);
        async move { function_handler(fetcher.as_ref(), event).await }
    }))
    .await
}

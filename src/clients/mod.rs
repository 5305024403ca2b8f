//! Clients for external APIs

pub mod autochart_client;

pub use autochart_client::{SummarySource, VisitorSummaryFetcher, build_summary_url};

//! API Lambda handler - serves the visitor profile page.
//!
//! Routes:
//! - `*/health`: liveness probe, no upstream call
//! - `*/summary.txt`: plain-text summary for e-mail templates
//! - anything else: the HTML profile page

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::clients::SummarySource;
use crate::core::models::VISITOR_COOKIE_NAME;
use crate::views;

/// Lambda entrypoint.
///
/// # Errors
///
/// Never fails for request-level problems; those become HTTP responses.
pub async fn function_handler(
    source: &dyn SummarySource,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(handle_request(source, &event.payload).await)
}

/// Routes one proxy event and renders the response.
#[tracing::instrument(level = "info", skip_all, fields(correlation_id = %Uuid::new_v4()))]
pub async fn handle_request(source: &dyn SummarySource, payload: &Value) -> Value {
    let method = parsing::request_method(payload);
    let path = parsing::request_path(payload).unwrap_or("/");
    info!(method = %method, path = %path, "Request received");

    let is_head = method.eq_ignore_ascii_case("HEAD");
    if !is_head && !method.eq_ignore_ascii_case("GET") {
        warn!(method = %method, "Rejecting unsupported method");
        return helpers::err_response(405, "Method not allowed");
    }

    let response = if path.ends_with("/health") {
        helpers::ok_text("ok")
    } else {
        let cookie = parsing::extract_cookie(payload, VISITOR_COOKIE_NAME);
        let summary = source.fetch(cookie).await;
        info!(available = summary.is_available(), "Rendering visitor summary");

        if path.ends_with("/summary.txt") {
            helpers::ok_text(&views::render_text(&summary))
        } else {
            helpers::ok_html(&views::render_page(&summary))
        }
    };

    if is_head {
        helpers::without_body(response)
    } else {
        response
    }
}

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use visitor_summary::core::config::AppConfig;

/// How the fake Autochart endpoint answers.
#[derive(Clone)]
pub enum Upstream {
    Respond(u16, &'static str),
    /// 302 to the given location, which serves a login page.
    Redirect(&'static str),
    /// 200 with a body of this many bytes.
    Large(usize),
    Hang,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub account_id: String,
    pub visitor_id: String,
    pub authorization: Option<String>,
}

#[derive(Clone)]
struct MockState {
    upstream: Upstream,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockApi {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockApi {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn text_summary(
    State(state): State<MockState>,
    Path((account_id, visitor_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.requests.lock().unwrap().push(RecordedRequest {
        account_id,
        visitor_id,
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    match state.upstream {
        Upstream::Respond(status, body) => {
            (StatusCode::from_u16(status).unwrap(), body.to_string()).into_response()
        }
        Upstream::Redirect(location) => {
            (StatusCode::FOUND, [(LOCATION, location)], "").into_response()
        }
        Upstream::Large(len) => (StatusCode::OK, "a".repeat(len)).into_response(),
        Upstream::Hang => {
            tokio::time::sleep(Duration::from_secs(30)).await;
            (StatusCode::OK, "too late").into_response()
        }
    }
}

/// Starts a fake Autochart API on an ephemeral local port.
pub async fn spawn_mock_api(upstream: Upstream) -> MockApi {
    let hits = Arc::new(AtomicUsize::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        upstream,
        hits: Arc::clone(&hits),
        requests: Arc::clone(&requests),
    };

    let app = Router::new()
        .route(
            "/api/1/accounts/:account_id/visitors/:visitor_id/text-summary",
            get(text_summary),
        )
        .route("/login", get(|| async { "<html>Login page</html>" }))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi {
        base_url: format!("http://{addr}"),
        hits,
        requests,
    }
}

pub fn test_config(base_url: &str) -> AppConfig {
    AppConfig {
        account_id: "512345678901234567890123".to_string(),
        api_read_key: "rk_test".to_string(),
        api_base_url: base_url.to_string(),
        connect_timeout: Duration::from_secs(1),
        request_timeout: Duration::from_secs(1),
    }
}

/// `{"id":"abc123"}`, URL-encoded the way the tracking script stores it.
pub const VISITOR_COOKIE: &str = "%7B%22id%22%3A%22abc123%22%7D";

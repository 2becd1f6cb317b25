use crate::db::QuestStore;
use crate::server::routes::quests;

use axum::{
    Router,
    extract::Request,
    http::{HeaderName, HeaderValue, StatusCode, Version, header::USER_AGENT},
    middleware::{self, Next},
    response::Response,
};
use base64::Engine as _;
use rand::RngCore;
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, error, info, info_span, warn};

const MAX_REQUEST_ID_LEN: usize = 128;
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

fn generate_request_id() -> String {
    // 96 bits => 16 chars base64url (no padding).
    let mut bytes = [0u8; 12];
    rand::rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

fn format_http_version(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2",
        Version::HTTP_3 => "HTTP/3",
        _ => "HTTP/?",
    }
}

/// Shared handler state. The store is the only thing requests share.
#[derive(Clone)]
pub struct QuestboardState {
    pub store: Arc<dyn QuestStore>,
}

impl QuestboardState {
    pub fn new(store: Arc<dyn QuestStore>) -> Self {
        Self { store }
    }
}

/// Unrouted paths get a bare 404; only the four quest endpoints are served.
async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Access log line: `| status | request-id | method | protocol | path | latency | ua |`.
///
/// The handler runs inside a `request` span carrying `request_id`, so store events
/// (completion commits, rollbacks) are attributable to the request that caused them.
async fn access_log(req: Request, next: Next) -> Response {
    // Capture request metadata before moving `req` into the handler stack.
    let method = req.method().clone();
    let uri = req.uri().clone();
    let version = req.version();

    let request_id = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
        .unwrap_or_else(generate_request_id);

    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let span = info_span!("request", request_id = %request_id, route = %uri.path());

    let start = Instant::now();
    let mut resp = next.run(req).instrument(span.clone()).await;

    // Always reflect `x-request-id` so clients can quote it when reporting a failed completion.
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status();
    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    let line = format!(
        "| {:>3} | {} | {:^7} | {:<8} | {} | {}ms | {}",
        status.as_u16(),
        request_id,
        method.as_str(),
        format_http_version(version),
        uri.path(),
        latency_ms,
        user_agent
    );

    span.in_scope(|| {
        if status.is_server_error() {
            error!("{line}");
        } else if status.is_client_error() {
            warn!("{line}");
        } else {
            info!("{line}");
        }
    });

    resp
}

pub fn questboard_router(state: QuestboardState) -> Router {
    Router::new()
        .merge(quests::router())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn(access_log))
}

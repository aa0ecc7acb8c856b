use std::time::Duration;

use axum::{extract::Request, response::Response, Router};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn, Span};
use uuid::Uuid;

/// Wraps every request in a `contact-request` span. Each span gets a fresh
/// time ordered id, so the log lines of one submission can be grouped.
pub fn add(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(make_span)
            .on_request(())
            .on_response(on_response)
            .on_body_chunk(())
            .on_eos(())
            .on_failure(()),
    )
}

fn make_span(request: &Request) -> Span {
    let method = request.method();
    let path = request.uri().path();
    let request_id = request_id();

    tracing::debug_span!("contact-request", %method, %path, %request_id)
}

fn on_response(response: &Response, latency: Duration, _span: &Span) {
    let status = response.status();
    if status.is_server_error() {
        warn!(?latency, %status, "request failed");
    } else {
        debug!(?latency, %status, "request handled");
    }
}

fn request_id() -> String {
    URL_SAFE_NO_PAD.encode(Uuid::now_v7().as_bytes())
}

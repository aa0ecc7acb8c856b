use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contact_models::messages;

use crate::models::ApiMessage;

pub mod contact;

/// Logs the error and responds with the generic server error, so no internal
/// details reach the client.
pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    message(StatusCode::INTERNAL_SERVER_ERROR, messages::SERVER_ERROR)
}

fn message(code: StatusCode, message: &'static str) -> Response {
    (code, Json(ApiMessage { message })).into_response()
}

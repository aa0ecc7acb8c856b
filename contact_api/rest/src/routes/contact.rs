use std::sync::Arc;

use anyhow::Context;
use axum::{
    body::Body,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use contact_core_contact_contracts::{ContactService, ContactSubmitError};
use contact_models::{contact::ContactSubmission, messages};
use serde_json::Value;

use super::{internal_server_error, message};
use crate::models::ApiValidationError;

/// Bodies larger than this are not read and answered like any other server
/// fault.
const MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(service: State<Arc<impl ContactService>>, body: Body) -> Response {
    let input = match read_json(body).await {
        Ok(input) => input,
        Err(err) => return internal_server_error(err),
    };

    let submission = match ContactSubmission::validate(&input) {
        Ok(submission) => submission,
        Err(errors) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiValidationError {
                    message: messages::INPUT_HAS_ERRORS,
                    errors,
                }),
            )
                .into_response()
        }
    };

    match service.submit(submission).await {
        Ok(()) => message(StatusCode::OK, messages::SUBMIT_SUCCESS),
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}

async fn read_json(body: Body) -> anyhow::Result<Value> {
    let body = axum::body::to_bytes(body, MAX_BODY_SIZE)
        .await
        .context("Failed to read request body")?;
    serde_json::from_slice(&body).context("Failed to parse request body")
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use contact_core_contact_contracts::MockContactService;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;

    async fn post(service: MockContactService, body: impl Into<Body>) -> (StatusCode, Value) {
        let request = Request::post("/api/contact")
            .header("Content-Type", "application/json")
            .body(body.into())
            .unwrap();

        let response = router(service.into()).oneshot(request).await.unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let input = json!({"name": "Taro", "email": "taro@example.com", "message": "1234567890"});
        let submission = ContactSubmission::validate(&input).unwrap();
        let service = MockContactService::new().with_submit(submission, true);

        // Act
        let result = post(service, input.to_string()).await;

        // Assert
        assert_eq!(
            result,
            (StatusCode::OK, json!({"message": messages::SUBMIT_SUCCESS}))
        );
    }

    #[tokio::test]
    async fn name_too_short() {
        // Arrange
        let input = json!({"name": "T", "email": "taro@example.com", "message": "1234567890"});

        // Act
        let result = post(MockContactService::new(), input.to_string()).await;

        // Assert
        assert_eq!(
            result,
            (
                StatusCode::BAD_REQUEST,
                json!({
                    "message": messages::INPUT_HAS_ERRORS,
                    "errors": {"name": ["名前は2文字以上で入力してください。"]},
                })
            )
        );
    }

    #[tokio::test]
    async fn invalid_email() {
        // Arrange
        let input = json!({"name": "Taro", "email": "not-an-email", "message": "1234567890"});

        // Act
        let (status, body) = post(MockContactService::new(), input.to_string()).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], messages::INPUT_HAS_ERRORS);
        assert_eq!(
            body["errors"]["email"],
            json!(["有効なメールアドレスを入力してください。"])
        );
        assert!(body["errors"].get("name").is_none());
    }

    #[tokio::test]
    async fn empty_object() {
        let (status, body) = post(MockContactService::new(), "{}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        for field in ["name", "email", "message"] {
            assert_eq!(body["errors"][field], json!(["この項目は必須です。"]));
        }
    }

    #[tokio::test]
    async fn malformed_json() {
        for body in ["", "not json", "{\"name\": \"Taro\""] {
            // Act
            let result = post(MockContactService::new(), body).await;

            // Assert
            assert_eq!(
                result,
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"message": messages::SERVER_ERROR})
                )
            );
        }
    }

    #[tokio::test]
    async fn oversized_body() {
        // Arrange
        let input = json!({
            "name": "Taro",
            "email": "taro@example.com",
            "message": "a".repeat(MAX_BODY_SIZE + 1024 * 1024),
        });

        // Act
        let result = post(MockContactService::new(), input.to_string()).await;

        // Assert
        assert_eq!(
            result,
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"message": messages::SERVER_ERROR})
            )
        );
    }

    #[tokio::test]
    async fn service_error() {
        // Arrange
        let input = json!({"name": "Taro", "email": "taro@example.com", "message": "1234567890"});
        let submission = ContactSubmission::validate(&input).unwrap();
        let service = MockContactService::new().with_submit(submission, false);

        // Act
        let result = post(service, input.to_string()).await;

        // Assert
        assert_eq!(
            result,
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"message": messages::SERVER_ERROR})
            )
        );
    }
}

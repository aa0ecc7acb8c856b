use std::net::IpAddr;

use anyhow::Context;
use axum::Router;
use contact_core_contact_contracts::ContactService;
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact> {
    contact: Contact,
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactService,
{
    pub fn new(contact: Contact) -> Self {
        Self { contact }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let listener = TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind to {host}:{port}"))?;
        self.serve_with_listener(listener).await
    }

    /// Serves the api on an already bound listener.
    pub async fn serve_with_listener(self, listener: TcpListener) -> anyhow::Result<()> {
        axum::serve(listener, self.router()).await.map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let router = Router::new().merge(routes::contact::router(self.contact.into()));

        let router = middlewares::panic_handler::add(router);
        middlewares::trace::add(router)
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{
            header::{CONTENT_LENGTH, CONTENT_TYPE},
            Request, StatusCode,
        },
    };
    use contact_core_contact_contracts::{ContactSubmitError, MockContactService};
    use contact_models::{contact::ContactSubmission, messages};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    struct PanickingContactService;

    impl ContactService for PanickingContactService {
        async fn submit(&self, _submission: ContactSubmission) -> Result<(), ContactSubmitError> {
            panic!("contact service exploded");
        }
    }

    fn valid_request() -> Request<Body> {
        Request::post("/api/contact")
            .header("Content-Type", "application/json")
            .body(Body::from(
                json!({"name": "Taro", "email": "taro@example.com", "message": "1234567890"})
                    .to_string(),
            ))
            .unwrap()
    }

    #[tokio::test]
    async fn no_extra_headers() {
        // Arrange
        let input = json!({"name": "Taro", "email": "taro@example.com", "message": "1234567890"});
        let submission = ContactSubmission::validate(&input).unwrap();
        let contact = MockContactService::new().with_submit(submission, true);
        let sut = RestServer::new(contact).router();

        // Act
        let response = sut.oneshot(valid_request()).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert!(headers
            .keys()
            .all(|name| *name == CONTENT_TYPE || *name == CONTENT_LENGTH));
    }

    #[tokio::test]
    async fn panic_is_internal_server_error() {
        // Arrange
        let sut = RestServer::new(PanickingContactService).router();

        // Act
        let response = sut.oneshot(valid_request()).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({"message": messages::SERVER_ERROR}));
    }

    #[tokio::test]
    async fn unknown_route() {
        let sut = RestServer::new(MockContactService::new()).router();

        let response = sut
            .oneshot(Request::get("/api/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

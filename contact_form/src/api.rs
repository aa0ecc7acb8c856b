use std::{collections::BTreeMap, future::Future, sync::Arc};

use contact_models::{contact::ContactSubmission, messages};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::http::HttpClient;

/// Client for the contact submission endpoint.
#[cfg_attr(test, mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Posts the submission and returns the server's success message.
    fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<String, ContactApiError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactApiError {
    #[error("the server rejected the submission with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
        errors: BTreeMap<String, Vec<String>>,
    },
    #[error("the server sent an invalid response")]
    InvalidResponse(#[source] anyhow::Error),
    #[error("failed to reach the server")]
    Transport(#[source] anyhow::Error),
}

impl ContactApiError {
    /// The text the form shows for this error.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected { message, .. } => message
                .as_deref()
                .filter(|message| !message.is_empty())
                .unwrap_or(messages::SERVER_ERROR_FALLBACK),
            Self::InvalidResponse(_) => messages::SERVER_ERROR_FALLBACK,
            Self::Transport(_) => messages::TRANSPORT_ERROR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceImpl {
    endpoint: Arc<Url>,
    client: HttpClient,
}

impl ContactApiServiceImpl {
    pub fn new(endpoint: Url) -> anyhow::Result<Self> {
        Ok(Self {
            endpoint: endpoint.into(),
            client: HttpClient::new()?,
        })
    }
}

impl ContactApiService for ContactApiServiceImpl {
    async fn submit(&self, submission: &ContactSubmission) -> Result<String, ContactApiError> {
        let response = self
            .client
            .post((*self.endpoint).clone())
            .json(submission)
            .send()
            .await
            .map_err(|err| ContactApiError::Transport(err.into()))?;

        let status = response.status();
        let body = response.json::<SubmitResponse>().await;

        if !status.is_success() {
            let (message, errors) = body
                .map(|body| (body.message, body.errors))
                .unwrap_or_default();
            return Err(ContactApiError::Rejected {
                status: status.as_u16(),
                message,
                errors,
            });
        }

        body.map_err(|err| ContactApiError::InvalidResponse(err.into()))?
            .message
            .ok_or_else(|| {
                ContactApiError::InvalidResponse(anyhow::anyhow!("response has no message"))
            })
    }
}

#[derive(Deserialize)]
struct SubmitResponse {
    message: Option<String>,
    #[serde(default)]
    errors: BTreeMap<String, Vec<String>>,
}

use contact_core_contact_contracts::{ContactService, ContactSubmitError};
use contact_models::contact::ContactSubmission;
use contact_notifier_contracts::NotifierService;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ContactServiceImpl<Notifier> {
    notifier: Notifier,
}

impl<Notifier> ContactServiceImpl<Notifier> {
    pub fn new(notifier: Notifier) -> Self {
        Self { notifier }
    }
}

impl<Notifier> ContactService for ContactServiceImpl<Notifier>
where
    Notifier: NotifierService,
{
    async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactSubmitError> {
        debug!(email = %submission.email, "forwarding contact submission");
        self.notifier.notify(&submission).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use contact_notifier_contracts::MockNotifierService;
    use contact_utils::assert_matches;
    use serde_json::json;

    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission::validate(&json!({
            "name": "Max Mustermann",
            "email": "max.mustermann@example.de",
            "message": "Hello World!",
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let notifier = MockNotifierService::new().with_notify(submission(), true);
        let sut = ContactServiceImpl::new(notifier);

        // Act
        let result = sut.submit(submission()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn notifier_error() {
        // Arrange
        let notifier = MockNotifierService::new().with_notify(submission(), false);
        let sut = ContactServiceImpl::new(notifier);

        // Act
        let result = sut.submit(submission()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Other(_)));
    }
}

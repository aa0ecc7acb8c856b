use contact_models::contact::ContactSubmission;
use contact_notifier_contracts::NotifierService;
use tracing::info;

/// Records accepted submissions in the diagnostic log instead of delivering
/// them anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifierServiceImpl;

impl NotifierService for LogNotifierServiceImpl {
    async fn notify(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        info!(
            name = %submission.name,
            email = %submission.email,
            message = %submission.message,
            "received contact submission"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let submission = ContactSubmission::validate(&json!({
            "name": "Taro",
            "email": "taro@example.com",
            "message": "1234567890",
        }))
        .unwrap();

        // Act
        let result = LogNotifierServiceImpl.notify(&submission).await;

        // Assert
        result.unwrap();
    }
}

use std::future::Future;

use contact_models::contact::ContactSubmission;

/// Delivery collaborator for accepted contact submissions.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NotifierService: Send + Sync + 'static {
    fn notify(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockNotifierService {
    pub fn with_notify(mut self, submission: ContactSubmission, result: bool) -> Self {
        self.expect_notify()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| {
                Box::pin(std::future::ready(
                    result
                        .then_some(())
                        .ok_or_else(|| anyhow::anyhow!("notifier unavailable")),
                ))
            });
        self
    }
}

use std::future::Future;

use brailleread_models::contact::ContactSubmission;

/// Client for the contact api of a running relay server.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Post the submission to `/api/send-email`.
    ///
    /// Rejections by the server (`success: false`) are returned as `Ok`, only
    /// transport failures and unreadable responses are errors.
    fn send_email(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<ContactApiResponse>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactApiResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(feature = "mock")]
impl MockContactApiService {
    pub fn with_send_email(
        mut self,
        submission: ContactSubmission,
        result: anyhow::Result<ContactApiResponse>,
    ) -> Self {
        self.expect_send_email()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}

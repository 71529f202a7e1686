use async_trait::async_trait;

/// A validated contact-form submission ready to relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotifyError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Send failed: {0}")]
    SendFailed(String),
}

/// Relays a contact-form submission to the configured recipient. Stateless:
/// no queue, no backoff, no delivery confirmation beyond the provider's
/// synchronous response.
#[async_trait]
pub trait ContactFormNotifier: Send + Sync {
    async fn notify(
        &self,
        submission: &ContactSubmission,
        recipient: &str,
    ) -> Result<(), NotifyError>;
}

use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;

use crate::contact::application::ports::outgoing::{ContactRepository, ContactRepositoryError};
use crate::email::application::ports::outgoing::{
    ContactFormNotifier, ContactSubmission, NotifyError,
};

/// Raw contact-form input, not yet validated.
#[derive(Debug, Clone)]
pub struct ContactSendRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SendContactMessageError {
    #[error("{0}")]
    Validation(String),

    #[error("Contact email not configured")]
    RecipientNotConfigured,

    #[error("Query failed: {0}")]
    RepositoryError(String),

    #[error("Failed to send message: {0}")]
    NotifyFailed(String),
}

impl From<ContactRepositoryError> for SendContactMessageError {
    fn from(err: ContactRepositoryError) -> Self {
        SendContactMessageError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait ISendContactMessageUseCase: Send + Sync {
    async fn execute(&self, request: ContactSendRequest) -> Result<(), SendContactMessageError>;
}

/// Validates the four fields, resolves the recipient (configured override
/// first, stored contact email otherwise), then relays. Validation failures
/// never reach the notifier.
pub struct SendContactMessageUseCase<R>
where
    R: ContactRepository,
{
    repo: R,
    notifier: Arc<dyn ContactFormNotifier + Send + Sync>,
    recipient_override: Option<String>,
}

impl<R> SendContactMessageUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(
        repo: R,
        notifier: Arc<dyn ContactFormNotifier + Send + Sync>,
        recipient_override: Option<String>,
    ) -> Self {
        Self {
            repo,
            notifier,
            recipient_override,
        }
    }

    fn validate(request: &ContactSendRequest) -> Result<ContactSubmission, SendContactMessageError> {
        let name = request.name.trim();
        let email = request.email.trim();
        let subject = request.subject.trim();
        let message = request.message.trim();

        if name.is_empty() || email.is_empty() || subject.is_empty() || message.is_empty() {
            return Err(SendContactMessageError::Validation(
                "All fields are required".to_string(),
            ));
        }

        if !EmailAddress::is_valid(email) {
            return Err(SendContactMessageError::Validation(
                "Invalid email format".to_string(),
            ));
        }

        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}

#[async_trait]
impl<R> ISendContactMessageUseCase for SendContactMessageUseCase<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, request: ContactSendRequest) -> Result<(), SendContactMessageError> {
        let submission = Self::validate(&request)?;

        let recipient = match &self.recipient_override {
            Some(address) if !address.trim().is_empty() => address.trim().to_string(),
            _ => {
                let contact = self.repo.get_or_initialize().await?;
                let stored = contact.email.trim().to_string();
                if stored.is_empty() {
                    return Err(SendContactMessageError::RecipientNotConfigured);
                }
                stored
            }
        };

        self.notifier
            .notify(&submission, &recipient)
            .await
            .map_err(|e| match e {
                NotifyError::InvalidAddress(addr) => {
                    SendContactMessageError::Validation(format!("Invalid address: {addr}"))
                }
                NotifyError::SendFailed(msg) => SendContactMessageError::NotifyFailed(msg),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::application::ports::outgoing::{
        ContactDetails, ContactUpdate, SocialLinks,
    };
    use std::sync::Mutex;

    #[derive(Clone)]
    struct MockContactRepo {
        email: String,
    }

    #[async_trait]
    impl ContactRepository for MockContactRepo {
        async fn get_or_initialize(&self) -> Result<ContactDetails, ContactRepositoryError> {
            Ok(ContactDetails {
                email: self.email.clone(),
                phone: None,
                location: None,
                description: None,
                social_links: SocialLinks::default(),
            })
        }

        async fn upsert(
            &self,
            _update: ContactUpdate,
        ) -> Result<ContactDetails, ContactRepositoryError> {
            unimplemented!("not used in send tests")
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        sent: Arc<Mutex<Vec<(ContactSubmission, String)>>>,
        fail_with: Option<NotifyError>,
    }

    #[async_trait]
    impl ContactFormNotifier for RecordingNotifier {
        async fn notify(
            &self,
            submission: &ContactSubmission,
            recipient: &str,
        ) -> Result<(), NotifyError> {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            self.sent
                .lock()
                .unwrap()
                .push((submission.clone(), recipient.to_string()));
            Ok(())
        }
    }

    fn valid_request() -> ContactSendRequest {
        ContactSendRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_success_uses_stored_contact_email() {
        let notifier = RecordingNotifier::default();
        let use_case = SendContactMessageUseCase::new(
            MockContactRepo {
                email: "owner@example.com".to_string(),
            },
            Arc::new(notifier.clone()),
            None,
        );

        use_case.execute(valid_request()).await.unwrap();

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].1, "owner@example.com");
        assert_eq!(sent[0].0.name, "Ada");
    }

    #[tokio::test]
    async fn test_send_prefers_recipient_override() {
        let notifier = RecordingNotifier::default();
        let use_case = SendContactMessageUseCase::new(
            MockContactRepo {
                email: "owner@example.com".to_string(),
            },
            Arc::new(notifier.clone()),
            Some("inbox@example.com".to_string()),
        );

        use_case.execute(valid_request()).await.unwrap();

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent[0].1, "inbox@example.com");
    }

    #[tokio::test]
    async fn test_send_missing_field_never_reaches_notifier() {
        let notifier = RecordingNotifier::default();
        let use_case = SendContactMessageUseCase::new(
            MockContactRepo {
                email: "owner@example.com".to_string(),
            },
            Arc::new(notifier.clone()),
            None,
        );

        for broken in [
            ContactSendRequest {
                name: "".to_string(),
                ..valid_request()
            },
            ContactSendRequest {
                email: "  ".to_string(),
                ..valid_request()
            },
            ContactSendRequest {
                subject: "".to_string(),
                ..valid_request()
            },
            ContactSendRequest {
                message: "".to_string(),
                ..valid_request()
            },
        ] {
            let result = use_case.execute(broken).await;
            assert!(matches!(
                result,
                Err(SendContactMessageError::Validation(_))
            ));
        }

        assert!(
            notifier.sent.lock().unwrap().is_empty(),
            "No send may be attempted for invalid input"
        );
    }

    #[tokio::test]
    async fn test_send_rejects_bad_email_syntax() {
        let notifier = RecordingNotifier::default();
        let use_case = SendContactMessageUseCase::new(
            MockContactRepo {
                email: "owner@example.com".to_string(),
            },
            Arc::new(notifier),
            None,
        );

        let result = use_case
            .execute(ContactSendRequest {
                email: "not-an-email".to_string(),
                ..valid_request()
            })
            .await;

        assert!(matches!(result, Err(SendContactMessageError::Validation(_))));
    }

    #[tokio::test]
    async fn test_send_without_configured_recipient() {
        let notifier = RecordingNotifier::default();
        let use_case = SendContactMessageUseCase::new(
            MockContactRepo {
                email: "  ".to_string(),
            },
            Arc::new(notifier),
            None,
        );

        let result = use_case.execute(valid_request()).await;

        assert!(matches!(
            result,
            Err(SendContactMessageError::RecipientNotConfigured)
        ));
    }

    #[tokio::test]
    async fn test_send_surfaces_provider_failure_as_generic_error() {
        let notifier = RecordingNotifier {
            fail_with: Some(NotifyError::SendFailed("451 try later".to_string())),
            ..Default::default()
        };
        let use_case = SendContactMessageUseCase::new(
            MockContactRepo {
                email: "owner@example.com".to_string(),
            },
            Arc::new(notifier),
            None,
        );

        let result = use_case.execute(valid_request()).await;

        assert!(matches!(
            result,
            Err(SendContactMessageError::NotifyFailed(_))
        ));
    }
}

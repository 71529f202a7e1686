use crate::email::application::ports::outgoing::{
    ContactFormNotifier, ContactSubmission, NotifyError,
};
use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, warn};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

/// SMTP relay for contact-form submissions.
///
/// The first attempt uses the submitter's address as From so the recipient
/// sees who wrote. Providers that pin From to the authenticated account
/// (Gmail does) reject that; on a sender-identity rejection we retry exactly
/// once with the authenticated address as From, keeping Reply-To pointed at
/// the submitter.
pub struct SmtpContactNotifier {
    mailer: Box<dyn Mailer>,
    sender_address: String,
}

impl SmtpContactNotifier {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, sender_address: &str) -> Self {
        Self {
            mailer,
            sender_address: sender_address.to_string(),
        }
    }

    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        sender_address: &str,
    ) -> Result<Self, NotifyError> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| NotifyError::SendFailed(e.to_string()))?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), sender_address))
    }

    // Local/test constructor (Mailpit, MailHog, etc.)
    pub fn new_local(host: &str, port: u16, sender_address: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::new_with_mailer(Box::new(transport), sender_address)
    }

    fn build_message(
        &self,
        submission: &ContactSubmission,
        recipient: &str,
        from: Mailbox,
    ) -> Result<Message, NotifyError> {
        let reply_to = mailbox(&submission.name, &submission.email)?;
        let to: Mailbox = recipient
            .parse()
            .map_err(|_| NotifyError::InvalidAddress(recipient.to_string()))?;

        Message::builder()
            .from(from)
            .to(to)
            .reply_to(reply_to)
            .subject(format!(
                "Portfolio Contact from {}: {}",
                submission.name, submission.subject
            ))
            .multipart(MultiPart::alternative_plain_html(
                text_body(submission),
                html_body(submission),
            ))
            .map_err(|e| NotifyError::SendFailed(e.to_string()))
    }
}

fn mailbox(name: &str, address: &str) -> Result<Mailbox, NotifyError> {
    let address: Address = address
        .parse()
        .map_err(|_| NotifyError::InvalidAddress(address.to_string()))?;
    Ok(Mailbox::new(Some(name.to_string()), address))
}

/// Heuristic for "the provider refused this From identity" as opposed to a
/// transport failure.
fn is_sender_rejection(error: &str) -> bool {
    let lower = error.to_lowercase();
    lower.contains("auth") || lower.contains("sender") || lower.contains("from")
}

fn text_body(submission: &ContactSubmission) -> String {
    format!(
        "New Contact Form Submission\n\n\
         From: {name} <{email}>\n\
         Subject: {subject}\n\n\
         Message:\n{message}\n\n\
         ---\n\
         Reply to this email to respond directly to {name} at {email}\n",
        name = submission.name,
        email = submission.email,
        subject = submission.subject,
        message = submission.message,
    )
}

fn html_body(submission: &ContactSubmission) -> String {
    format!(
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">\
           <h2>New Contact Form Submission</h2>\
           <p><strong>From:</strong> {name} &lt;{email}&gt;</p>\
           <p><strong>Subject:</strong> {subject}</p>\
           <h3>Message:</h3>\
           <p style=\"white-space: pre-wrap;\">{message}</p>\
           <p style=\"color: #888; font-size: 12px;\">\
             Reply to this email to respond directly to {name} at {email}\
           </p>\
         </div>",
        name = submission.name,
        email = submission.email,
        subject = submission.subject,
        message = submission.message.replace('\n', "<br>"),
    )
}

#[async_trait]
impl ContactFormNotifier for SmtpContactNotifier {
    async fn notify(
        &self,
        submission: &ContactSubmission,
        recipient: &str,
    ) -> Result<(), NotifyError> {
        let submitter_from = mailbox(&submission.name, &submission.email)?;
        let message = self.build_message(submission, recipient, submitter_from)?;

        match self.mailer.send(message).await {
            Ok(()) => {
                info!(recipient, "Contact message relayed with submitter From");
                Ok(())
            }
            Err(e) if is_sender_rejection(&e) => {
                warn!(error = %e, "Provider rejected submitter From; retrying with authenticated sender");

                let fallback_from = mailbox(
                    &format!("Portfolio Contact - {}", submission.name),
                    &self.sender_address,
                )?;
                let message = self.build_message(submission, recipient, fallback_from)?;

                self.mailer
                    .send(message)
                    .await
                    .map_err(NotifyError::SendFailed)?;

                info!(recipient, "Contact message relayed with authenticated From");
                Ok(())
            }
            Err(e) => Err(NotifyError::SendFailed(e)),
        }
    }
}

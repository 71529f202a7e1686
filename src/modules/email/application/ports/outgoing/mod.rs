pub mod contact_notifier;

pub use contact_notifier::{ContactFormNotifier, ContactSubmission, NotifyError};

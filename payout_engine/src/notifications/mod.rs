//! # Vendor notifications
//!
//! A [`Notifier`] delivers an [`EmailMessage`] to a vendor. [`SmtpNotifier`] sends mail through an SMTP relay.
//! The message content for payout notifications is produced by [`payout_email`].
use std::future::Future;

use thiserror::Error;

mod smtp;
mod templates;

pub use smtp::{build_message, SmtpConfig, SmtpNotifier};
pub use templates::{escape_html, payout_email, PAYOUT_EMAIL_SUBJECT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAttachment {
    pub filename: String,
    pub content: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub plain_body: String,
    pub html_body: String,
    pub attachments: Vec<EmailAttachment>,
}

#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
    #[error("Email delivery is not configured")]
    NotConfigured,
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
    #[error("Invalid attachment content type: {0}")]
    InvalidContentType(String),
    #[error("Could not build the email message: {0}")]
    MessageError(String),
    #[error("The mail transport failed: {0}")]
    TransportError(String),
}

pub trait Notifier: Send + Sync + 'static {
    /// Delivers the message. A single attempt is made.
    fn notify(&self, message: &EmailMessage) -> impl Future<Output = Result<(), DeliveryError>> + Send;
}

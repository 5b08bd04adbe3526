use std::time::Duration;

use lettre::{
    message::{header::ContentType, Attachment, Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    Address,
    AsyncSmtpTransport,
    AsyncTransport,
    Message,
    Tokio1Executor,
};
use log::*;
use nps_common::Secret;

use super::{DeliveryError, EmailMessage, Notifier};

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: Secret<String>,
    pub from_name: String,
    /// Connection timeout for the SMTP session. `None` uses lettre's default.
    pub timeout: Option<Duration>,
}

/// Sends mail through an SMTP relay over implicit TLS.
///
/// A notifier created with [`SmtpNotifier::disabled`] rejects every message with [`DeliveryError::NotConfigured`].
#[derive(Clone)]
pub struct SmtpNotifier {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: Option<Mailbox>,
}

impl std::fmt::Debug for SmtpNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.from {
            Some(from) => write!(f, "SmtpNotifier (from {from})"),
            None => write!(f, "SmtpNotifier (disabled)"),
        }
    }
}

impl SmtpNotifier {
    pub fn new(config: SmtpConfig) -> Result<Self, DeliveryError> {
        let address = config
            .username
            .parse::<Address>()
            .map_err(|e| DeliveryError::InvalidAddress(format!("{}: {e}", config.username)))?;
        let from = Mailbox::new(Some(config.from_name.clone()), address);
        let credentials = Credentials::new(config.username.clone(), config.password.reveal().clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| DeliveryError::TransportError(e.to_string()))?
            .port(config.port)
            .credentials(credentials)
            .timeout(config.timeout)
            .build();
        info!("📧️ Payout emails will be sent via {}:{} as {from}", config.host, config.port);
        Ok(Self { transport: Some(transport), from: Some(from) })
    }

    pub fn disabled() -> Self {
        warn!("📧️ No SMTP host is configured. Payout emails will not be delivered.");
        Self { transport: None, from: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }
}

impl Notifier for SmtpNotifier {
    async fn notify(&self, message: &EmailMessage) -> Result<(), DeliveryError> {
        let (transport, from) = match (&self.transport, &self.from) {
            (Some(t), Some(f)) => (t, f),
            _ => return Err(DeliveryError::NotConfigured),
        };
        let email = build_message(from, message)?;
        let response = transport.send(email).await.map_err(|e| DeliveryError::TransportError(e.to_string()))?;
        debug!("📧️ Email '{}' sent to {}. Server replied {}", message.subject, message.to, response.code());
        Ok(())
    }
}

/// Converts an [`EmailMessage`] into a MIME message with plain text and HTML alternatives, plus any attachments.
pub fn build_message(from: &Mailbox, message: &EmailMessage) -> Result<Message, DeliveryError> {
    let to = message.to.parse::<Mailbox>().map_err(|e| DeliveryError::InvalidAddress(format!("{}: {e}", message.to)))?;
    let alternatives = MultiPart::alternative_plain_html(message.plain_body.clone(), message.html_body.clone());
    let mut body = MultiPart::mixed().multipart(alternatives);
    for attachment in &message.attachments {
        let content_type = ContentType::parse(&attachment.content_type)
            .map_err(|e| DeliveryError::InvalidContentType(format!("{}: {e}", attachment.content_type)))?;
        let part = Attachment::new(attachment.filename.clone()).body(attachment.content.clone(), content_type);
        body = body.singlepart(part);
    }
    Message::builder()
        .from(from.clone())
        .to(to)
        .subject(message.subject.clone())
        .multipart(body)
        .map_err(|e| DeliveryError::MessageError(e.to_string()))
}

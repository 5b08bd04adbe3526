use super::{EmailAttachment, EmailMessage};
use crate::engine_api::payout_objects::PayoutRecipient;

pub const PAYOUT_EMAIL_SUBJECT: &str = "Your Payout Summary from Nile Payout System";
const PLAIN_BODY: &str = "Please find your detailed payout summary attached.";

/// Builds the payout notification for `recipient`, with the rendered summary document attached.
pub fn payout_email(
    recipient: &PayoutRecipient,
    document: Vec<u8>,
    filename: &str,
    content_type: &str,
) -> EmailMessage {
    let html_body = format!(
        "<p>Dear {},</p>\
         <p>Please find your detailed payout summary attached to this email.</p>\
         <p>Thank you for being a valued partner. We appreciate your hard work and dedication!</p>\
         <p>Best regards,</p>\
         <p>The Nile Payout System Team</p>",
        escape_html(&recipient.name)
    );
    EmailMessage {
        to: recipient.email.clone(),
        subject: PAYOUT_EMAIL_SUBJECT.to_string(),
        plain_body: PLAIN_BODY.to_string(),
        html_body,
        attachments: vec![EmailAttachment {
            filename: filename.to_string(),
            content: document,
            content_type: content_type.to_string(),
        }],
    }
}

pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

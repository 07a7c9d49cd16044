// --- File: crates/bumble_gmail/src/service.rs ---
//! Gmail implementation of the `MailService` seam.

use std::io::Cursor;
use std::sync::Arc;

use bumble_common::services::{BoxFuture, BoxedError, ConfirmationEmail, MailService};
use google_gmail1::api::Message;
use thiserror::Error;
use tracing::debug;

use crate::auth::GmailHubType;
use crate::message::{confirmation_body, to_rfc2822, CONFIRMATION_SUBJECT};

#[derive(Error, Debug)]
pub enum GmailServiceError {
    #[error("Gmail API Error: {0}")]
    Api(#[from] google_gmail1::Error),
    #[error("failed to assemble message: {0}")]
    Assemble(String),
}

pub struct GmailMailer {
    gmail_hub: Arc<GmailHubType>,
    from_name: String,
}

impl GmailMailer {
    pub fn new(gmail_hub: Arc<GmailHubType>, from_name: String) -> Self {
        Self {
            gmail_hub,
            from_name,
        }
    }

    async fn send(&self, email: ConfirmationEmail) -> Result<(), GmailServiceError> {
        let body = confirmation_body(&email.name, &email.date, &email.time, &self.from_name);
        let raw = to_rfc2822(&email.to, CONFIRMATION_SUBJECT, &body);

        let mime_type = "message/rfc822"
            .parse()
            .map_err(|_| GmailServiceError::Assemble("bad mime type".to_string()))?;

        // Metadata stays empty; the whole message travels as the rfc822
        // upload payload. "me" is the authenticated user.
        let (_response, sent) = self
            .gmail_hub
            .users()
            .messages_send(Message::default(), "me")
            .upload(Cursor::new(raw.into_bytes()), mime_type)
            .await?;

        debug!(message_id = ?sent.id, to = %email.to, "confirmation email sent");
        Ok(())
    }
}

impl MailService for GmailMailer {
    fn send_confirmation(&self, email: ConfirmationEmail) -> BoxFuture<'_, (), BoxedError> {
        Box::pin(async move {
            self.send(email)
                .await
                .map_err(|err| BoxedError(Box::new(err)))
        })
    }
}

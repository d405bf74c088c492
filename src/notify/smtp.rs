use super::{Notification, Transport};
use crate::error::NotifyError;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

/// Unauthenticated relay, the way an internal mail server is usually reached
pub struct SmtpRelay {
    pub host: String,
    pub port: u16,
}

impl SmtpRelay {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

fn mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address.parse().map_err(|e| NotifyError::Address {
        address: address.to_string(),
        source: e,
    })
}

fn build_message(notification: &Notification) -> Result<Message, NotifyError> {
    let mut builder = Message::builder()
        .from(mailbox(&notification.from)?)
        .subject(notification.subject.as_str())
        .header(ContentType::TEXT_PLAIN);

    for recipient in &notification.to {
        builder = builder.to(mailbox(recipient)?);
    }

    Ok(builder.body(notification.body.clone())?)
}

#[async_trait]
impl Transport for SmtpRelay {
    fn name(&self) -> &'static str {
        "smtp"
    }

    async fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        let message = build_message(notification)?;

        debug!("Connecting to {}:{}", self.host, self.port);
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(self.host.as_str())
            .port(self.port)
            .build();

        mailer
            .send(message)
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        Ok(())
    }
}

mod smtp;

pub use smtp::SmtpRelay;

use crate::error::NotifyError;
use async_trait::async_trait;
use chrono::{Datelike, Local};
use tracing::info;

/// A plain-text message ready for a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait Transport: Send + Sync {
    fn name(&self) -> &'static str;

    async fn send(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// `Reviews for <month>\<year>`
pub fn subject_for<D: Datelike>(date: &D) -> String {
    format!("Reviews for {}\\{}", date.month(), date.year())
}

/// Mail the rendered assignments, dated today
pub async fn email_results(
    transport: &dyn Transport,
    from: &str,
    to: &[String],
    body: &str,
) -> Result<(), NotifyError> {
    if to.is_empty() {
        return Err(NotifyError::NoRecipients);
    }

    info!("Sending email to {:?} via {}", to, transport.name());

    let notification = Notification {
        from: from.to_string(),
        to: to.to_vec(),
        subject: subject_for(&Local::now()),
        body: body.to_string(),
    };

    transport.send(&notification).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<Notification>>,
        fail: bool,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        fn name(&self) -> &'static str {
            "recording"
        }

        async fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
            if self.fail {
                return Err(NotifyError::Transport("connection refused".to_string()));
            }
            self.sent.lock().unwrap().push(notification.clone());
            Ok(())
        }
    }

    #[test]
    fn test_subject_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(subject_for(&date), "Reviews for 3\\2024");
    }

    #[tokio::test]
    async fn test_email_results_sends_body() {
        let transport = RecordingTransport::default();
        let to = vec!["team@example.org".to_string(), "lead@example.org".to_string()];

        email_results(&transport, "bot@example.org", &to, "carl to review [alice]\n")
            .await
            .unwrap();

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, "bot@example.org");
        assert_eq!(sent[0].to, to);
        assert_eq!(sent[0].body, "carl to review [alice]\n");
        assert!(sent[0].subject.starts_with("Reviews for "));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let transport = RecordingTransport {
            fail: true,
            ..Default::default()
        };
        let to = vec!["team@example.org".to_string()];

        let err = email_results(&transport, "bot@example.org", &to, "body")
            .await
            .unwrap_err();
        assert!(matches!(err, NotifyError::Transport(_)));
    }

    #[tokio::test]
    async fn test_no_recipients() {
        let transport = RecordingTransport::default();
        let err = email_results(&transport, "bot@example.org", &[], "body")
            .await
            .unwrap_err();
        assert!(matches!(err, NotifyError::NoRecipients));
        assert!(transport.sent.lock().unwrap().is_empty());
    }
}

//! SMTP email sender — outbound acknowledgements via lettre.
//!
//! Thin transport wrapper: all decision logic (what to send, whether a
//! failure matters) stays in the pipeline. Configured from `SMTP_*`
//! environment variables; absent configuration disables the sender and
//! the binary falls back to the console implementation.

use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use secrecy::{ExposeSecret, SecretString};
use tracing::info;

use crate::collaborators::{EmailSender, SentReceipt};
use crate::error::SendError;

/// SMTP relay configuration, built from environment variables.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
    pub from_address: String,
}

impl SmtpConfig {
    /// Build config from environment variables.
    /// Returns `None` if `SMTP_HOST` is not set (sender disabled).
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("SMTP_HOST").ok()?;

        let port: u16 = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(587);

        let username = std::env::var("SMTP_USERNAME").unwrap_or_default();
        let password = SecretString::from(std::env::var("SMTP_PASSWORD").unwrap_or_default());
        let from_address = std::env::var("SMTP_FROM_ADDRESS").unwrap_or_else(|_| username.clone());

        Some(Self {
            host,
            port,
            username,
            password,
            from_address,
        })
    }
}

/// Email sender backed by an SMTP relay.
pub struct SmtpSender {
    config: SmtpConfig,
}

impl SmtpSender {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Build and send one message. Blocking — callers wrap in
    /// `spawn_blocking`.
    fn send_blocking(config: &SmtpConfig, to: &str, subject: &str, body: &str) -> Result<(), SendError> {
        let from = config
            .from_address
            .parse()
            .map_err(|e| SendError::InvalidAddress(format!("from {}: {e}", config.from_address)))?;
        let to_mailbox = to
            .parse()
            .map_err(|e| SendError::InvalidAddress(format!("to {to}: {e}")))?;

        let email = Message::builder()
            .from(from)
            .to(to_mailbox)
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| SendError::Build(e.to_string()))?;

        let creds = Credentials::new(
            config.username.clone(),
            config.password.expose_secret().to_string(),
        );

        let transport = SmtpTransport::relay(&config.host)
            .map_err(|e| SendError::Transport(format!("SMTP relay error: {e}")))?
            .port(config.port)
            .credentials(creds)
            .build();

        transport
            .send(&email)
            .map_err(|e| SendError::Transport(format!("SMTP send failed: {e}")))?;

        Ok(())
    }
}

#[async_trait]
impl EmailSender for SmtpSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<SentReceipt, SendError> {
        let config = self.config.clone();
        let to_owned = to.to_string();
        let subject_owned = subject.to_string();
        let body_owned = body.to_string();

        tokio::task::spawn_blocking(move || {
            Self::send_blocking(&config, &to_owned, &subject_owned, &body_owned)
        })
        .await
        .map_err(|e| SendError::Transport(format!("send task panicked: {e}")))??;

        info!(to, "Acknowledgement relayed via SMTP");
        Ok(SentReceipt {
            message_id: format!("smtp-{}", uuid::Uuid::new_v4()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".into(),
            port: 587,
            username: "mailer@example.com".into(),
            password: SecretString::from("secret".to_string()),
            from_address: "mailer@example.com".into(),
        }
    }

    #[test]
    fn invalid_to_address_fails_before_transport() {
        let err = SmtpSender::send_blocking(&make_config(), "not an address", "s", "b")
            .unwrap_err();
        assert!(matches!(err, SendError::InvalidAddress(_)));
    }

    #[test]
    fn invalid_from_address_fails_before_transport() {
        let mut config = make_config();
        config.from_address = "broken".into();
        let err = SmtpSender::send_blocking(&config, "ok@example.com", "s", "b").unwrap_err();
        assert!(matches!(err, SendError::InvalidAddress(_)));
    }
}

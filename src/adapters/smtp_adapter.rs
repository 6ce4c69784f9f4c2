//! SMTP report sink implementing ReportSinkPort.
//!
//! Each send opens its own STARTTLS connection, authenticates, submits one
//! message and drops the transport. The configured address is both sender and
//! recipient.

use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials as SmtpCredentials;
use lettre::{Address, SmtpTransport, Transport};
use tracing::debug;

use crate::domain::error::ReportError;
use crate::domain::mail_config::{Credentials, MailConfig};
use crate::ports::report_sink_port::ReportSinkPort;

pub const SENDER_NAME: &str = "KATILIM TEKNIK";

pub struct SmtpReportSink {
    server: String,
    port: u16,
    credentials: Option<Credentials>,
}

impl SmtpReportSink {
    pub fn new(server: impl Into<String>, port: u16, credentials: Option<Credentials>) -> Self {
        Self {
            server: server.into(),
            port,
            credentials,
        }
    }

    pub fn from_config(config: &MailConfig) -> Self {
        Self::new(
            config.smtp_server.clone(),
            config.smtp_port,
            config.credentials().ok(),
        )
    }
}

/// HTML message from and to `email`, the sender shown as [`SENDER_NAME`].
pub fn build_message(email: &str, subject: &str, html: &str) -> Result<Message, ReportError> {
    let address: Address = email.parse().map_err(|e| ReportError::MessageBuild {
        reason: format!("invalid address {email:?}: {e}"),
    })?;

    Message::builder()
        .from(Mailbox::new(Some(SENDER_NAME.to_string()), address.clone()))
        .to(Mailbox::new(None, address))
        .subject(subject)
        .header(ContentType::TEXT_HTML)
        .body(html.to_string())
        .map_err(|e| ReportError::MessageBuild {
            reason: e.to_string(),
        })
}

impl ReportSinkPort for SmtpReportSink {
    fn send(&self, subject: &str, html: &str) -> Result<(), ReportError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ReportError::MissingCredentials)?;
        let message = build_message(&credentials.email, subject, html)?;

        debug!(server = %self.server, port = self.port, "connecting to smtp");
        let mailer = SmtpTransport::starttls_relay(&self.server)
            .map_err(|e| smtp_err(&e))?
            .port(self.port)
            .credentials(SmtpCredentials::new(
                credentials.email.clone(),
                credentials.password.clone(),
            ))
            .build();

        mailer.send(&message).map_err(|e| smtp_err(&e))?;
        Ok(())
    }
}

fn smtp_err(e: &lettre::transport::smtp::Error) -> ReportError {
    ReportError::Smtp {
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_html_from_and_to_same_address() {
        let message = build_message("rapor@example.com", "Filtrelenmiş Hisse Raporu", "<p>x</p>")
            .unwrap();
        let formatted = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(formatted.contains("KATILIM TEKNIK"));
        assert!(formatted.contains("<rapor@example.com>"));
        assert!(formatted.contains("To: rapor@example.com"));
        assert!(formatted.contains("Content-Type: text/html; charset=utf-8"));
        assert!(formatted.contains("Subject: "));
    }

    #[test]
    fn message_envelope_targets_configured_address() {
        let message = build_message("rapor@example.com", "s", "<p>x</p>").unwrap();
        let envelope = message.envelope();
        assert_eq!(envelope.to().len(), 1);
        assert_eq!(envelope.to()[0].to_string(), "rapor@example.com");
        assert_eq!(
            envelope.from().map(|a| a.to_string()),
            Some("rapor@example.com".to_string())
        );
    }

    #[test]
    fn invalid_address_is_message_error() {
        let err = build_message("not an address", "s", "<p>x</p>").unwrap_err();
        assert!(matches!(err, ReportError::MessageBuild { .. }));
    }

    #[test]
    fn missing_credentials_fail_before_connecting() {
        let sink = SmtpReportSink::new("smtp.invalid", 587, None);
        assert!(matches!(
            sink.send("s", "<p>x</p>"),
            Err(ReportError::MissingCredentials)
        ));
    }

    #[test]
    fn from_config_copies_server_and_port() {
        let config = MailConfig {
            imap_server: "imap.example.com".into(),
            imap_folder: "RAPOR".into(),
            smtp_server: "smtp.example.com".into(),
            smtp_port: 2525,
            email: Some("a@b.c".into()),
            password: None,
            reference_list: "data/katilim.txt".into(),
        };
        let sink = SmtpReportSink::from_config(&config);
        assert_eq!(sink.server, "smtp.example.com");
        assert_eq!(sink.port, 2525);
        assert!(sink.credentials.is_none());
    }
}

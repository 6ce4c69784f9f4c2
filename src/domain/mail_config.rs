//! Run configuration resolved once at startup.
//!
//! Values come from a [`ConfigPort`]: `[mail]` holds the mail hosts and
//! credentials, `[report]` the reference list location. Credentials are
//! optional here; the stages that need them check and bail out on their own.

use crate::domain::error::ReportError;
use crate::domain::reference_list::DEFAULT_REFERENCE_LIST_PATH;
use crate::ports::config_port::ConfigPort;
use std::path::PathBuf;

pub const DEFAULT_IMAP_SERVER: &str = "imap.mail.yahoo.com";
pub const DEFAULT_SMTP_SERVER: &str = "smtp.mail.yahoo.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const IMAP_TLS_PORT: u16 = 993;
pub const DEFAULT_IMAP_FOLDER: &str = "RAPOR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub imap_server: String,
    pub imap_folder: String,
    pub smtp_server: String,
    pub smtp_port: u16,
    pub email: Option<String>,
    pub password: Option<String>,
    pub reference_list: PathBuf,
}

impl MailConfig {
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, ReportError> {
        let smtp_port = match config.get_string("mail", "smtp_port") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ReportError::ConfigInvalid {
                    section: "mail".into(),
                    key: "smtp_port".into(),
                    reason: format!("{raw:?} is not a valid port ({e})"),
                })?,
            None => DEFAULT_SMTP_PORT,
        };

        Ok(Self {
            imap_server: non_empty(config.get_string("mail", "imap_server"))
                .unwrap_or_else(|| DEFAULT_IMAP_SERVER.to_string()),
            imap_folder: non_empty(config.get_string("mail", "imap_folder"))
                .unwrap_or_else(|| DEFAULT_IMAP_FOLDER.to_string()),
            smtp_server: non_empty(config.get_string("mail", "smtp_server"))
                .unwrap_or_else(|| DEFAULT_SMTP_SERVER.to_string()),
            smtp_port,
            email: non_empty(config.get_string("mail", "email")),
            password: non_empty(config.get_string("mail", "password")),
            reference_list: non_empty(config.get_string("report", "reference_list"))
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REFERENCE_LIST_PATH)),
        })
    }

    /// Both the address and the password, or [`ReportError::MissingCredentials`].
    pub fn credentials(&self) -> Result<Credentials, ReportError> {
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => Ok(Credentials {
                email: email.clone(),
                password: password.clone(),
            }),
            _ => Err(ReportError::MissingCredentials),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

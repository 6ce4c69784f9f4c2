//! Domain error types.

/// Top-level error type for katilim-report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("email address or password is not configured")]
    MissingCredentials,

    #[error("imap error: {reason}")]
    Imap { reason: String },

    #[error("mime parse error: {reason}")]
    MimeParse { reason: String },

    #[error("invalid message: {reason}")]
    MessageBuild { reason: String },

    #[error("smtp error: {reason}")]
    Smtp { reason: String },

    #[error("template error: {reason}")]
    Template { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&ReportError> for std::process::ExitCode {
    fn from(err: &ReportError) -> Self {
        let code: u8 = match err {
            ReportError::ConfigParse { .. } | ReportError::ConfigInvalid { .. } => 2,
            _ => 1,
        };
        std::process::ExitCode::from(code)
    }
}

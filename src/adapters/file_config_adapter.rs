//! INI file configuration adapter.
//!
//! ```ini
//! [mail]
//! imap_server = imap.mail.yahoo.com
//! imap_folder = RAPOR
//! smtp_server = smtp.mail.yahoo.com
//! smtp_port = 587
//! email = rapor@example.com
//! password = app-password
//!
//! [report]
//! reference_list = data/katilim.txt
//! ```

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mail_config::MailConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    const SAMPLE: &str = r#"
[mail]
imap_server = imap.example.com
smtp_server = smtp.example.com
smtp_port = 2525
email = rapor@example.com
password = secret

[report]
reference_list = /srv/katilim.txt
"#;

    #[test]
    fn from_string_parses_config() {
        let adapter = FileConfigAdapter::from_string(SAMPLE).unwrap();
        assert_eq!(
            adapter.get_string("mail", "imap_server"),
            Some("imap.example.com".to_string())
        );
        assert_eq!(
            adapter.get_string("report", "reference_list"),
            Some("/srv/katilim.txt".to_string())
        );
    }

    #[test]
    fn get_string_returns_none_for_missing_key() {
        let adapter = FileConfigAdapter::from_string("[mail]\nemail = a@b.c\n").unwrap();
        assert_eq!(adapter.get_string("mail", "missing"), None);
        assert_eq!(adapter.get_string("missing_section", "email"), None);
    }

    #[test]
    fn sections_are_distinct() {
        let adapter = FileConfigAdapter::from_string("[report]\nemail = x@y.z\n").unwrap();
        assert_eq!(adapter.get_string("mail", "email"), None);
    }

    #[test]
    fn from_file_reads_config() {
        let file = create_temp_config(SAMPLE);
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        let cfg = MailConfig::from_config(&adapter).unwrap();
        assert_eq!(cfg.smtp_server, "smtp.example.com");
        assert_eq!(cfg.smtp_port, 2525);
        assert_eq!(cfg.email.as_deref(), Some("rapor@example.com"));
    }

    #[test]
    fn from_file_returns_error_for_missing_file() {
        let result = FileConfigAdapter::from_file("/nonexistent/path/katilim.ini");
        assert!(result.is_err());
    }
}

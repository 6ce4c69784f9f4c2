//! Environment variable configuration adapter.
//!
//! A `(section, key)` lookup reads the upper-cased key, ignoring the section:
//! `[mail] smtp_port` is `SMTP_PORT`, `[report] reference_list` is
//! `REFERENCE_LIST`. Variables are snapshotted at construction; entries whose
//! name or value is not valid UTF-8 are skipped.

use crate::ports::config_port::ConfigPort;
use std::collections::HashMap;
use std::ffi::OsString;

pub struct EnvConfigAdapter {
    vars: HashMap<String, String>,
}

impl EnvConfigAdapter {
    pub fn from_env() -> Self {
        Self::from_vars_os(std::env::vars_os())
    }

    pub fn from_vars_os<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        Self::from_vars(
            vars.into_iter()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    fn var_name(key: &str) -> String {
        key.to_uppercase()
    }
}

impl ConfigPort for EnvConfigAdapter {
    fn get_string(&self, _section: &str, key: &str) -> Option<String> {
        self.vars.get(&Self::var_name(key)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mail_config::MailConfig;

    #[test]
    fn maps_key_to_upper_case_variable() {
        let adapter = EnvConfigAdapter::from_vars([("SMTP_PORT", "465"), ("EMAIL", "a@b.c")]);
        assert_eq!(adapter.get_string("mail", "smtp_port"), Some("465".to_string()));
        assert_eq!(adapter.get_string("mail", "email"), Some("a@b.c".to_string()));
    }

    #[test]
    fn missing_variable_is_none() {
        let adapter = EnvConfigAdapter::from_vars(Vec::<(String, String)>::new());
        assert_eq!(adapter.get_string("mail", "password"), None);
    }

    #[test]
    fn lower_case_variables_do_not_match() {
        let adapter = EnvConfigAdapter::from_vars([("email", "a@b.c")]);
        assert_eq!(adapter.get_string("mail", "email"), None);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_entries_are_skipped() {
        use std::os::unix::ffi::OsStringExt;

        let adapter = EnvConfigAdapter::from_vars_os([
            (
                OsString::from("UNRELATED_BLOB"),
                OsString::from_vec(vec![0xff, 0xfe]),
            ),
            (OsString::from_vec(vec![0xff]), OsString::from("x")),
            (OsString::from("EMAIL"), OsString::from("a@b.c")),
        ]);
        assert_eq!(adapter.get_string("mail", "email"), Some("a@b.c".to_string()));
        assert_eq!(adapter.get_string("mail", "unrelated_blob"), None);
        assert_eq!(adapter.vars.len(), 1);
    }

    #[test]
    fn builds_mail_config_from_environment_names() {
        let adapter = EnvConfigAdapter::from_vars([
            ("IMAP_SERVER", "imap.example.com"),
            ("SMTP_SERVER", "smtp.example.com"),
            ("SMTP_PORT", "2525"),
            ("EMAIL", "rapor@example.com"),
            ("PASSWORD", "secret"),
            ("REFERENCE_LIST", "lists/katilim.txt"),
        ]);
        let cfg = MailConfig::from_config(&adapter).unwrap();
        assert_eq!(cfg.imap_server, "imap.example.com");
        assert_eq!(cfg.smtp_server, "smtp.example.com");
        assert_eq!(cfg.smtp_port, 2525);
        assert!(cfg.credentials().is_ok());
        assert_eq!(cfg.reference_list.to_str(), Some("lists/katilim.txt"));
    }
}

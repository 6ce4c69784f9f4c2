//! IMAP report source implementing ReportSourcePort.
//!
//! Opens one TLS session per fetch, selects the report folder, takes the
//! highest sequence number received since the given date and returns the
//! first `text/html` part of that message. The session is logged out before
//! returning on every path after login.

use std::io::{Read, Write};

use chrono::NaiveDate;
use mailparse::ParsedMail;
use tracing::{debug, info, warn};

use crate::domain::error::ReportError;
use crate::domain::mail_config::{Credentials, DEFAULT_IMAP_FOLDER, IMAP_TLS_PORT, MailConfig};
use crate::ports::report_source_port::ReportSourcePort;

pub struct ImapReportSource {
    server: String,
    port: u16,
    folder: String,
    credentials: Option<Credentials>,
}

impl ImapReportSource {
    pub fn new(server: impl Into<String>, credentials: Option<Credentials>) -> Self {
        Self {
            server: server.into(),
            port: IMAP_TLS_PORT,
            folder: DEFAULT_IMAP_FOLDER.to_string(),
            credentials,
        }
    }

    pub fn from_config(config: &MailConfig) -> Self {
        Self::new(config.imap_server.clone(), config.credentials().ok())
            .with_folder(config.imap_folder.clone())
    }

    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }
}

impl ReportSourcePort for ImapReportSource {
    fn fetch_report(&self, date: NaiveDate) -> Result<Option<String>, ReportError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ReportError::MissingCredentials)?;

        let tls = native_tls::TlsConnector::builder()
            .build()
            .map_err(|e| imap_err(&e))?;
        debug!(server = %self.server, port = self.port, "connecting to imap");
        let client = imap::connect((self.server.as_str(), self.port), &self.server, &tls)
            .map_err(|e| imap_err(&e))?;
        let mut session = client
            .login(&credentials.email, &credentials.password)
            .map_err(|(e, _)| imap_err(&e))?;

        let result = latest_report(&mut session, &self.folder, date);
        if let Err(e) = session.logout() {
            debug!(error = %e, "imap logout failed");
        }
        result
    }
}

fn latest_report<T: Read + Write>(
    session: &mut imap::Session<T>,
    folder: &str,
    date: NaiveDate,
) -> Result<Option<String>, ReportError> {
    session.select(folder).map_err(|e| imap_err(&e))?;

    let ids = session
        .search(search_query(date))
        .map_err(|e| imap_err(&e))?;
    let Some(latest) = latest_id(ids) else {
        info!(folder, "no report received today");
        return Ok(None);
    };
    debug!(folder, id = latest, "fetching latest report");

    let messages = session
        .fetch(latest.to_string(), "RFC822")
        .map_err(|e| imap_err(&e))?;
    let Some(raw) = messages.iter().find_map(|m| m.body()) else {
        warn!(id = latest, "fetched message has no body");
        return Ok(None);
    };

    let html = first_html_part(raw)?;
    if html.is_none() {
        warn!(id = latest, "report has no html part");
    }
    Ok(html)
}

/// Highest sequence number among the search hits, i.e. the newest message.
pub fn latest_id(ids: impl IntoIterator<Item = u32>) -> Option<u32> {
    ids.into_iter().max()
}

/// IMAP `SEARCH` criteria for messages received on or after `date`.
pub fn search_query(date: NaiveDate) -> String {
    format!("SINCE {}", date.format("%d-%b-%Y"))
}

/// Decoded body of the first `text/html` part, walking the MIME tree
/// depth-first in document order.
pub fn first_html_part(raw: &[u8]) -> Result<Option<String>, ReportError> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| mime_err(&e))?;
    find_html(&parsed)
        .map(|part| part.get_body().map_err(|e| mime_err(&e)))
        .transpose()
}

fn find_html<'a, 'b>(part: &'b ParsedMail<'a>) -> Option<&'b ParsedMail<'a>> {
    if part.ctype.mimetype.eq_ignore_ascii_case("text/html") {
        return Some(part);
    }
    part.subparts.iter().find_map(|sub| find_html(sub))
}

fn imap_err(e: &dyn std::fmt::Display) -> ReportError {
    ReportError::Imap {
        reason: e.to_string(),
    }
}

fn mime_err(e: &dyn std::fmt::Display) -> ReportError {
    ReportError::MimeParse {
        reason: e.to_string(),
    }
}

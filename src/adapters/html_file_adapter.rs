//! Local file adapters for offline runs.
//!
//! [`HtmlFileSource`] serves a saved report body in place of the mailbox and
//! [`HtmlFileSink`] writes the rendered document to disk in place of SMTP.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::error::ReportError;
use crate::ports::report_sink_port::ReportSinkPort;
use crate::ports::report_source_port::ReportSourcePort;

pub struct HtmlFileSource {
    path: PathBuf,
}

impl HtmlFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ReportSourcePort for HtmlFileSource {
    fn fetch_report(&self, _date: NaiveDate) -> Result<Option<String>, ReportError> {
        let html = fs::read_to_string(&self.path)?;
        Ok(Some(html))
    }
}

pub struct HtmlFileSink {
    path: PathBuf,
}

impl HtmlFileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ReportSinkPort for HtmlFileSink {
    fn send(&self, subject: &str, html: &str) -> Result<(), ReportError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, html)?;
        info!(path = %self.path.display(), subject, "report written");
        Ok(())
    }
}

//! Port for delivering the rendered report.

use crate::domain::error::ReportError;

pub trait ReportSinkPort {
    fn send(&self, subject: &str, html: &str) -> Result<(), ReportError>;
}

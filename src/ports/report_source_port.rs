//! Port for retrieving the daily report HTML.

use crate::domain::error::ReportError;
use chrono::NaiveDate;

pub trait ReportSourcePort {
    /// HTML body of the newest report received on `date`, or `None` when
    /// there is no such report or it has no HTML part.
    fn fetch_report(&self, date: NaiveDate) -> Result<Option<String>, ReportError>;
}

//! Report rendering port trait.

use crate::domain::error::ReportError;
use crate::domain::record::StockRecord;
use chrono::NaiveDate;

/// Port for turning filtered rows into report HTML.
pub trait ReportPort {
    /// The styled data table, or a placeholder paragraph when `records` is empty.
    fn render_table(&self, records: &[StockRecord]) -> Result<String, ReportError>;

    /// Wrap an already rendered table in the email document.
    fn wrap_document(&self, table_html: &str, date: NaiveDate) -> Result<String, ReportError>;

    /// Default implementation: renders the table and wraps it.
    fn render_document(
        &self,
        records: &[StockRecord],
        date: NaiveDate,
    ) -> Result<String, ReportError> {
        let table = self.render_table(records)?;
        self.wrap_document(&table, date)
    }
}

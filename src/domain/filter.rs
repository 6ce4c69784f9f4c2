//! Reference-list filtering and signal ordering of report rows.

use crate::domain::record::StockRecord;
use crate::domain::reference_list::ReferenceSet;
use tracing::info;

/// Keep rows whose ticker is on the reference list, buy signals first.
///
/// Membership is an exact, case-sensitive string match. The sort is stable,
/// so rows within the same [`Signal`](crate::domain::signal::Signal) class
/// keep their report order.
pub fn filter_records(records: Vec<StockRecord>, reference: &ReferenceSet) -> Vec<StockRecord> {
    let mut kept: Vec<StockRecord> = records
        .into_iter()
        .filter(|r| reference.contains(&r.hisse))
        .collect();
    kept.sort_by_key(StockRecord::signal);
    info!(count = kept.len(), "filtered rows");
    kept
}

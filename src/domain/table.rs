//! Data table extraction from the report email body.
//!
//! The report HTML carries several tables (layout, legend, data). The data
//! table is the first one whose `<th>` cells include [`KEY_COLUMN`]. Its rows
//! are reconciled to the header width before they become [`StockRecord`]s.

use crate::domain::record::{KEY_COLUMN, StockRecord};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// Header row plus data rows, each row exactly `headers.len()` cells wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn records(&self) -> Vec<StockRecord> {
        self.rows
            .iter()
            .map(|row| StockRecord::from_row(&self.headers, row))
            .collect()
    }
}

/// Truncate or right-pad `cells` with empty strings to exactly `width`.
pub fn normalize_row(mut cells: Vec<String>, width: usize) -> Vec<String> {
    cells.resize(width, String::new());
    cells
}

pub fn extract_table(html: Option<&str>) -> Option<RawTable> {
    let html = match html {
        Some(h) if !h.trim().is_empty() => h,
        _ => {
            warn!("report html is empty");
            return None;
        }
    };

    let document = Html::parse_document(html);
    let table_sel = selector("table")?;
    let th_sel = selector("th")?;
    let tr_sel = selector("tr")?;
    let td_sel = selector("td")?;

    for (position, table) in document.select(&table_sel).enumerate() {
        let headers: Vec<String> = table.select(&th_sel).map(cell_text).collect();
        if !headers.iter().any(|h| h == KEY_COLUMN) {
            continue;
        }
        debug!(position, columns = headers.len(), "found data table");

        let width = headers.len();
        let rows: Vec<Vec<String>> = table
            .select(&tr_sel)
            .skip(1)
            .map(|tr| tr.select(&td_sel).map(cell_text).collect::<Vec<_>>())
            .filter(|cells| !cells.is_empty())
            .map(|cells| normalize_row(cells, width))
            .collect();

        if rows.is_empty() {
            warn!("data table has no rows");
            return None;
        }
        return Some(RawTable { headers, rows });
    }

    warn!(column = KEY_COLUMN, "no table with key column found");
    None
}

fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            warn!(css, error = %e, "invalid selector");
            None
        }
    }
}

fn cell_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

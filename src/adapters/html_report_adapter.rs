//! HTML report adapter implementing ReportPort.
//!
//! Renders filtered rows with Askama templates into inline-styled HTML that
//! mail clients display without external stylesheets.

use askama::Template;
use chrono::NaiveDate;

use crate::domain::error::ReportError;
use crate::domain::record::{COLUMNS, KEY_COLUMN, StockRecord};
use crate::domain::signal::Signal;
use crate::ports::report_port::ReportPort;

pub const EMPTY_PLACEHOLDER: &str = "<p>Filtrelenecek hisse bulunamadı.</p>";
pub const REPORT_TITLE: &str = "Filtrelenmiş Günlük Teknik Analiz Raporu";

const FOOTER_LINES: [&str; 3] = [
    "Bu liste BIST Katılım Pay Endeksine göre filtrelenmiştir.",
    "Bu e-posta otomatik olarak gönderilmiştir. Lütfen yanıt vermeyiniz.",
    "Author: © 2025 by Alper INCE, Edited by: @Magnus Trade",
];

const EVEN_ROW_BG: &str = "#f8f9fa";
const ODD_ROW_BG: &str = "#ffffff";
const BUY_BADGE: &str = "background-color:#28a745;color:white;padding:4px 8px;border-radius:4px;";
const SELL_BADGE: &str = "background-color:#dc3545;color:white;padding:4px 8px;border-radius:4px;";
const VOLUME_UP: &str = "color:#28a745;font-weight:bold;";
const VOLUME_DOWN: &str = "color:#dc3545;font-weight:bold;";

struct CellView<'a> {
    text: &'a str,
    strong: bool,
    span_style: Option<&'static str>,
}

struct RowView<'a> {
    background: &'static str,
    cells: Vec<CellView<'a>>,
}

#[derive(Template)]
#[template(path = "report_table.html")]
struct ReportTableTemplate<'a> {
    columns: &'a [&'a str],
    rows: Vec<RowView<'a>>,
}

#[derive(Template)]
#[template(path = "report_document.html")]
struct ReportDocumentTemplate<'a> {
    title: &'a str,
    date_label: String,
    table_html: &'a str,
    footer_lines: &'a [&'a str],
}

/// `05 March 2025` style date used in the report title.
pub fn format_report_date(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}

fn cell_view<'a>(column: &str, text: &'a str) -> CellView<'a> {
    let span_style = match column {
        "Sinyal" if Signal::from_label(text).is_buy() => Some(BUY_BADGE),
        "Sinyal" => Some(SELL_BADGE),
        "Hacim %" if text.starts_with('+') => Some(VOLUME_UP),
        "Hacim %" => Some(VOLUME_DOWN),
        _ => None,
    };
    CellView {
        text,
        strong: column == KEY_COLUMN,
        span_style,
    }
}

// `index` is the position in the filtered output, not in the source table.
fn row_view(index: usize, record: &StockRecord) -> RowView<'_> {
    RowView {
        background: if index % 2 == 0 { EVEN_ROW_BG } else { ODD_ROW_BG },
        cells: COLUMNS
            .iter()
            .zip(record.values())
            .map(|(column, text)| cell_view(column, text))
            .collect(),
    }
}

fn render_err(e: askama::Error) -> ReportError {
    ReportError::Template {
        reason: e.to_string(),
    }
}

pub struct HtmlReportAdapter;

impl HtmlReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPort for HtmlReportAdapter {
    fn render_table(&self, records: &[StockRecord]) -> Result<String, ReportError> {
        if records.is_empty() {
            return Ok(EMPTY_PLACEHOLDER.to_string());
        }

        let template = ReportTableTemplate {
            columns: &COLUMNS,
            rows: records
                .iter()
                .enumerate()
                .map(|(i, r)| row_view(i, r))
                .collect(),
        };
        template.render().map_err(render_err)
    }

    fn wrap_document(&self, table_html: &str, date: NaiveDate) -> Result<String, ReportError> {
        let template = ReportDocumentTemplate {
            title: REPORT_TITLE,
            date_label: format_report_date(date),
            table_html,
            footer_lines: &FOOTER_LINES,
        };
        template.render().map_err(render_err)
    }
}

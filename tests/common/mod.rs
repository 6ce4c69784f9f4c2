#![allow(dead_code)]

use chrono::NaiveDate;
use katilim_report::domain::error::ReportError;
use katilim_report::ports::report_sink_port::ReportSinkPort;
use katilim_report::ports::report_source_port::ReportSourcePort;
use std::cell::{Cell, RefCell};
use std::io::Write;

pub const HEADERS: [&str; 12] = [
    "Hisse",
    "Son Fiyat",
    "RSI",
    "Pivota Göre",
    "EMA Str.",
    "Sinyal",
    "Sharpe",
    "Hacim %",
    "Stop",
    "H1",
    "H2",
    "H3",
];

pub struct MockReportSource {
    pub html: Option<String>,
    pub error: Option<String>,
    pub calls: Cell<usize>,
}

impl MockReportSource {
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            error: None,
            calls: Cell::new(0),
        }
    }

    pub fn empty() -> Self {
        Self {
            html: None,
            error: None,
            calls: Cell::new(0),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            html: None,
            error: Some(reason.to_string()),
            calls: Cell::new(0),
        }
    }
}

impl ReportSourcePort for MockReportSource {
    fn fetch_report(&self, _date: NaiveDate) -> Result<Option<String>, ReportError> {
        self.calls.set(self.calls.get() + 1);
        if let Some(reason) = &self.error {
            return Err(ReportError::Imap {
                reason: reason.clone(),
            });
        }
        Ok(self.html.clone())
    }
}

pub struct MockReportSink {
    pub sent: RefCell<Vec<(String, String)>>,
    pub error: Option<String>,
}

impl MockReportSink {
    pub fn new() -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            error: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            error: Some(reason.to_string()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl ReportSinkPort for MockReportSink {
    fn send(&self, subject: &str, html: &str) -> Result<(), ReportError> {
        self.sent
            .borrow_mut()
            .push((subject.to_string(), html.to_string()));
        match &self.error {
            Some(reason) => Err(ReportError::Smtp {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// A full-width data row with the given ticker, signal and volume change.
pub fn row(hisse: &str, sinyal: &str, hacim: &str) -> Vec<String> {
    vec![
        hisse.to_string(),
        "10.50".to_string(),
        "55".to_string(),
        "Üstünde".to_string(),
        "Pozitif".to_string(),
        sinyal.to_string(),
        "1.1".to_string(),
        hacim.to_string(),
        "9.80".to_string(),
        "11".to_string(),
        "12".to_string(),
        "13".to_string(),
    ]
}

/// Report body shaped like the daily email: a layout table without the key
/// column followed by the data table.
pub fn report_html(rows: &[Vec<String>]) -> String {
    let mut html = String::from(
        "<html><body><table><tr><th>Günlük Teknik Analiz</th></tr>\
         <tr><td>Özet</td></tr></table><table><tr>",
    );
    for header in HEADERS {
        html.push_str(&format!("<th>{header}</th>"));
    }
    html.push_str("</tr>");
    for cells in rows {
        html.push_str("<tr>");
        for cell in cells {
            html.push_str(&format!("<td>{cell}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</table></body></html>");
    html
}

pub fn write_temp_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
}

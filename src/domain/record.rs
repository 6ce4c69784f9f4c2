//! Fixed-shape stock row extracted from the daily report table.

use crate::domain::signal::Signal;

/// Column headers in the order the report renders them.
pub const COLUMNS: [&str; 12] = [
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

/// Column that identifies a row and marks the data table in the report.
pub const KEY_COLUMN: &str = "Hisse";

/// One report row. Every known column is a plain string; a column the source
/// table did not carry is left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockRecord {
    pub hisse: String,
    pub son_fiyat: String,
    pub rsi: String,
    pub pivota_gore: String,
    pub ema_str: String,
    pub sinyal: String,
    pub sharpe: String,
    pub hacim_pct: String,
    pub stop: String,
    pub h1: String,
    pub h2: String,
    pub h3: String,
}

impl StockRecord {
    pub fn builder() -> StockRecordBuilder {
        StockRecordBuilder::default()
    }

    /// Build a record from parallel header and cell slices. Extra cells,
    /// unknown headers and missing columns are tolerated.
    pub fn from_row(headers: &[String], cells: &[String]) -> Self {
        headers
            .iter()
            .zip(cells)
            .fold(Self::builder(), |b, (h, c)| b.column(h, c))
            .build()
    }

    pub fn signal(&self) -> Signal {
        Signal::from_label(&self.sinyal)
    }

    /// All twelve values in [`COLUMNS`] order.
    pub fn values(&self) -> [&str; 12] {
        [
            &self.hisse,
            &self.son_fiyat,
            &self.rsi,
            &self.pivota_gore,
            &self.ema_str,
            &self.sinyal,
            &self.sharpe,
            &self.hacim_pct,
            &self.stop,
            &self.h1,
            &self.h2,
            &self.h3,
        ]
        .map(String::as_str)
    }
}

#[derive(Debug, Default)]
pub struct StockRecordBuilder {
    record: StockRecord,
}

impl StockRecordBuilder {
    /// Set a column by header name. Unknown headers are ignored; repeated
    /// headers overwrite the earlier value.
    pub fn column(mut self, header: &str, value: impl Into<String>) -> Self {
        let slot = match header {
            "Hisse" => &mut self.record.hisse,
            "Son Fiyat" => &mut self.record.son_fiyat,
            "RSI" => &mut self.record.rsi,
            "Pivota Göre" => &mut self.record.pivota_gore,
            "EMA Str." => &mut self.record.ema_str,
            "Sinyal" => &mut self.record.sinyal,
            "Sharpe" => &mut self.record.sharpe,
            "Hacim %" => &mut self.record.hacim_pct,
            "Stop" => &mut self.record.stop,
            "H1" => &mut self.record.h1,
            "H2" => &mut self.record.h2,
            "H3" => &mut self.record.h3,
            _ => return self,
        };
        *slot = value.into();
        self
    }

    pub fn hisse(self, value: impl Into<String>) -> Self {
        self.column("Hisse", value)
    }

    pub fn sinyal(self, value: impl Into<String>) -> Self {
        self.column("Sinyal", value)
    }

    pub fn hacim_pct(self, value: impl Into<String>) -> Self {
        self.column("Hacim %", value)
    }

    pub fn build(self) -> StockRecord {
        self.record
    }
}

//! Trading signal carried in the `Sinyal` column.

/// Categorical recommendation attached to a report row.
///
/// Ordering is `Buy < Sell < Other`: buy rows lead the report, sell rows
/// follow, and rows with an unrecognised or empty signal go last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Signal {
    Buy,
    Sell,
    Other,
}

impl Signal {
    pub const BUY_LABEL: &'static str = "Al";
    pub const SELL_LABEL: &'static str = "Sat";

    pub fn from_label(label: &str) -> Self {
        match label {
            Self::BUY_LABEL => Signal::Buy,
            Self::SELL_LABEL => Signal::Sell,
            _ => Signal::Other,
        }
    }

    pub fn is_buy(self) -> bool {
        self == Signal::Buy
    }
}

//! Column naming for the provider and legacy table conventions.
//!
//! The expected column sets are enumerated here so membership checks and the
//! rename step work against one fixed schema instead of ad-hoc string
//! literals scattered through the pipeline.

use polars::frame::DataFrame;

/// Lowercase column names used by the provider's daily price payload.
pub mod provider {
    pub const DATE: &str = "date";
    pub const OPEN: &str = "open";
    pub const HIGH: &str = "high";
    pub const LOW: &str = "low";
    pub const CLOSE: &str = "close";
    pub const ADJ_CLOSE: &str = "adjClose";
    pub const VOLUME: &str = "volume";
}

/// Capitalized column names expected by legacy consumers of the price table.
pub mod legacy {
    pub const DATE: &str = "Date";
    pub const OPEN: &str = "Open";
    pub const HIGH: &str = "High";
    pub const LOW: &str = "Low";
    pub const CLOSE: &str = "Close";
    pub const ADJ_CLOSE: &str = "Adj Close";
    pub const VOLUME: &str = "Volume";
}

/// Provider-to-legacy rename pairs, one per known column.
pub const RENAMES: [(&str, &str); 7] = [
    (provider::DATE, legacy::DATE),
    (provider::OPEN, legacy::OPEN),
    (provider::HIGH, legacy::HIGH),
    (provider::LOW, legacy::LOW),
    (provider::CLOSE, legacy::CLOSE),
    (provider::ADJ_CLOSE, legacy::ADJ_CLOSE),
    (provider::VOLUME, legacy::VOLUME),
];

/// Whether `frame` carries a column named `name`.
pub fn has_column(frame: &DataFrame, name: &str) -> bool {
    frame.column(name).is_ok()
}

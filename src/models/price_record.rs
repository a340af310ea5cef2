//! Canonical in-memory representation of one end-of-day price record.
//!
//! This struct is the standard output for all [`DataProvider`](crate::providers::DataProvider)
//! implementations, regardless of vendor.

use chrono::NaiveDate;

/// A single daily price record, vendor-agnostic.
///
/// Every price field is optional: not all vendors return all fields, and a
/// field that no record in a series carries produces no column in the raw
/// price table.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPrice {
    /// The trading day this record covers.
    pub date: NaiveDate,

    /// Opening price.
    pub open: Option<f64>,

    /// Highest price of the day.
    pub high: Option<f64>,

    /// Lowest price of the day.
    pub low: Option<f64>,

    /// Raw closing price.
    pub close: Option<f64>,

    /// Closing price adjusted for splits and dividends. Not all vendors
    /// supply this.
    pub adj_close: Option<f64>,

    /// Shares traded during the day.
    pub volume: Option<i64>,
}

//! Universal parameters for requesting a daily price history from a provider.

use chrono::NaiveDate;

/// The date layout providers expect for range bounds.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A provider-ready request for one ticker's daily price history.
///
/// The bounds are carried already formatted as `YYYY-MM-DD` strings, the way
/// the provider's API takes them; [`PriceHistoryRequest::new`] does the
/// formatting from structured dates. Both bounds are inclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceHistoryRequest {
    /// Instrument identifier, passed through to the provider unvalidated.
    pub ticker: String,

    /// Range start, formatted `YYYY-MM-DD`.
    pub start_date: String,

    /// Range end, formatted `YYYY-MM-DD`.
    pub end_date: String,
}

impl PriceHistoryRequest {
    /// Builds a request from structured dates.
    ///
    /// `start <= end` ordering is the caller's responsibility.
    pub fn new(ticker: &str, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            ticker: ticker.to_string(),
            start_date: start.format(DATE_FORMAT).to_string(),
            end_date: end.format(DATE_FORMAT).to_string(),
        }
    }
}

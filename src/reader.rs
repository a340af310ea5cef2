//! The legacy-convention daily price reader.
//!
//! [`DataReader`] wires a [`DataProvider`] to the normalization pipeline:
//! format the date bounds, fetch the daily series, validate the close-price
//! columns, rename to the capitalized legacy schema, and lead the frame with
//! `Date`.

use chrono::NaiveDate;
use log::{debug, info};
use polars::prelude::*;

use crate::{
    errors::Error,
    io::dataframe::records_to_dataframe,
    models::{request_params::PriceHistoryRequest, schema},
    providers::DataProvider,
};

/// Fetches daily price history and reshapes it for legacy consumers.
///
/// Holds the provider instance; construct once and reuse across calls. The
/// reader keeps no per-call state, so invocations are independent.
pub struct DataReader<P> {
    provider: P,
}

impl<P: DataProvider> DataReader<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Fetches the daily price series for `ticker` between `start` and `end`
    /// (both inclusive) and returns it renamed to the legacy capitalized
    /// schema and indexed by `Date`.
    ///
    /// `start <= end` ordering is the caller's responsibility; the bounds
    /// reach the provider as `YYYY-MM-DD` strings. Row order is whatever the
    /// provider returned; no re-sort happens here.
    ///
    /// When the series has close prices but no adjusted closes, an
    /// `adjClose` column is synthesized as a copy of `close` and the call
    /// returns `Ok(None)`: the legacy reader bails out on this path before
    /// renaming and indexing, so the synthesized table never reached its
    /// callers. That behavior is kept intact here.
    ///
    /// # Errors
    ///
    /// [`Error::MissingPriceData`] when the series carries neither an
    /// adjusted-close nor a close column; [`Error::Provider`] for anything
    /// the provider itself reports, propagated unchanged.
    pub async fn fetch(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<DataFrame>, Error> {
        let request = PriceHistoryRequest::new(ticker, start, end);
        info!(
            "fetching daily prices for {} from {} to {}",
            request.ticker, request.start_date, request.end_date
        );

        let records = self.provider.fetch_daily_prices(&request).await?;
        let mut frame = records_to_dataframe(&records)?;
        debug!("raw frame for {}:\n{}", request.ticker, frame.head(Some(5)));

        if !schema::has_column(&frame, schema::provider::ADJ_CLOSE) {
            if !schema::has_column(&frame, schema::provider::CLOSE) {
                return Err(Error::MissingPriceData {
                    ticker: request.ticker,
                });
            }

            let synthesized = frame
                .column(schema::provider::CLOSE)?
                .as_materialized_series()
                .clone()
                .with_name(schema::provider::ADJ_CLOSE.into());
            frame.with_column(synthesized)?;
            // The synthesized frame is dropped here, before renaming and
            // indexing ever run — matching the legacy reader.
            // TODO: deliver the normalized frame on this path once the
            // owners of the legacy contract confirm the early return is a
            // bug rather than intent.
            return Ok(None);
        }

        debug!("provider columns: {:?}", frame.get_column_names());

        let frame = normalize(frame)?;
        debug!(
            "normalized frame for {}:\n{}",
            request.ticker,
            frame.head(Some(5))
        );

        Ok(Some(frame))
    }
}

/// Renames provider columns to the legacy capitalized schema and moves
/// `Date` to the leading position, standing in for a date index.
///
/// The rename is total for known columns and touches nothing else; row
/// order is preserved.
fn normalize(mut frame: DataFrame) -> Result<DataFrame, PolarsError> {
    for (from, to) in schema::RENAMES {
        if schema::has_column(&frame, from) {
            frame.rename(from, to.into())?;
        }
    }

    let mut order: Vec<String> = vec![schema::legacy::DATE.to_string()];
    order.extend(
        frame
            .get_column_names_str()
            .into_iter()
            .filter(|name| *name != schema::legacy::DATE)
            .map(|name| name.to_string()),
    );

    frame.select(order)
}

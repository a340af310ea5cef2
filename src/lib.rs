//! Daily price history fetching with legacy `DataReader`-style output.
//!
//! This crate is a thin adapter over a market data provider (Tiingo): it
//! fetches the daily price series for one ticker over a date range and
//! reshapes it into the layout legacy consumers expect — capitalized column
//! names (`Date`, `Open`, `High`, `Low`, `Close`, `Adj Close`, `Volume`)
//! with `Date` leading the frame as its index.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use chrono::NaiveDate;
//!
//! let reader = tiingo_datareader::create_reader()?;
//! let table = reader
//!     .fetch(
//!         "AAPL",
//!         NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2021, 1, 31).unwrap(),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod io;
pub mod models;
pub mod providers;
pub mod reader;

pub use errors::Error;
pub use reader::DataReader;

use providers::{ProviderInitError, tiingo::TiingoProvider};

/// Creates a reader backed by the Tiingo daily prices API.
///
/// The provider reads its API token from the `TIINGO_API_KEY` environment
/// variable; a missing token surfaces here as
/// [`ProviderInitError::MissingCredential`]. Build the reader once at
/// startup and reuse it across calls.
pub fn create_reader() -> Result<DataReader<TiingoProvider>, ProviderInitError> {
    Ok(DataReader::new(TiingoProvider::new()?))
}

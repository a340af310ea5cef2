use polars::prelude::PolarsError;
use thiserror::Error;

use crate::providers::ProviderError;

/// The unified error type for the `tiingo_datareader` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An error originating from the market data provider (network, auth,
    /// invalid symbol). Propagated unchanged.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider response carried neither an adjusted-close nor a close
    /// column.
    #[error("no usable close-price information for {ticker}")]
    MissingPriceData { ticker: String },

    /// An error from the Polars library.
    #[error("Polars operation failed")]
    Polars(#[from] PolarsError),
}

//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, the unified interface for
//! fetching a daily price series from a market data vendor. Each concrete
//! vendor (currently Tiingo) implements it behind its own submodule and owns
//! the vendor-specific API logic.
//!
//! The trait is async and supports dynamic dispatch (`dyn DataProvider`), so
//! the reader can select a provider at runtime and tests can substitute a
//! mock.

pub mod errors;
pub mod tiingo;

use async_trait::async_trait;

use crate::models::{price_record::DailyPrice, request_params::PriceHistoryRequest};

pub use errors::{ProviderError, ProviderInitError};

#[async_trait]
pub trait DataProvider {
    /// Fetches the daily price series for the requested ticker and bounds.
    ///
    /// Returns one record per trading day, in the order the vendor supplied
    /// them.
    async fn fetch_daily_prices(
        &self,
        request: &PriceHistoryRequest,
    ) -> Result<Vec<DailyPrice>, ProviderError>;
}

//! Tiingo end-of-day price provider.
//!
//! Talks to the daily prices endpoint
//! (`https://api.tiingo.com/tiingo/daily/{ticker}/prices`), authenticated
//! with an API token sent as an `Authorization: Token` header.

pub mod params;
pub mod provider;
pub mod response;

pub use provider::TiingoProvider;

use async_trait::async_trait;
use reqwest::{Client, header};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    models::{price_record::DailyPrice, request_params::PriceHistoryRequest},
    providers::{
        DataProvider, ProviderError, ProviderInitError,
        tiingo::{params::construct_params, response::TiingoDailyRow},
    },
};

const BASE_URL: &str = "https://api.tiingo.com/tiingo/daily";

/// The environment variable holding the Tiingo API token.
pub const API_KEY_VAR: &str = "TIINGO_API_KEY";

pub struct TiingoProvider {
    client: Client,
    _token: SecretString,
}

impl TiingoProvider {
    /// Creates a new Tiingo provider.
    ///
    /// Reads the API token from the `TIINGO_API_KEY` environment variable
    /// and bakes it into the client's default headers, so every request the
    /// client sends is authenticated. Construct once per process and reuse;
    /// the client is safe to share.
    pub fn new() -> Result<Self, ProviderInitError> {
        let token = SecretString::new(api_token_from_env()?.into());

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Token {}", token.expose_secret()))?,
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            _token: token,
        })
    }

    fn prices_url(ticker: &str) -> String {
        format!("{BASE_URL}/{ticker}/prices")
    }
}

#[async_trait]
impl DataProvider for TiingoProvider {
    async fn fetch_daily_prices(
        &self,
        request: &PriceHistoryRequest,
    ) -> Result<Vec<DailyPrice>, ProviderError> {
        let query = construct_params(request);

        let response = self
            .client
            .get(Self::prices_url(&request.ticker))
            .query(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Api(message));
        }

        let rows = response.json::<Vec<TiingoDailyRow>>().await?;

        Ok(rows.into_iter().map(DailyPrice::from).collect())
    }
}

fn api_token_from_env() -> Result<String, ProviderInitError> {
    std::env::var(API_KEY_VAR).map_err(|_| ProviderInitError::MissingCredential(API_KEY_VAR))
}

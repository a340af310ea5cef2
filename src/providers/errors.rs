use thiserror::Error;

/// Errors that can occur within a `DataProvider` implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider's API returned a specific error message (e.g., invalid
    /// API token, unknown ticker).
    #[error("API error: {0}")]
    Api(String),
}

/// Errors that can occur while constructing a provider instance.
#[derive(Debug, Error)]
pub enum ProviderInitError {
    /// The credential environment variable is not set.
    #[error("missing environment variable: {0}")]
    MissingCredential(&'static str),

    /// The API token contains bytes that cannot appear in a request header.
    #[error("invalid API token format: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

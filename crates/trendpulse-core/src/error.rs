use thiserror::Error;

/// All the ways things can go wrong in TrendPulse
///
/// thiserror generates the boilerplate; note that per-request failures
/// inside a refresh cycle never reach callers as this type - they are
/// swallowed into empty fallbacks at the snapshot layer.
#[derive(Error, Debug)]
pub enum Error {
    #[error("API request failed: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

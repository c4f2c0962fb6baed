use thiserror::Error;

/// Failures talking to The Cat API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("Server error: {0}")]
    Status(reqwest::StatusCode),
    #[error("Parse error: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("Base URL cannot take path segments: {0}")]
    InvalidBaseUrl(String),
}

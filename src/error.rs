use std::fmt;

use thiserror::Error;

/// The three upstream datasets the report is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Benefits,
    Filters,
    Fichas,
}

impl Dataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Benefits => "benefits",
            Dataset::Filters => "filters",
            Dataset::Fichas => "fichas",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single fetch against an upstream dataset failed.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response format: {0}")]
    InvalidPayload(String),
}

impl FetchError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Status(_) => "status",
            FetchError::Transport(_) => "transport",
            FetchError::InvalidPayload(_) => "invalid_payload",
        }
    }
}

/// A source fetch failed; aborts the whole report.
#[derive(Error, Debug)]
#[error("failed to fetch {dataset}: {cause}")]
pub struct RetrievalError {
    pub dataset: Dataset,
    #[source]
    pub cause: FetchError,
}

impl RetrievalError {
    pub fn new(dataset: Dataset, cause: impl Into<FetchError>) -> Self {
        Self {
            dataset,
            cause: cause.into(),
        }
    }

    pub fn invalid_payload(dataset: Dataset, message: impl Into<String>) -> Self {
        Self::new(dataset, FetchError::InvalidPayload(message.into()))
    }
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_retrieval_error_names_dataset_and_cause() {
        let err = RetrievalError::new(Dataset::Filters, FetchError::Status(404));
        assert_eq!(err.to_string(), "failed to fetch filters: HTTP 404");
        let source = err.source().expect("cause is chained");
        assert_eq!(source.to_string(), "HTTP 404");
    }

    #[test]
    fn test_invalid_payload_message() {
        let err = RetrievalError::invalid_payload(Dataset::Benefits, "missing `data` field");
        assert_eq!(
            err.to_string(),
            "failed to fetch benefits: invalid response format: missing `data` field"
        );
        assert_eq!(err.cause.kind(), "invalid_payload");
    }

    #[test]
    fn test_service_error_is_transparent_for_retrieval() {
        let err: ServiceError = RetrievalError::new(Dataset::Fichas, FetchError::Status(500)).into();
        assert_eq!(err.to_string(), "failed to fetch fichas: HTTP 500");
    }
}

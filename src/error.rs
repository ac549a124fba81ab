use thiserror::Error;

pub type Result<T> = std::result::Result<T, PumpscrapeError>;

/// Failure to retrieve a token page.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("{url}: status {status} ({reason})")]
    Status {
        url: String,
        status: u16,
        reason: &'static str,
    },
    #[error("{url}: no response within {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u64 },
    #[error("{url}: {message}")]
    Request { url: String, message: String },
}

/// Failure to retrieve or decode the upstream ranked list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpstreamListError {
    #[error("upstream request failed: {0}")]
    Request(String),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("upstream response is not a ranked list: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("could not parse config {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("invalid config value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

#[derive(Debug, Error)]
pub enum PumpscrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Upstream(#[from] UpstreamListError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("storage error during {operation}: {message}")]
    Storage { operation: String, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

impl PumpscrapeError {
    pub fn storage_error(operation: &str, message: &str) -> Self {
        Self::Storage {
            operation: operation.to_string(),
            message: message.to_string(),
        }
    }
}

/* Conversions so `?` works smoothly */
impl From<reqwest::Error> for PumpscrapeError {
    fn from(e: reqwest::Error) -> Self {
        PumpscrapeError::Other(e.to_string())
    }
}

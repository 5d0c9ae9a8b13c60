//! Error types for binder_merge

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the Scryfall client
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// API returned an error response
    #[error("{status} {code}: {details}")]
    ApiResponse {
        status: reqwest::StatusCode,
        code: String,
        details: String,
    },
    /// HTTP error status code without a readable error body
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
}

impl ApiError {
    /// True when the service answered with a non-success status.
    pub fn is_unsuccessful_response(&self) -> bool {
        matches!(self, ApiError::ApiResponse { .. } | ApiError::HttpStatus(_))
    }
}

/// Unified error type for a merge run
#[derive(Debug, Error)]
pub enum BinderError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Cache file {} is not a valid name cache: {source}", .path.display())]
    CacheFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A set, number or language cell contains the key separator
    #[error("Invalid {column} value {value:?} in {}: must not contain \"__\"", .path.display())]
    InvalidField {
        path: PathBuf,
        column: &'static str,
        value: String,
    },
    /// Lookup failed for the given cache key after all variants were tried
    #[error("problem with card {key}")]
    Lookup {
        key: String,
        #[source]
        source: ApiError,
    },
}

impl BinderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BinderError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        BinderError::Csv {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for binder_merge operations
pub type Result<T> = std::result::Result<T, BinderError>;

/// Result type alias for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

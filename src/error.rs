//! Error types for the bucketlib library.

use thiserror::Error;

/// Main error type for bucketlib operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// HTTP request failed with status code.
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Network request error.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The caller's cancellation token fired.
    #[error("Operation cancelled")]
    Cancelled,

    /// Invalid client configuration (base URL, proxy).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl StorageError {
    /// Check if the operation was stopped by the caller.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, StorageError::Cancelled)
    }

    /// Check if the server or the network failed the request.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            StorageError::HttpError(_) | StorageError::RequestError(_)
        )
    }

    /// Check if the response body could not be decoded.
    pub fn is_decoding(&self) -> bool {
        matches!(self, StorageError::JsonError(_))
    }
}

/// Result type alias for bucketlib operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_taxonomy() {
        assert!(StorageError::Cancelled.is_cancelled());
        assert!(!StorageError::Cancelled.is_transport());

        let http = StorageError::HttpError(503);
        assert!(http.is_transport());
        assert!(!http.is_cancelled());
        assert_eq!(http.to_string(), "HTTP error: 503");

        let json = StorageError::from(serde_json::from_str::<u64>("nope").unwrap_err());
        assert!(json.is_decoding());
        assert!(!json.is_transport());
    }
}

/// Error types for the screen's three operations
///
/// Every failure is caught where the call is made and ends up in a single
/// "last error" slot on the snapshot. Payloads are plain strings so the
/// errors stay `Clone` and can travel inside iced messages.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Fetch failed, returned a non-2xx status, or the body didn't parse
    #[error("Network error: {0}")]
    Network(String),

    /// Picker failed (permission denied, unreadable file, platform error)
    #[error("Image picker error: {0}")]
    Picker(String),

    /// Key-value store removal failed
    #[error("Storage error: {0}")]
    Store(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        AppError::Store(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = AppError::Network("HTTP status: 503".to_string());
        assert_eq!(err.to_string(), "Network error: HTTP status: 503");

        let err = AppError::Store("disk I/O error".to_string());
        assert!(err.to_string().starts_with("Storage error"));
    }

    #[test]
    fn test_sqlite_errors_map_to_store() {
        let err: AppError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, AppError::Store(_)));
    }
}

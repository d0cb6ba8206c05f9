//! Domain error types.

use thiserror::Error;

/// Failure reported by a backing store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or the query failed.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Failure while serializing an export body.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV export failed: {0}")]
    CsvFlush(String),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a request was refused by an access policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessDenied {
    #[error("no active session")]
    NoSession,

    #[error("role '{0}' is not permitted")]
    InsufficientRole(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Unavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "store unavailable: connection refused");
    }

    #[test]
    fn test_access_denied_display() {
        assert_eq!(AccessDenied::NoSession.to_string(), "no active session");
        assert_eq!(
            AccessDenied::InsufficientRole("viewer".to_string()).to_string(),
            "role 'viewer' is not permitted"
        );
    }
}

use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Storage not configured: {0}")]
    NotConfigured(&'static str),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("relation \"users\" does not exist".to_string());
        assert_eq!(
            error.to_string(),
            "Query failed: relation \"users\" does not exist"
        );
    }

    #[test]
    fn test_repository_error_serialization_display() {
        let error = RepositoryError::Serialization("invalid number".to_string());
        assert_eq!(error.to_string(), "Serialization error: invalid number");
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error = RepositoryError::InvalidData("missing column".to_string());
        assert_eq!(error.to_string(), "Invalid data: missing column");
    }

    #[test]
    fn test_repository_error_not_configured_display() {
        let error = RepositoryError::NotConfigured("ITEMS_TABLE_NAME");
        assert_eq!(
            error.to_string(),
            "Storage not configured: ITEMS_TABLE_NAME"
        );
    }
}

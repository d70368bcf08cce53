//! PostgreSQL error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` from `stowage_core::storage`.

use stowage_core::storage::RepositoryError;

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - I/O, TLS, pool and configuration errors → `RepositoryError::ConnectionFailed`
/// - Decoding errors → `RepositoryError::Serialization`
/// - Missing rows → `RepositoryError::InvalidData`
/// - All other errors → `RepositoryError::QueryFailed`
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Configuration(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed(err.to_string()),

        sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_) => RepositoryError::Serialization(err.to_string()),

        sqlx::Error::RowNotFound => {
            RepositoryError::InvalidData("Statement returned no rows".to_string())
        }

        sqlx::Error::Database(db_err) => RepositoryError::QueryFailed(db_err.message().to_string()),

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

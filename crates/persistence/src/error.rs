//! Storage error taxonomy.
//!
//! Errors are surfaced from the database layer and propagated to the caller
//! unmodified; no variant is recoverable within a single operation.

use thiserror::Error;

// PostgreSQL SQLSTATE codes for the constraint classes this schema can raise.
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

#[derive(Debug, Error)]
pub enum StoreError {
    /// Duplicate email or phone number on insert.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// Phone insert referencing a nonexistent client, or client delete
    /// blocked by a dependent phone row.
    #[error("referential integrity violated: {0}")]
    ForeignKeyViolation(String),

    /// Phone number exceeding the permitted magnitude.
    #[error("check constraint violated: {0}")]
    CheckViolation(String),

    /// Underlying connection unusable.
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// Any other database failure, passed through unmodified.
    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let message = db_err.message().to_string();
                match db_err.code().as_deref() {
                    Some(UNIQUE_VIOLATION) => StoreError::UniqueViolation(message),
                    Some(FOREIGN_KEY_VIOLATION) => StoreError::ForeignKeyViolation(message),
                    Some(CHECK_VIOLATION) => StoreError::CheckViolation(message),
                    _ => StoreError::Database(sqlx::Error::Database(db_err)),
                }
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => StoreError::Connection(err),
            _ => StoreError::Database(err),
        }
    }
}

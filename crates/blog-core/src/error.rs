//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    /// A unique column already holds `value`. Nothing was written.
    #[error("Duplicate value for unique field {field}: {value}")]
    DuplicateKey { field: &'static str, value: String },
}

use bigdecimal::BigDecimal;
use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Insufficient stock: available {available}, requested {requested}")]
    InsufficientStock {
        available: BigDecimal,
        requested: BigDecimal,
    },

    #[error("Custom: {0}")]
    Custom(String),
}

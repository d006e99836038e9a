// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Domain-layer specific errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid size {size}: must be between {min} and {max}")]
    InvalidSize { size: i64, min: i64, max: i64 },

    #[error("File '{name}' is read-only")]
    ReadOnly { name: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

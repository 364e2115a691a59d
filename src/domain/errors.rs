// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// A business-rule violation detected while constructing or updating an
    /// entity. The message is user-facing and surfaced verbatim.
    #[error("{0}")]
    Validation(String),
    /// An identity value object built from an out-of-range raw value. Unlike
    /// `Validation`, callers treat this as an internal fault, not user input,
    /// so the rendering carries a prefix for the logs.
    #[error("invalid identity: {0}")]
    InvalidIdentity(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

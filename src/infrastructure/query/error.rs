use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Placeholder {0} is bound more than once")]
    DuplicatePlaceholder(String),

    #[error("Invalid SQL identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Placeholders do not match parameters (missing: {missing:?}, unused: {unused:?})")]
    PlaceholderMismatch {
        missing: Vec<String>,
        unused: Vec<String>,
    },

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::infrastructure::query::{QueryError, Statement};
#[cfg(test)]
use mockall::{automock, predicate::*};

/// One result row, keyed by the column alias.
pub type Record = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Error)]
pub enum CursorError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Unexpected result: {0}")]
    UnexpectedResult(String),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Port for running assembled statements on a blocking connection
#[cfg_attr(test, automock)]
pub trait Cursor: Send {
    /// First row of the result, if any
    fn fetch_one(&mut self, statement: &Statement) -> Result<Option<Record>, CursorError>;

    /// Every row of the result
    fn fetch_all(&mut self, statement: &Statement) -> Result<Vec<Record>, CursorError>;

    /// Rows affected
    fn execute(&mut self, statement: &Statement) -> Result<u64, CursorError>;

    /// Runs every statement in one transaction; nothing is kept if one fails
    fn execute_atomic(&mut self, statements: &[Statement]) -> Result<u64, CursorError>;
}

/// Port for running assembled statements on an async connection
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AsyncCursor: Send {
    /// First row of the result, if any
    async fn fetch_one(&mut self, statement: &Statement) -> Result<Option<Record>, CursorError>;

    /// Every row of the result
    async fn fetch_all(&mut self, statement: &Statement) -> Result<Vec<Record>, CursorError>;

    /// Rows affected
    async fn execute(&mut self, statement: &Statement) -> Result<u64, CursorError>;

    /// Runs every statement in one transaction; nothing is kept if one fails
    async fn execute_atomic(&mut self, statements: &[Statement]) -> Result<u64, CursorError>;
}

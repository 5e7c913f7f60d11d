use tokio::runtime::{Builder, Runtime};

use super::pg_cursor::PgCursor;
use super::pool::connect;
use crate::application::ports::{AsyncCursor, Cursor, CursorError, Record};
use crate::config::Config;
use crate::infrastructure::query::Statement;

/// [`Cursor`] that drives a [`PgCursor`] on its own current-thread runtime.
///
/// Must not be used from inside another tokio runtime.
pub struct BlockingPgCursor {
    runtime: Runtime,
    inner: PgCursor,
}

impl BlockingPgCursor {
    pub fn connect(config: &Config) -> Result<Self, CursorError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| CursorError::Runtime(e.to_string()))?;
        let pool = runtime.block_on(connect(config))?;
        Ok(Self {
            runtime,
            inner: PgCursor::new(pool),
        })
    }
}

impl Cursor for BlockingPgCursor {
    fn fetch_one(&mut self, statement: &Statement) -> Result<Option<Record>, CursorError> {
        self.runtime.block_on(self.inner.fetch_one(statement))
    }

    fn fetch_all(&mut self, statement: &Statement) -> Result<Vec<Record>, CursorError> {
        self.runtime.block_on(self.inner.fetch_all(statement))
    }

    fn execute(&mut self, statement: &Statement) -> Result<u64, CursorError> {
        self.runtime.block_on(self.inner.execute(statement))
    }

    fn execute_atomic(&mut self, statements: &[Statement]) -> Result<u64, CursorError> {
        self.runtime.block_on(self.inner.execute_atomic(statements))
    }
}

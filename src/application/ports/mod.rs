mod cursor;

pub use cursor::{AsyncCursor, Cursor, CursorError, Record};

#[cfg(test)]
pub use cursor::{MockAsyncCursor, MockCursor};

mod blocking_cursor;
mod pg_cursor;
mod pool;
mod record;

pub use blocking_cursor::BlockingPgCursor;
pub use pg_cursor::PgCursor;
pub use pool::connect;
pub use record::row_to_record;

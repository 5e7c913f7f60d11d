use crate::application::ports::{Cursor, CursorError};
use crate::application::rows::{field, returning_id};
use crate::infrastructure::query::geneset_value;

pub fn insert_file(
    cursor: &mut (impl Cursor + ?Sized),
    contents: &str,
    comments: &str,
) -> Result<i64, CursorError> {
    returning_id(
        cursor.fetch_one(&geneset_value::insert_file(contents, comments)?)?,
        "file_id",
    )
}

/// File contents, or an empty string when the file does not exist.
pub fn get_file(cursor: &mut (impl Cursor + ?Sized), file_id: i64) -> Result<String, CursorError> {
    let record = cursor.fetch_one(&geneset_value::get_file(file_id)?)?;
    Ok(field(record.as_ref(), "file_contents")?.unwrap_or_default())
}

pub fn insert_geneset_value(
    cursor: &mut (impl Cursor + ?Sized),
    geneset_id: i64,
    gene_id: i64,
    value: f64,
    gene_name: &str,
    within_threshold: bool,
) -> Result<i64, CursorError> {
    let statement = geneset_value::insert_geneset_value(
        geneset_id,
        gene_id,
        value,
        gene_name,
        within_threshold,
    )?;
    returning_id(cursor.fetch_one(&statement)?, "gs_id")
}

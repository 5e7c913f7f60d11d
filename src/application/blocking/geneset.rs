use crate::application::ports::{Cursor, CursorError, Record};
use crate::application::rows::{column, count, field, flag, returning_id};
use crate::domain::value_objects::{GeneValue, GenesetTier, WireCode};
use crate::infrastructure::query::geneset::{self, GenesetQuery, NewGeneset};

pub fn get(
    cursor: &mut (impl Cursor + ?Sized),
    query: &GenesetQuery,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&geneset::get(query)?)
}

pub fn by_project_id(
    cursor: &mut (impl Cursor + ?Sized),
    project_id: i64,
    limit: Option<i64>,
    offset: Option<i64>,
    is_readable_by: Option<i64>,
    with_publication_info: bool,
) -> Result<Vec<Record>, CursorError> {
    let statement = geneset::by_project_id(
        project_id,
        limit,
        offset,
        is_readable_by,
        with_publication_info,
    )?;
    cursor.fetch_all(&statement)
}

pub fn shared_with_user(
    cursor: &mut (impl Cursor + ?Sized),
    user_id: i64,
    limit: Option<i64>,
    offset: Option<i64>,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&geneset::shared_with_user(user_id, limit, offset)?)
}

/// Inserts the geneset row and returns its id.
pub fn add(
    cursor: &mut (impl Cursor + ?Sized),
    new_geneset: &NewGeneset,
) -> Result<i64, CursorError> {
    returning_id(cursor.fetch_one(&geneset::add(new_geneset)?)?, "gs_id")
}

pub fn add_geneset_file(
    cursor: &mut (impl Cursor + ?Sized),
    values: &[GeneValue],
    comments: &str,
) -> Result<i64, CursorError> {
    returning_id(
        cursor.fetch_one(&geneset::add_geneset_file(values, comments)?)?,
        "file_id",
    )
}

pub fn reparse_geneset_file(
    cursor: &mut (impl Cursor + ?Sized),
    geneset_id: i64,
) -> Result<u64, CursorError> {
    cursor.execute(&geneset::reparse_geneset_file(geneset_id)?)
}

pub fn process_thresholds(
    cursor: &mut (impl Cursor + ?Sized),
    geneset_id: i64,
) -> Result<u64, CursorError> {
    cursor.execute(&geneset::process_thresholds(geneset_id)?)
}

pub fn is_readable(
    cursor: &mut (impl Cursor + ?Sized),
    user_id: i64,
    geneset_id: i64,
) -> Result<bool, CursorError> {
    flag(cursor.fetch_one(&geneset::is_readable(user_id, geneset_id)?)?, "is_readable")
}

pub fn user_is_owner(
    cursor: &mut (impl Cursor + ?Sized),
    user_id: i64,
    geneset_id: i64,
) -> Result<bool, CursorError> {
    Ok(count(cursor.fetch_one(&geneset::user_is_owner(user_id, geneset_id)?)?, "count")? > 0)
}

/// Touches `gs_updated` and returns the new timestamp.
pub fn update_date(
    cursor: &mut (impl Cursor + ?Sized),
    geneset_id: i64,
) -> Result<Option<String>, CursorError> {
    let record = cursor.fetch_one(&geneset::update_date(geneset_id)?)?;
    field(record.as_ref(), "gs_updated")
}

pub fn tier(
    cursor: &mut (impl Cursor + ?Sized),
    geneset_id: i64,
) -> Result<Option<GenesetTier>, CursorError> {
    let record = cursor.fetch_one(&geneset::tier(geneset_id)?)?;
    match field::<i64>(record.as_ref(), "cur_id")? {
        Some(code) => Ok(Some(GenesetTier::from_code(code)?)),
        None => Ok(None),
    }
}

pub fn homology_ids(
    cursor: &mut (impl Cursor + ?Sized),
    geneset_id: i64,
) -> Result<Vec<i64>, CursorError> {
    column(&cursor.fetch_all(&geneset::homology_ids(geneset_id)?)?, "hom_id")
}

pub fn num_genes(cursor: &mut (impl Cursor + ?Sized), geneset_id: i64) -> Result<i64, CursorError> {
    count(cursor.fetch_one(&geneset::num_genes(geneset_id)?)?, "count")
}

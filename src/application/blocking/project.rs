use crate::application::ports::{Cursor, CursorError, Record};
use crate::application::rows::returning_id;
use crate::infrastructure::query::project::{self, ProjectQuery};

pub fn get(
    cursor: &mut (impl Cursor + ?Sized),
    query: &ProjectQuery,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&project::get(query)?)
}

pub fn shared_with_user(
    cursor: &mut (impl Cursor + ?Sized),
    user_id: i64,
    limit: Option<i64>,
    offset: Option<i64>,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&project::shared_with_user(user_id, limit, offset)?)
}

pub fn add(
    cursor: &mut (impl Cursor + ?Sized),
    user_id: i64,
    name: &str,
    notes: Option<&str>,
    starred: bool,
) -> Result<i64, CursorError> {
    returning_id(
        cursor.fetch_one(&project::add(user_id, name, notes, starred)?)?,
        "pj_id",
    )
}

/// The `(pj_id, gs_id)` row that was inserted.
pub fn insert_geneset_to_project(
    cursor: &mut (impl Cursor + ?Sized),
    project_id: i64,
    geneset_id: i64,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&project::insert_geneset_to_project(project_id, geneset_id)?)
}

/// The removed row, or `None` if the geneset was not in the project.
pub fn remove_geneset_from_project(
    cursor: &mut (impl Cursor + ?Sized),
    project_id: i64,
    geneset_id: i64,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&project::remove_geneset_from_project(project_id, geneset_id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockCursor;

    #[test]
    fn test_remove_missing_membership() {
        let mut cursor = MockCursor::new();
        cursor
            .expect_fetch_one()
            .times(1)
            .withf(|statement| statement.sql().starts_with("DELETE FROM project2geneset"))
            .returning(|_| Ok(None));
        assert_eq!(
            remove_geneset_from_project(&mut cursor, 1, 2).unwrap(),
            None
        );
    }
}

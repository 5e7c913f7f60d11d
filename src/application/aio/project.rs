use crate::application::ports::{AsyncCursor, CursorError, Record};
use crate::application::rows::returning_id;
use crate::infrastructure::query::project::{self, ProjectQuery};

pub async fn get(
    cursor: &mut (impl AsyncCursor + ?Sized),
    query: &ProjectQuery,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&project::get(query)?).await
}

pub async fn shared_with_user(
    cursor: &mut (impl AsyncCursor + ?Sized),
    user_id: i64,
    limit: Option<i64>,
    offset: Option<i64>,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&project::shared_with_user(user_id, limit, offset)?).await
}

pub async fn add(
    cursor: &mut (impl AsyncCursor + ?Sized),
    user_id: i64,
    name: &str,
    notes: Option<&str>,
    starred: bool,
) -> Result<i64, CursorError> {
    returning_id(
        cursor.fetch_one(&project::add(user_id, name, notes, starred)?).await?,
        "pj_id",
    )
}

/// The `(pj_id, gs_id)` row that was inserted.
pub async fn insert_geneset_to_project(
    cursor: &mut (impl AsyncCursor + ?Sized),
    project_id: i64,
    geneset_id: i64,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&project::insert_geneset_to_project(project_id, geneset_id)?).await
}

/// The removed row, or `None` if the geneset was not in the project.
pub async fn remove_geneset_from_project(
    cursor: &mut (impl AsyncCursor + ?Sized),
    project_id: i64,
    geneset_id: i64,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&project::remove_geneset_from_project(project_id, geneset_id)?).await
}

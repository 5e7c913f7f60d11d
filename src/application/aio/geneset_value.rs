use crate::application::ports::{AsyncCursor, CursorError};
use crate::application::rows::{field, returning_id};
use crate::infrastructure::query::geneset_value;

pub async fn insert_file(
    cursor: &mut (impl AsyncCursor + ?Sized),
    contents: &str,
    comments: &str,
) -> Result<i64, CursorError> {
    returning_id(
        cursor.fetch_one(&geneset_value::insert_file(contents, comments)?).await?,
        "file_id",
    )
}

/// File contents, or an empty string when the file does not exist.
pub async fn get_file(
    cursor: &mut (impl AsyncCursor + ?Sized),
    file_id: i64,
) -> Result<String, CursorError> {
    let record = cursor.fetch_one(&geneset_value::get_file(file_id)?).await?;
    Ok(field(record.as_ref(), "file_contents")?.unwrap_or_default())
}

pub async fn insert_geneset_value(
    cursor: &mut (impl AsyncCursor + ?Sized),
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
    returning_id(cursor.fetch_one(&statement).await?, "gs_id")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockAsyncCursor;
    use crate::domain::errors::DomainError;
    use crate::infrastructure::query::QueryError;

    #[tokio::test]
    async fn test_get_file_missing_is_empty() {
        let mut cursor = MockAsyncCursor::new();
        cursor.expect_fetch_one().times(1).returning(|_| Ok(None));
        assert_eq!(get_file(&mut cursor, 3).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_insert_empty_file_is_rejected() {
        let mut cursor = MockAsyncCursor::new();
        cursor.expect_fetch_one().never();
        assert!(matches!(
            insert_file(&mut cursor, "", "").await,
            Err(CursorError::Query(QueryError::Domain(DomainError::EmptyGenesetFile)))
        ));
    }
}

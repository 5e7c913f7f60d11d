use crate::application::ports::{AsyncCursor, CursorError};
use crate::application::rows::flag;
use crate::domain::value_objects::GenesetScoreType;
use crate::infrastructure::query::threshold;

/// Updates the geneset threshold and recomputes member values in one
/// transaction. Returns the total rows affected.
pub async fn set_geneset_threshold(
    cursor: &mut (impl AsyncCursor + ?Sized),
    geneset_id: i64,
    score: &GenesetScoreType,
) -> Result<u64, CursorError> {
    let statements = threshold::set_threshold(geneset_id, score)?;
    let affected = cursor.execute_atomic(&statements).await?;
    tracing::info!(geneset_id, affected, "Geneset threshold updated");
    Ok(affected)
}

pub async fn user_can_set_threshold(
    cursor: &mut (impl AsyncCursor + ?Sized),
    user_id: i64,
    geneset_id: i64,
) -> Result<bool, CursorError> {
    flag(
        cursor.fetch_one(&threshold::user_can_set_threshold(user_id, geneset_id)?).await?,
        "can_set",
    )
}

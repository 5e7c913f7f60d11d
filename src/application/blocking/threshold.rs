use crate::application::ports::{Cursor, CursorError};
use crate::application::rows::flag;
use crate::domain::value_objects::GenesetScoreType;
use crate::infrastructure::query::threshold;

/// Updates the geneset threshold and recomputes member values in one
/// transaction. Returns the total rows affected.
pub fn set_geneset_threshold(
    cursor: &mut (impl Cursor + ?Sized),
    geneset_id: i64,
    score: &GenesetScoreType,
) -> Result<u64, CursorError> {
    let statements = threshold::set_threshold(geneset_id, score)?;
    let affected = cursor.execute_atomic(&statements)?;
    tracing::info!(geneset_id, affected, "Geneset threshold updated");
    Ok(affected)
}

pub fn user_can_set_threshold(
    cursor: &mut (impl Cursor + ?Sized),
    user_id: i64,
    geneset_id: i64,
) -> Result<bool, CursorError> {
    flag(
        cursor.fetch_one(&threshold::user_can_set_threshold(user_id, geneset_id)?)?,
        "can_set",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockCursor;
    use crate::domain::errors::DomainError;
    use crate::domain::value_objects::ScoreType;
    use crate::infrastructure::query::QueryError;

    #[test]
    fn test_set_threshold_is_atomic() {
        let mut cursor = MockCursor::new();
        cursor.expect_execute().never();
        cursor
            .expect_execute_atomic()
            .times(1)
            .withf(|statements| {
                statements.len() == 2
                    && statements[0].sql().starts_with("UPDATE geneset SET")
                    && statements[1].sql().starts_with("UPDATE geneset_value SET")
            })
            .returning(|_| Ok(31));

        let score = GenesetScoreType::new(ScoreType::PValue, 0.05);
        assert_eq!(set_geneset_threshold(&mut cursor, 5, &score).unwrap(), 31);
    }

    #[test]
    fn test_invalid_threshold_touches_nothing() {
        let mut cursor = MockCursor::new();
        cursor.expect_execute_atomic().never();
        let score = GenesetScoreType::new(ScoreType::Effect, 1.0).with_low(2.0);
        assert!(matches!(
            set_geneset_threshold(&mut cursor, 5, &score),
            Err(CursorError::Query(QueryError::Domain(DomainError::ThresholdOrder { .. })))
        ));
    }
}

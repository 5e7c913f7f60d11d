use crate::application::ports::{AsyncCursor, CursorError, Record};
use crate::domain::value_objects::Species;
use crate::infrastructure::query::species::{self, SpeciesQuery};

pub async fn get(
    cursor: &mut (impl AsyncCursor + ?Sized),
    query: &SpeciesQuery,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&species::get(query)?).await
}

pub async fn get_by_id(
    cursor: &mut (impl AsyncCursor + ?Sized),
    species: Species,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&species::get_by_id(species)?).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockAsyncCursor;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_by_id_fetches_one_row() {
        let mut cursor = MockAsyncCursor::new();
        cursor
            .expect_fetch_one()
            .times(1)
            .withf(|statement| statement.sql().ends_with("WHERE species.sp_id = %(species_id)s"))
            .returning(|_| Ok(json!({"name": "Mus musculus"}).as_object().cloned()));

        let row = get_by_id(&mut cursor, Species::MusMusculus).await.unwrap();
        assert_eq!(
            row.map(|row| row["name"].clone()),
            Some(json!("Mus musculus"))
        );
    }
}

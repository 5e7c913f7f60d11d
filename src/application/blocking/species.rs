use crate::application::ports::{Cursor, CursorError, Record};
use crate::domain::value_objects::Species;
use crate::infrastructure::query::species::{self, SpeciesQuery};

pub fn get(
    cursor: &mut (impl Cursor + ?Sized),
    query: &SpeciesQuery,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&species::get(query)?)
}

pub fn get_by_id(
    cursor: &mut (impl Cursor + ?Sized),
    species: Species,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&species::get_by_id(species)?)
}

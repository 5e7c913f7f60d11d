use crate::application::ports::{Cursor, CursorError, Record};
use crate::infrastructure::query::geneset_search::{self, GenesetSearch};

pub fn genesets(
    cursor: &mut (impl Cursor + ?Sized),
    search: &GenesetSearch,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&geneset_search::genesets(search)?)
}

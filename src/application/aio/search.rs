use crate::application::ports::{AsyncCursor, CursorError, Record};
use crate::infrastructure::query::geneset_search::{self, GenesetSearch};

pub async fn genesets(
    cursor: &mut (impl AsyncCursor + ?Sized),
    search: &GenesetSearch,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&geneset_search::genesets(search)?).await
}

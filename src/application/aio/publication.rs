use crate::application::ports::{AsyncCursor, CursorError, Record};
use crate::application::rows::returning_id;
use crate::infrastructure::query::publication::{self, PublicationInfo, PublicationQuery};

pub async fn get(
    cursor: &mut (impl AsyncCursor + ?Sized),
    query: &PublicationQuery,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&publication::get(query)?).await
}

pub async fn by_id(
    cursor: &mut (impl AsyncCursor + ?Sized),
    pub_id: i64,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&publication::by_id(pub_id)?).await
}

pub async fn by_geneset_id(
    cursor: &mut (impl AsyncCursor + ?Sized),
    geneset_id: i64,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&publication::by_geneset_id(geneset_id)?).await
}

pub async fn by_pubmed_id(
    cursor: &mut (impl AsyncCursor + ?Sized),
    pubmed_id: i64,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&publication::by_pubmed_id(pubmed_id)?).await
}

pub async fn by_pubmed_ids(
    cursor: &mut (impl AsyncCursor + ?Sized),
    pubmed_ids: &[i64],
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&publication::by_pubmed_ids(pubmed_ids)?).await
}

pub async fn add(
    cursor: &mut (impl AsyncCursor + ?Sized),
    info: &PublicationInfo,
) -> Result<i64, CursorError> {
    returning_id(cursor.fetch_one(&publication::add(info)?).await?, "pub_id")
}

use crate::application::ports::{Cursor, CursorError, Record};
use crate::application::rows::returning_id;
use crate::infrastructure::query::publication::{self, PublicationInfo, PublicationQuery};

pub fn get(
    cursor: &mut (impl Cursor + ?Sized),
    query: &PublicationQuery,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&publication::get(query)?)
}

pub fn by_id(
    cursor: &mut (impl Cursor + ?Sized),
    pub_id: i64,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&publication::by_id(pub_id)?)
}

pub fn by_geneset_id(
    cursor: &mut (impl Cursor + ?Sized),
    geneset_id: i64,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&publication::by_geneset_id(geneset_id)?)
}

pub fn by_pubmed_id(
    cursor: &mut (impl Cursor + ?Sized),
    pubmed_id: i64,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&publication::by_pubmed_id(pubmed_id)?)
}

pub fn by_pubmed_ids(
    cursor: &mut (impl Cursor + ?Sized),
    pubmed_ids: &[i64],
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&publication::by_pubmed_ids(pubmed_ids)?)
}

pub fn add(
    cursor: &mut (impl Cursor + ?Sized),
    info: &PublicationInfo,
) -> Result<i64, CursorError> {
    returning_id(cursor.fetch_one(&publication::add(info)?)?, "pub_id")
}

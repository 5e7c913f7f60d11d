use crate::application::ports::{AsyncCursor, CursorError, Record};
use crate::infrastructure::query::ontology;

pub async fn by_geneset(
    cursor: &mut (impl AsyncCursor + ?Sized),
    geneset_id: i64,
    limit: Option<i64>,
    offset: Option<i64>,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&ontology::by_geneset(geneset_id, limit, offset)?).await
}

pub async fn by_ontology_term(
    cursor: &mut (impl AsyncCursor + ?Sized),
    ontology_ref_term_id: &str,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&ontology::by_ontology_term(ontology_ref_term_id)?).await
}

pub async fn by_ontology_db(
    cursor: &mut (impl AsyncCursor + ?Sized),
    ontology_db_id: i64,
    limit: Option<i64>,
    offset: Option<i64>,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&ontology::by_ontology_db(ontology_db_id, limit, offset)?).await
}

pub async fn get_ontology_dbs(
    cursor: &mut (impl AsyncCursor + ?Sized),
    ontology_db_id: Option<i64>,
    limit: Option<i64>,
    offset: Option<i64>,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&ontology::get_ontology_dbs(ontology_db_id, limit, offset)?).await
}

pub async fn insert_geneset_ontology_term_association(
    cursor: &mut (impl AsyncCursor + ?Sized),
    geneset_id: i64,
    ontology_term_id: i64,
    gso_ref_type: &str,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&ontology::insert_geneset_ontology_term_association(
        geneset_id,
        ontology_term_id,
        gso_ref_type,
    )?).await
}

pub async fn delete_geneset_ontology_term_association(
    cursor: &mut (impl AsyncCursor + ?Sized),
    geneset_id: i64,
    ontology_term_id: i64,
    gso_ref_type: &str,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&ontology::delete_geneset_ontology_term_association(
        geneset_id,
        ontology_term_id,
        gso_ref_type,
    )?).await
}

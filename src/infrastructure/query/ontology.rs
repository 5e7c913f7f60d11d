//! Ontology terms, ontology databases and geneset annotations.

use super::error::QueryError;
use super::filters::{FilterSpec, Predicates};
use super::pagination::limit_and_offset;
use super::select::{JoinKind, SelectQuery};
use super::statement::{Params, SqlValue, Statement};

const ONTOLOGY_TERM_FIELDS: [&str; 5] = [
    "ontology.ont_id AS onto_id",
    "ontology.ont_ref_id AS onto_ref_term_id",
    "ontology.ont_name AS name",
    "ontology.ont_description AS description",
    "ontologydb.ontdb_name AS source_ontology",
];

const ONTOLOGY_DB_FIELDS: [&str; 4] = [
    "ontologydb.ontdb_id AS ontology_db_id",
    "ontologydb.ontdb_name AS name",
    "ontologydb.ontdb_prefix AS prefix",
    "ontologydb.ontdb_url AS url",
];

const ADD_ANNOTATION: &str = "INSERT INTO geneset_ontology (gs_id, ont_id, gso_ref_type) \
    VALUES (%(geneset_id)s, %(ontology_term_id)s, %(gso_ref_type)s) \
    RETURNING gs_id, ont_id, gso_ref_type";

const DELETE_ANNOTATION: &str = "DELETE FROM geneset_ontology \
    WHERE gs_id = %(geneset_id)s AND ont_id = %(ontology_term_id)s \
    AND gso_ref_type = %(gso_ref_type)s \
    RETURNING gs_id, ont_id, gso_ref_type";

fn term_query() -> SelectQuery {
    SelectQuery::from_table("ontology")
        .columns(ONTOLOGY_TERM_FIELDS)
        .join(JoinKind::Inner, "ontologydb", "ontology.ontdb_id = ontologydb.ontdb_id")
}

/// Ontology terms annotated to a geneset.
pub fn by_geneset(
    geneset_id: i64,
    limit: Option<i64>,
    offset: Option<i64>,
) -> Result<Statement, QueryError> {
    let select = SelectQuery::from_table("geneset_ontology")
        .columns([
            "geneset_ontology.gs_id AS geneset_id",
            "ontology.ont_ref_id AS ontology_id",
            "ontology.ont_name AS name",
            "ontology.ont_description AS description",
            "ontologydb.ontdb_name AS source_ontology",
        ])
        .join(JoinKind::Inner, "ontology", "geneset_ontology.ont_id = ontology.ont_id")
        .join(JoinKind::Inner, "ontologydb", "ontology.ontdb_id = ontologydb.ontdb_id");
    let predicates = Predicates::new().construct_filter(
        FilterSpec::eq("gs_id", Some(geneset_id.into())),
        Some("geneset_ontology"),
    )?;

    limit_and_offset(select, limit, offset).build(predicates)
}

pub fn by_ontology_term(ontology_ref_term_id: &str) -> Result<Statement, QueryError> {
    let predicates = Predicates::new().construct_filter(
        FilterSpec::eq("ont_ref_id", Some(ontology_ref_term_id.into()))
            .placeholder("ontology_ref_term_id"),
        Some("ontology"),
    )?;
    term_query().build(predicates)
}

/// Terms belonging to one ontology database.
pub fn by_ontology_db(
    ontology_db_id: i64,
    limit: Option<i64>,
    offset: Option<i64>,
) -> Result<Statement, QueryError> {
    let predicates = Predicates::new().construct_filter(
        FilterSpec::eq("ontdb_id", Some(ontology_db_id.into())).placeholder("ontology_db_id"),
        Some("ontologydb"),
    )?;
    limit_and_offset(term_query(), limit, offset).build(predicates)
}

/// Every ontology database, or only `ontology_db_id`.
pub fn get_ontology_dbs(
    ontology_db_id: Option<i64>,
    limit: Option<i64>,
    offset: Option<i64>,
) -> Result<Statement, QueryError> {
    let select = SelectQuery::from_table("ontologydb").columns(ONTOLOGY_DB_FIELDS);
    let predicates = Predicates::new().construct_filter(
        FilterSpec::eq("ontdb_id", ontology_db_id.map(SqlValue::from))
            .placeholder("ontology_db_id"),
        Some("ontologydb"),
    )?;
    limit_and_offset(select, limit, offset).build(predicates)
}

pub fn insert_geneset_ontology_term_association(
    geneset_id: i64,
    ontology_term_id: i64,
    gso_ref_type: &str,
) -> Result<Statement, QueryError> {
    Statement::new(ADD_ANNOTATION, annotation(geneset_id, ontology_term_id, gso_ref_type)?)
}

pub fn delete_geneset_ontology_term_association(
    geneset_id: i64,
    ontology_term_id: i64,
    gso_ref_type: &str,
) -> Result<Statement, QueryError> {
    Statement::new(DELETE_ANNOTATION, annotation(geneset_id, ontology_term_id, gso_ref_type)?)
}

fn annotation(
    geneset_id: i64,
    ontology_term_id: i64,
    gso_ref_type: &str,
) -> Result<Params, QueryError> {
    Params::new()
        .with("geneset_id", geneset_id)?
        .with("ontology_term_id", ontology_term_id)?
        .with("gso_ref_type", gso_ref_type)
}

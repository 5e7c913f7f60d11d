//! Project reads and membership changes.

use super::error::QueryError;
use super::fields::PROJECT_FIELDS;
use super::filters::{FilterSpec, Predicates};
use super::pagination::limit_and_offset;
use super::select::SelectQuery;
use super::statement::{Params, SqlValue, Statement};

pub const PROJECT_TSVECTOR: &str = "project.pj_tsvector";

const INSERT_PROJECT: &str = "INSERT INTO project (usr_id, pj_name, pj_notes, pj_star, pj_created) \
    VALUES (%(user_id)s, %(name)s, %(notes)s, %(starred)s, NOW()) \
    RETURNING pj_id";

const ADD_GENESET: &str = "INSERT INTO project2geneset (pj_id, gs_id) \
    VALUES (%(project_id)s, %(geneset_id)s) \
    RETURNING pj_id, gs_id";

const DELETE_GENESET: &str = "DELETE FROM project2geneset \
    WHERE pj_id = %(project_id)s AND gs_id = %(geneset_id)s \
    RETURNING pj_id, gs_id";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectQuery {
    pub project_id: Option<i64>,
    pub owner_id: Option<i64>,
    pub name: Option<String>,
    pub starred: Option<bool>,
    pub search_text: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub fn get(query: &ProjectQuery) -> Result<Statement, QueryError> {
    let select = SelectQuery::from_table("project").columns(PROJECT_FIELDS.iter().cloned());
    let predicates = Predicates::new()
        .search(PROJECT_TSVECTOR, query.search_text.as_deref())?
        .construct_op_filters(
            [
                FilterSpec::eq("pj_id", query.project_id.map(SqlValue::from))
                    .placeholder("project_id"),
                FilterSpec::eq("usr_id", query.owner_id.map(SqlValue::from))
                    .placeholder("owner_id"),
                FilterSpec::eq("pj_name", query.name.clone().map(SqlValue::from))
                    .placeholder("name"),
                FilterSpec::eq("pj_star", query.starred.map(SqlValue::from)).placeholder("starred"),
            ],
            Some("project"),
        )?;

    limit_and_offset(select, query.limit, query.offset).build(predicates)
}

pub fn shared_with_user(
    _user_id: i64,
    _limit: Option<i64>,
    _offset: Option<i64>,
) -> Result<Statement, QueryError> {
    Err(QueryError::NotImplemented("project::shared_with_user"))
}

pub fn add(
    user_id: i64,
    name: &str,
    notes: Option<&str>,
    starred: bool,
) -> Result<Statement, QueryError> {
    let params = Params::new()
        .with("user_id", user_id)?
        .with("name", name)?
        .with("notes", notes)?
        .with("starred", starred)?;
    Statement::new(INSERT_PROJECT, params)
}

pub fn insert_geneset_to_project(
    project_id: i64,
    geneset_id: i64,
) -> Result<Statement, QueryError> {
    Statement::new(ADD_GENESET, membership(project_id, geneset_id)?)
}

pub fn remove_geneset_from_project(
    project_id: i64,
    geneset_id: i64,
) -> Result<Statement, QueryError> {
    Statement::new(DELETE_GENESET, membership(project_id, geneset_id)?)
}

fn membership(project_id: i64, geneset_id: i64) -> Result<Params, QueryError> {
    Params::new()
        .with("project_id", project_id)?
        .with("geneset_id", geneset_id)
}

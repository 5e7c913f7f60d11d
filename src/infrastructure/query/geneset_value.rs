//! Geneset files and per-gene values.

use super::error::QueryError;
use super::geneset::add_geneset_file_raw;
use super::statement::{Params, Statement};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::GeneValue;

const INSERT_VALUE: &str = "INSERT INTO geneset_value \
    (gs_id, ode_gene_id, gsv_value, gsv_source_list, gsv_value_list, gsv_in_threshold, \
    gsv_hits, gsv_date) \
    VALUES (%(geneset_id)s, %(gene_id)s, %(value)s, %(source_list)s, %(value_list)s, \
    %(within_threshold)s, 0, NOW()) \
    RETURNING gs_id";

/// Tab separated `symbol\tvalue` lines, newline joined.
pub fn format_geneset_values_for_file_insert(values: &[GeneValue]) -> String {
    values
        .iter()
        .map(GeneValue::file_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn insert_file(contents: &str, comments: &str) -> Result<Statement, QueryError> {
    if contents.is_empty() {
        return Err(DomainError::EmptyGenesetFile.into());
    }
    add_geneset_file_raw(contents.chars().count() as i64, contents, comments)
}

pub fn get_file(file_id: i64) -> Result<Statement, QueryError> {
    Statement::new(
        "SELECT file_contents FROM file WHERE file_id = %(file_id)s",
        Params::new().with("file_id", file_id)?,
    )
}

/// One gene's value in a geneset. `gene_name` and `value` also seed the
/// single-element source and value lists.
pub fn insert_geneset_value(
    geneset_id: i64,
    gene_id: i64,
    value: f64,
    gene_name: &str,
    within_threshold: bool,
) -> Result<Statement, QueryError> {
    let params = Params::new()
        .with("geneset_id", geneset_id)?
        .with("gene_id", gene_id)?
        .with("value", value)?
        .with("source_list", vec![gene_name.to_string()])?
        .with("value_list", vec![value])?
        .with("within_threshold", within_threshold)?;
    Statement::new(INSERT_VALUE, params)
}

//! Cheap statements for health checks.

use super::error::QueryError;
use super::statement::{Params, Statement};

pub fn last_gene_identifier_update() -> Result<Statement, QueryError> {
    Statement::new(
        "SELECT gi_date FROM gene_info ORDER BY gi_date DESC LIMIT 1",
        Params::new(),
    )
}

pub fn gene_count() -> Result<Statement, QueryError> {
    Statement::new("SELECT count(*) AS count FROM genedb", Params::new())
}

pub fn geneset_count() -> Result<Statement, QueryError> {
    Statement::new("SELECT count(*) AS count FROM geneset", Params::new())
}

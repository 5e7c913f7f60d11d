//! Score threshold updates.
//!
//! The geneset row and its member values must change together; [`set_threshold`]
//! returns both statements so they can run in one transaction.

use super::error::QueryError;
use super::statement::{Params, Statement};
use super::user::{ASSIGNED_CURATION_CLAUSE, CURATOR_OR_HIGHER_CLAUSE};
use crate::domain::value_objects::{GenesetScoreType, WireCode};

pub fn set_geneset_threshold(
    geneset_id: i64,
    score: &GenesetScoreType,
) -> Result<Statement, QueryError> {
    score.validate()?;
    let params = Params::new()
        .with("geneset_id", geneset_id)?
        .with("score_type", score.score_type.code())?
        .with("threshold_str", score.threshold_as_db_string())?;
    Statement::new(
        "UPDATE geneset SET gs_threshold_type = %(score_type)s, gs_threshold = %(threshold_str)s \
         WHERE gs_id = %(geneset_id)s",
        params,
    )
}

/// Recomputes `gsv_in_threshold`. A low bound selects a BETWEEN range, otherwise
/// values strictly below the threshold are in.
pub fn set_geneset_value_threshold(
    geneset_id: i64,
    score: &GenesetScoreType,
) -> Result<Statement, QueryError> {
    score.validate()?;
    let mut params = Params::new()
        .with("geneset_id", geneset_id)?
        .with("threshold_high", score.threshold)?;

    let branch = match score.threshold_low {
        Some(low) => {
            params.insert("threshold_low", low)?;
            "WHEN gsv_value BETWEEN %(threshold_low)s AND %(threshold_high)s THEN TRUE"
        }
        None => "WHEN gsv_value < %(threshold_high)s THEN TRUE",
    };

    Statement::new(
        format!(
            "UPDATE geneset_value SET gsv_in_threshold = CASE {} ELSE FALSE END \
             WHERE gs_id = %(geneset_id)s",
            branch
        ),
        params,
    )
}

/// Both threshold statements, in execution order.
pub fn set_threshold(
    geneset_id: i64,
    score: &GenesetScoreType,
) -> Result<Vec<Statement>, QueryError> {
    Ok(vec![
        set_geneset_threshold(geneset_id, score)?,
        set_geneset_value_threshold(geneset_id, score)?,
    ])
}

/// Owners, curators, admins and assigned curators may set a threshold.
pub fn user_can_set_threshold(user_id: i64, geneset_id: i64) -> Result<Statement, QueryError> {
    let params = Params::new()
        .with("user_id", user_id)?
        .with("geneset_id", geneset_id)?;
    Statement::new(
        format!(
            "SELECT EXISTS(SELECT 1 FROM geneset g WHERE g.gs_id = %(geneset_id)s \
             AND (g.usr_id = %(user_id)s OR {} OR {})) AS can_set",
            CURATOR_OR_HIGHER_CLAUSE, ASSIGNED_CURATION_CLAUSE
        ),
        params,
    )
}

//! `column = ANY(array)` restrictions for single-or-set enum filters.

use super::error::QueryError;
use super::filters::Predicates;
use super::statement::{Identifier, Params, SqlValue};
use crate::domain::value_objects::{GenesetTier, OneOrMany, ScoreType, Species, WireCode};

impl Predicates {
    pub fn restrict_tier(self, tiers: Option<&OneOrMany<GenesetTier>>) -> Result<Self, QueryError> {
        self.restrict_set("geneset.cur_id", "curation_tier", tiers)
    }

    pub fn restrict_score_type(
        self,
        score_types: Option<&OneOrMany<ScoreType>>,
    ) -> Result<Self, QueryError> {
        self.restrict_set("geneset.gs_threshold_type", "score_type", score_types)
    }

    pub fn restrict_species(
        self,
        species: Option<&OneOrMany<Species>>,
    ) -> Result<Self, QueryError> {
        self.restrict_set("geneset.sp_id", "species", species)
    }

    /// Absent and empty sets both leave the query unrestricted.
    fn restrict_set<T: WireCode>(
        self,
        column: &str,
        placeholder: &str,
        members: Option<&OneOrMany<T>>,
    ) -> Result<Self, QueryError> {
        let Some(members) = members else {
            return Ok(self);
        };
        if members.is_empty() {
            tracing::debug!(kind = T::KIND, column, "Empty set restriction ignored");
            return Ok(self);
        }

        let column = Identifier::new(column)?;
        let params = Params::new().with(placeholder, SqlValue::IntArray(members.codes()))?;
        self.push(format!("{} = ANY(%({})s)", column, placeholder), params)
    }
}

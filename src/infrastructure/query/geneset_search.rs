//! Full text geneset search over the `geneset_search` materialized view.

use super::error::QueryError;
use super::filters::{FilterSpec, Predicates, RangeFilters};
use super::geneset::{format_select_query, is_readable_filter, DEFAULT_STATUS};
use super::pagination::limit_and_offset;
use super::select::JoinKind;
use super::statement::{SqlValue, Statement};
use crate::domain::value_objects::{GenesetTier, OneOrMany, ScoreType, Species};

pub const COMBINED_TSVECTOR: &str = "geneset_search._combined_tsvector";

pub const DEFAULT_LIMIT: i64 = 25;

#[derive(Debug, Clone, PartialEq)]
pub struct GenesetSearch {
    pub search_text: Option<String>,
    pub is_readable_by: Option<i64>,
    pub tier: Option<OneOrMany<GenesetTier>>,
    pub score_type: Option<OneOrMany<ScoreType>>,
    pub species: Option<OneOrMany<Species>>,
    pub ranges: RangeFilters,
    pub status: Option<String>,
    pub publication_id: Option<i64>,
    pub pubmed_id: Option<i64>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Default for GenesetSearch {
    fn default() -> Self {
        Self {
            search_text: None,
            is_readable_by: None,
            tier: None,
            score_type: None,
            species: None,
            ranges: RangeFilters::default(),
            status: Some(DEFAULT_STATUS.to_string()),
            publication_id: None,
            pubmed_id: None,
            limit: Some(DEFAULT_LIMIT),
            offset: Some(0),
        }
    }
}

pub fn genesets(search: &GenesetSearch) -> Result<Statement, QueryError> {
    let select = format_select_query(false, false).join(
        JoinKind::Inner,
        "geneset_search",
        "geneset_search.gs_id = geneset.gs_id",
    );

    let predicates = is_readable_filter(Predicates::new(), search.is_readable_by)?
        .search(COMBINED_TSVECTOR, search.search_text.as_deref())?
        .restrict_tier(search.tier.as_ref())?
        .restrict_score_type(search.score_type.as_ref())?
        .restrict_species(search.species.as_ref())?
        .add_op_filters(&search.ranges, Some("geneset"))?
        .construct_filter(
            FilterSpec::eq("gs_status", search.status.clone().map(SqlValue::from)),
            Some("geneset"),
        )?
        .construct_filters(
            [
                ("pub_id", search.publication_id.map(SqlValue::from)),
                (
                    "pub_pubmed",
                    search.pubmed_id.map(|id| SqlValue::Text(id.to_string())),
                ),
            ],
            Some("geneset_search"),
        )?;

    limit_and_offset(select, search.limit, search.offset).build(predicates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let statement = genesets(&GenesetSearch::default()).unwrap();
        assert!(statement
            .sql()
            .contains("JOIN geneset_search ON geneset_search.gs_id = geneset.gs_id"));
        assert!(statement
            .sql()
            .ends_with("WHERE geneset.gs_status = %(gs_status)s LIMIT 25 OFFSET 0"));
        assert_eq!(
            statement.params().get("gs_status"),
            Some(&SqlValue::Text("normal".into()))
        );
        assert!(!statement.sql().contains("JOIN publication"));
        assert!(!statement.sql().contains("publication.pub_"));
    }

    #[test]
    fn test_predicate_order() {
        let statement = genesets(&GenesetSearch {
            search_text: Some("alcohol".into()),
            is_readable_by: Some(8),
            species: Some(Species::MusMusculus.into()),
            ranges: RangeFilters {
                gte_count: Some(10),
                ..RangeFilters::default()
            },
            pubmed_id: Some(123),
            ..GenesetSearch::default()
        })
        .unwrap();
        let sql = statement.sql();
        let readable = sql.find("geneset_is_readable2").unwrap();
        let search = sql.find("_combined_tsvector @@").unwrap();
        let species = sql.find("geneset.sp_id = ANY(%(species)s)").unwrap();
        let count = sql.find("geneset.gs_count >= %(count_greater_than)s").unwrap();
        let pubmed = sql.find("geneset_search.pub_pubmed = %(pub_pubmed)s").unwrap();
        assert!(readable < search && search < species && species < count && count < pubmed);
        assert_eq!(
            statement.params().get("pub_pubmed"),
            Some(&SqlValue::Text("123".into()))
        );
    }

    #[test]
    fn test_no_status_and_no_paging() {
        let statement = genesets(&GenesetSearch {
            status: None,
            limit: None,
            offset: None,
            ..GenesetSearch::default()
        })
        .unwrap();
        assert!(!statement.sql().contains("WHERE"));
        assert!(!statement.sql().contains("LIMIT"));
    }
}

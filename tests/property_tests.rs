//! Property-based tests using proptest
//!
//! Invariants of statement assembly that must hold for every combination of
//! filter inputs, not just the hand-picked ones in the unit tests.

use proptest::prelude::*;

use geneweaver_db::domain::errors::DomainError;
use geneweaver_db::infrastructure::query::filters::{Predicates, RangeFilters};
use geneweaver_db::infrastructure::query::geneset::{self, GenesetQuery};
use geneweaver_db::infrastructure::query::geneset_search::{self, GenesetSearch};
use geneweaver_db::infrastructure::query::pagination::limit_and_offset;
use geneweaver_db::infrastructure::query::threshold;
use geneweaver_db::infrastructure::query::{QueryError, SelectQuery, SqlValue, Statement};
use geneweaver_db::value_objects::{GenesetScoreType, GenesetTier, OneOrMany, ScoreType, Species};

/// Strategy for generating species, excluding the ALL sentinel
fn species_strategy() -> impl Strategy<Value = Species> + Clone {
    prop::sample::select(Species::VARIANTS[1..].to_vec())
}

fn tier_strategy() -> impl Strategy<Value = GenesetTier> + Clone {
    prop_oneof![
        Just(GenesetTier::Tier1),
        Just(GenesetTier::Tier2),
        Just(GenesetTier::Tier3),
        Just(GenesetTier::Tier4),
        Just(GenesetTier::Tier5),
    ]
}

fn score_type_strategy() -> impl Strategy<Value = ScoreType> + Clone {
    prop_oneof![
        Just(ScoreType::PValue),
        Just(ScoreType::QValue),
        Just(ScoreType::Binary),
        Just(ScoreType::Correlation),
        Just(ScoreType::Effect),
    ]
}

fn one_or_many<T: Clone + std::fmt::Debug>(
    item: impl Strategy<Value = T> + Clone,
) -> impl Strategy<Value = Option<OneOrMany<T>>> {
    prop_oneof![
        Just(None),
        item.clone().prop_map(|value| Some(OneOrMany::One(value))),
        prop::collection::vec(item, 0..4).prop_map(|values| Some(OneOrMany::Many(values))),
    ]
}

fn text_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-zA-Z0-9 %_']{0,24}")
}

fn geneset_query_strategy() -> impl Strategy<Value = GenesetQuery> {
    (
        (
            prop::option::of(1i64..100_000),
            prop::option::of(1i64..10_000),
            one_or_many(tier_strategy()),
            prop::option::of(species_strategy()),
            text_strategy(),
            text_strategy(),
        ),
        (
            prop::option::of(1i64..1000),
            prop::option::of(1i64..40_000_000),
            text_strategy(),
            prop::option::of(prop_oneof![
                Just("normal".to_string()),
                Just("deleted".to_string())
            ]),
            prop::option::of(0i64..500),
            prop::option::of(0i64..500),
        ),
        (
            prop::option::of(1i64..10_000),
            any::<bool>(),
            prop::option::of("[A-Z]{1,3}:[0-9]{4,7}"),
            one_or_many(score_type_strategy()),
        ),
    )
        .prop_map(
            |(
                (geneset_id, owner_id, curation_tier, species, name, abbreviation),
                (publication_id, pubmed_id, search_text, status, limit, offset),
                (is_readable_by, with_publication_info, ontology_term, score_type),
            )| GenesetQuery {
                geneset_id,
                owner_id,
                curation_tier,
                species,
                name,
                abbreviation,
                publication_id,
                pubmed_id,
                gene_id_type: None,
                search_text,
                status,
                limit,
                offset,
                is_readable_by,
                with_publication_info,
                ontology_term,
                score_type,
            },
        )
}

fn geneset_search_strategy() -> impl Strategy<Value = GenesetSearch> {
    (
        text_strategy(),
        prop::option::of(1i64..10_000),
        one_or_many(tier_strategy()),
        one_or_many(score_type_strategy()),
        one_or_many(species_strategy()),
        (prop::option::of(0i64..1000), prop::option::of(0i64..1000)),
        prop::option::of(1i64..40_000_000),
        (prop::option::of(0i64..100), prop::option::of(0i64..100)),
    )
        .prop_map(
            |(search_text, is_readable_by, tier, score_type, species, counts, pubmed_id, paging)| {
                GenesetSearch {
                    search_text,
                    is_readable_by,
                    tier,
                    score_type,
                    species,
                    ranges: RangeFilters {
                        lte_count: counts.0,
                        gte_count: counts.1,
                        ..RangeFilters::default()
                    },
                    pubmed_id,
                    limit: paging.0,
                    offset: paging.1,
                    ..GenesetSearch::default()
                }
            },
        )
}

fn assert_placeholders_match(statement: &Statement) -> Result<(), TestCaseError> {
    let keys: std::collections::BTreeSet<String> =
        statement.params().names().map(str::to_string).collect();
    prop_assert_eq!(statement.placeholder_names(), keys);
    Ok(())
}

proptest! {
    /// Absent filters never add a predicate or a parameter
    #[test]
    fn absent_filters_are_a_noop(
        columns in prop::collection::vec("[a-z][a-z_]{0,12}", 0..8),
        start in prop::option::of(1i64..100),
    ) {
        let base = match start {
            Some(value) => Predicates::new()
                .construct_filters([("seed", Some(SqlValue::Int(value)))], None)
                .unwrap(),
            None => Predicates::new(),
        };
        let after = base
            .clone()
            .construct_filters(columns.into_iter().map(|c| (c, None)), Some("geneset"))
            .unwrap();
        prop_assert_eq!(after, base);
    }

    /// Every placeholder in a geneset query has exactly one parameter and vice versa
    #[test]
    fn geneset_get_placeholders_match_params(query in geneset_query_strategy()) {
        let statement = geneset::get(&query).unwrap();
        assert_placeholders_match(&statement)?;
        prop_assert!(!statement.sql().contains("IS NULL"));
    }

    /// Same for the search view, and positional rendering uses every value once
    #[test]
    fn geneset_search_placeholders_match_params(search in geneset_search_strategy()) {
        let statement = geneset_search::genesets(&search).unwrap();
        assert_placeholders_match(&statement)?;

        let (sql, values) = statement.to_positional().unwrap();
        prop_assert!(!sql.contains("%("));
        prop_assert_eq!(values.len(), statement.params().len());
        for index in 1..=values.len() {
            let marker = format!("${}", index);
            prop_assert!(sql.contains(&marker), "missing {} in {}", marker, sql);
        }
    }

    /// A singleton restricts exactly like a one element set
    #[test]
    fn singleton_equals_one_element_set(
        tier in tier_strategy(),
        species in species_strategy(),
        score_type in score_type_strategy(),
    ) {
        let single = Predicates::new()
            .restrict_tier(Some(&tier.into()))
            .and_then(|p| p.restrict_species(Some(&species.into())))
            .and_then(|p| p.restrict_score_type(Some(&score_type.into())))
            .unwrap();
        let set = Predicates::new()
            .restrict_tier(Some(&vec![tier].into()))
            .and_then(|p| p.restrict_species(Some(&vec![species].into())))
            .and_then(|p| p.restrict_score_type(Some(&vec![score_type].into())))
            .unwrap();
        prop_assert_eq!(single, set);
    }

    /// Search text is bound verbatim, even when empty; no text adds nothing
    #[test]
    fn search_binds_text_verbatim(text in ".{0,40}") {
        let none = Predicates::new().search("geneset.gs_tsvector", None).unwrap();
        prop_assert!(none.is_empty());

        let some = Predicates::new().search("geneset.gs_tsvector", Some(&text)).unwrap();
        prop_assert_eq!(some.len(), 1);
        prop_assert_eq!(some.params().get("search"), Some(&SqlValue::Text(text.clone())));
        prop_assert_eq!(
            &some.fragments()[0],
            "geneset.gs_tsvector @@ websearch_to_tsquery('english', %(search)s)"
        );
    }

    /// Threshold bounds must be ordered; the low bound picks the BETWEEN form
    #[test]
    fn threshold_order_and_form(
        geneset_id in 1i64..100_000,
        high in -10.0f64..10.0,
        low in prop::option::of(-10.0f64..10.0),
    ) {
        let mut score = GenesetScoreType::new(ScoreType::Effect, high);
        if let Some(low) = low {
            score = score.with_low(low);
        }

        let result = threshold::set_geneset_value_threshold(geneset_id, &score);
        match low {
            Some(low) if low > high => {
                prop_assert_eq!(
                    result,
                    Err(QueryError::Domain(DomainError::ThresholdOrder { low, high }))
                );
                prop_assert!(threshold::set_geneset_threshold(geneset_id, &score).is_err());
            }
            Some(_) => {
                let statement = result.unwrap();
                prop_assert!(statement.sql().contains("BETWEEN"));
                prop_assert!(statement.params().contains("threshold_low"));
            }
            None => {
                let statement = result.unwrap();
                prop_assert!(statement.sql().contains("gsv_value < %(threshold_high)s"));
                prop_assert!(!statement.params().contains("threshold_low"));
            }
        }
    }

    /// LIMIT and OFFSET appear independently, LIMIT first
    #[test]
    fn limit_and_offset_are_independent(
        limit in prop::option::of(0i64..10_000),
        offset in prop::option::of(0i64..10_000),
    ) {
        let select = SelectQuery::from_table("species").columns(["sp_id"]);
        let sql = limit_and_offset(select, limit, offset).render();

        prop_assert_eq!(sql.contains(" LIMIT "), limit.is_some());
        prop_assert_eq!(sql.contains(" OFFSET "), offset.is_some());
        if let Some(limit) = limit {
            let expected = format!(" LIMIT {}", limit);
            prop_assert!(sql.contains(&expected));
        }
        if let (Some(_), Some(_)) = (limit, offset) {
            prop_assert!(sql.find(" LIMIT ") < sql.find(" OFFSET "));
        }
    }
}

//! Species lookups.

use super::error::QueryError;
use super::fields::SPECIES_FIELDS;
use super::filters::{FilterSpec, Predicates};
use super::select::SelectQuery;
use super::statement::{SqlValue, Statement};
use crate::domain::value_objects::{GeneIdentifier, Species, WireCode};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpeciesQuery {
    pub taxonomic_id: Option<i64>,
    pub reference_gene_db_id: Option<GeneIdentifier>,
    pub species: Option<Species>,
}

pub fn get(query: &SpeciesQuery) -> Result<Statement, QueryError> {
    let select = SelectQuery::from_table("species").columns(SPECIES_FIELDS.iter().cloned());
    let predicates = Predicates::new().construct_op_filters(
        [
            FilterSpec::eq("sp_id", query.species.map(|s| SqlValue::Int(s.code())))
                .placeholder("species_id"),
            FilterSpec::eq("sp_taxid", query.taxonomic_id.map(SqlValue::from))
                .placeholder("taxonomic_id"),
            FilterSpec::eq(
                "sp_ref_gdb_id",
                query.reference_gene_db_id.map(|g| SqlValue::Int(g.code())),
            )
            .placeholder("reference_gene_db_id"),
        ],
        Some("species"),
    )?;
    select.build(predicates)
}

pub fn get_by_id(species: Species) -> Result<Statement, QueryError> {
    get(&SpeciesQuery {
        species: Some(species),
        ..SpeciesQuery::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_species() {
        let statement = get(&SpeciesQuery::default()).unwrap();
        assert!(statement.sql().ends_with("FROM species"));
        assert!(statement.params().is_empty());
    }

    #[test]
    fn test_get_by_taxonomy_and_reference_db() {
        let statement = get(&SpeciesQuery {
            taxonomic_id: Some(10090),
            reference_gene_db_id: Some(GeneIdentifier::Mgi),
            species: None,
        })
        .unwrap();
        assert!(statement.sql().ends_with(
            "WHERE species.sp_taxid = %(taxonomic_id)s \
             AND species.sp_ref_gdb_id = %(reference_gene_db_id)s"
        ));
        assert_eq!(
            statement.params().get("reference_gene_db_id"),
            Some(&SqlValue::Int(10))
        );
    }

    #[test]
    fn test_get_by_id() {
        let statement = get_by_id(Species::DanioRerio).unwrap();
        assert!(statement
            .sql()
            .ends_with("WHERE species.sp_id = %(species_id)s"));
        assert_eq!(
            statement.params().get("species_id"),
            Some(&SqlValue::Int(Species::DanioRerio.code()))
        );
        assert_eq!(statement.params().len(), 1);
    }
}

//! Gene lookups and identifier mapping.

use super::error::QueryError;
use super::fields::{GENE_FIELDS, GENE_INFO_FIELDS};
use super::filters::{FilterSpec, Predicates};
use super::pagination::limit_and_offset;
use super::select::{JoinKind, SelectQuery};
use super::statement::{Params, SqlValue, Statement};
use crate::domain::mapping::aon_id_type_for_species;
use crate::domain::value_objects::{GeneIdentifier, Species, WireCode};

/// Maps source reference ids to another identifier type. When any candidate
/// target carries the preferred flag, only preferred targets are returned;
/// otherwise every candidate is.
const MAPPING: &str = "WITH PrefTrueCheck AS (\
    SELECT EXISTS(\
        SELECT 1 FROM extsrc.gene AS g1 \
        JOIN extsrc.gene AS g2 \
            ON g1.ode_gene_id = g2.ode_gene_id \
            AND g1.ode_ref_id != g2.ode_ref_id \
            AND g1.sp_id = g2.sp_id \
        WHERE g1.ode_ref_id = ANY(%(source_ids)s) \
            AND g2.gdb_id = %(target_gene_id_type)s \
            AND g2.sp_id = %(species_id)s \
            AND g2.ode_pref = TRUE\
    ) AS PrefExists) \
    SELECT g1.ode_ref_id AS original_ref_id, g2.ode_ref_id AS mapped_ref_id \
    FROM extsrc.gene AS g1 \
    JOIN extsrc.gene AS g2 \
        ON g1.ode_gene_id = g2.ode_gene_id \
        AND g1.ode_ref_id != g2.ode_ref_id \
        AND g1.sp_id = g2.sp_id, \
    PrefTrueCheck \
    WHERE g1.ode_ref_id = ANY(%(source_ids)s) \
        AND g2.gdb_id = %(target_gene_id_type)s \
        AND g2.sp_id = %(species_id)s \
        AND ((PrefTrueCheck.PrefExists AND g2.ode_pref = TRUE) \
            OR NOT PrefTrueCheck.PrefExists)";

const GENE_SYMBOLS: &str = "SELECT g.ode_ref_id \
    FROM extsrc.gene g \
    JOIN extsrc.geneset_value gv ON gv.ode_gene_id = g.ode_gene_id \
    WHERE g.gdb_id = %(symbol_gdb_id)s AND g.ode_pref = TRUE";

const HOMOLOG_IDS_BY_ODE_ID: &str = "SELECT DISTINCT h.ode_gene_id, g.ode_ref_id \
    FROM extsrc.homology h \
    JOIN extsrc.homology h2 ON h.hom_id = h2.hom_id \
    JOIN extsrc.gene g ON g.ode_gene_id = h2.ode_gene_id \
    WHERE h.ode_gene_id = ANY(%(ode_gene_ids)s) AND g.gdb_id = %(genedb_id)s";

const HOMOLOG_IDS: &str = "SELECT DISTINCT \
        result_gene.ode_ref_id AS result_ref_id, \
        source_gene.ode_ref_id AS source_ref_id \
    FROM extsrc.homology source_homology \
    JOIN extsrc.homology result_homology \
        ON source_homology.hom_id = result_homology.hom_id \
    JOIN extsrc.gene result_gene ON result_homology.ode_gene_id = result_gene.ode_gene_id \
    JOIN extsrc.gene source_gene ON source_homology.ode_gene_id = source_gene.ode_gene_id";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneQuery {
    pub gene_id: Option<i64>,
    pub reference_id: Option<String>,
    pub gene_database: Option<GeneIdentifier>,
    pub species: Option<Species>,
    pub preferred: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub fn get(query: &GeneQuery) -> Result<Statement, QueryError> {
    let select = SelectQuery::from_table("gene")
        .columns(GENE_FIELDS.iter().chain(GENE_INFO_FIELDS.iter()).cloned())
        .join(JoinKind::Inner, "gene_info", "gene.ode_gene_id = gene_info.ode_gene_id");

    let predicates = Predicates::new().construct_op_filters(
        [
            FilterSpec::eq("ode_gene_id", query.gene_id.map(SqlValue::from)).placeholder("gene_id"),
            FilterSpec::eq("ode_ref_id", query.reference_id.clone().map(SqlValue::from))
                .placeholder("ref_id"),
            FilterSpec::eq("gdb_id", query.gene_database.map(|g| SqlValue::Int(g.code())))
                .placeholder("gene_db_id"),
            FilterSpec::eq("sp_id", query.species.map(|s| SqlValue::Int(s.code())))
                .placeholder("species_id"),
            FilterSpec::eq("ode_pref", query.preferred.map(SqlValue::from))
                .placeholder("preferred"),
        ],
        Some("gene"),
    )?;

    limit_and_offset(select, query.limit, query.offset).build(predicates)
}

/// The preferred identifier row for an internal gene id.
pub fn get_preferred(gene_id: i64) -> Result<Statement, QueryError> {
    get(&GeneQuery {
        gene_id: Some(gene_id),
        preferred: Some(true),
        ..GeneQuery::default()
    })
}

pub fn mapping(
    source_ids: &[String],
    species: Species,
    target_gene_id_type: GeneIdentifier,
) -> Result<Statement, QueryError> {
    let params = Params::new()
        .with("source_ids", source_ids.to_vec())?
        .with("target_gene_id_type", target_gene_id_type.code())?
        .with("species_id", species.code())?;
    Statement::new(MAPPING, params)
}

/// [`mapping`] onto the AON preferred identifier type of `species`.
pub fn aon_mapping(source_ids: &[String], species: Species) -> Result<Statement, QueryError> {
    mapping(source_ids, species, aon_id_type_for_species(species)?)
}

/// Gene databases (identifier types), optionally only those usable for
/// `species`. Databases with `sp_id = 0` apply to every species.
pub fn id_types(species: Option<Species>) -> Result<Statement, QueryError> {
    let select = SelectQuery::from_table("odestatic.genedb")
        .columns(["*"])
        .order_by("gdb_id");
    let predicates = match species {
        Some(species) => Predicates::new().push(
            "(sp_id = 0 OR sp_id = %(species_id)s)",
            Params::new().with("species_id", species.code())?,
        )?,
        None => Predicates::new(),
    };
    select.build(predicates)
}

pub fn info_by_gene_id(gene_id: i64) -> Result<Statement, QueryError> {
    Statement::new(
        "SELECT * FROM extsrc.gene_info WHERE ode_gene_id = %(gene_id)s",
        Params::new().with("gene_id", gene_id)?,
    )
}

pub fn gene_database_by_id(genedb_id: i64) -> Result<Statement, QueryError> {
    Statement::new(
        "SELECT * FROM odestatic.genedb WHERE gdb_id = %(gdb_id)s",
        Params::new().with("gdb_id", genedb_id)?,
    )
}

/// `gdb_id` of the database whose short name is the lowercased label of
/// `identifier`.
pub fn gene_database_id(identifier: GeneIdentifier) -> Result<Statement, QueryError> {
    Statement::new(
        "SELECT gdb_id FROM odestatic.genedb WHERE gdb_shortname = %(gdb_name)s",
        Params::new().with("gdb_name", identifier.label().to_lowercase())?,
    )
}

fn symbols(membership: &str, params: Params) -> Result<Statement, QueryError> {
    let params = params.with("symbol_gdb_id", GeneIdentifier::GeneSymbol.code())?;
    Statement::new(format!("{} AND {}", GENE_SYMBOLS, membership), params)
}

/// Preferred gene symbols of every gene in a geneset.
pub fn symbols_by_geneset_id(geneset_id: i64) -> Result<Statement, QueryError> {
    symbols("gv.gs_id = %(geneset_id)s", Params::new().with("geneset_id", geneset_id)?)
}

/// Preferred gene symbols of every gene in any geneset of a project.
pub fn symbols_by_project_id(project_id: i64) -> Result<Statement, QueryError> {
    symbols(
        "gv.gs_id IN (SELECT gs_id FROM production.project2geneset WHERE pj_id = %(project_id)s)",
        Params::new().with("project_id", project_id)?,
    )
}

/// `ode_gene_id` / `ode_ref_id` pairs: each source gene with the ids of its
/// homologs in the `identifier` namespace.
pub fn homolog_ids_by_ode_id(
    ode_gene_ids: &[i64],
    identifier: GeneIdentifier,
) -> Result<Statement, QueryError> {
    let params = Params::new()
        .with("ode_gene_ids", ode_gene_ids.to_vec())?
        .with("genedb_id", identifier.code())?;
    Statement::new(HOMOLOG_IDS_BY_ODE_ID, params)
}

/// `result_ref_id` / `source_ref_id` pairs mapping reference ids to their
/// homologs of type `result_identifier`. With `source_identifier` the source
/// ids must also belong to that namespace.
pub fn homolog_ids(
    source_ids: &[String],
    result_identifier: GeneIdentifier,
    source_identifier: Option<GeneIdentifier>,
) -> Result<Statement, QueryError> {
    let mut params = Params::new()
        .with("source_ids", source_ids.to_vec())?
        .with("result_genedb_id", result_identifier.code())?;
    let mut conditions = vec!["result_gene.gdb_id = %(result_genedb_id)s"];
    if let Some(source_identifier) = source_identifier {
        params = params.with("source_genedb_id", source_identifier.code())?;
        conditions.push("source_gene.gdb_id = %(source_genedb_id)s");
    }
    conditions.push("source_gene.ode_ref_id = ANY(%(source_ids)s)");
    Statement::new(format!("{} WHERE {}", HOMOLOG_IDS, conditions.join(" AND ")), params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    #[test]
    fn test_get_without_filters() {
        let statement = get(&GeneQuery::default()).unwrap();
        assert!(statement
            .sql()
            .contains("FROM gene JOIN gene_info ON gene.ode_gene_id = gene_info.ode_gene_id"));
        assert!(!statement.sql().contains("WHERE"));
        assert!(statement.params().is_empty());
    }

    #[test]
    fn test_get_preferred() {
        let statement = get_preferred(77).unwrap();
        assert!(statement.sql().ends_with(
            "WHERE gene.ode_gene_id = %(gene_id)s AND gene.ode_pref = %(preferred)s"
        ));
        assert_eq!(
            statement.params().get("preferred"),
            Some(&SqlValue::Bool(true))
        );
    }

    #[test]
    fn test_preferred_false_is_a_filter() {
        let statement = get(&GeneQuery {
            preferred: Some(false),
            ..GeneQuery::default()
        })
        .unwrap();
        assert_eq!(
            statement.params().get("preferred"),
            Some(&SqlValue::Bool(false))
        );
    }

    #[test]
    fn test_mapping_params() {
        let ids = vec!["MGI:87853".to_string(), "MGI:87854".to_string()];
        let statement = mapping(&ids, Species::MusMusculus, GeneIdentifier::Entrez).unwrap();
        assert_eq!(
            statement.params().get("source_ids"),
            Some(&SqlValue::TextArray(ids))
        );
        assert_eq!(
            statement.params().get("target_gene_id_type"),
            Some(&SqlValue::Int(1))
        );
        assert_eq!(
            statement.params().get("species_id"),
            Some(&SqlValue::Int(1))
        );
        assert!(statement
            .sql()
            .contains("PrefTrueCheck.PrefExists AND g2.ode_pref = TRUE"));
    }

    #[test]
    fn test_aon_mapping_uses_species_default() {
        let ids = vec!["ENSG00000139618".to_string()];
        let statement = aon_mapping(&ids, Species::HomoSapiens).unwrap();
        assert_eq!(
            statement.params().get("target_gene_id_type"),
            Some(&SqlValue::Int(GeneIdentifier::Hgnc.code()))
        );
    }

    #[test]
    fn test_aon_mapping_unknown_species() {
        assert_eq!(
            aon_mapping(&[], Species::CanisFamiliaris),
            Err(QueryError::Domain(DomainError::NoAonIdentifierType(
                Species::CanisFamiliaris
            )))
        );
    }

    #[test]
    fn test_id_types_all_species() {
        let statement = id_types(None).unwrap();
        assert_eq!(
            statement.sql(),
            "SELECT * FROM odestatic.genedb ORDER BY gdb_id"
        );
        assert!(statement.params().is_empty());
    }

    #[test]
    fn test_id_types_includes_shared_databases() {
        let statement = id_types(Some(Species::RattusNorvegicus)).unwrap();
        assert_eq!(
            statement.sql(),
            "SELECT * FROM odestatic.genedb \
             WHERE (sp_id = 0 OR sp_id = %(species_id)s) ORDER BY gdb_id"
        );
        assert_eq!(
            statement.params().get("species_id"),
            Some(&SqlValue::Int(Species::RattusNorvegicus.code()))
        );
    }

    #[test]
    fn test_gene_info_and_database_lookups() {
        let info = info_by_gene_id(42).unwrap();
        assert!(info.sql().starts_with("SELECT * FROM extsrc.gene_info"));
        assert_eq!(info.params().get("gene_id"), Some(&SqlValue::Int(42)));

        let database = gene_database_by_id(10).unwrap();
        assert!(database.sql().ends_with("WHERE gdb_id = %(gdb_id)s"));
        assert_eq!(database.params().get("gdb_id"), Some(&SqlValue::Int(10)));
    }

    #[test]
    fn test_gene_database_id_binds_lowercase_name() {
        let statement = gene_database_id(GeneIdentifier::GeneSymbol).unwrap();
        assert_eq!(
            statement.params().get("gdb_name"),
            Some(&SqlValue::Text("gene symbol".into()))
        );
        assert!(statement
            .sql()
            .starts_with("SELECT gdb_id FROM odestatic.genedb"));
    }

    #[test]
    fn test_symbols_by_geneset_id() {
        let statement = symbols_by_geneset_id(12).unwrap();
        assert!(statement.sql().ends_with("AND gv.gs_id = %(geneset_id)s"));
        assert_eq!(
            statement.params().get("geneset_id"),
            Some(&SqlValue::Int(12))
        );
        assert_eq!(
            statement.params().get("symbol_gdb_id"),
            Some(&SqlValue::Int(7))
        );
    }

    #[test]
    fn test_symbols_by_project_id() {
        let statement = symbols_by_project_id(3).unwrap();
        assert!(statement
            .sql()
            .contains("production.project2geneset WHERE pj_id = %(project_id)s"));
        assert!(!statement.params().contains("geneset_id"));
        assert_eq!(statement.params().len(), 2);
    }

    #[test]
    fn test_homolog_ids_by_ode_id_binds_array() {
        let statement = homolog_ids_by_ode_id(&[101, 102], GeneIdentifier::Mgi).unwrap();
        assert!(statement
            .sql()
            .contains("h.ode_gene_id = ANY(%(ode_gene_ids)s)"));
        assert_eq!(
            statement.params().get("ode_gene_ids"),
            Some(&SqlValue::IntArray(vec![101, 102]))
        );
        assert_eq!(
            statement.params().get("genedb_id"),
            Some(&SqlValue::Int(10))
        );
    }

    #[test]
    fn test_homolog_ids_without_source_identifier() {
        let ids = vec!["Rgs7".to_string()];
        let statement = homolog_ids(&ids, GeneIdentifier::Hgnc, None).unwrap();
        assert!(statement.sql().ends_with(
            "WHERE result_gene.gdb_id = %(result_genedb_id)s \
             AND source_gene.ode_ref_id = ANY(%(source_ids)s)"
        ));
        assert!(!statement.params().contains("source_genedb_id"));
        assert_eq!(
            statement.params().get("source_ids"),
            Some(&SqlValue::TextArray(ids))
        );
    }

    #[test]
    fn test_homolog_ids_with_source_identifier() {
        let statement = homolog_ids(
            &["Rgs7".to_string()],
            GeneIdentifier::Hgnc,
            Some(GeneIdentifier::GeneSymbol),
        )
        .unwrap();
        assert!(statement
            .sql()
            .contains("AND source_gene.gdb_id = %(source_genedb_id)s AND"));
        assert_eq!(
            statement.params().get("source_genedb_id"),
            Some(&SqlValue::Int(7))
        );
        assert!(statement.sql().contains("AS result_ref_id"));
        assert!(statement.sql().contains("AS source_ref_id"));
    }
}

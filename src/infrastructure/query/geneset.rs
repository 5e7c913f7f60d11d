//! Geneset reads and writes.

use super::error::QueryError;
use super::fields::{GENESET_FIELDS, GENESET_PUB_FIELDS};
use super::filters::{FilterSpec, Predicates};
use super::geneset_value::format_geneset_values_for_file_insert;
use super::pagination::limit_and_offset;
use super::select::{JoinKind, SelectQuery};
use super::statement::{Params, SqlValue, Statement};
use crate::domain::value_objects::{
    GeneIdentifier, GeneValue, GenesetScoreType, GenesetTier, OneOrMany, ScoreType, Species,
    WireCode,
};

pub const GENESET_TSVECTOR: &str = "geneset.gs_tsvector";

pub const DEFAULT_STATUS: &str = "normal";

const INSERT_GENESET: &str = "INSERT INTO geneset \
    (usr_id, file_id, gs_name, gs_abbreviation, pub_id, cur_id, gs_description, sp_id, \
    gs_count, gs_threshold_type, gs_threshold, gs_groups, gs_gene_id_type, gs_created, \
    gs_attribution) \
    VALUES (%(usr_id)s, %(file_id)s, %(gs_name)s, %(gs_abbreviation)s, %(pub_id)s, \
    %(cur_id)s, %(gs_description)s, %(sp_id)s, %(gs_count)s, %(gs_threshold_type)s, \
    %(gs_threshold)s, %(gs_groups)s, %(gs_gene_id_type)s, NOW(), %(gs_attribution)s) \
    RETURNING gs_id";

const INSERT_FILE: &str = "INSERT INTO file \
    (file_size, file_contents, file_comments, file_created) \
    VALUES (%(file_size)s, %(file_contents)s, %(file_comments)s, NOW()) \
    RETURNING file_id";

const HOMOLOGY_IDS: &str = "SELECT DISTINCT hom_id FROM extsrc.homology h \
    INNER JOIN extsrc.geneset_value gsv ON h.ode_gene_id = gsv.ode_gene_id \
    INNER JOIN production.geneset g ON gsv.gs_id = g.gs_id \
    WHERE g.gs_status NOT LIKE 'de%%' AND g.gs_id = %(geneset_id)s";

/// Filters for [`get`]. Every `None` leaves that filter out.
#[derive(Debug, Clone, PartialEq)]
pub struct GenesetQuery {
    pub geneset_id: Option<i64>,
    pub owner_id: Option<i64>,
    pub curation_tier: Option<OneOrMany<GenesetTier>>,
    pub species: Option<Species>,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub publication_id: Option<i64>,
    pub pubmed_id: Option<i64>,
    pub gene_id_type: Option<GeneIdentifier>,
    pub search_text: Option<String>,
    /// Defaults to `"normal"`; `None` returns every status.
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub is_readable_by: Option<i64>,
    pub with_publication_info: bool,
    pub ontology_term: Option<String>,
    pub score_type: Option<OneOrMany<ScoreType>>,
}

impl Default for GenesetQuery {
    fn default() -> Self {
        Self {
            geneset_id: None,
            owner_id: None,
            curation_tier: None,
            species: None,
            name: None,
            abbreviation: None,
            publication_id: None,
            pubmed_id: None,
            gene_id_type: None,
            search_text: None,
            status: Some(DEFAULT_STATUS.to_string()),
            limit: None,
            offset: None,
            is_readable_by: None,
            with_publication_info: true,
            ontology_term: None,
            score_type: None,
        }
    }
}

/// A geneset to insert with [`add`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewGeneset {
    pub user_id: i64,
    pub file_id: i64,
    pub name: String,
    pub abbreviation: String,
    pub tier: GenesetTier,
    pub species: Species,
    pub count: i64,
    pub score: GenesetScoreType,
    pub gene_id_type: GeneIdentifier,
    pub description: String,
    pub publication_id: Option<i64>,
    pub attribution: Option<String>,
}

/// Geneset projection plus the publication join it needs.
///
/// `with_publication_info` joins and returns publication columns.
/// `with_publication_join` only joins, for filtering; it is ignored when the
/// columns are requested anyway.
pub fn format_select_query(
    with_publication_info: bool,
    with_publication_join: bool,
) -> SelectQuery {
    let query = SelectQuery::from_table("geneset").columns(GENESET_FIELDS.iter().cloned());
    if with_publication_info {
        query
            .columns(GENESET_PUB_FIELDS.iter().cloned())
            .join(JoinKind::LeftOuter, "publication", "geneset.pub_id = publication.pub_id")
    } else if with_publication_join {
        query.join(JoinKind::LeftOuter, "publication", "geneset.pub_id = publication.pub_id")
    } else {
        query
    }
}

/// Calls the server side readability check for `user_id`.
pub fn is_readable_filter(
    predicates: Predicates,
    user_id: Option<i64>,
) -> Result<Predicates, QueryError> {
    match user_id {
        None => Ok(predicates),
        Some(user_id) => predicates.push(
            "production.geneset_is_readable2(%(is_readable_by)s, geneset.gs_id)",
            Params::new().with("is_readable_by", user_id)?,
        ),
    }
}

pub fn get(query: &GenesetQuery) -> Result<Statement, QueryError> {
    let mut select = format_select_query(query.with_publication_info, query.pubmed_id.is_some());
    if query.ontology_term.is_some() {
        select = select
            .join(JoinKind::Inner, "geneset_ontology", "geneset.gs_id = geneset_ontology.gs_id")
            .join(JoinKind::Inner, "ontology", "geneset_ontology.ont_id = ontology.ont_id");
    }

    let predicates = is_readable_filter(Predicates::new(), query.is_readable_by)?
        .search(GENESET_TSVECTOR, query.search_text.as_deref())?
        .restrict_tier(query.curation_tier.as_ref())?
        .restrict_score_type(query.score_type.as_ref())?
        .construct_filter(
            FilterSpec::eq("ont_ref_id", query.ontology_term.clone().map(SqlValue::from))
                .placeholder("ontology_term"),
            Some("ontology"),
        )?
        .construct_filter(
            FilterSpec::eq("pub_pubmed", query.pubmed_id.map(|id| SqlValue::Text(id.to_string())))
                .placeholder("pubmed_id"),
            Some("publication"),
        )?
        .construct_filters(
            [
                ("gs_id", query.geneset_id.map(SqlValue::from)),
                ("usr_id", query.owner_id.map(SqlValue::from)),
                ("sp_id", query.species.map(|s| SqlValue::Int(s.code()))),
                ("gs_name", query.name.clone().map(SqlValue::from)),
                ("gs_abbreviation", query.abbreviation.clone().map(SqlValue::from)),
                ("pub_id", query.publication_id.map(SqlValue::from)),
                ("gs_gene_id_type", query.gene_id_type.map(|g| SqlValue::Int(g.code()))),
                ("gs_status", query.status.clone().map(SqlValue::from)),
            ],
            Some("geneset"),
        )?;

    limit_and_offset(select, query.limit, query.offset).build(predicates)
}

pub fn by_project_id(
    project_id: i64,
    limit: Option<i64>,
    offset: Option<i64>,
    is_readable_by: Option<i64>,
    with_publication_info: bool,
) -> Result<Statement, QueryError> {
    let select = format_select_query(with_publication_info, false).join(
        JoinKind::Inner,
        "production.project2geneset",
        "geneset.gs_id = project2geneset.gs_id",
    );
    let predicates = Predicates::new().construct_filter(
        FilterSpec::eq("pj_id", Some(project_id.into())).placeholder("project_id"),
        Some("project2geneset"),
    )?;
    let predicates = is_readable_filter(predicates, is_readable_by)?;

    limit_and_offset(select, limit, offset).build(predicates)
}

pub fn shared_with_user(
    _user_id: i64,
    _limit: Option<i64>,
    _offset: Option<i64>,
) -> Result<Statement, QueryError> {
    Err(QueryError::NotImplemented("geneset::shared_with_user"))
}

pub fn add(geneset: &NewGeneset) -> Result<Statement, QueryError> {
    geneset.score.validate()?;
    let params = Params::new()
        .with("usr_id", geneset.user_id)?
        .with("file_id", geneset.file_id)?
        .with("gs_name", geneset.name.as_str())?
        .with("gs_abbreviation", geneset.abbreviation.as_str())?
        .with("pub_id", geneset.publication_id)?
        .with("cur_id", geneset.tier.code())?
        .with("gs_description", geneset.description.as_str())?
        .with("sp_id", geneset.species.code())?
        .with("gs_count", geneset.count)?
        .with("gs_threshold_type", geneset.score.score_type.code())?
        .with("gs_threshold", geneset.score.threshold_as_db_string())?
        .with("gs_groups", "")?
        .with("gs_gene_id_type", geneset.gene_id_type.code())?
        .with("gs_attribution", geneset.attribution.clone())?;
    Statement::new(INSERT_GENESET, params)
}

/// Renders `values` into geneset file contents and inserts them.
pub fn add_geneset_file(values: &[GeneValue], comments: &str) -> Result<Statement, QueryError> {
    let contents = format_geneset_values_for_file_insert(values);
    add_geneset_file_raw(contents.chars().count() as i64, &contents, comments)
}

pub fn add_geneset_file_raw(
    size: i64,
    contents: &str,
    comments: &str,
) -> Result<Statement, QueryError> {
    let params = Params::new()
        .with("file_size", size)?
        .with("file_contents", contents)?
        .with("file_comments", comments)?;
    Statement::new(INSERT_FILE, params)
}

pub fn reparse_geneset_file(geneset_id: i64) -> Result<Statement, QueryError> {
    call_procedure("production.reparse_geneset_file", geneset_id)
}

pub fn process_thresholds(geneset_id: i64) -> Result<Statement, QueryError> {
    call_procedure("production.process_thresholds", geneset_id)
}

fn call_procedure(function: &str, geneset_id: i64) -> Result<Statement, QueryError> {
    Statement::new(
        format!("SELECT {}(%(geneset_id)s)", function),
        Params::new().with("geneset_id", geneset_id)?,
    )
}

pub fn is_readable(user_id: i64, geneset_id: i64) -> Result<Statement, QueryError> {
    Statement::new(
        "SELECT production.geneset_is_readable2(%(user_id)s, %(geneset_id)s) AS is_readable",
        user_and_geneset(user_id, geneset_id)?,
    )
}

pub fn user_is_owner(user_id: i64, geneset_id: i64) -> Result<Statement, QueryError> {
    Statement::new(
        "SELECT COUNT(gs_id) AS count FROM geneset \
         WHERE usr_id = %(user_id)s AND gs_id = %(geneset_id)s",
        user_and_geneset(user_id, geneset_id)?,
    )
}

pub fn update_date(geneset_id: i64) -> Result<Statement, QueryError> {
    Statement::new(
        "UPDATE geneset SET gs_updated = NOW() WHERE gs_id = %(geneset_id)s RETURNING gs_updated",
        Params::new().with("geneset_id", geneset_id)?,
    )
}

pub fn tier(geneset_id: i64) -> Result<Statement, QueryError> {
    Statement::new(
        "SELECT cur_id FROM geneset WHERE gs_id = %(geneset_id)s",
        Params::new().with("geneset_id", geneset_id)?,
    )
}

pub fn homology_ids(geneset_id: i64) -> Result<Statement, QueryError> {
    Statement::new(HOMOLOGY_IDS, Params::new().with("geneset_id", geneset_id)?)
}

pub fn num_genes(geneset_id: i64) -> Result<Statement, QueryError> {
    Statement::new(
        "SELECT COUNT(*) AS count FROM extsrc.geneset_value WHERE gs_id = %(geneset_id)s",
        Params::new().with("geneset_id", geneset_id)?,
    )
}

fn user_and_geneset(user_id: i64, geneset_id: i64) -> Result<Params, QueryError> {
    Params::new()
        .with("user_id", user_id)?
        .with("geneset_id", geneset_id)
}

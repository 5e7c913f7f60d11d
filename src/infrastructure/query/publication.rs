//! Publication queries.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::error::QueryError;
use super::fields::{PUB_FIELDS, PUB_FIELD_MAP};
use super::filters::Predicates;
use super::pagination::limit_and_offset;
use super::select::{JoinKind, SelectQuery};
use super::statement::{Params, SqlValue, Statement};

pub const PUB_TSVECTOR: &str = "publication.pub_tsvector";

/// `INSERT INTO publication (...) VALUES (...) RETURNING pub_id`, every mapped
/// column except the generated id.
static PUB_INSERT: Lazy<String> = Lazy::new(|| {
    let columns: Vec<&str> = PUB_FIELD_MAP
        .iter()
        .map(|(column, _)| *column)
        .filter(|column| *column != "pub_id")
        .collect();
    let placeholders: Vec<String> = columns.iter().map(|c| format!("%({})s", c)).collect();
    format!(
        "INSERT INTO publication ({}) VALUES ({}) RETURNING pub_id",
        columns.join(", "),
        placeholders.join(", ")
    )
});

fn pub_query() -> SelectQuery {
    SelectQuery::from_table("publication").columns(PUB_FIELDS.iter().cloned())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicationQuery {
    pub pub_id: Option<i64>,
    pub authors: Option<String>,
    pub title: Option<String>,
    pub abstract_text: Option<String>,
    pub journal: Option<String>,
    pub volume: Option<String>,
    pub pages: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
    pub pubmed: Option<String>,
    pub search_text: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// A publication to insert with [`add`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicationInfo {
    pub authors: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub journal: String,
    pub pubmed_id: String,
    pub volume: Option<String>,
    pub pages: Option<String>,
    pub month: Option<String>,
    pub year: Option<i64>,
}

pub fn get(query: &PublicationQuery) -> Result<Statement, QueryError> {
    let text = |value: &Option<String>| value.clone().map(SqlValue::from);
    let predicates = Predicates::new()
        .search(PUB_TSVECTOR, query.search_text.as_deref())?
        .construct_filters(
            [
                ("pub_id", query.pub_id.map(SqlValue::from)),
                ("pub_authors", text(&query.authors)),
                ("pub_title", text(&query.title)),
                ("pub_abstract", text(&query.abstract_text)),
                ("pub_journal", text(&query.journal)),
                ("pub_volume", text(&query.volume)),
                ("pub_pages", text(&query.pages)),
                ("pub_month", text(&query.month)),
                ("pub_year", text(&query.year)),
                ("pub_pubmed", text(&query.pubmed)),
            ],
            Some("publication"),
        )?;

    limit_and_offset(pub_query(), query.limit, query.offset).build(predicates)
}

pub fn by_id(pub_id: i64) -> Result<Statement, QueryError> {
    pub_query()
        .filter("publication.pub_id = %(pub_id)s")
        .build(Predicates::from_parts(Vec::new(), Params::new().with("pub_id", pub_id)?))
}

pub fn by_geneset_id(geneset_id: i64) -> Result<Statement, QueryError> {
    pub_query()
        .join(JoinKind::Inner, "geneset", "publication.pub_id = geneset.pub_id")
        .filter("geneset.gs_id = %(geneset_id)s")
        .build(Predicates::from_parts(
            Vec::new(),
            Params::new().with("geneset_id", geneset_id)?,
        ))
}

/// PubMed ids are numeric but stored as text.
pub fn by_pubmed_id(pubmed_id: i64) -> Result<Statement, QueryError> {
    pub_query()
        .filter("publication.pub_pubmed = %(pmid)s")
        .build(Predicates::from_parts(
            Vec::new(),
            Params::new().with("pmid", pubmed_id.to_string())?,
        ))
}

pub fn by_pubmed_ids(pubmed_ids: &[i64]) -> Result<Statement, QueryError> {
    let ids: Vec<String> = pubmed_ids.iter().map(i64::to_string).collect();
    pub_query()
        .filter("publication.pub_pubmed = ANY(%(pubmed_ids)s)")
        .build(Predicates::from_parts(
            Vec::new(),
            Params::new().with("pubmed_ids", ids)?,
        ))
}

pub fn add(publication: &PublicationInfo) -> Result<Statement, QueryError> {
    let params = Params::new()
        .with("pub_authors", publication.authors.as_str())?
        .with("pub_title", publication.title.as_str())?
        .with("pub_abstract", publication.abstract_text.as_str())?
        .with("pub_journal", publication.journal.as_str())?
        .with("pub_volume", publication.volume.clone())?
        .with("pub_pages", publication.pages.clone())?
        .with("pub_month", publication.month.clone())?
        .with("pub_year", publication.year)?
        .with("pub_pubmed", publication.pubmed_id.as_str())?;
    Statement::new(PUB_INSERT.as_str(), params)
}

//! Full-text search predicates over tsvector columns.

use serde::{Deserialize, Serialize};

use super::error::QueryError;
use super::filters::Predicates;
use super::statement::{Identifier, Params};

pub const SEARCH_PLACEHOLDER: &str = "search";

/// Text search configuration (stemming and stop words).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchConfig {
    Simple,
    #[default]
    English,
}

impl std::fmt::Display for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchConfig::Simple => write!(f, "simple"),
            SearchConfig::English => write!(f, "english"),
        }
    }
}

/// How the search text is parsed into a tsquery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    /// Plain terms, all must match
    PlainTo,
    /// Exact phrase
    PhraseTo,
    /// Web search syntax: quotes, `or`, `-exclude`
    #[default]
    WebSearch,
}

impl QueryType {
    pub fn function(&self) -> &'static str {
        match self {
            QueryType::PlainTo => "plainto_tsquery",
            QueryType::PhraseTo => "phraseto_tsquery",
            QueryType::WebSearch => "websearch_to_tsquery",
        }
    }
}

/// `column @@ <fn>('<config>', %(search)s)` and its single parameter.
pub fn search_query(
    column: &str,
    search_text: &str,
    config: SearchConfig,
    query_type: QueryType,
) -> Result<(String, Params), QueryError> {
    let column = Identifier::new(column)?;
    let fragment = format!(
        "{} @@ {}('{}', %({})s)",
        column,
        query_type.function(),
        config,
        SEARCH_PLACEHOLDER
    );
    let params = Params::new().with(SEARCH_PLACEHOLDER, search_text)?;
    Ok((fragment, params))
}

impl Predicates {
    /// English web-search match on `column`, skipped when `search_text` is
    /// `None`. An empty string is still a search.
    pub fn search(self, column: &str, search_text: Option<&str>) -> Result<Self, QueryError> {
        self.search_with(column, search_text, SearchConfig::default(), QueryType::default())
    }

    pub fn search_with(
        self,
        column: &str,
        search_text: Option<&str>,
        config: SearchConfig,
        query_type: QueryType,
    ) -> Result<Self, QueryError> {
        match search_text {
            None => Ok(self),
            Some(text) => {
                let (fragment, params) = search_query(column, text, config, query_type)?;
                self.push(fragment, params)
            }
        }
    }
}

//! Parameterized statements: bound values, placeholder bookkeeping and rendering
//! to the positional form the driver expects.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::error::QueryError;

/// `%(name)s` placeholders. `%%` is matched first so an escaped percent sign is
/// never mistaken for the start of a placeholder.
static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"%%|%\(([A-Za-z_][A-Za-z0-9_]*)\)s").expect("Invalid placeholder regex")
});

static IDENTIFIER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)?$")
        .expect("Invalid identifier regex")
});

/// A value bound to a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    IntArray(Vec<i64>),
    TextArray(Vec<String>),
    FloatArray(Vec<f64>),
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(value.into())
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(value: NaiveDate) -> Self {
        SqlValue::Date(value)
    }
}

impl From<Vec<i64>> for SqlValue {
    fn from(value: Vec<i64>) -> Self {
        SqlValue::IntArray(value)
    }
}

impl From<Vec<String>> for SqlValue {
    fn from(value: Vec<String>) -> Self {
        SqlValue::TextArray(value)
    }
}

impl From<Vec<f64>> for SqlValue {
    fn from(value: Vec<f64>) -> Self {
        SqlValue::FloatArray(value)
    }
}

/// `None` becomes SQL NULL. Only for column values (inserts, updates); filters
/// keep absence as `Option<SqlValue>` instead.
impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SqlValue::Null)
    }
}

/// Named parameters of one statement, in insertion order.
///
/// A name can be bound once; a second binding is an error rather than an
/// overwrite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, SqlValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<SqlValue>,
    ) -> Result<(), QueryError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(QueryError::DuplicatePlaceholder(name));
        }
        self.entries.push((name, value.into()));
        Ok(())
    }

    /// Builder form of [`Params::insert`].
    pub fn with(
        mut self,
        name: impl Into<String>,
        value: impl Into<SqlValue>,
    ) -> Result<Self, QueryError> {
        self.insert(name, value)?;
        Ok(self)
    }

    pub fn merge(mut self, other: Params) -> Result<Self, QueryError> {
        for (name, value) in other.entries {
            self.insert(name, value)?;
        }
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&SqlValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A trusted table or column name, optionally qualified (`table.column`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: &str) -> Result<Self, QueryError> {
        if IDENTIFIER_REGEX.is_match(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(QueryError::InvalidIdentifier(name.to_string()))
        }
    }

    /// `table.column`, or just `column` when no table is given.
    pub fn qualified(table: Option<&str>, column: &str) -> Result<Self, QueryError> {
        match table {
            Some(table) if !column.contains('.') => Self::new(&format!("{}.{}", table, column)),
            _ => Self::new(column),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Placeholder name used for a column when no explicit one is given.
pub fn default_placeholder(column: &str) -> String {
    column.replace('.', "_")
}

/// Names of every `%(name)s` placeholder in `sql`.
pub fn placeholder_names(sql: &str) -> BTreeSet<String> {
    PLACEHOLDER_REGEX
        .captures_iter(sql)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// SQL text with its named parameters.
///
/// Construction checks that every placeholder has a parameter and every
/// parameter is used.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    params: Params,
}

impl Statement {
    pub fn new(sql: impl Into<String>, params: Params) -> Result<Self, QueryError> {
        let sql = sql.into();
        let placeholders = placeholder_names(&sql);
        let keys: BTreeSet<String> = params.names().map(str::to_string).collect();

        if placeholders != keys {
            return Err(QueryError::PlaceholderMismatch {
                missing: placeholders.difference(&keys).cloned().collect(),
                unused: keys.difference(&placeholders).cloned().collect(),
            });
        }

        tracing::debug!(sql = %sql, params = ?keys, "Built statement");
        Ok(Self { sql, params })
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn placeholder_names(&self) -> BTreeSet<String> {
        placeholder_names(&self.sql)
    }

    /// Rewrites named placeholders to `$n` and returns the values in bind order.
    ///
    /// A name used several times keeps one position. NULL parameters are written
    /// as the `NULL` keyword so they need no bind type.
    pub fn to_positional(&self) -> Result<(String, Vec<SqlValue>), QueryError> {
        let mut sql = String::with_capacity(self.sql.len());
        let mut values = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut last = 0;

        for caps in PLACEHOLDER_REGEX.captures_iter(&self.sql) {
            let Some(whole) = caps.get(0) else { continue };
            sql.push_str(&self.sql[last..whole.start()]);
            last = whole.end();

            let Some(name) = caps.get(1).map(|m| m.as_str()) else {
                sql.push('%');
                continue;
            };
            let value = self
                .params
                .get(name)
                .ok_or_else(|| QueryError::PlaceholderMismatch {
                    missing: vec![name.to_string()],
                    unused: Vec::new(),
                })?;

            if *value == SqlValue::Null {
                sql.push_str("NULL");
                continue;
            }

            let position = match positions.get(name) {
                Some(position) => *position,
                None => {
                    values.push(value.clone());
                    positions.insert(name, values.len());
                    values.len()
                }
            };
            sql.push('$');
            sql.push_str(&position.to_string());
        }
        sql.push_str(&self.sql[last..]);

        Ok((sql, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_reject_duplicates() {
        let params = Params::new().with("gs_id", 1i64).unwrap();
        assert_eq!(
            params.with("gs_id", 2i64),
            Err(QueryError::DuplicatePlaceholder("gs_id".to_string()))
        );
    }

    #[test]
    fn test_params_merge_rejects_overlap() {
        let left = Params::new().with("search", "a").unwrap();
        let right = Params::new().with("search", "b").unwrap();
        assert!(left.merge(right).is_err());
    }

    #[test]
    fn test_option_into_sql_value() {
        assert_eq!(SqlValue::from(None::<i64>), SqlValue::Null);
        assert_eq!(SqlValue::from(Some("x")), SqlValue::Text("x".to_string()));
    }

    #[test]
    fn test_identifier_validation() {
        assert!(Identifier::new("gs_id").is_ok());
        assert!(Identifier::new("geneset.gs_id").is_ok());
        assert!(Identifier::new("gs_id; DROP TABLE geneset").is_err());
        assert!(Identifier::new("a.b.c").is_err());
        assert!(Identifier::new("").is_err());
    }

    #[test]
    fn test_identifier_qualified() {
        assert_eq!(
            Identifier::qualified(Some("geneset"), "gs_id").unwrap().as_str(),
            "geneset.gs_id"
        );
        assert_eq!(
            Identifier::qualified(None, "gs_id").unwrap().as_str(),
            "gs_id"
        );
    }

    #[test]
    fn test_placeholder_names_ignore_escaped_percent() {
        let names = placeholder_names("a LIKE 'x%%' AND b = %(b)s AND c = %%(c)s");
        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["b".to_string()]);
    }

    #[test]
    fn test_statement_requires_matching_params() {
        let err = Statement::new("SELECT %(a)s", Params::new().with("b", 1i64).unwrap());
        assert_eq!(
            err,
            Err(QueryError::PlaceholderMismatch {
                missing: vec!["a".to_string()],
                unused: vec!["b".to_string()],
            })
        );
    }

    #[test]
    fn test_to_positional_reuses_positions() {
        let params = Params::new()
            .with("ids", vec!["A".to_string()])
            .unwrap()
            .with("sp", 1i64)
            .unwrap();
        let statement = Statement::new(
            "SELECT 1 WHERE x = ANY(%(ids)s) AND y = %(sp)s OR z = ANY(%(ids)s)",
            params,
        )
        .unwrap();
        let (sql, values) = statement.to_positional().unwrap();
        assert_eq!(sql, "SELECT 1 WHERE x = ANY($1) AND y = $2 OR z = ANY($1)");
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_to_positional_inlines_null_and_unescapes_percent() {
        let params = Params::new()
            .with("pub_id", SqlValue::Null)
            .unwrap()
            .with("name", "n")
            .unwrap();
        let statement =
            Statement::new("SELECT %(pub_id)s, %(name)s WHERE s NOT LIKE 'de%%'", params)
                .unwrap();
        let (sql, values) = statement.to_positional().unwrap();
        assert_eq!(sql, "SELECT NULL, $1 WHERE s NOT LIKE 'de%'");
        assert_eq!(values, vec![SqlValue::Text("n".to_string())]);
    }
}

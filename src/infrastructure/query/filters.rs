//! Optional filter predicates.
//!
//! [`Predicates`] is threaded through the builders by value: each step consumes the
//! current state and returns the extended one, so no accumulator is ever shared
//! between two queries.

use chrono::NaiveDate;

use super::error::QueryError;
use super::statement::{default_placeholder, Identifier, Params, SqlValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    NotEq,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl Operator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::NotEq => "!=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
        }
    }
}

/// One requested comparison. A `None` value means the filter was not requested;
/// `Some(SqlValue::Null)` is a real NULL and is bound like any other value.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub column: String,
    pub operator: Operator,
    pub value: Option<SqlValue>,
    pub placeholder: Option<String>,
}

impl FilterSpec {
    pub fn eq(column: impl Into<String>, value: Option<SqlValue>) -> Self {
        Self::new(column, Operator::Eq, value)
    }

    pub fn new(column: impl Into<String>, operator: Operator, value: Option<SqlValue>) -> Self {
        Self {
            column: column.into(),
            operator,
            value,
            placeholder: None,
        }
    }

    pub fn placeholder(mut self, name: impl Into<String>) -> Self {
        self.placeholder = Some(name.into());
        self
    }
}

/// Count and date bounds shared by the geneset listing queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeFilters {
    pub lte_count: Option<i64>,
    pub gte_count: Option<i64>,
    pub created_before: Option<NaiveDate>,
    pub created_after: Option<NaiveDate>,
    pub updated_before: Option<NaiveDate>,
    pub updated_after: Option<NaiveDate>,
}

impl RangeFilters {
    fn specs(&self) -> Vec<FilterSpec> {
        vec![
            FilterSpec::new("gs_count", Operator::Lte, self.lte_count.map(SqlValue::from))
                .placeholder("count_less_than"),
            FilterSpec::new("gs_count", Operator::Gte, self.gte_count.map(SqlValue::from))
                .placeholder("count_greater_than"),
            FilterSpec::new(
                "gs_created",
                Operator::Lte,
                self.created_before.map(SqlValue::from),
            )
            .placeholder("created_before"),
            FilterSpec::new(
                "gs_created",
                Operator::Gte,
                self.created_after.map(SqlValue::from),
            )
            .placeholder("created_after"),
            FilterSpec::new(
                "gs_updated",
                Operator::Lte,
                self.updated_before.map(SqlValue::from),
            )
            .placeholder("updated_before"),
            FilterSpec::new(
                "gs_updated",
                Operator::Gte,
                self.updated_after.map(SqlValue::from),
            )
            .placeholder("updated_after"),
        ]
    }
}

/// WHERE predicates together with the parameters they reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicates {
    fragments: Vec<String>,
    params: Params,
}

impl Predicates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(fragments: Vec<String>, params: Params) -> Self {
        Self { fragments, params }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn into_parts(self) -> (Vec<String>, Params) {
        (self.fragments, self.params)
    }

    /// Predicates joined with AND, if there are any.
    pub fn where_clause(&self) -> Option<String> {
        if self.fragments.is_empty() {
            None
        } else {
            Some(self.fragments.join(" AND "))
        }
    }

    /// Adds a hand written predicate, such as a function call, with its params.
    pub fn push(mut self, fragment: impl Into<String>, params: Params) -> Result<Self, QueryError> {
        self.params = self.params.merge(params)?;
        self.fragments.push(fragment.into());
        Ok(self)
    }

    /// Adds `[table.]column <op> %(placeholder)s` unless the filter is absent.
    pub fn construct_filter(
        mut self,
        filter: FilterSpec,
        table: Option<&str>,
    ) -> Result<Self, QueryError> {
        let Some(value) = filter.value else {
            return Ok(self);
        };
        let column = Identifier::qualified(table, &filter.column)?;
        let placeholder = filter
            .placeholder
            .unwrap_or_else(|| default_placeholder(&filter.column));
        Identifier::new(&placeholder)?;

        self.params.insert(placeholder.as_str(), value)?;
        self.fragments.push(format!(
            "{} {} %({})s",
            column,
            filter.operator.as_sql(),
            placeholder
        ));
        Ok(self)
    }

    /// Equality filters for every present entry of `filters`, in order.
    pub fn construct_filters<I, C>(
        self,
        filters: I,
        table: Option<&str>,
    ) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (C, Option<SqlValue>)>,
        C: Into<String>,
    {
        filters.into_iter().try_fold(self, |predicates, (column, value)| {
            predicates.construct_filter(FilterSpec::eq(column, value), table)
        })
    }

    /// Filters with their own operators and placeholder names.
    pub fn construct_op_filters<I>(
        self,
        filters: I,
        table: Option<&str>,
    ) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = FilterSpec>,
    {
        filters
            .into_iter()
            .try_fold(self, |predicates, filter| predicates.construct_filter(filter, table))
    }

    /// Count and created/updated date bounds.
    pub fn add_op_filters(
        self,
        ranges: &RangeFilters,
        table: Option<&str>,
    ) -> Result<Self, QueryError> {
        self.construct_op_filters(ranges.specs(), table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_filters_are_skipped() {
        let predicates = Predicates::new()
            .construct_filters(
                [("gs_id", None), ("usr_id", Some(SqlValue::Int(7))), ("gs_name", None)],
                None,
            )
            .unwrap();
        assert_eq!(predicates.fragments(), ["usr_id = %(usr_id)s"]);
        assert_eq!(predicates.params().get("usr_id"), Some(&SqlValue::Int(7)));
        assert_eq!(predicates.params().len(), 1);
    }

    #[test]
    fn test_empty_filter_map_is_noop() {
        let start = Predicates::new()
            .push("x = %(x)s", Params::new().with("x", 1i64).unwrap())
            .unwrap();
        let after = start
            .clone()
            .construct_filters(Vec::<(String, Option<SqlValue>)>::new(), None)
            .unwrap();
        assert_eq!(after, start);
    }

    #[test]
    fn test_present_null_is_bound_not_is_null() {
        let predicates = Predicates::new()
            .construct_filter(FilterSpec::eq("pub_id", Some(SqlValue::Null)), Some("geneset"))
            .unwrap();
        assert_eq!(predicates.fragments(), ["geneset.pub_id = %(pub_id)s"]);
        assert_eq!(predicates.params().get("pub_id"), Some(&SqlValue::Null));
        assert!(!predicates.fragments()[0].contains("IS NULL"));
    }

    #[test]
    fn test_dotted_column_placeholder() {
        let predicates = Predicates::new()
            .construct_filter(
                FilterSpec::eq("publication.pub_pubmed", Some("123".into())),
                None,
            )
            .unwrap();
        assert_eq!(
            predicates.fragments(),
            ["publication.pub_pubmed = %(publication_pub_pubmed)s"]
        );
    }

    #[test]
    fn test_same_column_twice_requires_distinct_placeholders() {
        let collision = Predicates::new()
            .construct_filter(FilterSpec::new("gs_count", Operator::Lte, Some(10i64.into())), None)
            .unwrap()
            .construct_filter(FilterSpec::new("gs_count", Operator::Gte, Some(1i64.into())), None);
        assert_eq!(
            collision,
            Err(QueryError::DuplicatePlaceholder("gs_count".to_string()))
        );
    }

    #[test]
    fn test_add_op_filters() {
        let ranges = RangeFilters {
            lte_count: Some(100),
            gte_count: Some(5),
            created_after: NaiveDate::from_ymd_opt(2020, 1, 1),
            ..RangeFilters::default()
        };
        let predicates = Predicates::new()
            .add_op_filters(&ranges, Some("geneset"))
            .unwrap();
        assert_eq!(
            predicates.fragments(),
            [
                "geneset.gs_count <= %(count_less_than)s",
                "geneset.gs_count >= %(count_greater_than)s",
                "geneset.gs_created >= %(created_after)s",
            ]
        );
        assert_eq!(
            predicates.params().get("created_after"),
            Some(&SqlValue::Date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()))
        );
    }

    #[test]
    fn test_invalid_column_rejected() {
        let result = Predicates::new()
            .construct_filter(FilterSpec::eq("gs_id = 1 OR 1", Some(1i64.into())), None);
        assert!(matches!(result, Err(QueryError::InvalidIdentifier(_))));
    }

    #[test]
    fn test_where_clause() {
        assert_eq!(Predicates::new().where_clause(), None);
        let predicates = Predicates::new()
            .construct_filters([("a", Some(1i64.into())), ("b", Some(2i64.into()))], None)
            .unwrap();
        assert_eq!(
            predicates.where_clause().as_deref(),
            Some("a = %(a)s AND b = %(b)s")
        );
    }
}

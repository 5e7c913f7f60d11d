//! A small SELECT tree, rendered to SQL text once it is complete.

use super::error::QueryError;
use super::filters::Predicates;
use super::pagination::pagination_suffix;
use super::statement::Statement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    LeftOuter,
}

impl JoinKind {
    fn as_sql(&self) -> &'static str {
        match self {
            JoinKind::Inner => "JOIN",
            JoinKind::LeftOuter => "LEFT OUTER JOIN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: String,
    pub on: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectQuery {
    distinct: bool,
    columns: Vec<String>,
    from: String,
    joins: Vec<Join>,
    predicates: Vec<String>,
    order_by: Vec<String>,
    pub(crate) limit: Option<i64>,
    pub(crate) offset: Option<i64>,
}

impl SelectQuery {
    pub fn from_table(table: &str) -> Self {
        Self {
            from: table.to_string(),
            ..Self::default()
        }
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn join(mut self, kind: JoinKind, table: &str, on: &str) -> Self {
        self.joins.push(Join {
            kind,
            table: table.to_string(),
            on: on.to_string(),
        });
        self
    }

    pub fn has_join(&self, table: &str) -> bool {
        self.joins.iter().any(|join| join.table == table)
    }

    /// Adds a raw, parameter-free predicate (join anchors and the like).
    pub fn filter(mut self, predicate: impl Into<String>) -> Self {
        self.predicates.push(predicate.into());
        self
    }

    pub fn order_by(mut self, expression: &str) -> Self {
        self.order_by.push(expression.to_string());
        self
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    pub fn column_list(&self) -> &[String] {
        &self.columns
    }

    pub fn render(&self) -> String {
        let mut parts = vec![if self.distinct {
            "SELECT DISTINCT".to_string()
        } else {
            "SELECT".to_string()
        }];
        parts.push(self.columns.join(", "));
        parts.push(format!("FROM {}", self.from));
        for join in &self.joins {
            parts.push(format!("{} {} ON {}", join.kind.as_sql(), join.table, join.on));
        }
        if !self.predicates.is_empty() {
            parts.push(format!("WHERE {}", self.predicates.join(" AND ")));
        }
        if !self.order_by.is_empty() {
            parts.push(format!("ORDER BY {}", self.order_by.join(", ")));
        }
        if let Some(suffix) = pagination_suffix(self.limit, self.offset) {
            parts.push(suffix);
        }
        parts.join(" ")
    }

    /// Appends the accumulated predicates and produces the finished statement.
    pub fn build(mut self, predicates: Predicates) -> Result<Statement, QueryError> {
        let (fragments, params) = predicates.into_parts();
        self.predicates.extend(fragments);
        Statement::new(self.render(), params)
    }
}

use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{PgPool, Postgres};

use super::record::row_to_record;
use crate::application::ports::{AsyncCursor, CursorError, Record};
use crate::infrastructure::query::{SqlValue, Statement};

/// [`AsyncCursor`] over a sqlx connection pool.
#[derive(Debug, Clone)]
pub struct PgCursor {
    pool: PgPool,
}

impl PgCursor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Binds values in the order `Statement::to_positional` numbered them.
fn bind_values(
    sql: &str,
    values: Vec<SqlValue>,
) -> Query<'_, Postgres, PgArguments> {
    values
        .into_iter()
        .fold(sqlx::query(sql), |query, value| match value {
            SqlValue::Null => query.bind(Option::<String>::None),
            SqlValue::Bool(v) => query.bind(v),
            SqlValue::Int(v) => query.bind(v),
            SqlValue::Float(v) => query.bind(v),
            SqlValue::Text(v) => query.bind(v),
            SqlValue::Date(v) => query.bind(v),
            SqlValue::IntArray(v) => query.bind(v),
            SqlValue::TextArray(v) => query.bind(v),
            SqlValue::FloatArray(v) => query.bind(v),
        })
}

#[async_trait]
impl AsyncCursor for PgCursor {
    async fn fetch_one(&mut self, statement: &Statement) -> Result<Option<Record>, CursorError> {
        let (sql, values) = statement.to_positional()?;
        let row = bind_values(&sql, values)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(row_to_record))
    }

    async fn fetch_all(&mut self, statement: &Statement) -> Result<Vec<Record>, CursorError> {
        let (sql, values) = statement.to_positional()?;
        let rows = bind_values(&sql, values).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(row_to_record).collect())
    }

    async fn execute(&mut self, statement: &Statement) -> Result<u64, CursorError> {
        let (sql, values) = statement.to_positional()?;
        let result = bind_values(&sql, values).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn execute_atomic(&mut self, statements: &[Statement]) -> Result<u64, CursorError> {
        let rendered = statements
            .iter()
            .map(Statement::to_positional)
            .collect::<Result<Vec<_>, _>>()?;

        let mut tx = self.pool.begin().await?;
        let mut affected = 0;
        for (sql, values) in rendered {
            // Dropping `tx` on error rolls the transaction back.
            let result = bind_values(&sql, values).execute(&mut *tx).await?;
            affected += result.rows_affected();
        }
        tx.commit().await?;

        tracing::debug!(statements = statements.len(), affected, "Committed transaction");
        Ok(affected)
    }
}

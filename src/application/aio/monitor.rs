use crate::application::dto::HealthReport;
use crate::application::ports::{AsyncCursor, CursorError};
use crate::application::rows::{count, field};
use crate::infrastructure::query::monitor;

pub async fn last_gene_identifier_update(
    cursor: &mut (impl AsyncCursor + ?Sized),
) -> Result<Option<String>, CursorError> {
    let record = cursor.fetch_one(&monitor::last_gene_identifier_update()?).await?;
    field(record.as_ref(), "gi_date")
}

pub async fn gene_count(cursor: &mut (impl AsyncCursor + ?Sized)) -> Result<i64, CursorError> {
    count(cursor.fetch_one(&monitor::gene_count()?).await?, "count")
}

pub async fn geneset_count(cursor: &mut (impl AsyncCursor + ?Sized)) -> Result<i64, CursorError> {
    count(cursor.fetch_one(&monitor::geneset_count()?).await?, "count")
}

pub async fn health_check(
    cursor: &mut (impl AsyncCursor + ?Sized),
) -> Result<HealthReport, CursorError> {
    let report = HealthReport {
        gene_identifier_last_update: last_gene_identifier_update(cursor).await?,
        gene_count: gene_count(cursor).await?,
        geneset_count: geneset_count(cursor).await?,
    };
    tracing::info!(
        gene_count = report.gene_count,
        geneset_count = report.geneset_count,
        "Health check completed"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockAsyncCursor;
    use serde_json::json;

    #[tokio::test]
    async fn test_health_check() {
        let mut cursor = MockAsyncCursor::new();
        cursor.expect_fetch_one().times(3).returning(|statement| {
            let row = if statement.sql().contains("gi_date") {
                json!({"gi_date": "2024-03-01 00:00:00"})
            } else if statement.sql().contains("genedb") {
                json!({"count": 20})
            } else {
                json!({"count": 1500})
            };
            Ok(row.as_object().cloned())
        });

        let report = health_check(&mut cursor).await.unwrap();
        assert_eq!(
            report,
            HealthReport {
                gene_identifier_last_update: Some("2024-03-01 00:00:00".into()),
                gene_count: 20,
                geneset_count: 1500,
            }
        );
    }
}

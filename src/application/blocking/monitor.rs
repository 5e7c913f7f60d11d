use crate::application::dto::HealthReport;
use crate::application::ports::{Cursor, CursorError};
use crate::application::rows::{count, field};
use crate::infrastructure::query::monitor;

pub fn last_gene_identifier_update(
    cursor: &mut (impl Cursor + ?Sized),
) -> Result<Option<String>, CursorError> {
    let record = cursor.fetch_one(&monitor::last_gene_identifier_update()?)?;
    field(record.as_ref(), "gi_date")
}

pub fn gene_count(cursor: &mut (impl Cursor + ?Sized)) -> Result<i64, CursorError> {
    count(cursor.fetch_one(&monitor::gene_count()?)?, "count")
}

pub fn geneset_count(cursor: &mut (impl Cursor + ?Sized)) -> Result<i64, CursorError> {
    count(cursor.fetch_one(&monitor::geneset_count()?)?, "count")
}

pub fn health_check(cursor: &mut (impl Cursor + ?Sized)) -> Result<HealthReport, CursorError> {
    let report = HealthReport {
        gene_identifier_last_update: last_gene_identifier_update(cursor)?,
        gene_count: gene_count(cursor)?,
        geneset_count: geneset_count(cursor)?,
    };
    tracing::info!(
        gene_count = report.gene_count,
        geneset_count = report.geneset_count,
        "Health check completed"
    );
    Ok(report)
}

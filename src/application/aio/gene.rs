use crate::application::ports::{AsyncCursor, CursorError, Record};
use crate::application::rows::{column, field};
use crate::domain::value_objects::{GeneIdentifier, Species};
use crate::infrastructure::query::gene::{self, GeneQuery};

pub async fn get(
    cursor: &mut (impl AsyncCursor + ?Sized),
    query: &GeneQuery,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&gene::get(query)?).await
}

pub async fn get_preferred(
    cursor: &mut (impl AsyncCursor + ?Sized),
    gene_id: i64,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&gene::get_preferred(gene_id)?).await
}

/// `original_ref_id` / `mapped_ref_id` pairs.
pub async fn mapping(
    cursor: &mut (impl AsyncCursor + ?Sized),
    source_ids: &[String],
    species: Species,
    target_gene_id_type: GeneIdentifier,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&gene::mapping(source_ids, species, target_gene_id_type)?).await
}

pub async fn aon_mapping(
    cursor: &mut (impl AsyncCursor + ?Sized),
    source_ids: &[String],
    species: Species,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&gene::aon_mapping(source_ids, species)?).await
}

pub async fn id_types(
    cursor: &mut (impl AsyncCursor + ?Sized),
    species: Option<Species>,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&gene::id_types(species)?).await
}

pub async fn info_by_gene_id(
    cursor: &mut (impl AsyncCursor + ?Sized),
    gene_id: i64,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&gene::info_by_gene_id(gene_id)?).await
}

pub async fn gene_database_by_id(
    cursor: &mut (impl AsyncCursor + ?Sized),
    genedb_id: i64,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&gene::gene_database_by_id(genedb_id)?).await
}

pub async fn gene_database_id(
    cursor: &mut (impl AsyncCursor + ?Sized),
    identifier: GeneIdentifier,
) -> Result<Option<i64>, CursorError> {
    let row = cursor.fetch_one(&gene::gene_database_id(identifier)?).await?;
    field(row.as_ref(), "gdb_id")
}

pub async fn symbols_by_geneset_id(
    cursor: &mut (impl AsyncCursor + ?Sized),
    geneset_id: i64,
) -> Result<Vec<String>, CursorError> {
    column(&cursor.fetch_all(&gene::symbols_by_geneset_id(geneset_id)?).await?, "ode_ref_id")
}

pub async fn symbols_by_project_id(
    cursor: &mut (impl AsyncCursor + ?Sized),
    project_id: i64,
) -> Result<Vec<String>, CursorError> {
    column(&cursor.fetch_all(&gene::symbols_by_project_id(project_id)?).await?, "ode_ref_id")
}

/// `ode_gene_id` / `ode_ref_id` pairs.
pub async fn homolog_ids_by_ode_id(
    cursor: &mut (impl AsyncCursor + ?Sized),
    ode_gene_ids: &[i64],
    identifier: GeneIdentifier,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&gene::homolog_ids_by_ode_id(ode_gene_ids, identifier)?).await
}

/// `result_ref_id` / `source_ref_id` pairs.
pub async fn homolog_ids(
    cursor: &mut (impl AsyncCursor + ?Sized),
    source_ids: &[String],
    result_identifier: GeneIdentifier,
    source_identifier: Option<GeneIdentifier>,
) -> Result<Vec<Record>, CursorError> {
    let statement = gene::homolog_ids(source_ids, result_identifier, source_identifier)?;
    cursor.fetch_all(&statement).await
}

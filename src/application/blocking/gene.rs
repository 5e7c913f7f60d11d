use crate::application::ports::{Cursor, CursorError, Record};
use crate::application::rows::{column, field};
use crate::domain::value_objects::{GeneIdentifier, Species};
use crate::infrastructure::query::gene::{self, GeneQuery};

pub fn get(
    cursor: &mut (impl Cursor + ?Sized),
    query: &GeneQuery,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&gene::get(query)?)
}

pub fn get_preferred(
    cursor: &mut (impl Cursor + ?Sized),
    gene_id: i64,
) -> Result<Option<Record>, CursorError> {
    cursor.fetch_one(&gene::get_preferred(gene_id)?)
}

/// `original_ref_id` / `mapped_ref_id` pairs.
pub fn mapping(
    cursor: &mut (impl Cursor + ?Sized),
    source_ids: &[String],
    species: Species,
    target_gene_id_type: GeneIdentifier,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&gene::mapping(source_ids, species, target_gene_id_type)?)
}

pub fn aon_mapping(
    cursor: &mut (impl Cursor + ?Sized),
    source_ids: &[String],
    species: Species,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&gene::aon_mapping(source_ids, species)?)
}

pub fn id_types(
    cursor: &mut (impl Cursor + ?Sized),
    species: Option<Species>,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&gene::id_types(species)?)
}

pub fn info_by_gene_id(
    cursor: &mut (impl Cursor + ?Sized),
    gene_id: i64,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&gene::info_by_gene_id(gene_id)?)
}

pub fn gene_database_by_id(
    cursor: &mut (impl Cursor + ?Sized),
    genedb_id: i64,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&gene::gene_database_by_id(genedb_id)?)
}

pub fn gene_database_id(
    cursor: &mut (impl Cursor + ?Sized),
    identifier: GeneIdentifier,
) -> Result<Option<i64>, CursorError> {
    let row = cursor.fetch_one(&gene::gene_database_id(identifier)?)?;
    field(row.as_ref(), "gdb_id")
}

pub fn symbols_by_geneset_id(
    cursor: &mut (impl Cursor + ?Sized),
    geneset_id: i64,
) -> Result<Vec<String>, CursorError> {
    column(&cursor.fetch_all(&gene::symbols_by_geneset_id(geneset_id)?)?, "ode_ref_id")
}

pub fn symbols_by_project_id(
    cursor: &mut (impl Cursor + ?Sized),
    project_id: i64,
) -> Result<Vec<String>, CursorError> {
    column(&cursor.fetch_all(&gene::symbols_by_project_id(project_id)?)?, "ode_ref_id")
}

/// `ode_gene_id` / `ode_ref_id` pairs.
pub fn homolog_ids_by_ode_id(
    cursor: &mut (impl Cursor + ?Sized),
    ode_gene_ids: &[i64],
    identifier: GeneIdentifier,
) -> Result<Vec<Record>, CursorError> {
    cursor.fetch_all(&gene::homolog_ids_by_ode_id(ode_gene_ids, identifier)?)
}

/// `result_ref_id` / `source_ref_id` pairs.
pub fn homolog_ids(
    cursor: &mut (impl Cursor + ?Sized),
    source_ids: &[String],
    result_identifier: GeneIdentifier,
    source_identifier: Option<GeneIdentifier>,
) -> Result<Vec<Record>, CursorError> {
    let statement = gene::homolog_ids(source_ids, result_identifier, source_identifier)?;
    cursor.fetch_all(&statement)
}

//! Column projections, built once per table and reused by every read query.

use once_cell::sync::Lazy;

/// Internal column name to response field name.
pub type FieldMap = [(&'static str, &'static str)];

/// `table.column AS [prefix_]name` for every entry of `field_map`.
pub fn format_sql_fields(field_map: &FieldMap, table: &str, prefix: Option<&str>) -> Vec<String> {
    field_map
        .iter()
        .map(|(column, name)| match prefix {
            Some(prefix) => format!("{}.{} AS {}_{}", table, column, prefix, name),
            None => format!("{}.{} AS {}", table, column, name),
        })
        .collect()
}

pub const GENESET_FIELD_MAP: &FieldMap = &[
    ("gs_id", "id"),
    ("usr_id", "user_id"),
    ("file_id", "file_id"),
    ("cur_id", "curation_id"),
    ("sp_id", "species_id"),
    ("gs_name", "name"),
    ("gs_abbreviation", "abbreviation"),
    ("pub_id", "publication_id"),
    ("gs_description", "description"),
    ("gs_count", "count"),
    ("gs_threshold_type", "score_type"),
    ("gs_threshold", "threshold"),
    ("gs_status", "status"),
    ("gs_gene_id_type", "gene_id_type"),
    ("gs_attribution", "attribution"),
    ("gs_created", "created"),
    ("gs_updated", "updated"),
];

pub const PUB_FIELD_MAP: &FieldMap = &[
    ("pub_id", "id"),
    ("pub_authors", "authors"),
    ("pub_title", "title"),
    ("pub_abstract", "abstract"),
    ("pub_journal", "journal"),
    ("pub_volume", "volume"),
    ("pub_pages", "pages"),
    ("pub_month", "month"),
    ("pub_year", "year"),
    ("pub_pubmed", "pubmed_id"),
];

pub const GENE_FIELD_MAP: &FieldMap = &[
    ("ode_gene_id", "id"),
    ("ode_ref_id", "reference_id"),
    ("gdb_id", "gene_database"),
    ("sp_id", "species"),
    ("ode_pref", "preferred"),
    ("ode_date", "date"),
];

pub const GENE_INFO_FIELD_MAP: &FieldMap = &[
    ("gi_accession", "accession"),
    ("gi_symbol", "symbol"),
    ("gi_name", "name"),
    ("gi_description", "description"),
    ("gi_type", "type"),
    ("gi_chromosome", "chromosome"),
    ("gi_start_bp", "start_bp"),
    ("gi_end_bp", "end_bp"),
    ("gi_strand", "strand"),
    ("gene_rank", "rank"),
];

pub const PROJECT_FIELD_MAP: &FieldMap = &[
    ("pj_id", "id"),
    ("usr_id", "owner_id"),
    ("pj_name", "name"),
    ("pj_groups", "groups"),
    ("pj_notes", "notes"),
    ("pj_created", "created"),
    ("pj_star", "star"),
];

pub const SPECIES_FIELD_MAP: &FieldMap = &[
    ("sp_id", "id"),
    ("sp_name", "name"),
    ("sp_taxid", "taxonomic_id"),
    ("sp_ref_gdb_id", "reference_gene_identifier"),
];

pub const USER_FIELD_MAP: &FieldMap = &[
    ("usr_id", "id"),
    ("usr_email", "email"),
    ("usr_prefs", "prefs"),
    ("is_guest", "is_guest"),
    ("usr_first_name", "first_name"),
    ("usr_last_name", "last_name"),
    ("usr_admin", "admin"),
    ("usr_last_seen", "last_seen"),
    ("usr_created", "created"),
    ("ip_addr", "ip_address"),
    ("apikey", "api_key"),
    ("usr_sso_id", "sso_id"),
];

pub static GENESET_FIELDS: Lazy<Vec<String>> =
    Lazy::new(|| format_sql_fields(GENESET_FIELD_MAP, "geneset", None));

/// Publication columns as they appear on geneset rows.
pub static GENESET_PUB_FIELDS: Lazy<Vec<String>> =
    Lazy::new(|| format_sql_fields(PUB_FIELD_MAP, "publication", Some("publication")));

pub static PUB_FIELDS: Lazy<Vec<String>> =
    Lazy::new(|| format_sql_fields(PUB_FIELD_MAP, "publication", None));

pub static GENE_FIELDS: Lazy<Vec<String>> =
    Lazy::new(|| format_sql_fields(GENE_FIELD_MAP, "gene", None));

pub static GENE_INFO_FIELDS: Lazy<Vec<String>> =
    Lazy::new(|| format_sql_fields(GENE_INFO_FIELD_MAP, "gene_info", None));

pub static PROJECT_FIELDS: Lazy<Vec<String>> =
    Lazy::new(|| format_sql_fields(PROJECT_FIELD_MAP, "project", None));

pub static SPECIES_FIELDS: Lazy<Vec<String>> =
    Lazy::new(|| format_sql_fields(SPECIES_FIELD_MAP, "species", None));

pub static USER_FIELDS: Lazy<Vec<String>> =
    Lazy::new(|| format_sql_fields(USER_FIELD_MAP, "usr", None));

use serde::{Deserialize, Serialize};

/// Database health summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub gene_identifier_last_update: Option<String>,
    pub gene_count: i64,
    pub geneset_count: i64,
}

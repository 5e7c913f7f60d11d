use serde::{Deserialize, Serialize};

use super::wire_code::WireCode;
use crate::domain::errors::DomainError;

/// Namespace a gene reference id belongs to (the `gdb_id` column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneIdentifier {
    Entrez,
    EnsembleGene,
    EnsembleProtein,
    EnsembleTranscript,
    Unigene,
    GeneSymbol,
    Unannotated,
    Mgi,
    Hgnc,
    Rgd,
    Zfin,
    FlyBase,
    WormBase,
    Sgd,
    MiRBase,
    Cgnc,
}

impl GeneIdentifier {
    pub const VARIANTS: [GeneIdentifier; 16] = [
        GeneIdentifier::Entrez,
        GeneIdentifier::EnsembleGene,
        GeneIdentifier::EnsembleProtein,
        GeneIdentifier::EnsembleTranscript,
        GeneIdentifier::Unigene,
        GeneIdentifier::GeneSymbol,
        GeneIdentifier::Unannotated,
        GeneIdentifier::Mgi,
        GeneIdentifier::Hgnc,
        GeneIdentifier::Rgd,
        GeneIdentifier::Zfin,
        GeneIdentifier::FlyBase,
        GeneIdentifier::WormBase,
        GeneIdentifier::Sgd,
        GeneIdentifier::MiRBase,
        GeneIdentifier::Cgnc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GeneIdentifier::Entrez => "Entrez",
            GeneIdentifier::EnsembleGene => "Ensembl Gene",
            GeneIdentifier::EnsembleProtein => "Ensembl Protein",
            GeneIdentifier::EnsembleTranscript => "Ensembl Transcript",
            GeneIdentifier::Unigene => "Unigene",
            GeneIdentifier::GeneSymbol => "Gene Symbol",
            GeneIdentifier::Unannotated => "Unannotated",
            GeneIdentifier::Mgi => "MGI",
            GeneIdentifier::Hgnc => "HGNC",
            GeneIdentifier::Rgd => "RGD",
            GeneIdentifier::Zfin => "ZFIN",
            GeneIdentifier::FlyBase => "FlyBase",
            GeneIdentifier::WormBase => "Wormbase",
            GeneIdentifier::Sgd => "SGD",
            GeneIdentifier::MiRBase => "miRBase",
            GeneIdentifier::Cgnc => "CGNC",
        }
    }
}

impl WireCode for GeneIdentifier {
    const KIND: &'static str = "gene identifier";

    fn code(self) -> i64 {
        match self {
            GeneIdentifier::Entrez => 1,
            GeneIdentifier::EnsembleGene => 2,
            GeneIdentifier::EnsembleProtein => 3,
            GeneIdentifier::EnsembleTranscript => 4,
            GeneIdentifier::Unigene => 5,
            GeneIdentifier::GeneSymbol => 7,
            GeneIdentifier::Unannotated => 8,
            GeneIdentifier::Mgi => 10,
            GeneIdentifier::Hgnc => 11,
            GeneIdentifier::Rgd => 12,
            GeneIdentifier::Zfin => 13,
            GeneIdentifier::FlyBase => 14,
            GeneIdentifier::WormBase => 15,
            GeneIdentifier::Sgd => 16,
            GeneIdentifier::MiRBase => 17,
            GeneIdentifier::Cgnc => 20,
        }
    }

    fn from_code(code: i64) -> Result<Self, DomainError> {
        GeneIdentifier::VARIANTS
            .into_iter()
            .find(|id_type| id_type.code() == code)
            .ok_or(DomainError::UnknownCode {
                kind: Self::KIND,
                code,
            })
    }
}

impl std::fmt::Display for GeneIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for GeneIdentifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', " ");
        GeneIdentifier::VARIANTS
            .into_iter()
            .find(|id_type| id_type.label().to_lowercase() == wanted)
            .ok_or_else(|| format!("Invalid gene identifier: {}", s))
    }
}

use thiserror::Error;

use super::value_objects::Species;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("threshold must be larger than threshold_low ({low} > {high})")]
    ThresholdOrder { low: f64, high: f64 },

    #[error("Unknown {kind} code: {code}")]
    UnknownCode { kind: &'static str, code: i64 },

    #[error("No AON gene identifier type is defined for {0}")]
    NoAonIdentifierType(Species),

    #[error("Geneset values must be a nonzero length string")]
    EmptyGenesetFile,

    #[error("SSO id {0} is already linked to a user")]
    SsoIdAlreadyLinked(String),
}

use serde::{Deserialize, Serialize};

use super::wire_code::{OneOrMany, WireCode};
use crate::domain::errors::DomainError;

/// Curation tier of a geneset, from most to least reviewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenesetTier {
    /// Public resource grade
    Tier1,
    /// Publication derived, curated
    Tier2,
    /// Publication derived, uncurated
    Tier3,
    /// Private or provisional
    Tier4,
    /// User upload
    Tier5,
}

impl WireCode for GenesetTier {
    const KIND: &'static str = "curation tier";

    fn code(self) -> i64 {
        match self {
            GenesetTier::Tier1 => 1,
            GenesetTier::Tier2 => 2,
            GenesetTier::Tier3 => 3,
            GenesetTier::Tier4 => 4,
            GenesetTier::Tier5 => 5,
        }
    }

    fn from_code(code: i64) -> Result<Self, DomainError> {
        match code {
            1 => Ok(GenesetTier::Tier1),
            2 => Ok(GenesetTier::Tier2),
            3 => Ok(GenesetTier::Tier3),
            4 => Ok(GenesetTier::Tier4),
            5 => Ok(GenesetTier::Tier5),
            _ => Err(DomainError::UnknownCode {
                kind: Self::KIND,
                code,
            }),
        }
    }
}

impl From<GenesetTier> for OneOrMany<GenesetTier> {
    fn from(tier: GenesetTier) -> Self {
        OneOrMany::One(tier)
    }
}

impl std::fmt::Display for GenesetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tier {}", self.code())
    }
}

impl std::str::FromStr for GenesetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .to_lowercase()
            .trim_start_matches("tier")
            .trim()
            .to_string();
        digits
            .parse::<i64>()
            .ok()
            .and_then(|code| GenesetTier::from_code(code).ok())
            .ok_or_else(|| format!("Invalid curation tier: {}", s))
    }
}

use serde::{Deserialize, Serialize};

use super::wire_code::{OneOrMany, WireCode};
use crate::domain::errors::DomainError;

/// Species a geneset or gene belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    All,
    MusMusculus,
    HomoSapiens,
    RattusNorvegicus,
    DanioRerio,
    DrosophilaMelanogaster,
    MacacaMulatta,
    CaenorhabditisElegans,
    SaccharomycesCerevisiae,
    GallusGallus,
    CanisFamiliaris,
}

impl Species {
    pub const VARIANTS: [Species; 11] = [
        Species::All,
        Species::MusMusculus,
        Species::HomoSapiens,
        Species::RattusNorvegicus,
        Species::DanioRerio,
        Species::DrosophilaMelanogaster,
        Species::MacacaMulatta,
        Species::CaenorhabditisElegans,
        Species::SaccharomycesCerevisiae,
        Species::GallusGallus,
        Species::CanisFamiliaris,
    ];

    pub fn scientific_name(&self) -> &'static str {
        match self {
            Species::All => "All",
            Species::MusMusculus => "Mus musculus",
            Species::HomoSapiens => "Homo sapiens",
            Species::RattusNorvegicus => "Rattus norvegicus",
            Species::DanioRerio => "Danio rerio",
            Species::DrosophilaMelanogaster => "Drosophila melanogaster",
            Species::MacacaMulatta => "Macaca mulatta",
            Species::CaenorhabditisElegans => "Caenorhabditis elegans",
            Species::SaccharomycesCerevisiae => "Saccharomyces cerevisiae",
            Species::GallusGallus => "Gallus gallus",
            Species::CanisFamiliaris => "Canis familiaris",
        }
    }
}

impl WireCode for Species {
    const KIND: &'static str = "species";

    fn code(self) -> i64 {
        match self {
            Species::All => 0,
            Species::MusMusculus => 1,
            Species::HomoSapiens => 2,
            Species::RattusNorvegicus => 3,
            Species::DanioRerio => 4,
            Species::DrosophilaMelanogaster => 5,
            Species::MacacaMulatta => 6,
            Species::CaenorhabditisElegans => 8,
            Species::SaccharomycesCerevisiae => 9,
            Species::GallusGallus => 10,
            Species::CanisFamiliaris => 11,
        }
    }

    fn from_code(code: i64) -> Result<Self, DomainError> {
        Species::VARIANTS
            .into_iter()
            .find(|species| species.code() == code)
            .ok_or(DomainError::UnknownCode {
                kind: Self::KIND,
                code,
            })
    }
}

impl From<Species> for OneOrMany<Species> {
    fn from(species: Species) -> Self {
        OneOrMany::One(species)
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.scientific_name())
    }
}

impl std::str::FromStr for Species {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', " ");
        Species::VARIANTS
            .into_iter()
            .find(|species| species.scientific_name().to_lowercase() == wanted)
            .ok_or_else(|| format!("Invalid species: {}", s))
    }
}

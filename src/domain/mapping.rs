//! Static lookups between domain enums.

use super::errors::DomainError;
use super::value_objects::{GeneIdentifier, Species};

/// Gene identifier type the Alliance of Genome Resources prefers for a species.
pub fn aon_id_type_for_species(species: Species) -> Result<GeneIdentifier, DomainError> {
    match species {
        Species::MusMusculus => Ok(GeneIdentifier::Mgi),
        Species::HomoSapiens => Ok(GeneIdentifier::Hgnc),
        Species::RattusNorvegicus => Ok(GeneIdentifier::Rgd),
        Species::DanioRerio => Ok(GeneIdentifier::Zfin),
        Species::DrosophilaMelanogaster => Ok(GeneIdentifier::FlyBase),
        Species::MacacaMulatta => Ok(GeneIdentifier::EnsembleGene),
        Species::CaenorhabditisElegans => Ok(GeneIdentifier::WormBase),
        Species::SaccharomycesCerevisiae => Ok(GeneIdentifier::Sgd),
        Species::GallusGallus => Ok(GeneIdentifier::Cgnc),
        Species::All | Species::CanisFamiliaris => Err(DomainError::NoAonIdentifierType(species)),
    }
}

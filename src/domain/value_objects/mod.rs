mod gene_identifier;
mod gene_value;
mod geneset_tier;
mod score_type;
mod species;
mod wire_code;

pub use gene_identifier::GeneIdentifier;
pub use gene_value::GeneValue;
pub use geneset_tier::GenesetTier;
pub use score_type::{GenesetScoreType, ScoreType};
pub use species::Species;
pub use wire_code::{OneOrMany, WireCode};

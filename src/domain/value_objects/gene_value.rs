use serde::{Deserialize, Serialize};

use super::score_type::format_score;

/// A gene symbol paired with its score, one line of an uploaded geneset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneValue {
    pub symbol: String,
    pub value: f64,
}

impl GeneValue {
    pub fn new(symbol: impl Into<String>, value: f64) -> Self {
        Self {
            symbol: symbol.into(),
            value,
        }
    }

    /// `symbol<TAB>value`, the line format of geneset files.
    pub fn file_line(&self) -> String {
        format!("{}\t{}", self.symbol, format_score(self.value))
    }
}

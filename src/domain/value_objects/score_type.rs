use serde::{Deserialize, Serialize};

use super::wire_code::{OneOrMany, WireCode};
use crate::domain::errors::DomainError;

/// Statistical measure a geneset's values are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreType {
    PValue,
    QValue,
    Binary,
    Correlation,
    Effect,
}

impl WireCode for ScoreType {
    const KIND: &'static str = "score type";

    fn code(self) -> i64 {
        match self {
            ScoreType::PValue => 1,
            ScoreType::QValue => 2,
            ScoreType::Binary => 3,
            ScoreType::Correlation => 4,
            ScoreType::Effect => 5,
        }
    }

    fn from_code(code: i64) -> Result<Self, DomainError> {
        match code {
            1 => Ok(ScoreType::PValue),
            2 => Ok(ScoreType::QValue),
            3 => Ok(ScoreType::Binary),
            4 => Ok(ScoreType::Correlation),
            5 => Ok(ScoreType::Effect),
            _ => Err(DomainError::UnknownCode {
                kind: Self::KIND,
                code,
            }),
        }
    }
}

impl From<ScoreType> for OneOrMany<ScoreType> {
    fn from(score_type: ScoreType) -> Self {
        OneOrMany::One(score_type)
    }
}

impl std::fmt::Display for ScoreType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreType::PValue => write!(f, "p-value"),
            ScoreType::QValue => write!(f, "q-value"),
            ScoreType::Binary => write!(f, "binary"),
            ScoreType::Correlation => write!(f, "correlation"),
            ScoreType::Effect => write!(f, "effect"),
        }
    }
}

impl std::str::FromStr for ScoreType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "p-value" => Ok(ScoreType::PValue),
            "q-value" => Ok(ScoreType::QValue),
            "binary" => Ok(ScoreType::Binary),
            "correlation" => Ok(ScoreType::Correlation),
            "effect" => Ok(ScoreType::Effect),
            _ => Err(format!("Invalid score type: {}", s)),
        }
    }
}

/// A geneset's score type together with its threshold bounds.
///
/// `threshold` is the upper bound. `threshold_low`, when present, turns the
/// threshold into an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenesetScoreType {
    pub score_type: ScoreType,
    pub threshold: f64,
    #[serde(default)]
    pub threshold_low: Option<f64>,
}

impl GenesetScoreType {
    pub fn new(score_type: ScoreType, threshold: f64) -> Self {
        Self {
            score_type,
            threshold,
            threshold_low: None,
        }
    }

    pub fn with_low(mut self, threshold_low: f64) -> Self {
        self.threshold_low = Some(threshold_low);
        self
    }

    /// Rejects a low bound above the high bound.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self.threshold_low {
            Some(low) if low > self.threshold => Err(DomainError::ThresholdOrder {
                low,
                high: self.threshold,
            }),
            _ => Ok(()),
        }
    }

    /// Threshold as stored in `geneset.gs_threshold`: `"low,high"` or `"high"`.
    pub fn threshold_as_db_string(&self) -> String {
        match self.threshold_low {
            Some(low) => format!("{},{}", format_score(low), format_score(self.threshold)),
            None => format_score(self.threshold),
        }
    }
}

/// Renders a score the way it is stored in text columns: whole numbers keep one
/// decimal place (`1.0`), everything else uses the shortest exact form.
pub(crate) fn format_score(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_type_codes() {
        assert_eq!(ScoreType::PValue.code(), 1);
        assert_eq!(ScoreType::Effect.code(), 5);
        assert_eq!(ScoreType::from_code(3).unwrap(), ScoreType::Binary);
        assert!(ScoreType::from_code(0).is_err());
    }

    #[test]
    fn test_threshold_db_string_without_low() {
        let score = GenesetScoreType::new(ScoreType::PValue, 0.05);
        assert_eq!(score.threshold_as_db_string(), "0.05");
    }

    #[test]
    fn test_threshold_db_string_with_low() {
        let score = GenesetScoreType::new(ScoreType::Effect, 2.0).with_low(0.5);
        assert_eq!(score.threshold_as_db_string(), "0.5,2.0");
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let score = GenesetScoreType::new(ScoreType::Correlation, 0.2).with_low(0.7);
        assert_eq!(
            score.validate(),
            Err(DomainError::ThresholdOrder {
                low: 0.7,
                high: 0.2
            })
        );
    }

    #[test]
    fn test_validate_accepts_equal_bounds() {
        let score = GenesetScoreType::new(ScoreType::Correlation, 0.2).with_low(0.2);
        assert!(score.validate().is_ok());
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(1.0), "1.0");
        assert_eq!(format_score(-3.0), "-3.0");
        assert_eq!(format_score(0.001), "0.001");
    }
}

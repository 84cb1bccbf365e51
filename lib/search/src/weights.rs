//! Score weights
//!
//! Fixed per-category weights for the tiered search. The defaults sum to 1.0;
//! custom weights are validated and re-normalized before use.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories that contribute to the match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoredField {
    Size,
    ValveType,
    PressureRating,
    Material,
    EndConnection,
}

impl ScoredField {
    pub const ALL: [ScoredField; 5] = [
        ScoredField::Size,
        ScoredField::ValveType,
        ScoredField::PressureRating,
        ScoredField::Material,
        ScoredField::EndConnection,
    ];

    /// Field name as it appears in query objects and explanations
    pub fn name(self) -> &'static str {
        match self {
            ScoredField::Size => "size",
            ScoredField::ValveType => "valveType",
            ScoredField::PressureRating => "pressureRating",
            ScoredField::Material => "material",
            ScoredField::EndConnection => "endConnection",
        }
    }
}

impl fmt::Display for ScoredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Weight of each scored category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreWeights {
    pub size: f32,
    pub valve_type: f32,
    pub pressure_rating: f32,
    pub material: f32,
    pub end_connection: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            size: 0.40,
            valve_type: 0.30,
            pressure_rating: 0.15,
            material: 0.10,
            end_connection: 0.05,
        }
    }
}

impl ScoreWeights {
    pub fn get(&self, field: ScoredField) -> f32 {
        match field {
            ScoredField::Size => self.size,
            ScoredField::ValveType => self.valve_type,
            ScoredField::PressureRating => self.pressure_rating,
            ScoredField::Material => self.material,
            ScoredField::EndConnection => self.end_connection,
        }
    }

    fn get_mut(&mut self, field: ScoredField) -> &mut f32 {
        match field {
            ScoredField::Size => &mut self.size,
            ScoredField::ValveType => &mut self.valve_type,
            ScoredField::PressureRating => &mut self.pressure_rating,
            ScoredField::Material => &mut self.material,
            ScoredField::EndConnection => &mut self.end_connection,
        }
    }

    pub fn total(&self) -> f32 {
        ScoredField::ALL.iter().map(|f| self.get(*f)).sum()
    }

    /// Validate the weights
    /// - Rejects negative or non-finite weights
    /// - Normalizes weights to sum to 1.0 if they don't
    pub fn validate_and_normalize(&mut self) -> Result<(), WeightError> {
        for field in ScoredField::ALL {
            let weight = self.get(field);
            if !weight.is_finite() {
                return Err(WeightError::NonFinite(field.name().to_string()));
            }
            if weight < 0.0 {
                return Err(WeightError::NegativeWeight(field.name().to_string()));
            }
        }

        let weight_sum = self.total();
        if weight_sum <= 0.0 {
            return Err(WeightError::ZeroTotalWeight);
        }

        if (weight_sum - 1.0).abs() > 0.001 {
            for field in ScoredField::ALL {
                *self.get_mut(field) /= weight_sum;
            }
        }

        Ok(())
    }
}

/// Errors that can occur during weight validation
#[derive(Debug, Clone, thiserror::Error)]
pub enum WeightError {
    #[error("Field '{0}' has negative weight")]
    NegativeWeight(String),

    #[error("Field '{0}' has a non-finite weight")]
    NonFinite(String),

    #[error("Total weight cannot be zero")]
    ZeroTotalWeight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = ScoreWeights::default();
        assert!((weights.total() - 1.0).abs() < 1e-6);
        assert_eq!(weights.get(ScoredField::Size), 0.40);
        assert_eq!(weights.get(ScoredField::EndConnection), 0.05);
    }

    #[test]
    fn test_normalization() {
        let mut weights = ScoreWeights {
            size: 2.0,
            valve_type: 2.0,
            pressure_rating: 0.0,
            material: 0.0,
            end_connection: 0.0,
        };
        weights.validate_and_normalize().unwrap();
        assert!((weights.total() - 1.0).abs() < 0.001);
        assert!((weights.size - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_negative_weight_error() {
        let mut weights = ScoreWeights {
            material: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            weights.validate_and_normalize(),
            Err(WeightError::NegativeWeight(field)) if field == "material"
        ));
    }

    #[test]
    fn test_zero_total_error() {
        let mut weights = ScoreWeights {
            size: 0.0,
            valve_type: 0.0,
            pressure_rating: 0.0,
            material: 0.0,
            end_connection: 0.0,
        };
        assert!(matches!(weights.validate_and_normalize(), Err(WeightError::ZeroTotalWeight)));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let weights: ScoreWeights = serde_json::from_str(r#"{"size": 0.5}"#).unwrap();
        assert_eq!(weights.size, 0.5);
        assert_eq!(weights.valve_type, 0.30);
    }
}

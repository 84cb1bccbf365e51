//! Weighted match scoring
//!
//! Scores a candidate against a canonical query. A category the query leaves
//! empty awards its full weight; a supplied category awards its weight only
//! on a match. A candidate missing the compared value does not match.

use crate::matching::{contains_either, pressure_sufficient, size_equals};
use crate::tier::Tier;
use crate::weights::{ScoreWeights, ScoredField, WeightError};
use specmatch_core::{extract_pressure, normalize_size, CandidateRecord, CanonicalQuery, Category};
use std::collections::BTreeMap;

/// Query values prepared once per search for scoring
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoringQuery {
    pub size: Option<String>,
    pub valve_type: Option<String>,
    pub pressure: Option<u64>,
    pub material: Option<String>,
    pub end_connection: Option<String>,
}

impl ScoringQuery {
    pub fn from_query(query: &CanonicalQuery) -> Self {
        let text = |category: Category| query.get(category).map(str::to_string);
        Self {
            size: query
                .get(Category::Size)
                .map(normalize_size)
                .filter(|s| !s.is_empty()),
            valve_type: text(Category::ValveType),
            pressure: query.get(Category::PressureRating).and_then(extract_pressure),
            material: text(Category::Material),
            end_connection: text(Category::EndConnection),
        }
    }

    pub fn is_constrained(&self, field: ScoredField) -> bool {
        match field {
            ScoredField::Size => self.size.is_some(),
            ScoredField::ValveType => self.valve_type.is_some(),
            ScoredField::PressureRating => self.pressure.is_some(),
            ScoredField::Material => self.material.is_some(),
            ScoredField::EndConnection => self.end_connection.is_some(),
        }
    }
}

/// Score of one candidate with per-field contributions
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    /// Weighted total rounded to two decimals
    pub score: f32,
    pub tier: Tier,
    /// Weighted contribution per field
    pub field_scores: BTreeMap<ScoredField, f32>,
    /// Supplied fields the candidate matched
    pub matched_fields: Vec<ScoredField>,
}

/// Computes weighted match scores
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    weights: ScoreWeights,
}

impl Scorer {
    pub fn new(mut weights: ScoreWeights) -> Result<Self, WeightError> {
        weights.validate_and_normalize()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Score a candidate
    ///
    /// Returns the rounded total, its tier and the per-field breakdown.
    pub fn score(&self, query: &ScoringQuery, record: &CandidateRecord) -> ScoreCard {
        let mut field_scores = BTreeMap::new();
        let mut matched_fields = Vec::new();
        let mut total = 0.0f32;

        for field in ScoredField::ALL {
            let weight = self.weights.get(field);
            let contribution = if !query.is_constrained(field) {
                weight
            } else if Self::field_matches(field, query, record) {
                matched_fields.push(field);
                weight
            } else {
                0.0
            };
            field_scores.insert(field, contribution);
            total += contribution;
        }

        let score = round2(total.clamp(0.0, 1.0));
        ScoreCard {
            score,
            tier: Tier::from_score(score),
            field_scores,
            matched_fields,
        }
    }

    fn field_matches(field: ScoredField, query: &ScoringQuery, record: &CandidateRecord) -> bool {
        let attrs = &record.attributes;
        match field {
            ScoredField::Size => match (&query.size, &attrs.size) {
                (Some(requested), Some(stored)) => size_equals(requested, stored),
                _ => false,
            },
            ScoredField::ValveType => {
                let stored = first_present(&[attrs.item.as_deref(), record.component_type.as_deref()]);
                match (&query.valve_type, stored) {
                    (Some(requested), Some(stored)) => contains_either(requested, stored),
                    _ => false,
                }
            }
            ScoredField::PressureRating => match (query.pressure, attrs.pressure_text()) {
                (Some(requested), Some(stored)) => pressure_sufficient(requested, stored),
                _ => false,
            },
            ScoredField::Material => match (&query.material, &attrs.body_material) {
                (Some(requested), Some(stored)) => contains_either(requested, stored),
                _ => false,
            },
            ScoredField::EndConnection => {
                let stored = first_present(&[attrs.connection_type.as_deref(), attrs.end_connection.as_deref()]);
                match (&query.end_connection, stored) {
                    (Some(requested), Some(stored)) => contains_either(requested, stored),
                    _ => false,
                }
            }
        }
    }
}

/// First non-blank value
fn first_present<'a>(values: &[Option<&'a str>]) -> Option<&'a str> {
    values
        .iter()
        .flatten()
        .copied()
        .find(|v| !v.trim().is_empty())
}

fn round2(score: f32) -> f32 {
    (score * 100.0).round() / 100.0
}

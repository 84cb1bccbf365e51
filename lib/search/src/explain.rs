//! Search output
//!
//! Scored results carry the full candidate projection plus the per-field
//! score breakdown, so callers can show why a record ranked where it did.

use crate::score::ScoreCard;
use crate::tier::Tier;
use crate::weights::ScoredField;
use serde::Serialize;
use specmatch_core::{CandidateRecord, ValveSpecRow};
use std::collections::BTreeMap;

/// A candidate annotated with its match score and tier
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    #[serde(flatten)]
    pub record: CandidateRecord,
    /// Weighted score in [0.0, 1.0], rounded to two decimals
    pub score: f32,
    pub tier: Tier,
    /// Per-field score contributions (already weighted)
    pub explain: BTreeMap<ScoredField, f32>,
    pub matched_fields: Vec<ScoredField>,
}

impl ScoredResult {
    pub fn new(record: CandidateRecord, card: ScoreCard) -> Self {
        Self {
            record,
            score: card.score,
            tier: card.tier,
            explain: card.field_scores,
            matched_fields: card.matched_fields,
        }
    }

    /// Record identifier as a string
    pub fn id_string(&self) -> String {
        self.record.id.to_string()
    }
}

/// Summary statistics for a search
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// Number of sources scanned
    pub sources: usize,
    /// Candidates read from all sources
    pub candidates: usize,
    /// Candidates that passed the strict filter
    pub filtered: usize,
    /// Results returned after truncation
    pub returned: usize,
    /// Score of best result
    pub best_score: f32,
    /// Returned results per tier
    pub tiers: BTreeMap<Tier, usize>,
}

impl SearchStats {
    /// Fill the result-derived fields from the ranked, truncated results
    pub fn record_results(&mut self, results: &[ScoredResult]) {
        self.returned = results.len();
        self.best_score = results.first().map(|r| r.score).unwrap_or(0.0);
        self.tiers.clear();
        for result in results {
            *self.tiers.entry(result.tier).or_insert(0) += 1;
        }
    }
}

/// Response structure for a tiered search
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub result: Vec<ScoredResult>,
    pub stats: SearchStats,
}

/// Response structure for a single-table search
#[derive(Debug, Clone, Serialize)]
pub struct LegacyResponse {
    /// Rendered predicate, for diagnostics
    pub predicate: String,
    pub parameters: Vec<String>,
    pub result: Vec<ValveSpecRow>,
}

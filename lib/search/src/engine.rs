//! Tiered scored search over heterogeneous component tables
//!
//! Linear pipeline per call: discover sources, project and union their
//! records, apply the strict filter, score, tier, rank, truncate. The engine
//! holds no mutable state; concurrent searches are independent.

use crate::explain::{ScoredResult, SearchResponse, SearchStats};
use crate::predicate::StrictFilter;
use crate::score::{Scorer, ScoringQuery};
use crate::source::{discover, SourceCatalog};
use crate::weights::{ScoreWeights, WeightError};
use ahash::AHashMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use specmatch_core::{CanonicalQuery, Result};
use std::cmp::Ordering;
use std::sync::Arc;

pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Per-call search options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    pub max_results: usize,
    /// Accepted for interface compatibility; filtering is always strict.
    /// Widening is done by the caller re-searching with a reduced query.
    pub relax_constraints: bool,
    /// Narrows discovery to the matching component table when one exists
    pub component_type: Option<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            relax_constraints: false,
            component_type: None,
        }
    }
}

impl SearchOptions {
    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    #[must_use]
    pub fn with_component_type(mut self, component_type: impl Into<String>) -> Self {
        self.component_type = Some(component_type.into());
        self
    }
}

/// Tiered scored search engine
#[derive(Clone)]
pub struct TieredSearch {
    catalog: Arc<dyn SourceCatalog>,
    scorer: Scorer,
}

impl TieredSearch {
    pub fn new(catalog: Arc<dyn SourceCatalog>) -> Self {
        Self {
            catalog,
            scorer: Scorer::default(),
        }
    }

    /// Engine with custom score weights, validated and normalized
    pub fn with_weights(catalog: Arc<dyn SourceCatalog>, weights: ScoreWeights) -> std::result::Result<Self, WeightError> {
        Ok(Self {
            catalog,
            scorer: Scorer::new(weights)?,
        })
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Ranked results for a canonical query
    pub fn search(&self, query: &CanonicalQuery, options: &SearchOptions) -> Result<Vec<ScoredResult>> {
        self.search_with_stats(query, options).map(|response| response.result)
    }

    /// Ranked results plus pipeline statistics.
    ///
    /// Results are ordered by score descending, then by record identifier
    /// descending, then by source name. Storage failures and strict-filter
    /// evaluation failures abort the whole search.
    pub fn search_with_stats(&self, query: &CanonicalQuery, options: &SearchOptions) -> Result<SearchResponse> {
        if options.relax_constraints {
            tracing::warn!("relax_constraints requested; strict filtering still applies");
        }

        let sources = discover(self.catalog.as_ref(), options.component_type.as_deref())?;
        let mut stats = SearchStats {
            sources: sources.len(),
            ..Default::default()
        };
        if sources.is_empty() {
            tracing::info!("no component tables found");
            return Ok(SearchResponse {
                result: Vec::new(),
                stats,
            });
        }

        let filter = StrictFilter::from_query(query);
        let scoring = ScoringQuery::from_query(query);
        let mut per_source: AHashMap<&str, usize> = AHashMap::new();
        let mut scored = Vec::new();

        for (position, source) in sources.iter().enumerate() {
            let records = source.scan()?;
            stats.candidates += records.len();
            for record in records {
                if !filter.evaluate(&record)? {
                    continue;
                }
                *per_source.entry(source.name()).or_insert(0) += 1;
                let card = self.scorer.score(&scoring, &record);
                scored.push((position, ScoredResult::new(record, card)));
            }
        }
        stats.filtered = scored.len();

        tracing::debug!(
            sources = stats.sources,
            candidates = stats.candidates,
            filtered = stats.filtered,
            predicates = filter.len(),
            ?per_source,
            "strict filter applied"
        );

        scored.sort_by(|(pos_a, a), (pos_b, b)| rank(a, *pos_a, b, *pos_b));
        let mut result: Vec<ScoredResult> = scored.into_iter().map(|(_, r)| r).collect();
        result.truncate(options.max_results);
        stats.record_results(&result);

        tracing::info!(
            returned = stats.returned,
            best_score = stats.best_score,
            "tiered search complete"
        );
        Ok(SearchResponse { result, stats })
    }
}

fn rank(a: &ScoredResult, pos_a: usize, b: &ScoredResult, pos_b: usize) -> Ordering {
    OrderedFloat(b.score)
        .cmp(&OrderedFloat(a.score))
        .then_with(|| b.record.id.cmp(&a.record.id))
        .then_with(|| pos_a.cmp(&pos_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RecordSource;
    use serde_json::json;
    use specmatch_core::{CandidateRecord, Category, ComponentDocument, Error};

    struct Table {
        name: String,
        docs: Vec<ComponentDocument>,
    }

    impl RecordSource for Table {
        fn name(&self) -> &str {
            &self.name
        }

        fn scan(&self) -> Result<Vec<CandidateRecord>> {
            Ok(self.docs.iter().filter_map(|d| d.project(&self.name)).collect())
        }
    }

    struct Store {
        tables: Vec<Arc<Table>>,
        fail: bool,
    }

    impl SourceCatalog for Store {
        fn table_names(&self) -> Result<Vec<String>> {
            if self.fail {
                return Err(Error::Storage("connection refused".into()));
            }
            Ok(self.tables.iter().map(|t| t.name.clone()).collect())
        }

        fn open(&self, name: &str) -> Result<Arc<dyn RecordSource>> {
            self.tables
                .iter()
                .find(|t| t.name == name)
                .map(|t| t.clone() as Arc<dyn RecordSource>)
                .ok_or_else(|| Error::SourceNotFound(name.to_string()))
        }
    }

    fn store(tables: Vec<(&str, Vec<ComponentDocument>)>) -> Arc<Store> {
        Arc::new(Store {
            tables: tables
                .into_iter()
                .map(|(name, docs)| Arc::new(Table { name: name.to_string(), docs }))
                .collect(),
            fail: false,
        })
    }

    fn doc(id: u64, component_type: &str, specs: serde_json::Value) -> ComponentDocument {
        ComponentDocument::new(id, specs).with_component_type(component_type)
    }

    #[test]
    fn test_scenario_b_size_exact() {
        let engine = TieredSearch::new(store(vec![(
            "ball_valve_specs",
            vec![
                doc(1, "Ball Valve", json!({"size": "6"})),
                doc(2, "Ball Valve", json!({"size": "16"})),
            ],
        )]));
        let query = CanonicalQuery::default().with(Category::Size, "6\"");
        let results = engine.search(&query, &SearchOptions::default()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id_string(), "1");
        assert_eq!(results[0].score, 1.0);
    }

    #[test]
    fn test_union_and_ranking() {
        let engine = TieredSearch::new(store(vec![
            (
                "gate_valve_specs",
                vec![
                    doc(1, "Gate Valve", json!({"size": "2", "body_material": "Brass"})),
                    doc(2, "Gate Valve", json!({"size": "2", "body_material": "Carbon Steel"})),
                ],
            ),
            ("ball_valve_specs", vec![doc(2, "Ball Valve", json!({"size": "2"}))]),
            ("valve_specs", vec![doc(9, "Gate Valve", json!({"size": "2"}))]),
        ]));
        let query = CanonicalQuery::default()
            .with(Category::Size, "2")
            .with(Category::ValveType, "gate");
        let response = engine.search_with_stats(&query, &SearchOptions::default()).unwrap();

        assert_eq!(response.stats.sources, 2);
        assert_eq!(response.stats.candidates, 3);
        let ids: Vec<_> = response.result.iter().map(|r| (r.record.source.as_str(), r.id_string())).collect();
        assert_eq!(ids, vec![("gate_valve_specs", "2".to_string()), ("gate_valve_specs", "1".to_string())]);
        assert!(response.result.iter().all(|r| r.tier.number() == 1));
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        let engine = TieredSearch::new(store(vec![
            ("b_specs", vec![doc(5, "Valve", json!({})), doc(7, "Valve", json!({}))]),
            ("a_specs", vec![doc(5, "Valve", json!({}))]),
        ]));
        let results = engine.search(&CanonicalQuery::default(), &SearchOptions::default()).unwrap();
        let order: Vec<_> = results
            .iter()
            .map(|r| format!("{}:{}", r.record.source, r.record.id))
            .collect();
        assert_eq!(order, vec!["b_specs:7", "a_specs:5", "b_specs:5"]);
    }

    #[test]
    fn test_truncates_to_max_results() {
        let docs = (1..=20).map(|i| doc(i, "Check Valve", json!({}))).collect();
        let engine = TieredSearch::new(store(vec![("check_valve_specs", docs)]));
        let options = SearchOptions::default().with_max_results(3);
        let results = engine.search(&CanonicalQuery::default(), &options).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].id_string(), "20");
    }

    #[test]
    fn test_no_sources_is_empty_not_error() {
        let engine = TieredSearch::new(store(vec![("valve_specs", vec![])]));
        let response = engine.search_with_stats(&CanonicalQuery::default(), &SearchOptions::default()).unwrap();
        assert!(response.result.is_empty());
        assert_eq!(response.stats.sources, 0);
    }

    #[test]
    fn test_storage_failure_propagates() {
        let engine = TieredSearch::new(Arc::new(Store { tables: vec![], fail: true }));
        let err = engine.search(&CanonicalQuery::default(), &SearchOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
    }

    #[test]
    fn test_pressure_cast_failure_fails_whole_search() {
        let engine = TieredSearch::new(store(vec![(
            "gate_valve_specs",
            vec![
                doc(1, "Gate Valve", json!({"pressure_class": "800"})),
                doc(2, "Gate Valve", json!({"pressure_class": "see datasheet"})),
            ],
        )]));
        let query = CanonicalQuery::default().with(Category::PressureRating, "800");
        let err = engine.search(&query, &SearchOptions::default()).unwrap_err();
        assert!(matches!(err, Error::PredicateEvaluation { .. }));
    }

    #[test]
    fn test_relax_flag_keeps_strict_filter() {
        let engine = TieredSearch::new(store(vec![(
            "gate_valve_specs",
            vec![doc(1, "Gate Valve", json!({"body_material": "Brass"}))],
        )]));
        let query = CanonicalQuery::default().with(Category::Material, "bronze");
        let options = SearchOptions {
            relax_constraints: true,
            ..Default::default()
        };
        assert!(engine.search(&query, &options).unwrap().is_empty());
    }

    #[test]
    fn test_component_hint_narrows_sources() {
        let engine = TieredSearch::new(store(vec![
            ("gate_valve_specs", vec![doc(1, "Gate Valve", json!({}))]),
            ("ball_valve_specs", vec![doc(2, "Ball Valve", json!({}))]),
        ]));
        let options = SearchOptions::default().with_component_type("Ball Valve");
        let results = engine.search(&CanonicalQuery::default(), &options).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].record.source, "ball_valve_specs");
    }
}

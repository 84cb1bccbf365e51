//! Façade tying synonym normalization to the search paths

use crate::engine::{SearchOptions, TieredSearch};
use crate::explain::{LegacyResponse, SearchResponse, ScoredResult};
use crate::legacy::LegacySearch;
use specmatch_core::{CanonicalQuery, Error, RawQuery, Result, SynonymNormalizer};

/// Raw query in, ranked results out
#[derive(Clone)]
pub struct SpecMatcher {
    normalizer: SynonymNormalizer,
    tiered: TieredSearch,
    legacy: Option<LegacySearch>,
}

impl SpecMatcher {
    pub fn new(normalizer: SynonymNormalizer, tiered: TieredSearch) -> Self {
        Self {
            normalizer,
            tiered,
            legacy: None,
        }
    }

    #[must_use]
    pub fn with_legacy(mut self, legacy: LegacySearch) -> Self {
        self.legacy = Some(legacy);
        self
    }

    pub fn normalizer(&self) -> &SynonymNormalizer {
        &self.normalizer
    }

    pub fn tiered(&self) -> &TieredSearch {
        &self.tiered
    }

    /// Canonical form of a raw query
    pub fn normalize(&self, raw: &RawQuery, options: &SearchOptions) -> CanonicalQuery {
        self.normalizer.normalize(raw, options.component_type.as_deref())
    }

    /// Normalize then run the tiered search
    pub fn search_raw(&self, raw: &RawQuery, options: &SearchOptions) -> Result<Vec<ScoredResult>> {
        self.search_raw_with_stats(raw, options).map(|response| response.result)
    }

    pub fn search_raw_with_stats(&self, raw: &RawQuery, options: &SearchOptions) -> Result<SearchResponse> {
        let query = self.normalize(raw, options);
        tracing::debug!(?query, "query normalized");
        self.tiered.search_with_stats(&query, options)
    }

    /// Single-table search on the re-keyed raw values.
    ///
    /// Raw spellings are kept so the compatibility catalog sees the input
    /// abbreviations (`gt`, `cs`) rather than synonym tags.
    pub fn search_legacy_raw(&self, raw: &RawQuery, max_results: usize) -> Result<LegacyResponse> {
        let legacy = self
            .legacy
            .as_ref()
            .ok_or_else(|| Error::SourceNotFound(crate::source::LEGACY_TABLE.to_string()))?;
        legacy.search_explained(&raw.rekey(), max_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{LegacyTable, RecordSource, SourceCatalog};
    use serde_json::json;
    use specmatch_core::{CandidateRecord, ComponentDocument, ValveSpecRow};
    use std::sync::Arc;

    struct OneTable(Vec<ComponentDocument>);

    impl RecordSource for OneTable {
        fn name(&self) -> &str {
            "gate_valve_specs"
        }

        fn scan(&self) -> Result<Vec<CandidateRecord>> {
            Ok(self.0.iter().filter_map(|d| d.project(self.name())).collect())
        }
    }

    struct Store(Arc<OneTable>);

    impl SourceCatalog for Store {
        fn table_names(&self) -> Result<Vec<String>> {
            Ok(vec!["gate_valve_specs".to_string()])
        }

        fn open(&self, _name: &str) -> Result<Arc<dyn RecordSource>> {
            Ok(self.0.clone())
        }
    }

    struct Rows(Vec<ValveSpecRow>);

    impl LegacyTable for Rows {
        fn rows(&self) -> Result<Vec<ValveSpecRow>> {
            Ok(self.0.clone())
        }
    }

    fn matcher() -> SpecMatcher {
        let table = OneTable(vec![
            ComponentDocument::new(1, json!({"seat_material": "PTFE", "body_material": "Stainless Steel"}))
                .with_component_type("Gate Valve"),
            ComponentDocument::new(2, json!({"seat_material": "EPDM", "body_material": "Stainless Steel"}))
                .with_component_type("Gate Valve"),
        ]);
        SpecMatcher::new(
            SynonymNormalizer::new(),
            TieredSearch::new(Arc::new(Store(Arc::new(table)))),
        )
    }

    #[test]
    fn test_search_raw_normalizes_synonyms() {
        let raw = RawQuery::new()
            .with("seat", "Teflon")
            .with("bodyMaterial", "SS")
            .with("valve_type", "Gate Valve");
        let results = matcher().search_raw(&raw, &SearchOptions::default()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id_string(), "1");
        assert_eq!(results[0].score, 1.0);
    }

    #[test]
    fn test_legacy_requires_table() {
        let err = matcher().search_legacy_raw(&RawQuery::new(), 5).unwrap_err();
        assert!(matches!(err, Error::SourceNotFound(_)));
    }

    #[test]
    fn test_legacy_uses_raw_spellings() {
        let rows = Rows(vec![ValveSpecRow {
            id: 1,
            valve_type: Some("Gate Valve".into()),
            body_material: Some("C.S.".into()),
            ..Default::default()
        }]);
        let matcher = matcher().with_legacy(LegacySearch::new(Arc::new(rows)));
        let raw = RawQuery::new().with("valve_type", "GT").with("body_material", "cs");
        let response = matcher.search_legacy_raw(&raw, 5).unwrap();
        assert_eq!(response.result.len(), 1);
    }
}

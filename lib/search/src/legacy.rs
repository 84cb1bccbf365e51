//! Search over the legacy single-table schema

use crate::explain::LegacyResponse;
use crate::source::LegacyTable;
use specmatch_core::{build_filter_with, CanonicalQuery, CompatibilityCatalog, Result, ValveSpecRow};
use std::cmp::Ordering;
use std::sync::Arc;

/// Exact/prefix hybrid search against one homogeneous table
#[derive(Clone)]
pub struct LegacySearch {
    table: Arc<dyn LegacyTable>,
    catalog: &'static CompatibilityCatalog,
}

impl LegacySearch {
    pub fn new(table: Arc<dyn LegacyTable>) -> Self {
        Self {
            table,
            catalog: CompatibilityCatalog::builtin(),
        }
    }

    /// Matching rows, most recently extracted first
    pub fn search(&self, query: &CanonicalQuery, max_results: usize) -> Result<Vec<ValveSpecRow>> {
        self.search_explained(query, max_results).map(|response| response.result)
    }

    /// Matching rows together with the rendered predicate
    pub fn search_explained(&self, query: &CanonicalQuery, max_results: usize) -> Result<LegacyResponse> {
        let filter = build_filter_with(self.catalog, query);
        let (predicate, parameters) = filter.sql();
        tracing::debug!(%predicate, params = parameters.len(), "single-table filter built");

        let mut rows = self.table.select(&filter)?;
        rows.sort_by(newest_first);
        rows.truncate(max_results);

        tracing::info!(returned = rows.len(), "single-table search complete");
        Ok(LegacyResponse {
            predicate,
            parameters,
            result: rows,
        })
    }
}

/// `extracted_at` descending with undated rows last, then id descending
fn newest_first(a: &ValveSpecRow, b: &ValveSpecRow) -> Ordering {
    match (&a.extracted_at, &b.extracted_at) {
        (Some(x), Some(y)) => y.cmp(x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| b.id.cmp(&a.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use specmatch_core::{Category, Error};

    struct Rows(Vec<ValveSpecRow>);

    impl LegacyTable for Rows {
        fn rows(&self) -> Result<Vec<ValveSpecRow>> {
            Ok(self.0.clone())
        }
    }

    struct Down;

    impl LegacyTable for Down {
        fn rows(&self) -> Result<Vec<ValveSpecRow>> {
            Err(Error::Storage("table locked".into()))
        }
    }

    fn row(id: u64, valve_type: &str, material: &str, day: Option<u32>) -> ValveSpecRow {
        ValveSpecRow {
            id,
            valve_type: Some(valve_type.into()),
            body_material: Some(material.into()),
            extracted_at: day.map(|d| Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_scenario_a_newest_first() {
        let search = LegacySearch::new(Arc::new(Rows(vec![
            row(1, "Gate Valve", "Forged Steel", Some(1)),
            row(2, "Gate Valve (Rising Stem)", "CS", Some(9)),
            row(3, "Ball Valve", "Forged Steel", Some(5)),
            row(4, "Gate Valve", "Carbon Steel", None),
        ])));
        let query = CanonicalQuery::default()
            .with(Category::ValveType, "gt")
            .with(Category::Material, "cs");
        let ids: Vec<u64> = search.search(&query, 10).unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 4]);
    }

    #[test]
    fn test_max_results() {
        let search = LegacySearch::new(Arc::new(Rows(
            (1..=5).map(|i| row(i, "Globe Valve", "Bronze", Some(i as u32))).collect(),
        )));
        let response = search.search_explained(&CanonicalQuery::default(), 2).unwrap();
        assert_eq!(response.predicate, "1=1");
        assert_eq!(response.result.iter().map(|r| r.id).collect::<Vec<_>>(), vec![5, 4]);
    }

    #[test]
    fn test_storage_error_propagates() {
        let search = LegacySearch::new(Arc::new(Down));
        assert!(matches!(search.search(&CanonicalQuery::default(), 10), Err(Error::Storage(_))));
    }
}

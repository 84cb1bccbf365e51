//! Record source seams
//!
//! The engine never builds physical queries across tables. Each component
//! table is a [`RecordSource`] that projects its own documents onto
//! [`CandidateRecord`]; a [`SourceCatalog`] enumerates them. The legacy
//! single-table schema is a [`LegacyTable`].

use specmatch_core::{BuiltFilter, CandidateRecord, Filter, Result, ValveSpecRow};
use std::sync::Arc;

/// Table-name suffix of component tables
pub const COMPONENT_TABLE_SUFFIX: &str = "_specs";

/// The legacy single-table schema, never treated as a component table
pub const LEGACY_TABLE: &str = "valve_specs";

/// One component table projected onto the common candidate shape
pub trait RecordSource: Send + Sync {
    fn name(&self) -> &str;

    /// All records that carry an attribute document
    fn scan(&self) -> Result<Vec<CandidateRecord>>;
}

/// Enumerates the component tables of a store
pub trait SourceCatalog: Send + Sync {
    /// Names of every table in the store
    fn table_names(&self) -> Result<Vec<String>>;

    fn open(&self, name: &str) -> Result<Arc<dyn RecordSource>>;
}

/// The legacy single-table schema
pub trait LegacyTable: Send + Sync {
    fn rows(&self) -> Result<Vec<ValveSpecRow>>;

    /// Rows satisfying a filter. Backends with a query engine can push
    /// `filter.sql()` down instead of scanning.
    fn select(&self, filter: &BuiltFilter) -> Result<Vec<ValveSpecRow>> {
        Ok(self
            .rows()?
            .into_iter()
            .filter(|row| filter.matches(row))
            .collect())
    }
}

pub fn is_component_table(name: &str) -> bool {
    name.ends_with(COMPONENT_TABLE_SUFFIX) && name != LEGACY_TABLE
}

/// Table name a component-type hint refers to: `Ball Valve` -> `ball_valve_specs`
pub fn table_for_component(component_type: &str) -> String {
    let stem = component_type
        .trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    format!("{}{}", stem, COMPONENT_TABLE_SUFFIX)
}

/// Component tables in name order.
///
/// A hint naming an existing table narrows discovery to it; an unknown hint
/// is ignored. No tables is an empty list, not an error.
pub fn discover(catalog: &dyn SourceCatalog, component_type: Option<&str>) -> Result<Vec<Arc<dyn RecordSource>>> {
    let mut names: Vec<String> = catalog
        .table_names()?
        .into_iter()
        .filter(|name| is_component_table(name))
        .collect();
    names.sort();
    names.dedup();

    if let Some(hint) = component_type.filter(|h| !h.trim().is_empty()) {
        let wanted = table_for_component(hint);
        if names.iter().any(|name| *name == wanted) {
            names = vec![wanted];
        } else {
            tracing::debug!(hint, table = %wanted, "no table for component type; searching all");
        }
    }

    names.iter().map(|name| catalog.open(name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use specmatch_core::Error;

    struct Names(Vec<&'static str>);

    struct Empty(String);

    impl RecordSource for Empty {
        fn name(&self) -> &str {
            &self.0
        }

        fn scan(&self) -> Result<Vec<CandidateRecord>> {
            Ok(Vec::new())
        }
    }

    impl SourceCatalog for Names {
        fn table_names(&self) -> Result<Vec<String>> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }

        fn open(&self, name: &str) -> Result<Arc<dyn RecordSource>> {
            if self.0.iter().any(|n| *n == name) {
                Ok(Arc::new(Empty(name.to_string())))
            } else {
                Err(Error::SourceNotFound(name.to_string()))
            }
        }
    }

    fn discovered(catalog: &Names, hint: Option<&str>) -> Vec<String> {
        discover(catalog, hint)
            .unwrap()
            .iter()
            .map(|s| s.name().to_string())
            .collect()
    }

    #[test]
    fn test_discovery_convention() {
        let catalog = Names(vec!["valve_specs", "gate_valve_specs", "ball_valve_specs", "jobs", "specs_archive"]);
        assert_eq!(discovered(&catalog, None), vec!["ball_valve_specs", "gate_valve_specs"]);
    }

    #[test]
    fn test_hint_narrows() {
        let catalog = Names(vec!["gate_valve_specs", "ball_valve_specs"]);
        assert_eq!(discovered(&catalog, Some("Ball Valve")), vec!["ball_valve_specs"]);
        assert_eq!(discovered(&catalog, Some("Strainer")).len(), 2);
    }

    #[test]
    fn test_no_tables_is_empty() {
        assert!(discovered(&Names(vec!["valve_specs"]), None).is_empty());
    }

    #[test]
    fn test_table_for_component() {
        assert_eq!(table_for_component(" Three-Way Valve "), "three_way_valve_specs");
        assert_eq!(table_for_component("ball_valve"), "ball_valve_specs");
    }
}

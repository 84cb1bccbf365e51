//! Query builder for the single-table schema
//!
//! Every supplied field becomes one predicate; predicates are ANDed.
//! Fields with a catalog mapping become exact `IN` tests so relational
//! backends can use their indexes. Unmapped valve types fall back to a
//! case-insensitive prefix match and other unmapped values to equality.

use crate::attribute::Category;
use crate::catalog::CompatibilityCatalog;
use crate::filter::{Column, Filter, FilterCondition};
use crate::normalize::normalize_size;
use crate::query::CanonicalQuery;
use crate::record::ValveSpecRow;

/// Conjunction of per-field predicates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltFilter {
    condition: FilterCondition,
}

impl BuiltFilter {
    pub fn condition(&self) -> &FilterCondition {
        &self.condition
    }

    /// Number of constrained fields
    pub fn len(&self) -> usize {
        match &self.condition {
            FilterCondition::And(parts) => parts.len(),
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(predicate, parameters)` for a relational backend. Unconstrained is `1=1`.
    pub fn sql(&self) -> (String, Vec<String>) {
        let mut params = Vec::new();
        let predicate = self.condition.write_sql(&mut params);
        (predicate, params)
    }
}

impl Filter for BuiltFilter {
    fn matches(&self, row: &ValveSpecRow) -> bool {
        self.condition.matches_row(row)
    }
}

/// Build the filter using the process-wide catalog
pub fn build_filter(query: &CanonicalQuery) -> BuiltFilter {
    build_filter_with(CompatibilityCatalog::builtin(), query)
}

pub fn build_filter_with(catalog: &CompatibilityCatalog, query: &CanonicalQuery) -> BuiltFilter {
    let mut parts = Vec::new();

    if let Some(valve_type) = query.get(Category::ValveType) {
        parts.push(match catalog.lookup(Category::ValveType, valve_type) {
            Some(forms) => FilterCondition::In {
                column: Column::ValveType,
                values: dedup(forms),
            },
            None => {
                let prefix = catalog.expand_abbreviation(valve_type.trim());
                tracing::debug!(valve_type, "unmapped valve type; using prefix match");
                FilterCondition::StartsWithIgnoreCase {
                    column: Column::ValveType,
                    prefix: prefix.into_owned(),
                }
            }
        });
    }

    if let Some(size) = query.get(Category::Size) {
        let raw = size.trim().to_string();
        let normalized = normalize_size(size);
        parts.push(FilterCondition::Or(vec![
            FilterCondition::Equals { column: Column::SizeNominal, value: raw },
            FilterCondition::Equals { column: Column::SizeNominal, value: normalized },
        ]));
    }

    if let Some(material) = query.get(Category::Material) {
        parts.push(FilterCondition::In {
            column: Column::BodyMaterial,
            values: catalog.expand(Category::Material, material),
        });
    }

    if let Some(pressure) = query.get(Category::PressureRating) {
        parts.push(FilterCondition::Or(vec![
            FilterCondition::Equals {
                column: Column::PressureClass,
                value: pressure.to_string(),
            },
            FilterCondition::IsNull { column: Column::PressureClass },
        ]));
    }

    if let Some(connection) = query.get(Category::EndConnection) {
        let forms = catalog.expand(Category::EndConnection, connection);
        parts.push(FilterCondition::Or(vec![
            FilterCondition::In { column: Column::EndConnectionInlet, values: forms.clone() },
            FilterCondition::In { column: Column::EndConnectionOutlet, values: forms },
        ]));
    }

    BuiltFilter {
        condition: FilterCondition::And(parts),
    }
}

fn dedup(forms: &[&str]) -> Vec<String> {
    let mut values: Vec<String> = Vec::with_capacity(forms.len());
    for form in forms {
        if !values.iter().any(|v| v == form) {
            values.push((*form).to_string());
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(valve_type: &str, material: &str) -> ValveSpecRow {
        ValveSpecRow {
            id: 1,
            valve_type: Some(valve_type.into()),
            body_material: Some(material.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_scenario_a() {
        let query = CanonicalQuery::default()
            .with(Category::ValveType, "gt")
            .with(Category::Material, "cs");
        let filter = build_filter(&query);

        let (sql, params) = filter.sql();
        assert_eq!(sql, "(valve_type IN ($1,$2,$3)) AND (body_material IN ($4,$5,$6,$7,$8))");
        assert_eq!(
            params,
            vec![
                "Gate Valve",
                "Gate Valve (Non-Rising Stem)",
                "Gate Valve (Rising Stem)",
                "Carbon Steel",
                "Forged Steel",
                "Forged Carbon Steel",
                "CS",
                "C.S."
            ]
        );

        assert!(filter.matches(&row("Gate Valve", "Forged Steel")));
        assert!(!filter.matches(&row("Globe Valve", "Forged Steel")));
        assert!(!filter.matches(&row("Gate Valve", "Brass")));
    }

    #[test]
    fn test_unmapped_valve_type_prefix() {
        let filter = build_filter(&CanonicalQuery::default().with(Category::ValveType, "Knife"));
        let (sql, params) = filter.sql();
        assert_eq!(sql, "(valve_type ILIKE $1)");
        assert_eq!(params, vec!["Knife%"]);
        assert!(filter.matches(&row("knife gate valve", "Ductile Iron")));
    }

    #[test]
    fn test_unmapped_material_equality() {
        let filter = build_filter(&CanonicalQuery::default().with(Category::Material, "Hastelloy"));
        assert!(filter.matches(&row("Ball Valve", "Hastelloy")));
        assert!(!filter.matches(&row("Ball Valve", "hastelloy c")));
    }

    #[test]
    fn test_size_raw_or_normalized() {
        let filter = build_filter(&CanonicalQuery::default().with(Category::Size, "1 1/2"));
        let (_, params) = filter.sql();
        assert_eq!(params, vec!["1 1/2", "1-1/2"]);

        let mut stored = row("Ball Valve", "Brass");
        stored.size_nominal = Some("1-1/2".into());
        assert!(filter.matches(&stored));
        stored.size_nominal = Some("1 1/2".into());
        assert!(filter.matches(&stored));
        stored.size_nominal = Some("11/2".into());
        assert!(!filter.matches(&stored));
    }

    #[test]
    fn test_pressure_absent_is_unconstrained() {
        let filter = build_filter(&CanonicalQuery::default().with(Category::PressureRating, "800"));
        let mut stored = row("Gate Valve", "CS");
        assert!(filter.matches(&stored));
        stored.pressure_class = Some("800".into());
        assert!(filter.matches(&stored));
        stored.pressure_class = Some("1500".into());
        assert!(!filter.matches(&stored));
    }

    #[test]
    fn test_connection_inlet_or_outlet() {
        let filter = build_filter(&CanonicalQuery::default().with(Category::EndConnection, "sw"));
        let mut stored = row("Gate Valve", "CS");
        stored.end_connection_outlet = Some("SWE".into());
        assert!(filter.matches(&stored));
        stored.end_connection_outlet = Some("Flanged".into());
        assert!(!filter.matches(&stored));
    }

    #[test]
    fn test_empty_query_matches_all() {
        let filter = build_filter(&CanonicalQuery::default());
        assert!(filter.is_empty());
        assert_eq!(filter.sql(), ("1=1".to_string(), vec![]));
        assert!(filter.matches(&ValveSpecRow::default()));
    }
}

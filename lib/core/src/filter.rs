// Single-table row filter: evaluates in-process and renders to parameterised SQL
use crate::record::ValveSpecRow;
use std::fmt;

pub trait Filter {
    fn matches(&self, row: &ValveSpecRow) -> bool;
}

/// Searchable columns of the legacy single-table schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    ValveType,
    SizeNominal,
    BodyMaterial,
    PressureClass,
    EndConnectionInlet,
    EndConnectionOutlet,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Column::ValveType => "valve_type",
            Column::SizeNominal => "size_nominal",
            Column::BodyMaterial => "body_material",
            Column::PressureClass => "pressure_class",
            Column::EndConnectionInlet => "end_connection_inlet",
            Column::EndConnectionOutlet => "end_connection_outlet",
        }
    }

    pub fn value(self, row: &ValveSpecRow) -> Option<&str> {
        let value = match self {
            Column::ValveType => &row.valve_type,
            Column::SizeNominal => &row.size_nominal,
            Column::BodyMaterial => &row.body_material,
            Column::PressureClass => &row.pressure_class,
            Column::EndConnectionInlet => &row.end_connection_inlet,
            Column::EndConnectionOutlet => &row.end_connection_outlet,
        };
        value.as_deref()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCondition {
    /// Exact, case-sensitive equality
    Equals { column: Column, value: String },
    /// Membership in a set of exact values
    In { column: Column, values: Vec<String> },
    /// Case-insensitive prefix match
    StartsWithIgnoreCase { column: Column, prefix: String },
    IsNull { column: Column },
    And(Vec<FilterCondition>),
    Or(Vec<FilterCondition>),
}

impl FilterCondition {
    pub fn matches_row(&self, row: &ValveSpecRow) -> bool {
        match self {
            FilterCondition::Equals { column, value } => {
                column.value(row).map(|v| v == value).unwrap_or(false)
            }
            FilterCondition::In { column, values } => column
                .value(row)
                .map(|v| values.iter().any(|candidate| candidate == v))
                .unwrap_or(false),
            FilterCondition::StartsWithIgnoreCase { column, prefix } => column
                .value(row)
                .map(|v| v.to_lowercase().starts_with(&prefix.to_lowercase()))
                .unwrap_or(false),
            FilterCondition::IsNull { column } => column.value(row).is_none(),
            FilterCondition::And(conditions) => conditions.iter().all(|c| c.matches_row(row)),
            FilterCondition::Or(conditions) => conditions.iter().any(|c| c.matches_row(row)),
        }
    }

    /// SQL predicate with `$n` placeholders; parameters are appended to `params`
    pub fn write_sql(&self, params: &mut Vec<String>) -> String {
        fn placeholder(params: &mut Vec<String>, value: String) -> String {
            params.push(value);
            format!("${}", params.len())
        }

        match self {
            FilterCondition::Equals { column, value } => {
                format!("{} = {}", column, placeholder(params, value.clone()))
            }
            FilterCondition::In { column, values } => {
                if values.is_empty() {
                    return "1=0".to_string();
                }
                let list: Vec<String> = values
                    .iter()
                    .map(|v| placeholder(params, v.clone()))
                    .collect();
                format!("{} IN ({})", column, list.join(","))
            }
            FilterCondition::StartsWithIgnoreCase { column, prefix } => {
                format!("{} ILIKE {}", column, placeholder(params, format!("{}%", prefix)))
            }
            FilterCondition::IsNull { column } => format!("{} IS NULL", column),
            FilterCondition::And(conditions) => join_sql(conditions, " AND ", "1=1", params),
            FilterCondition::Or(conditions) => join_sql(conditions, " OR ", "1=0", params),
        }
    }
}

fn join_sql(conditions: &[FilterCondition], sep: &str, empty: &str, params: &mut Vec<String>) -> String {
    if conditions.is_empty() {
        return empty.to_string();
    }
    let parts: Vec<String> = conditions
        .iter()
        .map(|c| format!("({})", c.write_sql(params)))
        .collect();
    parts.join(sep)
}

impl Filter for FilterCondition {
    fn matches(&self, row: &ValveSpecRow) -> bool {
        self.matches_row(row)
    }
}

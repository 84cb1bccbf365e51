//! Query objects
//!
//! A [`RawQuery`] is the flat key/value mapping received from callers, with
//! whatever historical key spellings they used. A [`CanonicalQuery`] has one
//! stable field per [`Category`]; absent fields are unconstrained.

use crate::attribute::Category;
use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Caller-supplied query fields in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawQuery {
    fields: IndexMap<String, String>,
}

impl RawQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build from a JSON object.
    ///
    /// Strings are kept verbatim, numbers and booleans are stringified,
    /// nulls are dropped. Nested values are rejected. Keys keep document order.
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::Serialization("query must be a JSON object".to_string()))?;

        let mut query = Self::new();
        for (key, value) in object {
            match value {
                Value::Null => {}
                Value::String(s) => query.insert(key.clone(), s.clone()),
                Value::Number(n) => query.insert(key.clone(), n.to_string()),
                Value::Bool(b) => query.insert(key.clone(), b.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(Error::Serialization(format!(
                        "query field '{}' must be a scalar",
                        key
                    )))
                }
            }
        }
        Ok(query)
    }

    /// Re-key fields to canonical names without touching values.
    ///
    /// Later spellings of the same category overwrite earlier ones.
    pub fn rekey(&self) -> CanonicalQuery {
        let mut canonical = CanonicalQuery::default();
        for (key, value) in self.iter() {
            if value.trim().is_empty() {
                continue;
            }
            match Category::from_field_key(key) {
                Some(category) => canonical.set(category, value),
                None => {
                    canonical.extra.insert(key.to_string(), value.to_string());
                }
            }
        }
        canonical
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawQuery {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut query = Self::new();
        for (k, v) in iter {
            query.insert(k, v);
        }
        query
    }
}

/// Query with one canonical field per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valve_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_connection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_rating: Option<String>,
    /// Fields outside the attribute categories, passed through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl CanonicalQuery {
    fn slot(&self, category: Category) -> &Option<String> {
        match category {
            Category::Size => &self.size,
            Category::ValveType => &self.valve_type,
            Category::Material => &self.material,
            Category::SeatMaterial => &self.seat_material,
            Category::EndConnection => &self.end_connection,
            Category::PressureRating => &self.pressure_rating,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<String> {
        match category {
            Category::Size => &mut self.size,
            Category::ValveType => &mut self.valve_type,
            Category::Material => &mut self.material,
            Category::SeatMaterial => &mut self.seat_material,
            Category::EndConnection => &mut self.end_connection,
            Category::PressureRating => &mut self.pressure_rating,
        }
    }

    /// Value for a category; blank values count as absent
    pub fn get(&self, category: Category) -> Option<&str> {
        self.slot(category)
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }

    pub fn set(&mut self, category: Category, value: impl Into<String>) {
        *self.slot_mut(category) = Some(value.into());
    }

    #[must_use]
    pub fn with(mut self, category: Category, value: impl Into<String>) -> Self {
        self.set(category, value);
        self
    }

    /// Copy of this query with one category unconstrained
    #[must_use]
    pub fn without(&self, category: Category) -> Self {
        let mut reduced = self.clone();
        *reduced.slot_mut(category) = None;
        reduced
    }

    pub fn is_constrained(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    /// Categories carrying a value, in [`Category::ALL`] order
    pub fn constrained(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.is_constrained(*c))
            .collect()
    }
}

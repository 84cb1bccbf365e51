//! Compatibility catalog
//!
//! Immutable mapping from an input token to every surface form that should
//! be treated as equivalent in stored data. Built once per process from the
//! static tables and shared by all readers without locking.
//!
//! Unmapped inputs degrade to themselves: `expand` never fails, it returns
//! `{input}` so callers fall back to literal matching.

use crate::attribute::Category;
use crate::classify;
use crate::tables::{self, Group};
use ahash::AHashMap;
use std::borrow::Cow;
use std::sync::OnceLock;

type FormTable = AHashMap<&'static str, &'static [&'static str]>;

static BUILTIN: OnceLock<CompatibilityCatalog> = OnceLock::new();

/// Lookup structure over the built-in compatibility groups
#[derive(Debug)]
pub struct CompatibilityCatalog {
    materials: FormTable,
    end_connections: FormTable,
    valve_types: FormTable,
    abbreviations: AHashMap<&'static str, &'static str>,
}

impl CompatibilityCatalog {
    /// Process-wide catalog, built on first use
    pub fn builtin() -> &'static CompatibilityCatalog {
        BUILTIN.get_or_init(|| {
            let catalog = Self::from_tables();
            tracing::debug!(
                materials = catalog.materials.len(),
                end_connections = catalog.end_connections.len(),
                valve_types = catalog.valve_types.len(),
                "compatibility catalog loaded"
            );
            catalog
        })
    }

    fn from_tables() -> Self {
        fn index(groups: &'static [Group]) -> FormTable {
            groups.iter().map(|(key, forms)| (*key, *forms)).collect()
        }

        Self {
            materials: index(tables::MATERIALS),
            end_connections: index(tables::END_CONNECTIONS),
            valve_types: index(tables::VALVE_TYPES),
            abbreviations: tables::VALVE_TYPE_ABBREVIATIONS.iter().copied().collect(),
        }
    }

    fn table(&self, category: Category) -> Option<&FormTable> {
        match category {
            Category::Material => Some(&self.materials),
            Category::EndConnection => Some(&self.end_connections),
            Category::ValveType => Some(&self.valve_types),
            _ => None,
        }
    }

    fn groups(category: Category) -> &'static [Group] {
        match category {
            Category::Material => tables::MATERIALS,
            Category::EndConnection => tables::END_CONNECTIONS,
            Category::ValveType => tables::VALVE_TYPES,
            _ => &[],
        }
    }

    /// Surface forms for an input, if the catalog knows it.
    ///
    /// The key is trimmed and lower-cased; valve-type abbreviations are
    /// expanded, and underscores are read as spaces when the literal key misses.
    pub fn lookup(&self, category: Category, input: &str) -> Option<&'static [&'static str]> {
        let table = self.table(category)?;
        let key = input.trim().to_lowercase();

        if let Some(forms) = table.get(key.as_str()) {
            return Some(*forms);
        }

        if category == Category::ValveType {
            if let Some(full) = self.abbreviations.get(key.as_str()) {
                if let Some(forms) = table.get(full.to_lowercase().as_str()) {
                    return Some(*forms);
                }
            }
        }

        let spaced = key.replace('_', " ");
        if spaced != key {
            return table.get(spaced.as_str()).copied();
        }
        None
    }

    pub fn has_mapping(&self, category: Category, input: &str) -> bool {
        self.lookup(category, input).is_some()
    }

    /// Equivalent surface forms to match against, or `[input]` when unmapped
    pub fn expand(&self, category: Category, input: &str) -> Vec<String> {
        match self.lookup(category, input) {
            Some(forms) => {
                let mut expanded: Vec<String> = Vec::with_capacity(forms.len());
                for form in forms {
                    if !expanded.iter().any(|f| f == form) {
                        expanded.push((*form).to_string());
                    }
                }
                expanded
            }
            None => vec![input.to_string()],
        }
    }

    /// Full valve-type name for an abbreviation, or the input unchanged
    pub fn expand_abbreviation<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self.abbreviations.get(input.trim().to_lowercase().as_str()) {
            Some(full) => Cow::Borrowed(*full),
            None => Cow::Borrowed(input),
        }
    }

    /// Lookup tokens of a category in table order
    pub fn keys(&self, category: Category) -> impl Iterator<Item = &'static str> {
        Self::groups(category).iter().map(|(key, _)| *key)
    }

    /// The spelling a token is expected to appear as in its own expansion
    pub fn primary_form(&self, category: Category, key: &str) -> String {
        match category {
            Category::ValveType => self.expand_abbreviation(key).into_owned(),
            _ => key.to_string(),
        }
    }

    /// Canonical group of a raw stored value by ordered keyword precedence
    pub fn classify(&self, category: Category, raw: &str) -> Option<&'static str> {
        classify::classify(category, raw)
    }
}

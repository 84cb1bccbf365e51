//! Synonym normalization
//!
//! Maps the many ways of writing a categorical value to one canonical tag:
//! "SS", "316SS" and "Stainless Steel" all become `stainless_steel`.
//!
//! Resolution per field:
//! 1. lower-case and trim the raw value
//! 2. exact token lookup
//! 3. first token (in table order) that is a substring of the value, or
//!    that the value is a substring of
//! 4. otherwise the value itself with spaces turned into underscores
//!
//! Only tokens of the field's own category are considered. The table is
//! built once from the curated set plus an optional learned supplement and
//! never changes afterwards.

use crate::attribute::Category;
use crate::query::{CanonicalQuery, RawQuery};
use crate::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Canonical tag and the category it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub canonical: String,
    pub category: Category,
}

impl SynonymEntry {
    pub fn new(canonical: impl Into<String>, category: Category) -> Self {
        Self {
            canonical: canonical.into(),
            category,
        }
    }
}

/// Source of learned synonym entries, consulted once at construction
pub trait SynonymProvider: Send + Sync {
    /// Label used in logs
    fn name(&self) -> &str;

    /// Entries in file order, keyed by lower-case token
    fn learned_synonyms(&self) -> Result<Vec<(String, SynonymEntry)>>;
}

const BUILTIN: &[(&str, &str, Category)] = &[
    ("stainless steel", "stainless_steel", Category::Material),
    ("stainless", "stainless_steel", Category::Material),
    ("ss", "stainless_steel", Category::Material),
    ("s.s.", "stainless_steel", Category::Material),
    ("316ss", "stainless_steel", Category::Material),
    ("304ss", "stainless_steel", Category::Material),
    ("316", "stainless_steel", Category::Material),
    ("304", "stainless_steel", Category::Material),
    ("carbon steel", "carbon_steel", Category::Material),
    ("carbon", "carbon_steel", Category::Material),
    ("cs", "carbon_steel", Category::Material),
    ("c.s.", "carbon_steel", Category::Material),
    ("brass", "brass", Category::Material),
    ("br", "brass", Category::Material),
    ("epdm", "epdm", Category::SeatMaterial),
    ("viton", "viton", Category::SeatMaterial),
    ("fkm", "viton", Category::SeatMaterial),
    ("nbr", "nbr", Category::SeatMaterial),
    ("nitrile", "nbr", Category::SeatMaterial),
    ("ptfe", "ptfe", Category::SeatMaterial),
    ("teflon", "ptfe", Category::SeatMaterial),
    ("socket-weld", "socket_weld", Category::EndConnection),
    ("socket weld", "socket_weld", Category::EndConnection),
    ("socket", "socket_weld", Category::EndConnection),
    ("sw", "socket_weld", Category::EndConnection),
    ("threaded", "threaded", Category::EndConnection),
    ("thread", "threaded", Category::EndConnection),
    ("npt", "threaded", Category::EndConnection),
    ("fnpt", "threaded", Category::EndConnection),
    ("mnpt", "threaded", Category::EndConnection),
    ("flanged", "flanged", Category::EndConnection),
    ("flange", "flanged", Category::EndConnection),
    ("flg", "flanged", Category::EndConnection),
    ("lug", "lug", Category::EndConnection),
    ("lugged", "lug", Category::EndConnection),
    ("wafer", "wafer", Category::EndConnection),
];

/// How a value was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Exact,
    Partial,
    /// Format-only normalization, no vocabulary hit
    Verbatim,
}

/// Ordered token -> entry table
#[derive(Debug, Clone)]
pub struct SynonymTable {
    entries: IndexMap<String, SynonymEntry>,
}

impl SynonymTable {
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(token, canonical, category)| {
                ((*token).to_string(), SynonymEntry::new(*canonical, *category))
            })
            .collect();
        Self { entries }
    }

    /// Merge learned entries: known tokens are replaced in place, new ones appended
    pub fn extend<I>(&mut self, learned: I) -> usize
    where
        I: IntoIterator<Item = (String, SynonymEntry)>,
    {
        let mut count = 0;
        for (token, entry) in learned {
            self.entries.insert(token.trim().to_lowercase(), entry);
            count += 1;
        }
        count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, token: &str) -> Option<&SynonymEntry> {
        self.entries.get(token)
    }

    /// Resolve one raw value within a category
    pub fn resolve(&self, category: Category, raw: &str) -> (String, Resolution) {
        let value = raw.trim().to_lowercase();

        if let Some(entry) = self.entries.get(&value).filter(|e| e.category == category) {
            return (entry.canonical.clone(), Resolution::Exact);
        }

        let partial = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.category == category)
            .find(|(token, _)| value.contains(token.as_str()) || token.contains(value.as_str()));
        if let Some((_, entry)) = partial {
            return (entry.canonical.clone(), Resolution::Partial);
        }

        (value.replace(' ', "_"), Resolution::Verbatim)
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Canonicalizes whole query objects
#[derive(Debug, Clone, Default)]
pub struct SynonymNormalizer {
    table: SynonymTable,
}

impl SynonymNormalizer {
    /// Normalizer over the curated table only
    pub fn new() -> Self {
        Self::default()
    }

    /// Curated table supplemented by a learned-synonym provider
    pub fn with_provider(provider: &dyn SynonymProvider) -> Result<Self> {
        let mut table = SynonymTable::builtin();
        let learned = provider.learned_synonyms()?;
        let merged = table.extend(learned);
        tracing::info!(
            provider = provider.name(),
            learned = merged,
            total = table.len(),
            "synonym table loaded"
        );
        Ok(Self { table })
    }

    pub fn from_table(table: SynonymTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &SynonymTable {
        &self.table
    }

    /// Canonicalize a raw query.
    ///
    /// Vocabulary fields are resolved and re-keyed; size is re-keyed with its
    /// value untouched; unknown keys pass through. The component-type hint is
    /// accepted for interface compatibility and does not change resolution.
    pub fn normalize(&self, query: &RawQuery, component_type: Option<&str>) -> CanonicalQuery {
        if let Some(hint) = component_type {
            tracing::trace!(hint, "component type hint ignored by synonym resolution");
        }

        let mut canonical = CanonicalQuery::default();
        for (key, value) in query.iter() {
            if value.trim().is_empty() {
                continue;
            }
            match Category::from_field_key(key) {
                Some(category) if category.uses_vocabulary() => {
                    let (resolved, how) = self.table.resolve(category, value);
                    if how == Resolution::Verbatim {
                        tracing::debug!(%category, value, "no synonym; keeping formatted value");
                    }
                    canonical.set(category, resolved);
                }
                Some(category) => canonical.set(category, value),
                None => {
                    canonical.extra.insert(key.to_string(), value.to_string());
                }
            }
        }
        canonical
    }
}

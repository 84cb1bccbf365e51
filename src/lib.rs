//! # specmatch
//!
//! Spec-matching and tiered search over valve and component catalogs.
//!
//! A free-form query such as `{"material": "SS", "size": "6\""}` is
//! canonicalized through a synonym table, expanded through a curated
//! compatibility catalog, and matched against stored records either strictly
//! (single-table path) or with weighted scores and tiers (multi-table path).
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! specmatch --data-dir ./tables search '{"valveType": "Gate Valve", "size": "2"}'
//! specmatch expand material cs
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use specmatch::prelude::*;
//! use std::sync::Arc;
//!
//! let store = MemoryStore::new();
//! store.push(
//!     "gate_valve_specs",
//!     ComponentDocument::new(1, serde_json::json!({"size": "2", "body_material": "Stainless Steel"})),
//! );
//!
//! let matcher = SpecMatcher::new(SynonymNormalizer::new(), TieredSearch::new(Arc::new(store)));
//! let query = RawQuery::new().with("size", "2\"").with("material", "SS");
//! let results = matcher.search_raw(&query, &SearchOptions::default()).unwrap();
//! ```
//!
//! ## Crate Structure
//!
//! - [`specmatch-core`](https://docs.rs/specmatch-core) - Value normalization, compatibility catalog, synonyms, query builder
//! - [`specmatch-search`](https://docs.rs/specmatch-search) - Weighted scoring, tiers, tiered and single-table search
//! - [`specmatch-storage`](https://docs.rs/specmatch-storage) - In-memory, JSON-directory and LMDB tables

pub mod config;
pub mod relax;

pub use config::EngineConfig;
pub use relax::{search_relaxed, RelaxedResponse, RELAX_ORDER};

// Re-export core types
pub use specmatch_core::{
    build_filter, classify, normalize, suggest_groups, CandidateRecord, CanonicalQuery, Category,
    CompatibilityCatalog, ComponentDocument, Error, Filter, FilterCondition, RawQuery, Result,
    SynonymNormalizer, SynonymProvider, ValveSpecRow,
};

// Re-export search
pub use specmatch_search::{
    LegacySearch, LegacyTable, RecordSource, ScoreWeights, ScoredResult, SearchOptions, SearchResponse,
    SourceCatalog, SpecMatcher, Tier, TieredSearch,
};

// Re-export storage
pub use specmatch_storage::{open_store, Backend, JsonDirStore, KnowledgeBaseFile, LmdbStore, MemoryStore, Store};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CanonicalQuery, Category, CompatibilityCatalog, ComponentDocument, EngineConfig, Error,
        MemoryStore, RawQuery, Result, ScoredResult, SearchOptions, SpecMatcher, SynonymNormalizer,
        Tier, TieredSearch,
    };
}

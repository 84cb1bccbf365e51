//! # specmatch Search
//!
//! Tiered, weighted scoring search over heterogeneous component tables,
//! plus the exact/prefix search over the legacy single-table schema.
//!
//! ## Features
//!
//! - **Record sources**: one [`RecordSource`] per component table, enumerated by a [`SourceCatalog`]
//! - **Strict filter**: hard per-field predicates, failing closed on unreadable pressure data
//! - **Weighted scoring**: size 0.40, valve type 0.30, pressure 0.15, material 0.10, connection 0.05
//! - **Tiers**: ordinal buckets derived from the rounded score
//! - **Explainability**: per-field contribution breakdown for every result
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Synonym    │────>│   Strict    │────>│   Scorer    │
//! │ Normalizer  │     │   Filter    │     │  + Tiers    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            ^                   │
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │   Record    │     │    Rank +   │
//!                     │   Sources   │     │   Explain   │
//!                     └─────────────┘     └─────────────┘
//! ```

pub mod engine;
pub mod explain;
pub mod legacy;
pub mod matcher;
pub mod matching;
pub mod predicate;
pub mod score;
pub mod source;
pub mod tier;
pub mod weights;

// Re-export main types for convenience
pub use engine::{SearchOptions, TieredSearch, DEFAULT_MAX_RESULTS};
pub use explain::{LegacyResponse, ScoredResult, SearchResponse, SearchStats};
pub use legacy::LegacySearch;
pub use matcher::SpecMatcher;
pub use predicate::StrictFilter;
pub use score::{ScoreCard, Scorer, ScoringQuery};
pub use source::{
    discover, is_component_table, table_for_component, LegacyTable, RecordSource, SourceCatalog,
    COMPONENT_TABLE_SUFFIX, LEGACY_TABLE,
};
pub use tier::Tier;
pub use weights::{ScoreWeights, ScoredField, WeightError};

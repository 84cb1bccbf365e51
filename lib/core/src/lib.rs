//! # specmatch Core
//!
//! Core library for the specmatch catalog search engine.
//!
//! This crate provides attribute canonicalization and the single-table filter:
//!
//! - [`normalize`] - syntactic size and pressure normalization
//! - [`CompatibilityCatalog`] - curated surface-form expansion per category
//! - [`SynonymNormalizer`] - category-aware synonym resolution over query objects
//! - [`build_filter`] - exact/prefix hybrid filter for the single-table schema
//! - [`ComponentDocument`] / [`CandidateRecord`] - multi-table record projection
//!
//! ## Example
//!
//! ```rust
//! use specmatch_core::{build_filter, Category, RawQuery, SynonymNormalizer};
//!
//! let raw = RawQuery::new().with("body_material", "SS").with("size", "1 1/2");
//! let query = SynonymNormalizer::new().normalize(&raw, None);
//! assert_eq!(query.get(Category::Material), Some("stainless_steel"));
//!
//! let (predicate, params) = build_filter(&query).sql();
//! assert!(predicate.contains("body_material IN"));
//! assert!(params.contains(&"316SS".to_string()));
//! ```

pub mod attribute;
pub mod builder;
pub mod catalog;
pub mod classify;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod query;
pub mod record;
pub mod synonym;

/// Built-in compatibility tables
pub mod tables;

pub use attribute::Category;
pub use builder::{build_filter, build_filter_with, BuiltFilter};
pub use catalog::CompatibilityCatalog;
pub use classify::{classify, suggest_groups, GroupSuggestions};
pub use error::{Error, Result};
pub use filter::{Column, Filter, FilterCondition};
pub use normalize::{extract_pressure, fold, normalize, normalize_size, size_magnitude, NormalizedValue};
pub use query::{CanonicalQuery, RawQuery};
pub use record::{AttributeProjection, CandidateRecord, ComponentDocument, RecordId, ValveSpecRow};
pub use synonym::{Resolution, SynonymEntry, SynonymNormalizer, SynonymProvider, SynonymTable};

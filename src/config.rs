//! Engine configuration

use serde::{Deserialize, Serialize};
use specmatch_core::{Error, Result, SynonymNormalizer};
use specmatch_search::{LegacySearch, ScoreWeights, SearchOptions, SpecMatcher, TieredSearch, DEFAULT_MAX_RESULTS};
use specmatch_storage::{KnowledgeBaseFile, Store};
use std::path::{Path, PathBuf};

/// Settings for building a [`SpecMatcher`].
///
/// Loaded from JSON; every field is optional:
///
/// ```json
/// { "maxResults": 25, "weights": { "size": 0.5 }, "synonyms": "kb.json" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub max_results: usize,
    pub weights: ScoreWeights,
    /// Learned-synonym knowledge base
    pub synonyms: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            weights: ScoreWeights::default(),
            synonyms: None,
        }
    }
}

impl EngineConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::default().with_max_results(self.max_results)
    }

    /// Normalizer with the learned synonyms, when a file is configured
    pub fn normalizer(&self) -> Result<SynonymNormalizer> {
        match &self.synonyms {
            Some(path) => SynonymNormalizer::with_provider(&KnowledgeBaseFile::new(path)),
            None => Ok(SynonymNormalizer::new()),
        }
    }

    /// Wire the store's tables into a matcher
    pub fn build_matcher(&self, store: &Store) -> Result<SpecMatcher> {
        let tiered = TieredSearch::with_weights(store.catalog.clone(), self.weights)
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        Ok(SpecMatcher::new(self.normalizer()?, tiered).with_legacy(LegacySearch::new(store.legacy.clone())))
    }
}

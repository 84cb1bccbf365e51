// Learned synonyms from a knowledge-base JSON file
use indexmap::IndexMap;
use serde::Deserialize;
use specmatch_core::{Category, Error, Result, SynonymEntry, SynonymProvider};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct KnowledgeBase {
    #[serde(default)]
    synonyms: IndexMap<String, LearnedEntry>,
}

#[derive(Debug, Deserialize)]
struct LearnedEntry {
    canonical: String,
    category: String,
}

/// File of the form `{"synonyms": {"<token>": {"canonical": "...", "category": "..."}}}`.
///
/// Entries keep file order. A missing file yields no entries.
pub struct KnowledgeBaseFile {
    path: PathBuf,
}

impl KnowledgeBaseFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SynonymProvider for KnowledgeBaseFile {
    fn name(&self) -> &str {
        "knowledge_base"
    }

    fn learned_synonyms(&self) -> Result<Vec<(String, SynonymEntry)>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no learned synonym file");
            return Ok(Vec::new());
        }

        let bytes = std::fs::read(&self.path)?;
        let kb: KnowledgeBase = serde_json::from_slice(&bytes)
            .map_err(|e| Error::InvalidSynonyms(format!("{}: {}", self.path.display(), e)))?;

        kb.synonyms
            .into_iter()
            .map(|(token, entry)| {
                let category: Category = entry.category.parse().map_err(|_| {
                    Error::InvalidSynonyms(format!(
                        "token {:?} has unknown category {:?}",
                        token, entry.category
                    ))
                })?;
                Ok((token, SynonymEntry::new(entry.canonical, category)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specmatch_core::{RawQuery, SynonymNormalizer, SynonymTable};
    use tempfile::TempDir;

    #[test]
    fn test_learned_synonyms_extend_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kb.json");
        std::fs::write(
            &path,
            r#"{"synonyms": {
                "A105N": {"canonical": "carbon_steel", "category": "material"},
                "rptfe": {"canonical": "ptfe", "category": "seat_material"}
            }}"#,
        )
        .unwrap();

        let learned = KnowledgeBaseFile::new(&path).learned_synonyms().unwrap();
        assert_eq!(learned.len(), 2);
        assert_eq!(learned[0].0, "A105N");
        assert_eq!(learned[1].1.category, Category::SeatMaterial);

        let normalizer = SynonymNormalizer::with_provider(&KnowledgeBaseFile::new(&path)).unwrap();
        assert_eq!(normalizer.table().len(), SynonymTable::builtin().len() + 2);
        let query = normalizer.normalize(&RawQuery::new().with("material", "a105n"), None);
        assert_eq!(query.material.as_deref(), Some("carbon_steel"));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let kb = KnowledgeBaseFile::new(dir.path().join("absent.json"));
        assert!(kb.learned_synonyms().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kb.json");
        std::fs::write(&path, r#"{"synonyms": {"x": {"canonical": "y", "category": "color"}}}"#).unwrap();
        let err = KnowledgeBaseFile::new(&path).learned_synonyms().unwrap_err();
        assert!(matches!(err, Error::InvalidSynonyms(_)));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kb.json");
        std::fs::write(&path, "[1, 2").unwrap();
        assert!(matches!(
            KnowledgeBaseFile::new(&path).learned_synonyms(),
            Err(Error::InvalidSynonyms(_))
        ));
    }
}

// Directory of JSON table files: one `<table>.json` array per table
use crate::validate_table_name;
use atomicwrites::{AllowOverwrite, AtomicFile};
use serde::de::DeserializeOwned;
use serde::Serialize;
use specmatch_core::{CandidateRecord, ComponentDocument, Error, Result, ValveSpecRow};
use specmatch_search::{LegacyTable, RecordSource, SourceCatalog, LEGACY_TABLE};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const TABLE_EXTENSION: &str = "json";

pub struct JsonDirStore {
    root: PathBuf,
}

impl JsonDirStore {
    /// Open a directory of table files, creating it when missing
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn table_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, TABLE_EXTENSION))
    }

    /// Replace a component table's contents
    pub fn write_table(&self, name: &str, docs: &[ComponentDocument]) -> Result<()> {
        validate_table_name(name)?;
        write_json(&self.table_path(name), docs)?;
        tracing::debug!(table = name, rows = docs.len(), "table written");
        Ok(())
    }

    /// Replace the legacy single table's contents
    pub fn write_legacy(&self, rows: &[ValveSpecRow]) -> Result<()> {
        write_json(&self.table_path(LEGACY_TABLE), rows)
    }

    pub fn legacy_table(&self) -> JsonLegacyTable {
        JsonLegacyTable {
            path: self.table_path(LEGACY_TABLE),
        }
    }
}

impl SourceCatalog for JsonDirStore {
    fn table_names(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.root)
            .map_err(|e| Error::Storage(format!("{}: {}", self.root.display(), e)))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(TABLE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn open(&self, name: &str) -> Result<Arc<dyn RecordSource>> {
        let path = self.table_path(name);
        if !path.is_file() {
            return Err(Error::SourceNotFound(name.to_string()));
        }
        Ok(Arc::new(JsonTable {
            name: name.to_string(),
            path,
        }))
    }
}

/// Component table file, read on every scan
pub struct JsonTable {
    name: String,
    path: PathBuf,
}

impl RecordSource for JsonTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn scan(&self) -> Result<Vec<CandidateRecord>> {
        let docs: Vec<ComponentDocument> = read_json(&self.path)?;
        Ok(docs.iter().filter_map(|doc| doc.project(&self.name)).collect())
    }
}

/// Legacy table file; a missing file is an empty table
pub struct JsonLegacyTable {
    path: PathBuf,
}

impl LegacyTable for JsonLegacyTable {
    fn rows(&self) -> Result<Vec<ValveSpecRow>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        read_json(&self.path)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let bytes = std::fs::read(path).map_err(|e| Error::Storage(format!("{}: {}", path.display(), e)))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| Error::Serialization(format!("{}: {}", path.display(), e)))
}

fn write_json<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let data = serde_json::to_vec_pretty(rows)?;
    AtomicFile::new(path, AllowOverwrite)
        .write(|f| f.write_all(&data))
        .map_err(|e| Error::Storage(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use specmatch_search::discover;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_scan() {
        let dir = TempDir::new().unwrap();
        let store = JsonDirStore::new(dir.path()).unwrap();
        store
            .write_table(
                "gate_valve_specs",
                &[
                    ComponentDocument::new(1, json!({"size": "2", "item": "Gate Valve"})),
                    ComponentDocument {
                        tech_specs: None,
                        ..ComponentDocument::new(2, json!({}))
                    },
                ],
            )
            .unwrap();

        let records = store.open("gate_valve_specs").unwrap().scan().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].attributes.item.as_deref(), Some("Gate Valve"));
    }

    #[test]
    fn test_discovery_ignores_other_files() {
        let dir = TempDir::new().unwrap();
        let store = JsonDirStore::new(dir.path()).unwrap();
        store.write_table("ball_valve_specs", &[]).unwrap();
        store.write_legacy(&[]).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let names: Vec<String> = discover(&store, None)
            .unwrap()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["ball_valve_specs"]);
    }

    #[test]
    fn test_legacy_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonDirStore::new(dir.path()).unwrap();
        assert!(store.legacy_table().rows().unwrap().is_empty());

        store
            .write_legacy(&[ValveSpecRow {
                id: 4,
                valve_type: Some("Ball Valve".into()),
                ..Default::default()
            }])
            .unwrap();
        assert_eq!(store.legacy_table().rows().unwrap()[0].id, 4);
    }

    #[test]
    fn test_corrupt_table_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonDirStore::new(dir.path()).unwrap();
        std::fs::write(dir.path().join("gate_valve_specs.json"), "{not json").unwrap();
        let err = store.open("gate_valve_specs").unwrap().scan().unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_invalid_table_name() {
        let dir = TempDir::new().unwrap();
        let store = JsonDirStore::new(dir.path()).unwrap();
        assert!(matches!(store.write_table("../x", &[]), Err(Error::InvalidConfig(_))));
    }
}

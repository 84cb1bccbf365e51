//! Table backends for specmatch: in-memory, a directory of JSON files, and LMDB.
//!
//! Each backend is a [`SourceCatalog`] of component tables plus a
//! [`LegacyTable`] for the single-table schema.

pub mod json_dir;
pub mod learned;
pub mod lmdb;
pub mod memory;

pub use json_dir::{JsonDirStore, JsonLegacyTable, JsonTable};
pub use learned::KnowledgeBaseFile;
pub use lmdb::{LmdbLegacyTable, LmdbStore, LmdbTable};
pub use memory::{MemoryLegacyTable, MemoryStore, MemoryTable};

use serde::{Deserialize, Serialize};
use specmatch_core::{Error, Result};
use specmatch_search::{LegacyTable, SourceCatalog};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// On-disk table format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Json,
    Lmdb,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Json => f.write_str("json"),
            Backend::Lmdb => f.write_str("lmdb"),
        }
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Backend::Json),
            "lmdb" => Ok(Backend::Lmdb),
            other => Err(Error::InvalidConfig(format!("unknown backend: {}", other))),
        }
    }
}

/// Opened tables: the component catalog and the legacy table
#[derive(Clone)]
pub struct Store {
    pub catalog: Arc<dyn SourceCatalog>,
    pub legacy: Arc<dyn LegacyTable>,
}

/// Open the tables under `dir` with the given backend
pub fn open_store<P: AsRef<Path>>(backend: Backend, dir: P) -> Result<Store> {
    let dir = dir.as_ref();
    tracing::info!(%backend, path = %dir.display(), "opening tables");
    match backend {
        Backend::Json => {
            let store = JsonDirStore::new(dir)?;
            let legacy = Arc::new(store.legacy_table());
            Ok(Store {
                catalog: Arc::new(store),
                legacy,
            })
        }
        Backend::Lmdb => {
            let store = LmdbStore::new(dir)?;
            let legacy = Arc::new(store.legacy_table());
            Ok(Store {
                catalog: Arc::new(store),
                legacy,
            })
        }
    }
}

/// Table names end up in file names and record keys
pub(crate) fn validate_table_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!("invalid table name: {:?}", name)))
    }
}

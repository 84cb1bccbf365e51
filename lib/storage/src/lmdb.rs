// LMDB-backed component tables
use crate::validate_table_name;
use heed::types::{Bytes, Str};
use heed::{Database, Env, EnvOpenOptions};
use specmatch_core::{CandidateRecord, ComponentDocument, Error, Result, ValveSpecRow};
use specmatch_search::{LegacyTable, RecordSource, SourceCatalog, LEGACY_TABLE};
use std::path::Path;
use std::sync::Arc;

const DB_TABLES: &str = "tables";
const DB_RECORDS: &str = "records";
const DEFAULT_MAP_SIZE: usize = 1024 * 1024 * 1024; // 1GB

type RecordDb = Database<Str, Bytes>;

fn backend<E: std::fmt::Display>(e: E) -> Error {
    Error::Storage(e.to_string())
}

fn record_key(table: &str, id: &str) -> String {
    format!("{}:{}", table, id)
}

fn table_prefix(table: &str) -> String {
    format!("{}:", table)
}

pub struct LmdbStore {
    env: Arc<Env>,
    tables_db: RecordDb,
    records_db: RecordDb,
}

impl LmdbStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_map_size(path, DEFAULT_MAP_SIZE)
    }

    pub fn with_map_size<P: AsRef<Path>>(path: P, map_size: usize) -> Result<Self> {
        std::fs::create_dir_all(&path)?;

        let env = Arc::new(unsafe {
            EnvOpenOptions::new()
                .map_size(map_size)
                .max_dbs(4)
                .open(path)
                .map_err(backend)?
        });

        let mut wtxn = env.write_txn().map_err(backend)?;
        let tables_db = env
            .create_database(&mut wtxn, Some(DB_TABLES))
            .map_err(backend)?;
        let records_db = env
            .create_database(&mut wtxn, Some(DB_RECORDS))
            .map_err(backend)?;
        wtxn.commit().map_err(backend)?;

        Ok(Self {
            env,
            tables_db,
            records_db,
        })
    }

    /// Register an empty component table
    pub fn create_table(&self, name: &str) -> Result<()> {
        validate_table_name(name)?;
        let mut wtxn = self.env.write_txn().map_err(backend)?;
        self.tables_db.put(&mut wtxn, name, &[]).map_err(backend)?;
        wtxn.commit().map_err(backend)
    }

    /// Insert or replace one document, registering its table
    pub fn put_document(&self, table: &str, doc: &ComponentDocument) -> Result<()> {
        self.put_documents(table, std::slice::from_ref(doc))
    }

    /// Insert or replace documents in one transaction
    pub fn put_documents(&self, table: &str, docs: &[ComponentDocument]) -> Result<()> {
        validate_table_name(table)?;
        let mut wtxn = self.env.write_txn().map_err(backend)?;
        self.tables_db.put(&mut wtxn, table, &[]).map_err(backend)?;
        for doc in docs {
            let data = serde_json::to_vec(doc)?;
            self.records_db
                .put(&mut wtxn, &record_key(table, &doc.id.to_string()), &data)
                .map_err(backend)?;
        }
        wtxn.commit().map_err(backend)?;
        tracing::debug!(table, documents = docs.len(), "documents stored");
        Ok(())
    }

    pub fn delete_document(&self, table: &str, id: &str) -> Result<bool> {
        let mut wtxn = self.env.write_txn().map_err(backend)?;
        let existed = self
            .records_db
            .delete(&mut wtxn, &record_key(table, id))
            .map_err(backend)?;
        wtxn.commit().map_err(backend)?;
        Ok(existed)
    }

    /// Insert or replace a legacy row, keyed so that scans return id order
    pub fn put_legacy_row(&self, row: &ValveSpecRow) -> Result<()> {
        let mut wtxn = self.env.write_txn().map_err(backend)?;
        let data = serde_json::to_vec(row)?;
        self.records_db
            .put(&mut wtxn, &legacy_key(row.id), &data)
            .map_err(backend)?;
        wtxn.commit().map_err(backend)
    }

    pub fn legacy_table(&self) -> LmdbLegacyTable {
        LmdbLegacyTable {
            env: self.env.clone(),
            records_db: self.records_db,
        }
    }
}

fn legacy_key(id: u64) -> String {
    record_key(LEGACY_TABLE, &format!("{:020}", id))
}

impl SourceCatalog for LmdbStore {
    fn table_names(&self) -> Result<Vec<String>> {
        let rtxn = self.env.read_txn().map_err(backend)?;
        let mut names = Vec::new();
        for result in self.tables_db.iter(&rtxn).map_err(backend)? {
            let (key, _) = result.map_err(backend)?;
            names.push(key.to_string());
        }
        Ok(names)
    }

    fn open(&self, name: &str) -> Result<Arc<dyn RecordSource>> {
        let rtxn = self.env.read_txn().map_err(backend)?;
        if self.tables_db.get(&rtxn, name).map_err(backend)?.is_none() {
            return Err(Error::SourceNotFound(name.to_string()));
        }
        Ok(Arc::new(LmdbTable {
            name: name.to_string(),
            env: self.env.clone(),
            records_db: self.records_db,
        }))
    }
}

pub struct LmdbTable {
    name: String,
    env: Arc<Env>,
    records_db: RecordDb,
}

impl RecordSource for LmdbTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn scan(&self) -> Result<Vec<CandidateRecord>> {
        let rtxn = self.env.read_txn().map_err(backend)?;
        let prefix = table_prefix(&self.name);
        let mut records = Vec::new();
        for result in self.records_db.prefix_iter(&rtxn, &prefix).map_err(backend)? {
            let (_, data) = result.map_err(backend)?;
            let doc: ComponentDocument = serde_json::from_slice(data)?;
            if let Some(record) = doc.project(&self.name) {
                records.push(record);
            }
        }
        Ok(records)
    }
}

pub struct LmdbLegacyTable {
    env: Arc<Env>,
    records_db: RecordDb,
}

impl LegacyTable for LmdbLegacyTable {
    fn rows(&self) -> Result<Vec<ValveSpecRow>> {
        let rtxn = self.env.read_txn().map_err(backend)?;
        let prefix = table_prefix(LEGACY_TABLE);
        let mut rows = Vec::new();
        for result in self.records_db.prefix_iter(&rtxn, &prefix).map_err(backend)? {
            let (_, data) = result.map_err(backend)?;
            rows.push(serde_json::from_slice(data)?);
        }
        Ok(rows)
    }
}

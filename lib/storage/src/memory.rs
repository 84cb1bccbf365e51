// In-memory tables, for tests, benchmarks and embedding callers that already hold their data
use parking_lot::RwLock;
use specmatch_core::{CandidateRecord, ComponentDocument, Error, Result, ValveSpecRow};
use specmatch_search::{LegacyTable, RecordSource, SourceCatalog};
use std::collections::BTreeMap;
use std::sync::Arc;

/// One component table held in memory
pub struct MemoryTable {
    name: String,
    docs: RwLock<Vec<ComponentDocument>>,
}

impl MemoryTable {
    pub fn new(name: impl Into<String>, docs: Vec<ComponentDocument>) -> Self {
        Self {
            name: name.into(),
            docs: RwLock::new(docs),
        }
    }

    pub fn push(&self, doc: ComponentDocument) {
        self.docs.write().push(doc);
    }

    pub fn len(&self) -> usize {
        self.docs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordSource for MemoryTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn scan(&self) -> Result<Vec<CandidateRecord>> {
        let docs = self.docs.read();
        Ok(docs.iter().filter_map(|doc| doc.project(&self.name)).collect())
    }
}

/// Legacy single table held in memory
#[derive(Default)]
pub struct MemoryLegacyTable {
    rows: RwLock<Vec<ValveSpecRow>>,
}

impl MemoryLegacyTable {
    pub fn new(rows: Vec<ValveSpecRow>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    pub fn push(&self, row: ValveSpecRow) {
        self.rows.write().push(row);
    }
}

impl LegacyTable for MemoryLegacyTable {
    fn rows(&self) -> Result<Vec<ValveSpecRow>> {
        Ok(self.rows.read().clone())
    }
}

/// Set of named in-memory tables
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<BTreeMap<String, Arc<MemoryTable>>>,
    legacy: Arc<MemoryLegacyTable>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace a table
    pub fn insert_table(&self, name: impl Into<String>, docs: Vec<ComponentDocument>) -> Arc<MemoryTable> {
        let name = name.into();
        let table = Arc::new(MemoryTable::new(name.clone(), docs));
        self.tables.write().insert(name, table.clone());
        table
    }

    /// Append a document, creating the table on first use
    pub fn push(&self, table: &str, doc: ComponentDocument) {
        let existing = self.tables.read().get(table).cloned();
        match existing {
            Some(t) => t.push(doc),
            None => {
                self.insert_table(table, vec![doc]);
            }
        }
    }

    pub fn legacy(&self) -> Arc<MemoryLegacyTable> {
        self.legacy.clone()
    }
}

impl SourceCatalog for MemoryStore {
    fn table_names(&self) -> Result<Vec<String>> {
        Ok(self.tables.read().keys().cloned().collect())
    }

    fn open(&self, name: &str) -> Result<Arc<dyn RecordSource>> {
        self.tables
            .read()
            .get(name)
            .map(|t| t.clone() as Arc<dyn RecordSource>)
            .ok_or_else(|| Error::SourceNotFound(name.to_string()))
    }
}

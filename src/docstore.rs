use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::persist;

/// A document as supplied by callers: external identity plus indexable text
/// and display metadata. The indexer reads these fields and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub doc_id: String,
    pub title: String,
    pub body: String,
    pub url: String,
    pub timestamp: i64,
    pub lang: String,
}

/// A small persistent document repository keyed by external id.
///
/// Deduplicates on ingestion; enumeration order is insertion order, so a
/// rebuild from `all()` is reproducible. Same single-writer model and snapshot
/// mechanics as the index store.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentStore {
    #[serde(default)]
    docs: Vec<Document>,
    #[serde(default)]
    by_id: HashMap<String, usize>,
    #[serde(skip)]
    path: PathBuf,
}

impl DocumentStore {
    /// Load the snapshot at `path`, or start empty when none exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut store: DocumentStore = persist::read_snapshot(path)?.unwrap_or_default();
        store.path = path.to_path_buf();
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn get(&self, doc_id: &str) -> Option<&Document> {
        self.by_id.get(doc_id).map(|&i| &self.docs[i])
    }

    /// All documents in insertion order.
    pub fn all(&self) -> &[Document] {
        &self.docs
    }

    /// Add documents, skipping any external id already present. Returns the
    /// number newly added. Persists only when `persist` is set and something
    /// was actually added.
    pub fn add_documents<I>(&mut self, docs: I, persist: bool) -> Result<usize>
    where
        I: IntoIterator<Item = Document>,
    {
        let mut added = 0;
        for doc in docs {
            if self.by_id.contains_key(&doc.doc_id) {
                continue;
            }
            self.by_id.insert(doc.doc_id.clone(), self.docs.len());
            self.docs.push(doc);
            added += 1;
        }
        if persist && added > 0 {
            self.save()?;
        }
        Ok(added)
    }

    pub fn save(&self) -> Result<()> {
        persist::write_snapshot(&self.path, self)
    }
}

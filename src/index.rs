use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::persist;

/// Dense internal document id, assigned from zero in indexing order and never
/// reused.
pub type DocId = u32;

/// One posting: a term occurs `freq` times in document `doc_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub freq: u32,
}

/// Display/filtering metadata kept alongside the index, keyed by internal id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocMeta {
    pub title: String,
    pub url: String,
    pub timestamp: i64,
    pub lang: String,
}

fn zero_version() -> String {
    "0".to_string()
}

/// The in-memory inverted index plus its snapshot persistence.
///
/// Mutation goes through the [`crate::indexer`] module, which maintains the
/// cross-field invariants: postings and positions cover the same (term, doc)
/// pairs, the two id maps stay mutual inverses, and internal ids stay
/// contiguous from zero. Everything else in the crate only reads.
///
/// Single writer at a time; there is no internal locking.
///
/// Snapshots are JSON so that loading a snapshot written by an older schema
/// works: fields absent from the stored bytes fall back to their defaults
/// (`serde(default)`), with the version marker defaulting to `"0"`.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexStore {
    /// Term -> postings, appended in internal-id order.
    #[serde(default)]
    pub(crate) postings: HashMap<String, Vec<Posting>>,
    /// Term -> internal id -> zero-based token offsets within the document.
    #[serde(default)]
    pub(crate) positions: HashMap<String, HashMap<DocId, Vec<u32>>>,
    /// Token count per document, including zero-token documents.
    #[serde(default)]
    pub(crate) doc_len: HashMap<DocId, u32>,
    /// External id -> internal id, and its inverse below.
    #[serde(default)]
    pub(crate) doc_id_map: HashMap<String, DocId>,
    #[serde(default)]
    pub(crate) reverse_doc_id_map: HashMap<DocId, String>,
    #[serde(default)]
    pub(crate) doc_metadata: HashMap<DocId, DocMeta>,
    /// Monotonically increasing integer string, bumped once per mutation.
    #[serde(default = "zero_version")]
    pub(crate) index_version: String,
    #[serde(skip)]
    path: PathBuf,
}

impl Default for IndexStore {
    fn default() -> Self {
        IndexStore {
            postings: HashMap::new(),
            positions: HashMap::new(),
            doc_len: HashMap::new(),
            doc_id_map: HashMap::new(),
            reverse_doc_id_map: HashMap::new(),
            doc_metadata: HashMap::new(),
            index_version: zero_version(),
            path: PathBuf::new(),
        }
    }
}

impl IndexStore {
    /// Load the snapshot at `path`, or start empty when none exists yet.
    ///
    /// An absent file is not an error; a file that exists but does not parse
    /// is [`crate::Error::Corrupt`]. A parseable snapshot from an older schema
    /// gets its missing fields filled with defaults.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut store: IndexStore = persist::read_snapshot(path)?.unwrap_or_default();
        if store.index_version.is_empty() {
            store.index_version = zero_version();
        }
        store.path = path.to_path_buf();
        tracing::debug!(
            path = %store.path.display(),
            version = %store.index_version,
            docs = store.doc_id_map.len(),
            "opened index store"
        );
        Ok(store)
    }

    /// Persist the whole structure to the store's snapshot path. Atomic from
    /// the caller's perspective: a failed save leaves any prior snapshot
    /// intact.
    pub fn save(&self) -> Result<()> {
        persist::write_snapshot(&self.path, self)
    }

    /// Increment the version marker and return the new value. A marker that is
    /// not an integer string self-heals to `"1"` instead of failing, restarting
    /// a fresh monotonic sequence.
    pub fn bump_version(&mut self) -> &str {
        self.index_version = match self.index_version.parse::<u64>() {
            Ok(v) => (v + 1).to_string(),
            Err(_) => "1".to_string(),
        };
        &self.index_version
    }

    pub(crate) fn clear(&mut self) {
        self.postings.clear();
        self.positions.clear();
        self.doc_len.clear();
        self.doc_id_map.clear();
        self.reverse_doc_id_map.clear();
        self.doc_metadata.clear();
    }

    /// Current version marker.
    pub fn version(&self) -> &str {
        &self.index_version
    }

    pub fn num_docs(&self) -> usize {
        self.doc_id_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_id_map.is_empty()
    }

    /// All indexed terms, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Posting sequence for a term, in internal-id order.
    pub fn postings(&self, term: &str) -> Option<&[Posting]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    /// Token offsets of `term` within document `doc_id`.
    pub fn positions(&self, term: &str, doc_id: DocId) -> Option<&[u32]> {
        self.positions
            .get(term)
            .and_then(|per_doc| per_doc.get(&doc_id))
            .map(Vec::as_slice)
    }

    pub fn doc_len(&self, doc_id: DocId) -> Option<u32> {
        self.doc_len.get(&doc_id).copied()
    }

    pub fn metadata(&self, doc_id: DocId) -> Option<&DocMeta> {
        self.doc_metadata.get(&doc_id)
    }

    pub fn internal_id(&self, external_id: &str) -> Option<DocId> {
        self.doc_id_map.get(external_id).copied()
    }

    pub fn external_id(&self, doc_id: DocId) -> Option<&str> {
        self.reverse_doc_id_map.get(&doc_id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_bump_is_monotonic() {
        let mut store = IndexStore::default();
        assert_eq!(store.version(), "0");
        assert_eq!(store.bump_version(), "1");
        assert_eq!(store.bump_version(), "2");
    }

    #[test]
    fn corrupt_version_self_heals() {
        let mut store = IndexStore::default();
        store.index_version = "not-a-number".to_string();
        assert_eq!(store.bump_version(), "1");
        assert_eq!(store.bump_version(), "2");
    }
}

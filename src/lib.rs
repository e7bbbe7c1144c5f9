//! minidex is the indexing core of a small text search engine.
//!
//! Raw documents go in; a queryable inverted index comes out: term postings,
//! per-document position lists, document lengths, display metadata, and the
//! mapping between caller-supplied external ids and dense internal ids. The
//! whole structure persists as a single snapshot after every mutation. Query
//! parsing, scoring, and serving live elsewhere; this crate only builds and
//! maintains the index.
//!
//! Single-writer model: nothing in here locks. Run at most one mutating
//! operation at a time against a given store, and serialize access externally
//! (a mutex or a single-threaded actor) if concurrent callers exist. Reads
//! during a mutation may observe partial state.

pub mod docstore;
pub mod error;
pub mod index;
pub mod indexer;
pub mod persist;
pub mod tokenizer;

pub use docstore::{Document, DocumentStore};
pub use error::{Error, Result};
pub use index::{DocId, DocMeta, IndexStore, Posting};
pub use indexer::{build_index, update_index, IndexSummary};
pub use tokenizer::Analyzer;

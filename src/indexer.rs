use std::collections::HashMap;

use crate::docstore::Document;
use crate::error::Result;
use crate::index::{DocId, DocMeta, IndexStore, Posting};
use crate::tokenizer::Analyzer;

/// Outcome of a build or update: the resulting version marker, how many
/// documents were newly indexed, and how many were skipped as duplicates.
/// Skips are silent otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    pub version: String,
    pub indexed: usize,
    pub skipped: usize,
}

/// Rebuild the whole index from scratch.
///
/// Clears every structure, then assigns internal ids from zero in iteration
/// order. Within the batch the first occurrence of an external id wins and
/// later duplicates are dropped silently. Always bumps the version and
/// persists, even when zero documents were accepted: a rebuild is an
/// unconditional reset. An error from the persist step means the rebuild did
/// not complete.
pub fn build_index<I>(analyzer: &Analyzer, docs: I, index: &mut IndexStore) -> Result<IndexSummary>
where
    I: IntoIterator<Item = Document>,
{
    index.clear();

    let mut indexed = 0;
    let mut skipped = 0;
    for doc in docs {
        if index.doc_id_map.contains_key(&doc.doc_id) {
            skipped += 1;
            continue;
        }
        let internal_id = index.doc_id_map.len() as DocId;
        index.doc_id_map.insert(doc.doc_id.clone(), internal_id);
        index.reverse_doc_id_map.insert(internal_id, doc.doc_id.clone());
        index_one(analyzer, &doc, internal_id, index);
        indexed += 1;
    }

    index.bump_version();
    index.save()?;
    tracing::info!(indexed, skipped, version = %index.version(), "rebuilt index");
    Ok(IndexSummary {
        version: index.version().to_string(),
        indexed,
        skipped,
    })
}

/// Incrementally add documents that are not already indexed.
///
/// Existing state is kept; internal ids continue the dense sequence. A
/// document whose external id is already present is skipped, so re-submitting
/// a batch is idempotent. The version is bumped and the snapshot written only
/// when at least one document was newly accepted; a no-op batch touches
/// neither memory nor disk.
pub fn update_index<I>(analyzer: &Analyzer, docs: I, index: &mut IndexStore) -> Result<IndexSummary>
where
    I: IntoIterator<Item = Document>,
{
    let mut indexed = 0;
    let mut skipped = 0;
    for doc in docs {
        if index.doc_id_map.contains_key(&doc.doc_id) {
            skipped += 1;
            continue;
        }
        let internal_id = index.doc_id_map.len() as DocId;
        index.doc_id_map.insert(doc.doc_id.clone(), internal_id);
        index.reverse_doc_id_map.insert(internal_id, doc.doc_id.clone());
        index_one(analyzer, &doc, internal_id, index);
        indexed += 1;
    }

    if indexed > 0 {
        index.bump_version();
        index.save()?;
        tracing::info!(indexed, skipped, version = %index.version(), "updated index");
    } else {
        tracing::debug!(skipped, "update batch added nothing");
    }
    Ok(IndexSummary {
        version: index.version().to_string(),
        indexed,
        skipped,
    })
}

/// Record one document: token count, per-term posting and position list, and
/// the metadata snapshot. Assumes the id maps already contain `internal_id`.
///
/// A document that tokenizes to nothing is still recorded (length 0, metadata
/// present, no postings).
fn index_one(analyzer: &Analyzer, doc: &Document, internal_id: DocId, index: &mut IndexStore) {
    let tokens = analyzer.tokenize(&format!("{} {}", doc.title, doc.body));
    index.doc_len.insert(internal_id, tokens.len() as u32);

    let mut occurrences: HashMap<String, Vec<u32>> = HashMap::new();
    for (pos, term) in tokens.into_iter().enumerate() {
        occurrences.entry(term).or_default().push(pos as u32);
    }

    for (term, offsets) in occurrences {
        let freq = offsets.len() as u32;
        index.postings.entry(term.clone()).or_default().push(Posting {
            doc_id: internal_id,
            freq,
        });
        index.positions.entry(term).or_default().insert(internal_id, offsets);
    }

    index.doc_metadata.insert(
        internal_id,
        DocMeta {
            title: doc.title.clone(),
            url: doc.url.clone(),
            timestamp: doc.timestamp,
            lang: doc.lang.clone(),
        },
    );
}

use minidex::{Document, DocumentStore};
use std::fs;
use tempfile::tempdir;

fn doc(id: &str, title: &str) -> Document {
    Document {
        doc_id: id.to_string(),
        title: title.to_string(),
        body: format!("body of {id}"),
        url: format!("https://example.com/{id}"),
        timestamp: 1_700_000_000,
        lang: "en".to_string(),
    }
}

#[test]
fn deduplicates_and_keeps_insertion_order() {
    let dir = tempdir().unwrap();
    let mut store = DocumentStore::open(dir.path().join("docs.json")).unwrap();

    let added = store
        .add_documents(
            vec![doc("a", "first"), doc("b", "second"), doc("a", "later duplicate")],
            false,
        )
        .unwrap();

    assert_eq!(added, 2);
    assert_eq!(store.len(), 2);
    let ids: Vec<&str> = store.all().iter().map(|d| d.doc_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(store.get("a").unwrap().title, "first");
    assert!(store.get("missing").is_none());
}

#[test]
fn persists_and_reloads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("docs.json");

    let mut store = DocumentStore::open(&path).unwrap();
    store
        .add_documents(vec![doc("a", "first"), doc("b", "second")], true)
        .unwrap();

    let reopened = DocumentStore::open(&path).unwrap();
    assert_eq!(reopened, store);
}

#[test]
fn duplicate_only_batch_does_not_rewrite_the_snapshot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("docs.json");

    let mut store = DocumentStore::open(&path).unwrap();
    store.add_documents(vec![doc("a", "first")], true).unwrap();
    let before = fs::read(&path).unwrap();

    let added = store.add_documents(vec![doc("a", "again")], true).unwrap();
    assert_eq!(added, 0);
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn open_without_snapshot_starts_empty() {
    let dir = tempdir().unwrap();
    let store = DocumentStore::open(dir.path().join("absent.json")).unwrap();
    assert!(store.is_empty());
}

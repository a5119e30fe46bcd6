//! Tests for the RealWordStore service

use chrono::{Duration, Utc};

use crate::services::word_store::RealWordStore;
use crate::traits::WordStore;
use shared::StoredWord;

/// Insert `words` spaced one second apart so ordering is deterministic
async fn populate(store: &RealWordStore, words: &[&str]) -> Vec<StoredWord> {
    let base = Utc::now();
    let mut records = Vec::new();
    for (i, word) in words.iter().enumerate() {
        let record = store
            .insert(word, base + Duration::seconds(i as i64))
            .await
            .unwrap();
        records.push(record);
    }
    records
}

#[tokio::test]
async fn test_insert_assigns_sequential_ids() {
    let store = RealWordStore::in_memory();
    let records = populate(&store, &["Abcdef1g", "Hijklm2n"]).await;

    assert_eq!(records[0].id, 1);
    assert_eq!(records[1].id, 2);
    assert_eq!(records[0].word, "Abcdef1g");
}

#[tokio::test]
async fn test_exists_reflects_inserts() {
    let store = RealWordStore::in_memory();
    assert!(!store.exists("Abcdef1g").await.unwrap());

    populate(&store, &["Abcdef1g"]).await;
    assert!(store.exists("Abcdef1g").await.unwrap());
    assert!(!store.exists("abcdef1g").await.unwrap(), "exists is exact");
}

#[tokio::test]
async fn test_duplicate_insert_is_rejected() {
    let store = RealWordStore::in_memory();
    populate(&store, &["Abcdef1g"]).await;

    let err = store.insert("Abcdef1g", Utc::now()).await.unwrap_err();
    assert!(err.is_duplicate());
}

#[tokio::test]
async fn test_search_filters_case_insensitively() {
    let store = RealWordStore::in_memory();
    populate(&store, &["Passw0rd", "Abcdef1g", "passW0rt"]).await;

    let results = store.search(Some("PASS"), 1, 10).await.unwrap();
    assert_eq!(results.total_count, 2);
    let words: Vec<&str> = results.items.iter().map(|r| r.word.as_str()).collect();
    assert!(words.contains(&"Passw0rd"));
    assert!(words.contains(&"passW0rt"));
}

#[tokio::test]
async fn test_blank_term_matches_everything() {
    let store = RealWordStore::in_memory();
    populate(&store, &["Abcdef1g", "Hijklm2n"]).await;

    assert_eq!(store.search(None, 1, 10).await.unwrap().total_count, 2);
    assert_eq!(store.search(Some("   "), 1, 10).await.unwrap().total_count, 2);
}

#[tokio::test]
async fn test_search_orders_newest_first() {
    let store = RealWordStore::in_memory();
    populate(&store, &["Abcdef1g", "Hijklm2n", "Opqrst3u"]).await;

    let results = store.search(None, 1, 10).await.unwrap();
    let words: Vec<&str> = results.items.iter().map(|r| r.word.as_str()).collect();
    assert_eq!(words, vec!["Opqrst3u", "Hijklm2n", "Abcdef1g"]);
}

#[tokio::test]
async fn test_search_paginates_one_indexed() {
    let store = RealWordStore::in_memory();
    populate(&store, &["Abcdef1g", "Hijklm2n", "Opqrst3u", "Vwxyz4aB"]).await;

    let page1 = store.search(None, 1, 3).await.unwrap();
    assert_eq!(page1.items.len(), 3);
    assert_eq!(page1.total_count, 4);
    assert!(page1.has_next_page());

    let page2 = store.search(None, 2, 3).await.unwrap();
    assert_eq!(page2.items.len(), 1);
    assert_eq!(page2.items[0].word, "Abcdef1g");
    assert!(!page2.has_next_page());
}

#[tokio::test]
async fn test_page_below_one_is_clamped() {
    let store = RealWordStore::in_memory();
    populate(&store, &["Abcdef1g", "Hijklm2n"]).await;

    let clamped = store.search(None, 0, 10).await.unwrap();
    assert_eq!(clamped.page, 1);
    assert_eq!(clamped.items.len(), 2);
}

#[tokio::test]
async fn test_huge_page_number_yields_an_empty_page() {
    let store = RealWordStore::in_memory();
    populate(&store, &["Abcdef1g", "Hijklm2n"]).await;

    let results = store.search(None, usize::MAX, 10).await.unwrap();
    assert!(results.items.is_empty());
    assert_eq!(results.total_count, 2);
}

#[tokio::test]
async fn test_journal_replay_preserves_words_and_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.jsonl");

    {
        let store = RealWordStore::open(&path).await.unwrap();
        populate(&store, &["Abcdef1g", "Hijklm2n"]).await;
    }

    let reopened = RealWordStore::open(&path).await.unwrap();
    assert!(reopened.exists("Abcdef1g").await.unwrap());
    assert!(reopened.exists("Hijklm2n").await.unwrap());

    // Duplicates stay rejected and id assignment continues past the journal
    assert!(reopened
        .insert("Abcdef1g", Utc::now())
        .await
        .unwrap_err()
        .is_duplicate());
    let third = reopened.insert("Opqrst3u", Utc::now()).await.unwrap();
    assert_eq!(third.id, 3);
}

#[tokio::test]
async fn test_corrupt_journal_line_fails_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.jsonl");
    tokio::fs::write(&path, "not json\n").await.unwrap();

    let err = RealWordStore::open(&path).await.unwrap_err();
    assert!(matches!(err, shared::StoreError::InvalidRecord { line: 1 }));
}

//! Service trait definitions for dependency injection
//!
//! The persistence gateway is abstracted behind this trait so the submission
//! core can be tested against mocks and the binary wired to the real store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use shared::{PagedResult, StoreResult, StoredWord};

/// Durable store of accepted words, with `word` unique across the store.
///
/// Implementations own all synchronization and may be called concurrently
/// from multiple submissions.
#[mockall::automock]
#[async_trait]
pub trait WordStore: Send + Sync {
    /// Check whether a word has already been recorded
    async fn exists(&self, word: &str) -> StoreResult<bool>;

    /// Record a word with its submission timestamp.
    ///
    /// The store is the sole uniqueness authority: inserting a word that is
    /// already present fails with `StoreError::DuplicateWord`, including when
    /// two concurrent submissions race on the same word.
    async fn insert(&self, word: &str, submitted_at: DateTime<Utc>) -> StoreResult<StoredWord>;

    /// Case-insensitive substring search over stored words.
    ///
    /// Results are ordered by submission time descending; pagination is
    /// 1-indexed. A missing or blank `term` matches everything.
    async fn search<'a>(
        &self,
        term: Option<&'a str>,
        page: usize,
        page_size: usize,
    ) -> StoreResult<PagedResult<StoredWord>>;
}

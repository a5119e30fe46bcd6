//! Word store implementation
//!
//! In-memory index for lookups with an optional append-only JSON-lines
//! journal for durability. All mutation goes through one write lock; that
//! lock is what enforces the word uniqueness invariant under concurrent
//! submissions.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::info;

use crate::traits::WordStore;
use shared::{PagedResult, StoreError, StoreResult, StoredWord};

#[derive(Debug)]
struct StoreInner {
    /// Records in insertion order
    words: Vec<StoredWord>,

    /// Word value -> position in `words`
    index: HashMap<String, usize>,

    /// Next id to assign
    next_id: u64,
}

impl StoreInner {
    fn empty() -> Self {
        Self {
            words: Vec::new(),
            index: HashMap::new(),
            next_id: 1,
        }
    }
}

/// Real word store for production use.
///
/// Construct with [`RealWordStore::open`] for a journaled store that survives
/// restarts, or [`RealWordStore::in_memory`] for an ephemeral one.
#[derive(Debug)]
pub struct RealWordStore {
    inner: RwLock<StoreInner>,
    journal_path: Option<PathBuf>,
}

impl RealWordStore {
    /// Create an ephemeral store with no journal
    pub fn in_memory() -> Self {
        Self {
            inner: RwLock::new(StoreInner::empty()),
            journal_path: None,
        }
    }

    /// Open a journaled store, replaying any existing journal file.
    ///
    /// Each journal line is one serialized [`StoredWord`]; a line that fails
    /// to parse aborts the open with `StoreError::InvalidRecord` rather than
    /// silently dropping records.
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut inner = StoreInner::empty();

        match fs::read_to_string(&path).await {
            Ok(contents) => {
                for (line_idx, line) in contents.lines().enumerate() {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let record: StoredWord = serde_json::from_str(line)
                        .map_err(|_| StoreError::InvalidRecord { line: line_idx + 1 })?;

                    inner.next_id = inner.next_id.max(record.id + 1);
                    inner.index.insert(record.word.clone(), inner.words.len());
                    inner.words.push(record);
                }
                info!(
                    words = inner.words.len(),
                    path = %path.display(),
                    "Replayed word journal"
                );
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent).await?;
                    }
                }
                info!(path = %path.display(), "Starting new word journal");
            }
            Err(err) => return Err(err.into()),
        }

        Ok(Self {
            inner: RwLock::new(inner),
            journal_path: Some(path),
        })
    }

    async fn append_journal(&self, record: &StoredWord) -> StoreResult<()> {
        let Some(path) = &self.journal_path else {
            return Ok(());
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;

        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');
        file.write_all(&line).await?;
        file.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl WordStore for RealWordStore {
    async fn exists(&self, word: &str) -> StoreResult<bool> {
        Ok(self.inner.read().await.index.contains_key(word))
    }

    async fn insert(&self, word: &str, submitted_at: DateTime<Utc>) -> StoreResult<StoredWord> {
        let mut inner = self.inner.write().await;

        if inner.index.contains_key(word) {
            return Err(StoreError::DuplicateWord {
                word: word.to_string(),
            });
        }

        let record = StoredWord {
            id: inner.next_id,
            word: word.to_string(),
            submitted_at,
        };

        // Journal before updating the index: a failed write leaves the
        // store unchanged and the insert reports the failure.
        self.append_journal(&record).await?;

        inner.next_id += 1;
        let pos = inner.words.len();
        inner.index.insert(record.word.clone(), pos);
        inner.words.push(record.clone());

        Ok(record)
    }

    async fn search<'a>(
        &self,
        term: Option<&'a str>,
        page: usize,
        page_size: usize,
    ) -> StoreResult<PagedResult<StoredWord>> {
        let inner = self.inner.read().await;

        // Blank search terms match everything, like no term at all
        let needle = term
            .filter(|t| !t.trim().is_empty())
            .map(|t| t.to_lowercase());

        let mut matches: Vec<&StoredWord> = inner
            .words
            .iter()
            .filter(|record| match &needle {
                Some(needle) => record.word.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .collect();

        matches.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));

        let total_count = matches.len();
        let page = page.max(1);
        let page_size = page_size.max(1);

        let items = matches
            .into_iter()
            .skip((page - 1).saturating_mul(page_size))
            .take(page_size)
            .cloned()
            .collect();

        Ok(PagedResult::new(items, total_count, page, page_size))
    }
}

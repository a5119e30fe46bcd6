//! Shared handler state

use std::sync::Arc;

use crate::core::SubmissionService;
use crate::traits::WordStore;

/// State shared by all HTTP handlers: the submission service and direct
/// store access for search and status queries.
pub struct AppState<S: WordStore> {
    pub submitter: SubmissionService<S>,
    pub store: Arc<S>,
}

impl<S: WordStore> AppState<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            submitter: SubmissionService::new(Arc::clone(&store)),
            store,
        }
    }
}

//! REST API handlers
//!
//! JSON endpoints for submitting input strings and searching stored words

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::state::AppState;
use crate::traits::WordStore;
use crate::types::SubmissionResult;

const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub input: String,
}

/// Submit an input string - POST /api/submit
pub async fn submit_word<S>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<SubmitRequest>,
) -> Json<SubmissionResult>
where
    S: WordStore,
{
    info!(input_len = request.input.len(), "Received submission");

    let result = state.submitter.submit(&request.input).await;
    if let SubmissionResult::Error { message, .. } = &result {
        warn!(message = %message, "Submission rejected");
    }

    Json(result)
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub term: Option<String>,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    10
}

/// Search stored words - GET /api/words
pub async fn search_words<S>(
    State(state): State<Arc<AppState<S>>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, StatusCode>
where
    S: WordStore,
{
    if params.page == 0 || params.page_size == 0 || params.page_size > MAX_PAGE_SIZE {
        return Err(StatusCode::BAD_REQUEST);
    }

    match state
        .store
        .search(params.term.as_deref(), params.page, params.page_size)
        .await
    {
        Ok(results) => Ok(Json(json!({
            "status": "ok",
            "data": results
        }))),
        Err(err) => {
            error!(error = %err, "Search failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Get service status - GET /api/status
pub async fn get_status<S>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Value>, StatusCode>
where
    S: WordStore,
{
    match state.store.search(None, 1, 1).await {
        Ok(results) => Ok(Json(json!({
            "status": "ok",
            "data": {
                "words_stored": results.total_count,
                "version": env!("CARGO_PKG_VERSION")
            }
        }))),
        Err(err) => {
            error!(error = %err, "Status query failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

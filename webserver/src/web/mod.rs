//! HTTP surface

pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::state::AppState;
use crate::traits::WordStore;

/// Build the application router over any word store implementation
pub fn build_router<S>(state: Arc<AppState<S>>) -> Router
where
    S: WordStore + 'static,
{
    Router::new()
        .route("/api/submit", post(handlers::api::submit_word::<S>))
        .route("/api/words", get(handlers::api::search_words::<S>))
        .route("/api/status", get(handlers::api::get_status::<S>))
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(state)
}

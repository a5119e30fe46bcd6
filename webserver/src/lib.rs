//! Word submission service library
//!
//! Scans a submitted string for the longest space-delimited word whose
//! characters are all distinct and include an uppercase letter, a lowercase
//! letter, and a digit; breaks ties among equal-length candidates at random;
//! and records the winner durably exactly once.

pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;

// Re-export main types
pub use crate::core::{find_candidates, select_winner, SubmissionService, WordSpan};
pub use error::{WebServerError, WebServerResult};
pub use services::RealWordStore;
pub use state::AppState;
pub use traits::WordStore;
pub use types::SubmissionResult;

//! Shared types for the word submission service
//!
//! Contains only truly shared items: the persisted word record, paged search
//! results, the store error taxonomy, and tracing setup. Component-internal
//! types (scanner spans, submission results) live in their components.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;

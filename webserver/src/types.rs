//! Submission result types

use serde::{Deserialize, Serialize};

/// Outcome of one end-to-end submission call.
///
/// Both variants carry the original input back to the caller; callers must
/// match exhaustively rather than probe for a success flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionResult {
    /// The chosen word was recorded
    Success { input: String, value: String },

    /// The submission was rejected; `message` says why
    Error { input: String, message: String },
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success { .. })
    }

    /// The input string this result was produced from
    pub fn input(&self) -> &str {
        match self {
            SubmissionResult::Success { input, .. } => input,
            SubmissionResult::Error { input, .. } => input,
        }
    }
}

//! Submission workflow
//!
//! Validates input, runs the scanner and selector, and commits the winner
//! through the word store. The store's uniqueness constraint is the sole
//! duplicate arbiter: there is no exists-then-insert sequence, so two racing
//! submissions of the same word cannot both succeed, and the loser is told
//! the word was already submitted.

use std::sync::Arc;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::core::scanner::find_candidates;
use crate::core::selector::select_winner;
use crate::traits::WordStore;
use crate::types::SubmissionResult;

/// Orchestrates one submission from raw input to a recorded word.
pub struct SubmissionService<S: WordStore> {
    store: Arc<S>,
    rng: Mutex<StdRng>,
}

impl<S: WordStore> SubmissionService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    /// Create a service with a caller-supplied rng (seeded under test)
    pub fn with_rng(store: Arc<S>, rng: StdRng) -> Self {
        Self {
            store,
            rng: Mutex::new(rng),
        }
    }

    /// Process one input string end to end.
    ///
    /// Never returns an `Err` past this boundary: every failure mode maps to
    /// `SubmissionResult::Error` with a caller-facing message, and store
    /// failure detail goes to the log rather than the message.
    pub async fn submit(&self, input: &str) -> SubmissionResult {
        if input.trim().is_empty() {
            return SubmissionResult::Error {
                input: input.to_string(),
                message: "Input cannot be empty.".to_string(),
            };
        }

        let cohort = find_candidates(input);
        if cohort.is_empty() {
            return SubmissionResult::Error {
                input: input.to_string(),
                message: "No valid candidates found in the input string.".to_string(),
            };
        }
        debug!(cohort_size = cohort.len(), "Scan produced a qualifying cohort");

        let winner = {
            let mut rng = self.rng.lock().await;
            select_winner(&cohort, &mut *rng)
        };

        // The single allocation for a candidate: the chosen winner
        let chosen_word = winner.resolve(input).to_string();

        match self.store.insert(&chosen_word, Utc::now()).await {
            Ok(stored) => {
                info!(word = %stored.word, id = stored.id, "Submission accepted");
                SubmissionResult::Success {
                    input: input.to_string(),
                    value: chosen_word,
                }
            }
            Err(err) if err.is_duplicate() => SubmissionResult::Error {
                input: input.to_string(),
                message: format!("The word '{chosen_word}' has already been submitted."),
            },
            Err(err) => {
                error!(error = %err, word = %chosen_word, "Failed to save submission");
                SubmissionResult::Error {
                    input: input.to_string(),
                    message: "An error occurred while saving your submission.".to_string(),
                }
            }
        }
    }
}

//! Pure submission core: candidate scanning, tie-break selection, and the
//! submit workflow that ties them to the word store

pub mod scanner;
pub mod selector;
pub mod submission;

pub use scanner::{find_candidates, WordSpan, MIN_WORD_LEN};
pub use selector::select_winner;
pub use submission::SubmissionService;

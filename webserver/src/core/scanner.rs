//! Candidate word scanning
//!
//! A single left-to-right pass over space-delimited tokens that produces the
//! cohort of maximal-length words satisfying the qualification rule: at least
//! eight characters, all characters pairwise distinct (case-sensitive), and
//! at least one uppercase letter, one lowercase letter, and one digit.

use std::collections::HashSet;

/// Minimum qualifying word length, in characters
pub const MIN_WORD_LEN: usize = 8;

/// Byte range of one candidate word within the scanned input.
///
/// Spans index the original buffer instead of owning a copy, so no candidate
/// is allocated until a final winner is materialized. A span is only
/// meaningful against the buffer it was produced from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WordSpan {
    start: usize,
    len: usize,
}

impl WordSpan {
    /// Resolve the span back to its text within the scanned buffer
    pub fn resolve<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start..self.start + self.len]
    }

    /// Byte offset of the word within the scanned buffer
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte length of the word
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Per-token accumulation from a character scan
struct TokenScan {
    char_count: usize,
    has_upper: bool,
    has_lower: bool,
    has_digit: bool,
}

impl TokenScan {
    fn qualifies(&self) -> bool {
        self.char_count >= MIN_WORD_LEN && self.has_upper && self.has_lower && self.has_digit
    }
}

/// Scan one token's characters left to right.
///
/// Returns `None` on the first repeated character; uniqueness has already
/// failed at that point and the rest of the token never needs inspection.
fn scan_token(token: &str) -> Option<TokenScan> {
    let mut seen = HashSet::new();
    let mut scan = TokenScan {
        char_count: 0,
        has_upper: false,
        has_lower: false,
        has_digit: false,
    };

    for ch in token.chars() {
        if !seen.insert(ch) {
            return None;
        }
        scan.char_count += 1;

        if ch.is_uppercase() {
            scan.has_upper = true;
        } else if ch.is_lowercase() {
            scan.has_lower = true;
        } else if ch.is_numeric() {
            scan.has_digit = true;
        }
    }

    Some(scan)
}

/// Find the cohort of longest qualifying words in `input`.
///
/// The returned spans all share the maximum qualifying character length seen
/// in the input; the cohort is empty when nothing qualifies. One split pass
/// yields distinct offsets, so the vector never holds the same span twice.
pub fn find_candidates(input: &str) -> Vec<WordSpan> {
    let mut cohort: Vec<WordSpan> = Vec::new();
    let mut current_longest = 0usize; // in characters

    let base = input.as_ptr() as usize;

    for token in input.split(' ') {
        // A token's character count never exceeds its byte count, so both
        // byte-length prunes are exact for the character-length rule and
        // skip the per-character scan entirely.
        if token.len() < MIN_WORD_LEN || token.len() < current_longest {
            continue;
        }

        let Some(scan) = scan_token(token) else {
            continue;
        };
        if !scan.qualifies() {
            continue;
        }

        let span = WordSpan {
            start: token.as_ptr() as usize - base,
            len: token.len(),
        };

        if scan.char_count > current_longest {
            cohort.clear();
            cohort.push(span);
            current_longest = scan.char_count;
        } else if scan.char_count == current_longest {
            cohort.push(span);
        }
        // A qualifying token shorter than the cohort cannot get past the
        // length prune; falling through leaves the cohort untouched.
    }

    cohort
}

//! Cohort tie-break selection

use rand::seq::SliceRandom;
use rand::Rng;

use super::scanner::WordSpan;

/// Pick the winning span from a non-empty cohort.
///
/// A singleton cohort resolves deterministically; larger cohorts are broken
/// uniformly at random with the supplied rng. The rng is a parameter rather
/// than a hidden global so callers can seed it under test.
///
/// # Panics
///
/// Panics on an empty cohort. That is a caller contract violation, not a
/// recoverable condition; callers check for an empty scan result first.
pub fn select_winner<R: Rng + ?Sized>(cohort: &[WordSpan], rng: &mut R) -> WordSpan {
    assert!(!cohort.is_empty(), "select_winner requires a non-empty cohort");

    if cohort.len() == 1 {
        cohort[0]
    } else {
        *cohort.choose(rng).expect("cohort is non-empty")
    }
}

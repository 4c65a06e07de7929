//! Growing an index hit into a match.
//!
//! An index hit only says that the first `min_search_length` bases of a
//! fragment (possibly with one substitution) occur at some genome position.
//! Extension takes the longest window at that position that the genome can
//! supply and measures how far it agrees with the fragment.

use crate::core::Genome;

/// Longest window of `genome` starting at `position` whose length lies in
/// `minimum_length..=fragment_length`.
///
/// Lengths are tried from `fragment_length` downwards. Returns `None` when
/// not even `minimum_length` bases fit before the end of the genome.
#[must_use]
pub fn embedded_fragment(
    genome: &Genome,
    position: usize,
    fragment_length: usize,
    minimum_length: usize,
) -> Option<&[u8]> {
    (minimum_length..=fragment_length)
        .rev()
        .find_map(|length| genome.extract(position, length))
}

/// Number of leading bases of `embedded` that count as matching `fragment`.
///
/// The comparison at offset 0 never counts as a mismatch and never spends
/// the error budget. After that, exact mode stops at the first mismatch;
/// otherwise one mismatch is absorbed and the second one stops the match.
/// The result is at most `embedded.len()`.
#[must_use]
pub fn effective_match_length(fragment: &[u8], embedded: &[u8], exact_match_only: bool) -> usize {
    let mut mismatches_left: usize = usize::from(!exact_match_only);

    for (offset, (expected, actual)) in fragment.iter().zip(embedded).enumerate().skip(1) {
        if expected == actual {
            continue;
        }
        if mismatches_left == 0 {
            return offset;
        }
        mismatches_left -= 1;
    }

    embedded.len()
}

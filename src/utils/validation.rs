//! Centralized validation and helper functions.

use crate::core::ALPHABET;

/// Maximum number of genomes accepted from a single file (DOS protection)
pub const MAX_GENOMES: usize = 100_000;

/// Check whether a byte is one of the indexed base symbols.
///
/// # Examples
///
/// ```
/// use genome_matcher::utils::validation::is_valid_base;
///
/// assert!(is_valid_base(b'A'));
/// assert!(is_valid_base(b'N'));
/// assert!(!is_valid_base(b'a'));
/// assert!(!is_valid_base(b'X'));
/// ```
#[must_use]
pub fn is_valid_base(base: u8) -> bool {
    ALPHABET.contains(&base)
}

/// Upper-case a base, returning `None` if it is not `A`, `C`, `G`, `T` or `N`
/// in either case.
#[must_use]
pub fn normalize_base(base: u8) -> Option<u8> {
    let upper = base.to_ascii_uppercase();
    is_valid_base(upper).then_some(upper)
}

/// Find the first byte outside the alphabet, as `(offset, byte)`.
#[must_use]
pub fn find_invalid_base(bases: &[u8]) -> Option<(usize, u8)> {
    bases
        .iter()
        .enumerate()
        .find(|(_, &b)| !is_valid_base(b))
        .map(|(i, &b)| (i, b))
}

/// Check if adding another genome would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new genome.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_genome_limit(count: usize) -> Option<String> {
    if count >= MAX_GENOMES {
        Some(format!(
            "Too many genomes: adding another would exceed maximum of {MAX_GENOMES}"
        ))
    } else {
        None
    }
}

/// Validate a match percentage threshold.
#[must_use]
pub fn is_valid_percent(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

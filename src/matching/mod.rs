//! Fragment search and relatedness estimation.
//!
//! - [`FragmentMatcher`]: owns the genomes and the k-mer prefix index, and
//!   answers fragment queries
//! - [`extension`]: growing an index hit into the longest matching window
//! - [`relatedness`]: aggregating fragment hits into per-genome percentages
//! - [`MatcherConfig`]: tunable parameters, loadable from JSON
//!
//! ## Fragment search
//!
//! 1. **Seed**: the first `min_search_length` bases of the fragment are looked
//!    up in the index, exactly or with one substitution
//! 2. **Extend**: each hit is compared against the fragment base by base
//! 3. **Select**: one best match is kept per genome
//!
//! ## Example
//!
//! ```rust
//! use genome_matcher::{FragmentMatcher, Genome};
//!
//! let mut matcher = FragmentMatcher::new(4).unwrap();
//! matcher.add_genome(&Genome::new("A", "ACGTACGTTGCA")).unwrap();
//! matcher.add_genome(&Genome::new("B", "TTTTACGTCCCC")).unwrap();
//!
//! let matches = matcher.find_genomes_with_this_dna(b"ACGTA", 5, true).unwrap();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].genome_name, "A");
//! ```

use thiserror::Error;

use crate::catalog::IndexError;

pub mod config;
pub mod engine;
pub mod extension;
pub mod relatedness;

pub use config::{ConfigError, MatcherConfig};
pub use engine::FragmentMatcher;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MatchError {
    #[error("Minimum search length must be at least 1")]
    InvalidSearchLength,

    #[error("Fragment of length {fragment_length} is shorter than the minimum length {minimum_length}")]
    FragmentTooShort {
        fragment_length: usize,
        minimum_length: usize,
    },

    #[error("Minimum length {minimum_length} is below the index search length {min_search_length}")]
    MinimumLengthTooShort {
        minimum_length: usize,
        min_search_length: usize,
    },

    #[error("Fragment match length {fragment_match_length} is below the index search length {min_search_length}")]
    FragmentLengthTooShort {
        fragment_match_length: usize,
        min_search_length: usize,
    },

    #[error("Genome '{name}' cannot be indexed: {source}")]
    Index {
        name: String,
        #[source]
        source: IndexError,
    },

    #[error("No matches found")]
    NoMatch,
}

impl MatchError {
    /// True for errors caused by the caller's arguments rather than by an
    /// absence of matches
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::NoMatch)
    }
}

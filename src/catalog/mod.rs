//! Genome storage and the fragment index.
//!
//! - [`PrefixIndex`]: a fixed-length prefix tree over the base alphabet,
//!   supporting exact and single-substitution lookup
//! - [`GenomeStore`]: the matcher's private copies of every added genome
//!
//! ## Example
//!
//! ```rust
//! use genome_matcher::catalog::PrefixIndex;
//!
//! let mut index = PrefixIndex::new(4);
//! index.insert(b"ACGT", (0_usize, 0_usize)).unwrap();
//! index.insert(b"ACGA", (0, 4)).unwrap();
//!
//! assert_eq!(index.find(b"ACGT", true), vec![(0, 0)]);
//! assert_eq!(index.find(b"ACGT", false).len(), 2);
//! ```

pub mod store;
pub mod trie;

pub use store::GenomeStore;
pub use trie::{IndexError, PrefixIndex};

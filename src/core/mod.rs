//! Core data types shared by the index, the matcher and the CLI.
//!
//! - [`Genome`]: a named, immutable base sequence with bounds-checked extraction
//! - [`Occurrence`]: the `(genome, position)` payload stored in the prefix index
//! - [`DnaMatch`], [`GenomeMatch`]: query results

pub mod genome;
pub mod types;

pub use genome::Genome;
pub use types::{DnaMatch, GenomeMatch, Occurrence, ALPHABET};

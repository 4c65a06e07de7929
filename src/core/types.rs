use serde::{Deserialize, Serialize};

/// Symbols a genome may contain.
pub const ALPHABET: [u8; 5] = *b"ACGTN";

/// One indexed window: the genome it came from and where it starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurrence {
    /// Index of the genome in insertion order
    pub genome: usize,
    /// 0-based start of the window
    pub position: usize,
}

impl Occurrence {
    pub fn new(genome: usize, position: usize) -> Self {
        Self { genome, position }
    }
}

/// The single best match of a fragment within one genome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnaMatch {
    pub genome_name: String,
    pub position: usize,
    pub length: usize,
}

/// Share of a query's fragments that matched somewhere in a genome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenomeMatch {
    pub genome_name: String,
    /// Percentage in `[0, 100]`
    pub percent_match: f64,
}

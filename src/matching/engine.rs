use tracing::{debug, trace};

use crate::catalog::{GenomeStore, IndexError, PrefixIndex};
use crate::core::{DnaMatch, Genome, Occurrence};
use crate::matching::extension::{effective_match_length, embedded_fragment};
use crate::matching::MatchError;
use crate::utils::validation::find_invalid_base;

/// Best match for one genome, addressed by genome index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GenomeHit {
    pub genome: usize,
    pub position: usize,
    pub length: usize,
}

/// Per-genome selection state while scanning index hits
#[derive(Debug, Clone, Copy)]
struct Retained {
    position: Option<usize>,
    length: usize,
}

/// Indexes genomes by their k-mers and finds where fragments occur.
///
/// Every window of `min_search_length` bases of every added genome is stored
/// in a [`PrefixIndex`] with its `(genome, position)`. The search length is
/// fixed for the lifetime of the matcher.
#[derive(Debug, Clone)]
pub struct FragmentMatcher {
    min_search_length: usize,
    genomes: GenomeStore,
    index: PrefixIndex<Occurrence>,
}

impl FragmentMatcher {
    /// Create an empty matcher indexing windows of `min_search_length` bases
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidSearchLength` if `min_search_length` is 0.
    pub fn new(min_search_length: usize) -> Result<Self, MatchError> {
        if min_search_length == 0 {
            return Err(MatchError::InvalidSearchLength);
        }
        Ok(Self {
            min_search_length,
            genomes: GenomeStore::new(),
            index: PrefixIndex::new(min_search_length),
        })
    }

    pub fn minimum_search_length(&self) -> usize {
        self.min_search_length
    }

    pub fn genome_count(&self) -> usize {
        self.genomes.len()
    }

    pub fn genome(&self, index: usize) -> Option<&Genome> {
        self.genomes.get(index)
    }

    /// All added genomes in insertion order
    pub fn genomes(&self) -> impl Iterator<Item = &Genome> {
        self.genomes.iter()
    }

    /// Store a copy of `genome` and index every window of it.
    ///
    /// Adding the same genome twice yields two independent entries. Returns
    /// the new genome's index.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::Index` if the genome contains a symbol outside
    /// `A`, `C`, `G`, `T`, `N`; the matcher is unchanged in that case.
    pub fn add_genome(&mut self, genome: &Genome) -> Result<usize, MatchError> {
        if let Some((offset, base)) = find_invalid_base(genome.bases()) {
            return Err(MatchError::Index {
                name: genome.name().to_string(),
                source: IndexError::InvalidSymbol {
                    symbol: char::from(base),
                    offset,
                },
            });
        }

        let genome_index = self.genomes.len();
        let mut windows = 0;
        for position in 0..genome.len() {
            let Some(window) = genome.extract(position, self.min_search_length) else {
                break;
            };
            // Cannot fail: the alphabet is checked above and every window is
            // exactly `min_search_length` bases
            self.index
                .insert(window, Occurrence::new(genome_index, position))
                .map_err(|source| MatchError::Index {
                    name: genome.name().to_string(),
                    source,
                })?;
            windows += 1;
        }
        self.genomes.add(genome);

        debug!(
            genome = genome.name(),
            index = genome_index,
            length = genome.len(),
            windows,
            "Indexed genome"
        );
        Ok(genome_index)
    }

    /// Find, per genome, the best match for `fragment`.
    ///
    /// The first `min_search_length` bases seed an index lookup, exact or
    /// tolerating one substitution. Each hit is extended as far as the
    /// genome and the fragment agree (see [`effective_match_length`]); hits
    /// shorter than `minimum_length` are dropped. At most one match is
    /// reported per genome, ordered by index hit order.
    ///
    /// # Errors
    ///
    /// - `MatchError::FragmentTooShort` if `fragment` has fewer than
    ///   `minimum_length` bases
    /// - `MatchError::MinimumLengthTooShort` if `minimum_length` is below the
    ///   search length
    /// - `MatchError::NoMatch` if no genome matches
    pub fn find_genomes_with_this_dna(
        &self,
        fragment: &[u8],
        minimum_length: usize,
        exact_match_only: bool,
    ) -> Result<Vec<DnaMatch>, MatchError> {
        let hits = self.best_hits(fragment, minimum_length, exact_match_only)?;
        if hits.is_empty() {
            return Err(MatchError::NoMatch);
        }

        Ok(hits
            .into_iter()
            .filter_map(|hit| {
                self.genomes.get(hit.genome).map(|genome| DnaMatch {
                    genome_name: genome.name().to_string(),
                    position: hit.position,
                    length: hit.length,
                })
            })
            .collect())
    }

    /// Index-addressed core of [`Self::find_genomes_with_this_dna`]; an empty
    /// result means no match.
    pub(crate) fn best_hits(
        &self,
        fragment: &[u8],
        minimum_length: usize,
        exact_match_only: bool,
    ) -> Result<Vec<GenomeHit>, MatchError> {
        if fragment.len() < minimum_length {
            return Err(MatchError::FragmentTooShort {
                fragment_length: fragment.len(),
                minimum_length,
            });
        }
        if minimum_length < self.min_search_length {
            return Err(MatchError::MinimumLengthTooShort {
                minimum_length,
                min_search_length: self.min_search_length,
            });
        }

        let seed = &fragment[..self.min_search_length];
        let candidates = self.index.find(seed, exact_match_only);

        let mut retained = vec![
            Retained {
                position: None,
                length: minimum_length,
            };
            self.genomes.len()
        ];

        for occurrence in &candidates {
            let Some(genome) = self.genomes.get(occurrence.genome) else {
                continue;
            };
            let Some(embedded) = embedded_fragment(
                genome,
                occurrence.position,
                fragment.len(),
                minimum_length,
            ) else {
                continue;
            };

            let length = effective_match_length(fragment, embedded, exact_match_only);
            let best = &mut retained[occurrence.genome];
            if length < best.length {
                continue;
            }
            // Once a position is fixed, only an equal or earlier one may replace it
            if best.position.is_some_and(|p| occurrence.position > p) {
                trace!(
                    genome = occurrence.genome,
                    position = occurrence.position,
                    length,
                    "Skipping later candidate"
                );
                continue;
            }
            best.position = Some(occurrence.position);
            best.length = length;
        }

        let mut reported = vec![false; self.genomes.len()];
        let mut hits = Vec::new();
        for occurrence in &candidates {
            let best = retained[occurrence.genome];
            if reported[occurrence.genome] || best.position != Some(occurrence.position) {
                continue;
            }
            reported[occurrence.genome] = true;
            hits.push(GenomeHit {
                genome: occurrence.genome,
                position: occurrence.position,
                length: best.length,
            });
        }

        trace!(
            candidates = candidates.len(),
            genomes = hits.len(),
            exact_match_only,
            "Fragment search"
        );
        Ok(hits)
    }
}

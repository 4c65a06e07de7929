//! Whole-genome relatedness from fragment hits.
//!
//! A query genome is cut into consecutive, non-overlapping chunks of
//! `fragment_match_length` bases. Each chunk is searched on its own; a genome
//! scores one hit per chunk it matches. The percentage is taken over
//! `query.len() / fragment_match_length` chunks, so a trailing partial chunk
//! counts in the denominator but can never hit.

use std::cmp::Ordering;

use tracing::debug;

use crate::core::{Genome, GenomeMatch};
use crate::matching::engine::FragmentMatcher;
use crate::matching::MatchError;

/// Safely convert usize to f64 for percentage calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Order by percentage descending, then by genome name ascending
pub fn compare_genome_matches(a: &GenomeMatch, b: &GenomeMatch) -> Ordering {
    b.percent_match
        .partial_cmp(&a.percent_match)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.genome_name.cmp(&b.genome_name))
}

impl FragmentMatcher {
    /// Estimate how related each indexed genome is to `query`.
    ///
    /// Genomes matching at least one chunk and scoring at least
    /// `match_percent_threshold` percent are returned, best first.
    ///
    /// # Errors
    ///
    /// - `MatchError::FragmentLengthTooShort` if `fragment_match_length` is
    ///   below the search length
    /// - `MatchError::NoMatch` if no genome reaches the threshold
    pub fn find_related_genomes(
        &self,
        query: &Genome,
        fragment_match_length: usize,
        exact_match_only: bool,
        match_percent_threshold: f64,
    ) -> Result<Vec<GenomeMatch>, MatchError> {
        if fragment_match_length < self.minimum_search_length() {
            return Err(MatchError::FragmentLengthTooShort {
                fragment_match_length,
                min_search_length: self.minimum_search_length(),
            });
        }

        let num_fragments = query.len() / fragment_match_length;
        let mut hit_counts = vec![0_usize; self.genome_count()];

        for offset in (0..query.len()).step_by(fragment_match_length) {
            let Some(chunk) = query.extract(offset, fragment_match_length) else {
                continue;
            };
            for hit in self.best_hits(chunk, fragment_match_length, exact_match_only)? {
                hit_counts[hit.genome] += 1;
            }
        }

        let mut results: Vec<GenomeMatch> = hit_counts
            .iter()
            .enumerate()
            .filter(|&(_, &hits)| hits > 0)
            .filter_map(|(index, &hits)| {
                let percent_match = 100.0 * count_to_f64(hits) / count_to_f64(num_fragments);
                if percent_match < match_percent_threshold {
                    return None;
                }
                self.genome(index).map(|genome| GenomeMatch {
                    genome_name: genome.name().to_string(),
                    percent_match,
                })
            })
            .collect();

        results.sort_by(compare_genome_matches);

        debug!(
            query = query.name(),
            num_fragments,
            related = results.len(),
            "Relatedness search"
        );

        if results.is_empty() {
            return Err(MatchError::NoMatch);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_matcher() -> FragmentMatcher {
        let mut matcher = FragmentMatcher::new(4).unwrap();
        matcher
            .add_genome(&Genome::new("A", "ACGTACGTTGCA"))
            .unwrap();
        matcher
            .add_genome(&Genome::new("B", "TTTTACGTCCCC"))
            .unwrap();
        matcher
    }

    fn gm(name: &str, percent: f64) -> GenomeMatch {
        GenomeMatch {
            genome_name: name.to_string(),
            percent_match: percent,
        }
    }

    #[test]
    fn test_query_equal_to_indexed_genome() {
        let matcher = make_matcher();
        let query = Genome::new("query", "ACGTACGTTGCA");
        // Chunks: ACGT, ACGT, TGCA. B contains ACGT only.
        let results = matcher.find_related_genomes(&query, 4, true, 0.0).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].genome_name, "A");
        assert!((results[0].percent_match - 100.0).abs() < 1e-9);
        assert_eq!(results[1].genome_name, "B");
        assert!((results[1].percent_match - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_excludes_weaker_genomes() {
        let matcher = make_matcher();
        let query = Genome::new("query", "ACGTACGTTGCA");
        let results = matcher.find_related_genomes(&query, 4, true, 70.0).unwrap();
        assert_eq!(results, vec![gm("A", 100.0)]);
    }

    #[test]
    fn test_trailing_partial_chunk_counts_in_denominator() {
        let matcher = make_matcher();
        // Two full chunks (TGCA, TTTT) and a trailing "AC" that cannot extract
        let query = Genome::new("query", "TGCATTTTAC");
        let results = matcher.find_related_genomes(&query, 4, true, 0.0).unwrap();
        assert_eq!(results, vec![gm("A", 50.0), gm("B", 50.0)]);
    }

    #[test]
    fn test_fragment_length_below_search_length() {
        let matcher = make_matcher();
        let query = Genome::new("query", "ACGTACGTTGCA");
        assert_eq!(
            matcher.find_related_genomes(&query, 3, true, 0.0),
            Err(MatchError::FragmentLengthTooShort {
                fragment_match_length: 3,
                min_search_length: 4
            })
        );
    }

    #[test]
    fn test_no_related_genomes() {
        let matcher = make_matcher();
        let query = Genome::new("query", "GGGGGGGG");
        assert_eq!(
            matcher.find_related_genomes(&query, 4, true, 0.0),
            Err(MatchError::NoMatch)
        );
    }

    #[test]
    fn test_query_shorter_than_fragment_length() {
        let matcher = make_matcher();
        let query = Genome::new("query", "ACG");
        assert_eq!(
            matcher.find_related_genomes(&query, 4, true, 0.0),
            Err(MatchError::NoMatch)
        );
    }

    #[test]
    fn test_compare_genome_matches() {
        let mut results = vec![gm("b", 50.0), gm("c", 75.0), gm("a", 50.0)];
        results.sort_by(compare_genome_matches);
        assert_eq!(results, vec![gm("c", 75.0), gm("a", 50.0), gm("b", 50.0)]);
    }
}

//! End-to-end fragment search and relatedness scenarios, including
//! regression tests pinning the position-0 exemption and the
//! earliest-position tie-break of best-match selection.

use genome_matcher::{DnaMatch, FragmentMatcher, Genome, GenomeMatch, MatchError};

fn dna_match(name: &str, position: usize, length: usize) -> DnaMatch {
    DnaMatch {
        genome_name: name.to_string(),
        position,
        length,
    }
}

fn two_genome_matcher() -> FragmentMatcher {
    let mut matcher = FragmentMatcher::new(4).expect("valid search length");
    matcher
        .add_genome(&Genome::new("A", "ACGTACGTTGCA"))
        .expect("valid genome");
    matcher
        .add_genome(&Genome::new("B", "TTTTACGTCCCC"))
        .expect("valid genome");
    matcher
}

#[test]
fn test_seed_matches_in_both_genomes() {
    let matcher = two_genome_matcher();
    let matches = matcher
        .find_genomes_with_this_dna(b"ACGT", 4, true)
        .expect("matches");
    assert_eq!(matches, vec![dna_match("A", 0, 4), dna_match("B", 4, 4)]);
}

#[test]
fn test_longer_fragment_prefers_extending_genome() {
    let matcher = two_genome_matcher();
    let matches = matcher
        .find_genomes_with_this_dna(b"ACGTA", 5, true)
        .expect("matches");
    assert_eq!(matches, vec![dna_match("A", 0, 5)]);
}

#[test]
fn test_minimum_length_preconditions() {
    let matcher = two_genome_matcher();
    assert!(matches!(
        matcher.find_genomes_with_this_dna(b"ACGTACGT", 3, true),
        Err(MatchError::MinimumLengthTooShort { .. })
    ));
    assert!(matches!(
        matcher.find_genomes_with_this_dna(b"ACGTA", 6, false),
        Err(MatchError::FragmentTooShort { .. })
    ));
}

#[test]
fn test_approximate_extension_tolerates_one_mismatch() {
    let mut matcher = FragmentMatcher::new(4).unwrap();
    matcher
        .add_genome(&Genome::new("C", "GGACGTAAGTTT"))
        .unwrap();

    // Seed ACGT at 2, then the genome reads AAGTTT against AGGTTT
    let fragment = b"ACGTAGGTTT";
    assert_eq!(
        matcher.find_genomes_with_this_dna(fragment, 6, true),
        Err(MatchError::NoMatch)
    );
    assert_eq!(
        matcher.find_genomes_with_this_dna(fragment, 5, true),
        Ok(vec![dna_match("C", 2, 5)])
    );
    assert_eq!(
        matcher.find_genomes_with_this_dna(fragment, 6, false),
        Ok(vec![dna_match("C", 2, 10)])
    );
}

#[test]
fn test_approximate_extension_stops_at_second_mismatch() {
    let mut matcher = FragmentMatcher::new(4).unwrap();
    matcher.add_genome(&Genome::new("C", "ACGTAAGTCT")).unwrap();

    // Mismatches against the fragment at offsets 5 and 8
    let result = matcher
        .find_genomes_with_this_dna(b"ACGTAGGTTT", 4, false)
        .unwrap();
    assert_eq!(result, vec![dna_match("C", 0, 8)]);
}

/// A mismatch in the first base is neither counted nor charged against the
/// single tolerated substitution.
#[test]
fn test_regression_first_base_mismatch_exempt() {
    let mut matcher = FragmentMatcher::new(4).unwrap();
    matcher.add_genome(&Genome::new("T", "TCGTAAGT")).unwrap();

    // Seed "ACGT" reaches "TCGT" by substituting the first base
    let fragment = b"ACGTAGGT";
    let matches = matcher
        .find_genomes_with_this_dna(fragment, 4, false)
        .unwrap();
    // Offset 0 differs (free) and offset 5 differs (the one allowed mismatch)
    assert_eq!(matches, vec![dna_match("T", 0, 8)]);
}

/// Once a genome has a retained match, a longer match found later at a
/// larger position does not replace it.
#[test]
fn test_regression_earliest_position_wins_over_longer_later_match() {
    let mut matcher = FragmentMatcher::new(4).unwrap();
    // ACGT at 0 extends to 5 bases; ACGT at 6 extends to all 7
    matcher
        .add_genome(&Genome::new("G", "ACGTAGACGTACC"))
        .unwrap();

    let matches = matcher
        .find_genomes_with_this_dna(b"ACGTACC", 4, true)
        .unwrap();
    assert_eq!(matches, vec![dna_match("G", 0, 5)]);
}

/// A later position never replaces the retained one, even at equal length.
#[test]
fn test_regression_equal_length_later_position_kept_out() {
    let mut matcher = FragmentMatcher::new(4).unwrap();
    matcher
        .add_genome(&Genome::new("H", "ACGTTTACGTGG"))
        .unwrap();

    let matches = matcher
        .find_genomes_with_this_dna(b"ACGT", 4, true)
        .unwrap();
    assert_eq!(matches, vec![dna_match("H", 0, 4)]);
}

/// An equally long match at an earlier position replaces the retained one.
#[test]
fn test_regression_equal_length_earlier_position_replaces() {
    let mut matcher = FragmentMatcher::new(4).unwrap();
    // The "AC" branch is created by ACCC at 0, so the approximate lookup
    // visits ACGT at 8 before the substituted AGGT at 4
    matcher
        .add_genome(&Genome::new("H", "ACCCAGGTACGT"))
        .unwrap();

    assert_eq!(
        matcher.find_genomes_with_this_dna(b"ACGT", 4, true),
        Ok(vec![dna_match("H", 8, 4)])
    );
    assert_eq!(
        matcher.find_genomes_with_this_dna(b"ACGT", 4, false),
        Ok(vec![dna_match("H", 4, 4)])
    );
}

/// Approximate mode can report a shorter match than exact mode: the
/// substituted seed at an earlier position is retained first, and the longer
/// exact hit further along is then ignored.
#[test]
fn test_regression_approximate_mode_keeps_earlier_shorter_match() {
    let mut matcher = FragmentMatcher::new(4).unwrap();
    // "ACTT" at 0 is one substitution from the seed; "ACGT" sits at 6
    matcher
        .add_genome(&Genome::new("I", "ACTTGGACGTAA"))
        .unwrap();

    assert_eq!(
        matcher.find_genomes_with_this_dna(b"ACGTAA", 4, true),
        Ok(vec![dna_match("I", 6, 6)])
    );
    assert_eq!(
        matcher.find_genomes_with_this_dna(b"ACGTAA", 4, false),
        Ok(vec![dna_match("I", 0, 4)])
    );
}

#[test]
fn test_relatedness_of_query_identical_to_genome() {
    let matcher = two_genome_matcher();
    let query = Genome::new("query", "ACGTACGTTGCA");

    let results = matcher
        .find_related_genomes(&query, 4, true, 0.0)
        .expect("related genomes");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].genome_name, "A");
    assert!((results[0].percent_match - 100.0).abs() < 1e-9);
    assert_eq!(results[1].genome_name, "B");
    assert!(results[1].percent_match < results[0].percent_match);
}

#[test]
fn test_relatedness_ties_sorted_by_name() {
    let mut matcher = FragmentMatcher::new(4).unwrap();
    matcher.add_genome(&Genome::new("zeta", "AAAACCCC")).unwrap();
    matcher.add_genome(&Genome::new("alpha", "CCCCAAAA")).unwrap();

    let query = Genome::new("q", "AAAACCCC");
    let results = matcher.find_related_genomes(&query, 4, true, 0.0).unwrap();
    assert_eq!(
        results,
        vec![
            GenomeMatch {
                genome_name: "alpha".to_string(),
                percent_match: 100.0
            },
            GenomeMatch {
                genome_name: "zeta".to_string(),
                percent_match: 100.0
            },
        ]
    );
}

#[test]
fn test_relatedness_duplicate_names_counted_per_genome() {
    let mut matcher = FragmentMatcher::new(4).unwrap();
    matcher.add_genome(&Genome::new("dup", "AAAACCCC")).unwrap();
    matcher.add_genome(&Genome::new("dup", "GGGGTTTT")).unwrap();

    let query = Genome::new("q", "AAAATTTT");
    let results = matcher.find_related_genomes(&query, 4, true, 0.0).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results
        .iter()
        .all(|r| r.genome_name == "dup" && (r.percent_match - 50.0).abs() < 1e-9));
}

#[test]
fn test_relatedness_approximate_mode_counts_near_chunks() {
    let mut matcher = FragmentMatcher::new(4).unwrap();
    matcher.add_genome(&Genome::new("A", "ACGTACGT")).unwrap();

    // Second chunk differs from the genome in one base
    let query = Genome::new("q", "ACGTACCT");
    let exact = matcher.find_related_genomes(&query, 4, true, 0.0).unwrap();
    assert!((exact[0].percent_match - 50.0).abs() < 1e-9);

    let approx = matcher.find_related_genomes(&query, 4, false, 0.0).unwrap();
    assert!((approx[0].percent_match - 100.0).abs() < 1e-9);
}

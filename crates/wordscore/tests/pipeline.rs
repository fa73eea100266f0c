//! End-to-end tests: public API scenarios and the default pipeline.

use wordscore::{
    CharUnit, ScoreRule, ScoredSequence, WordScoreError, WordScoreOptions, default_pipeline,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn scored(pairs: &[(char, i32)], max_combinations: usize) -> ScoredSequence {
    let units = pairs
        .iter()
        .map(|&(ch, score)| CharUnit::with_score(ch, score, 0))
        .collect();
    ScoredSequence::from_units(
        units,
        WordScoreOptions::default().with_max_combinations(max_combinations),
    )
}

fn assert_contiguous(seq: &ScoredSequence) {
    let indices: Vec<usize> = seq.units().iter().map(|u| u.index).collect();
    let expected: Vec<usize> = (0..seq.len()).collect();
    assert_eq!(indices, expected, "indices of {:?}", seq.text());
}

fn is_subsequence(candidate: &str, text: &str) -> bool {
    let mut rest = text.chars();
    candidate.chars().all(|ch| rest.any(|c| c == ch))
}

// ---------------------------------------------------------------------------
// Combination scenarios
// ---------------------------------------------------------------------------

#[test]
fn uniform_scores_enumerate_all_subsequences() {
    let seq = scored(&[('A', 1), ('B', 1), ('C', 1), ('D', 1), ('E', 1)], 10);
    assert_eq!(
        seq.combinations(4).unwrap(),
        vec!["ABCD", "ABCE", "ABDE", "ACDE", "BCDE"]
    );
}

#[test]
fn boundary_tier_fills_remaining_slots() {
    let seq = scored(
        &[('A', 3), ('B', 1), ('C', 2), ('D', 1), ('E', 1), ('F', 1)],
        10,
    );
    assert_eq!(
        seq.combinations(4).unwrap(),
        vec!["ABCD", "ABCE", "ABCF", "ACDE", "ACDF", "ACEF"]
    );
}

#[test]
fn empty_sequence_yields_zero_padding() {
    let seq = scored(&[], 100);
    assert_eq!(seq.combinations(4).unwrap(), vec!["0000"]);
}

#[test]
fn default_cap_is_ten() {
    let seq = ScoredSequence::from_units(
        "ABCDEF"
            .chars()
            .map(|ch| CharUnit::with_score(ch, 1, 0))
            .collect(),
        WordScoreOptions::default(),
    );
    let candidates = seq.combinations(4).unwrap();
    assert_eq!(candidates.len(), 10);
    assert_eq!(candidates.last().map(String::as_str), Some("ADEF"));
}

#[test]
fn zero_length_is_rejected() {
    let seq = ScoredSequence::new("abc");
    assert_eq!(
        seq.combinations(0),
        Err(WordScoreError::InvalidLength { length: 0 })
    );
}

// ---------------------------------------------------------------------------
// Sequence edits
// ---------------------------------------------------------------------------

#[test]
fn remove_then_abbreviate() {
    let mut seq = ScoredSequence::new("INTERNATIONAL VENTURE");
    seq.remove(["VENTURE"]);
    assert_eq!(seq.text(), "INTERNATIONAL ");
    seq.abbreviate(1, [("INTERNATIONAL", "INTL")]);
    assert_eq!(seq.text(), "INTL ");
    assert_contiguous(&seq);
}

#[test]
fn indices_stay_contiguous_through_edits() {
    let mut seq = ScoredSequence::new("United Kingdom & China Venture International Venture");
    seq.score(1, &ScoreRule::Capital).unwrap();
    assert_contiguous(&seq);
    seq.remove([" Venture", "&"]);
    assert_contiguous(&seq);
    seq.abbreviate(
        2,
        [
            ("UNITED KINGDOM", "GBR"),
            ("CHINA", "CHN"),
            ("INTERNATIONAL", "INTL"),
        ],
    );
    assert_contiguous(&seq);
    assert_eq!(seq.text(), "GBR  CHN INTL");
    seq.score(1, &ScoreRule::Letter).unwrap();
    assert_eq!(seq.len(), seq.scores().len());
}

#[test]
fn chained_calls() {
    let mut seq = ScoredSequence::new("nyk line");
    seq.remove([" line"])
        .abbreviate(1, [("XYZ", "X")])
        .score(1, &ScoreRule::Acronym)
        .unwrap();
    let text = seq.transform(|s| s.to_uppercase()).unwrap();
    assert_eq!(text, "NYK");
    assert_eq!(seq.combinations(3).unwrap(), vec!["NYK"]);
}

// ---------------------------------------------------------------------------
// Default pipeline
// ---------------------------------------------------------------------------

#[test]
fn pipeline_international_venture() {
    let candidates = default_pipeline(10).run("INTERNATIONAL VENTURE", 4).unwrap();
    assert_eq!(candidates, vec!["INTL"]);
}

#[test]
fn pipeline_drops_all_caps_noise_word() {
    let seq = default_pipeline(10).apply("PACIFIC VENTURE").unwrap();
    assert_eq!(seq.text(), "PACIFIC ");
    assert_eq!(seq.scores(), vec![3, 1, 2, 1, 2, 1, 2, 0]);
    let candidates = default_pipeline(10).run("Pacific Venture", 4).unwrap();
    assert_eq!(candidates, vec!["PCFC"]);
}

#[test]
fn pipeline_country_abbreviation() {
    let candidates = default_pipeline(10).run("Hong Kong Shipping", 4).unwrap();
    assert_eq!(candidates, vec!["HKGS"]);
}

#[test]
fn pipeline_boundary_enumeration() {
    let candidates = default_pipeline(10).run("Maersk Line", 4).unwrap();
    assert_eq!(
        candidates,
        vec!["MRSL", "MRKL", "MRLN", "MSKL", "MSLN", "MKLN"]
    );
}

#[test]
fn pipeline_respects_cap() {
    let candidates = default_pipeline(2).run("Maersk Line", 4).unwrap();
    assert_eq!(candidates, vec!["MRSL", "MRKL"]);
    assert!(default_pipeline(0).run("Maersk Line", 4).unwrap().is_empty());
}

#[test]
fn pipeline_pads_short_words() {
    assert_eq!(default_pipeline(10).run("abc", 4).unwrap(), vec!["ABC0"]);
    assert_eq!(default_pipeline(10).run("", 3).unwrap(), vec!["000"]);
}

#[test]
fn pipeline_candidates_are_ordered_and_sized() {
    let words = [
        "Evergreen Marine",
        "Pacific International Lines",
        "Mitsui O.S.K. Lines",
        "K-Line",
        "Hapag-Lloyd",
        "ZIM",
        "12345",
        "Ocean Network Express",
    ];
    for word in words {
        let sequence = default_pipeline(25).apply(word).unwrap();
        for length in 1..=6 {
            let candidates = sequence.combinations(length).unwrap();
            assert!(!candidates.is_empty(), "{word} / {length}");
            assert!(candidates.len() <= 25);
            for candidate in &candidates {
                assert_eq!(candidate.chars().count(), length, "{word}: {candidate}");
                let trimmed = candidate.trim_end_matches('0');
                assert!(
                    is_subsequence(trimmed, &sequence.text()),
                    "{word}: {candidate} not in {}",
                    sequence.text()
                );
            }
        }
    }
}

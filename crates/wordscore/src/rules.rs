// Score rules: map a character sequence to per-position score deltas.
//
// Every rule returns one delta per input character. Deltas are added to the
// units' existing scores by `ScoredSequence::score`; a rule never sees or
// replaces the current scores.

use std::fmt;
use std::str::FromStr;

use wordscore_core::case::has_lowercase;
use wordscore_core::character::{
    is_consonant, is_letter, is_letter_or_digit, is_separator, is_upper,
};

use crate::WordScoreError;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Anything that can score a character sequence.
///
/// Implementations must return exactly one delta per input character;
/// `ScoredSequence::score` rejects anything else with
/// [`WordScoreError::ShapeMismatch`].
///
/// Closures of the form `Fn(i32, &[char]) -> Vec<i32>` implement this trait,
/// so custom rules can be passed inline.
pub trait Scorer {
    /// Compute the delta for every position of `chars`, using `weight` as
    /// the amount awarded to a qualifying position.
    fn deltas(&self, weight: i32, chars: &[char]) -> Vec<i32>;
}

impl<F> Scorer for F
where
    F: Fn(i32, &[char]) -> Vec<i32>,
{
    fn deltas(&self, weight: i32, chars: &[char]) -> Vec<i32> {
        self(weight, chars)
    }
}

// ---------------------------------------------------------------------------
// Built-in rules
// ---------------------------------------------------------------------------

/// The built-in score rules, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreRule {
    /// Capital letters, or word initials when the text has no lowercase.
    Capital,
    /// Every character of an all-consonant run ("HSBC", "NYK").
    Acronym,
    /// Every consonant letter.
    Consonant,
    /// Every letter.
    Letter,
}

impl ScoreRule {
    /// All built-in rules, in the order the default pipeline applies them.
    pub const ALL: [ScoreRule; 4] = [
        ScoreRule::Capital,
        ScoreRule::Acronym,
        ScoreRule::Consonant,
        ScoreRule::Letter,
    ];

    /// The registry name of the rule.
    pub fn name(self) -> &'static str {
        match self {
            ScoreRule::Capital => "capital",
            ScoreRule::Acronym => "acronym",
            ScoreRule::Consonant => "consonant",
            ScoreRule::Letter => "letter",
        }
    }
}

impl Scorer for ScoreRule {
    fn deltas(&self, weight: i32, chars: &[char]) -> Vec<i32> {
        match self {
            ScoreRule::Capital => score_capital(weight, chars),
            ScoreRule::Acronym => score_acronym(weight, chars),
            ScoreRule::Consonant => score_consonant(weight, chars),
            ScoreRule::Letter => score_letter(weight, chars),
        }
    }
}

impl fmt::Display for ScoreRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScoreRule {
    type Err = WordScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScoreRule::ALL
            .into_iter()
            .find(|rule| rule.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WordScoreError::UnknownRule(s.to_string()))
    }
}

/// Score capital letters.
///
/// If the text contains no lowercase letter ("HONG KONG LINE"), capitals
/// carry no information, so only the first character of each word is scored,
/// and only when that character is a letter. A word is a maximal run of
/// letters and digits. Otherwise every uppercase letter is scored.
pub fn score_capital(weight: i32, chars: &[char]) -> Vec<i32> {
    let mut scores = vec![0; chars.len()];
    if !has_lowercase(chars) {
        let mut at_word_start = true;
        for (i, &c) in chars.iter().enumerate() {
            if at_word_start && is_letter(c) {
                scores[i] = weight;
            }
            at_word_start = !is_letter_or_digit(c);
        }
    } else {
        for (i, &c) in chars.iter().enumerate() {
            if is_upper(c) {
                scores[i] = weight;
            }
        }
    }
    scores
}

/// Score every position of a run made only of consonant letters.
///
/// Runs are split on whitespace, punctuation and symbols. A run containing
/// a vowel or a digit does not qualify.
pub fn score_acronym(weight: i32, chars: &[char]) -> Vec<i32> {
    let mut scores = vec![0; chars.len()];
    let mut start = 0;
    for end in 0..=chars.len() {
        if end < chars.len() && !is_separator(chars[end]) {
            continue;
        }
        let run = &chars[start..end];
        if !run.is_empty() && run.iter().all(|&c| is_consonant(c)) {
            scores[start..end].fill(weight);
        }
        start = end + 1;
    }
    scores
}

/// Score every consonant letter, regardless of case.
pub fn score_consonant(weight: i32, chars: &[char]) -> Vec<i32> {
    chars
        .iter()
        .map(|&c| if is_consonant(c) { weight } else { 0 })
        .collect()
}

/// Score every letter, regardless of case.
pub fn score_letter(weight: i32, chars: &[char]) -> Vec<i32> {
    chars
        .iter()
        .map(|&c| if is_letter(c) { weight } else { 0 })
        .collect()
}

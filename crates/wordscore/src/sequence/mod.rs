// ScoredSequence: the per-word character/score model.
//
// Architecture:
//   - `mod.rs`: construction, accessors, rule application, candidate generation
//   - `edit`: structural edits (remove, abbreviate) and text transforms

mod edit;

use tracing::{debug, trace};
use wordscore_core::unit::units_to_string;
use wordscore_core::CharUnit;

use crate::combination;
use crate::rules::Scorer;
use crate::{DEFAULT_MAX_COMBINATIONS, WordScoreError};

/// Options controlling candidate generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordScoreOptions {
    /// Maximum number of candidates returned by `combinations`.
    /// Zero yields an empty result.
    pub max_combinations: usize,
}

impl Default for WordScoreOptions {
    fn default() -> Self {
        Self {
            max_combinations: DEFAULT_MAX_COMBINATIONS,
        }
    }
}

impl WordScoreOptions {
    pub fn with_max_combinations(mut self, max_combinations: usize) -> Self {
        self.max_combinations = max_combinations;
        self
    }
}

/// An ordered run of scored characters derived from one input word.
///
/// Created once from the input text with every unit at score 0, then mutated
/// in place by edits and score rules, and finally read by
/// [`combinations`](Self::combinations).
///
/// Invariant: `units[i].index == i` for every unit, at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSequence {
    units: Vec<CharUnit>,
    options: WordScoreOptions,
}

impl ScoredSequence {
    /// Create a sequence with default options.
    pub fn new(word: &str) -> Self {
        Self::with_options(word, WordScoreOptions::default())
    }

    /// Create a sequence, one unscored unit per character of `word`.
    pub fn with_options(word: &str, options: WordScoreOptions) -> Self {
        let units = word
            .chars()
            .enumerate()
            .map(|(index, ch)| CharUnit::new(ch, index))
            .collect();
        Self { units, options }
    }

    /// Create a sequence from pre-scored units.
    ///
    /// Indices are renumbered from the slice order; whatever the caller put
    /// in `index` is ignored.
    pub fn from_units(units: Vec<CharUnit>, options: WordScoreOptions) -> Self {
        let mut sequence = Self { units, options };
        sequence.renumber();
        sequence
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> &[CharUnit] {
        &self.units
    }

    pub fn options(&self) -> WordScoreOptions {
        self.options
    }

    pub fn max_combinations(&self) -> usize {
        self.options.max_combinations
    }

    /// The current text of the sequence.
    pub fn text(&self) -> String {
        units_to_string(&self.units)
    }

    /// The current scores, in position order.
    pub fn scores(&self) -> Vec<i32> {
        self.units.iter().map(|u| u.score).collect()
    }

    fn chars(&self) -> Vec<char> {
        self.units.iter().map(|u| u.ch).collect()
    }

    // =========================================================================
    // Scoring
    // =========================================================================

    /// Apply a score rule to the current text and add its deltas to the
    /// units' scores.
    ///
    /// Scores saturate at the `i32` bounds.
    ///
    /// Returns [`WordScoreError::ShapeMismatch`] (leaving scores untouched)
    /// if the rule returns a different number of deltas than there are units.
    pub fn score<S>(&mut self, weight: i32, rule: &S) -> Result<&mut Self, WordScoreError>
    where
        S: Scorer + ?Sized,
    {
        let deltas = rule.deltas(weight, &self.chars());
        if deltas.len() != self.units.len() {
            return Err(WordScoreError::ShapeMismatch {
                expected: self.units.len(),
                actual: deltas.len(),
            });
        }
        for (unit, delta) in self.units.iter_mut().zip(deltas) {
            unit.score = unit.score.saturating_add(delta);
            trace!(index = unit.index, ch = %unit.ch, score = unit.score, "score");
        }
        Ok(self)
    }

    // =========================================================================
    // Candidate generation
    // =========================================================================

    /// Generate up to `max_combinations` candidates of exactly `length`
    /// characters.
    ///
    /// See [`combination::generate`] for the selection algorithm.
    pub fn combinations(&self, length: usize) -> Result<Vec<String>, WordScoreError> {
        let candidates =
            combination::generate(&self.units, length, self.options.max_combinations)?;
        debug!(text = %self.text(), length, count = candidates.len(), "combinations");
        Ok(candidates)
    }

    // -------------------------------------------------------------------------
    // Index bookkeeping
    // -------------------------------------------------------------------------

    /// Restore `index == position` for every unit.
    fn renumber(&mut self) {
        for (index, unit) in self.units.iter_mut().enumerate() {
            unit.index = index;
        }
    }
}

// Structural edits and text transforms on a ScoredSequence.
//
// Every structural edit rebuilds the unit vector in one pass and renumbers it
// before returning, so callers never observe stale indices.

use std::ops::Range;

use tracing::{debug, trace};
use wordscore_core::case::{Case, convert};
use wordscore_core::character::{find_exact, find_ignore_case};
use wordscore_core::CharUnit;

use super::ScoredSequence;
use crate::WordScoreError;

impl ScoredSequence {
    /// Delete every occurrence of each target string.
    ///
    /// Matching is exact and case-sensitive. Targets are processed in the
    /// order given; for each one the current text is searched again after
    /// every deletion, so occurrences that only form once an earlier one is
    /// gone are removed too. Empty targets and targets that never match are
    /// skipped.
    pub fn remove<I, S>(&mut self, targets: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in targets {
            let pattern = pattern.as_ref();
            let needle: Vec<char> = pattern.chars().collect();
            if needle.is_empty() {
                continue;
            }
            let mut removed = 0;
            // Each deletion shortens the text, so a search can succeed at
            // most `len` times.
            let max_attempts = self.len();
            while removed < max_attempts {
                let Some(base) = find_exact(&self.chars(), &needle) else {
                    break;
                };
                debug!(pattern, base, "remove");
                self.splice(base..base + needle.len(), std::iter::empty());
                removed += 1;
            }
            if removed == 0 {
                trace!(pattern, "remove pattern not found");
            }
        }
        self
    }

    /// Replace the first occurrence of each full name with its abbreviation.
    ///
    /// Matching ignores case. The replaced span loses its units (and their
    /// scores); the abbreviation's characters become fresh units seeded with
    /// `weight`. Entries are applied in iteration order, each against the
    /// text left by the previous ones. Entries with an empty full name, or
    /// whose full name is absent, are skipped.
    pub fn abbreviate<I, K, V>(&mut self, weight: i32, table: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (full, abbr) in table {
            let (full, abbr) = (full.as_ref(), abbr.as_ref());
            let needle: Vec<char> = full.chars().collect();
            let Some(base) = find_ignore_case(&self.chars(), &needle) else {
                trace!(full, "abbreviation not found");
                continue;
            };
            debug!(full, abbr, base, "abbreviate");
            let seeded = abbr.chars().map(|ch| CharUnit::with_score(ch, weight, 0));
            self.splice(base..base + needle.len(), seeded);
        }
        self
    }

    /// Rewrite the text through `transform` and return the new text.
    ///
    /// The transform must keep the character count; scores stay attached to
    /// their positions. A transform that changes the count is rejected with
    /// [`WordScoreError::ShapeMismatch`] and the sequence is left unchanged.
    pub fn transform<F>(&mut self, transform: F) -> Result<String, WordScoreError>
    where
        F: FnOnce(&str) -> String,
    {
        let result = transform(self.text().as_str());
        let actual = result.chars().count();
        if actual != self.len() {
            return Err(WordScoreError::ShapeMismatch {
                expected: self.len(),
                actual,
            });
        }
        for (unit, ch) in self.units.iter_mut().zip(result.chars()) {
            unit.ch = ch;
        }
        debug!(text = %result, "transform");
        Ok(result)
    }

    /// Apply a one-to-one case conversion. Never changes the unit count.
    ///
    /// The mapping is lossy for characters whose case form is longer than
    /// one character: "straße" becomes "STRASE". Use
    /// [`transform`](Self::transform) to have such changes rejected instead.
    pub fn set_case(&mut self, case: Case) -> &mut Self {
        let mut chars = self.chars();
        convert(&mut chars, case);
        for (unit, ch) in self.units.iter_mut().zip(chars) {
            unit.ch = ch;
        }
        debug!(?case, text = %self.text(), "set case");
        self
    }

    /// Replace `range` with `replacement` and renumber every unit.
    fn splice<R>(&mut self, range: Range<usize>, replacement: R)
    where
        R: IntoIterator<Item = CharUnit>,
    {
        let tail = self.units.split_off(range.end);
        self.units.truncate(range.start);
        self.units.extend(replacement);
        self.units.extend(tail);
        self.renumber();
    }
}

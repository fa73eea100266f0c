// Candidate generation: turn per-unit scores into a ranked list of
// fixed-length strings.
//
// Architecture:
//   - `tiers`: group units by score, highest first
//   - `choose`: lexicographic fixed-size subset enumeration
//
// Only the tier that first reaches the target length is enumerated, so the
// subset search is bounded by the size of that one tier rather than by the
// whole word.

pub mod choose;
pub mod tiers;

use std::cmp::Ordering;

use tracing::debug;
use wordscore_core::CharUnit;
use wordscore_core::unit::units_to_string;

use crate::{PAD_CHAR, WordScoreError};
use choose::{Choose, binomial};
use tiers::{Tier, group_tiers};

/// Generate at most `max_combinations` candidates of exactly `length`
/// characters from scored units.
///
/// Tiers are walked from the highest score down. Units of each tier are
/// accumulated while the running total stays below `length`. The first tier
/// that reaches `length` decides the result:
///
/// - exactly `length`: the accumulated units form the single candidate;
/// - more than `length`: every subset of that tier with the missing number
///   of units is combined with the units already accumulated, in
///   lexicographic subset order.
///
/// Lower tiers are never consulted after that. Each candidate keeps the
/// original character order.
///
/// If the eligible units never reach `length`, all of them form a single
/// candidate. If no unit is eligible at all, the whole sequence is treated
/// as one tier. Candidates shorter than `length` are right-padded with
/// [`PAD_CHAR`].
///
/// Errors with [`WordScoreError::InvalidLength`] if `length` is zero.
pub fn generate(
    units: &[CharUnit],
    length: usize,
    max_combinations: usize,
) -> Result<Vec<String>, WordScoreError> {
    if length == 0 {
        return Err(WordScoreError::InvalidLength { length: 0 });
    }
    if max_combinations == 0 {
        return Ok(Vec::new());
    }

    let tiers = group_tiers(units);
    let mut candidates = select(&tiers, length, max_combinations);

    if candidates.is_empty() {
        let eligible: Vec<&CharUnit> = units.iter().filter(|u| u.is_eligible()).collect();
        if eligible.is_empty() {
            debug!(len = units.len(), "no eligible units, using whole sequence");
            let whole = Tier {
                score: 0,
                units: units.iter().collect(),
            };
            candidates = select(std::slice::from_ref(&whole), length, max_combinations);
            if candidates.is_empty() {
                candidates.push(units_to_string(units));
            }
        } else {
            debug!(len = eligible.len(), length, "eligible units short of length");
            candidates.push(units_to_string(eligible));
        }
    }

    candidates.truncate(max_combinations);
    for candidate in &mut candidates {
        pad(candidate, length);
    }
    Ok(candidates)
}

/// Walk the tiers and build candidates at the boundary tier.
///
/// Returns an empty list when the tiers together hold fewer than `length`
/// units. Enumeration stops once `max_combinations` candidates exist.
fn select(tiers: &[Tier<'_>], length: usize, max_combinations: usize) -> Vec<String> {
    let mut accumulated: Vec<&CharUnit> = Vec::with_capacity(length);

    for tier in tiers {
        let total = accumulated.len() + tier.len();
        debug!(
            score = tier.score,
            prev = accumulated.len(),
            curr = tier.len(),
            total,
            length,
            "tier"
        );
        match total.cmp(&length) {
            Ordering::Less => accumulated.extend(tier.units.iter().copied()),
            Ordering::Equal => {
                accumulated.extend(tier.units.iter().copied());
                return vec![render(accumulated)];
            }
            Ordering::Greater => {
                let missing = length - accumulated.len();
                debug!(
                    score = tier.score,
                    missing,
                    subsets = binomial(tier.len(), missing),
                    "boundary tier"
                );
                return Choose::new(tier.len(), missing)
                    .take(max_combinations)
                    .map(|picked| {
                        let mut candidate = accumulated.clone();
                        candidate.extend(picked.into_iter().map(|i| tier.units[i]));
                        render(candidate)
                    })
                    .collect();
            }
        }
    }

    Vec::new()
}

/// Render units in original index order.
fn render(mut units: Vec<&CharUnit>) -> String {
    units.sort_by_key(|u| u.index);
    units_to_string(units)
}

/// Right-pad `candidate` with [`PAD_CHAR`] to `length` characters.
fn pad(candidate: &mut String, length: usize) {
    let count = candidate.chars().count();
    candidate.extend(std::iter::repeat_n(PAD_CHAR, length.saturating_sub(count)));
}

// Pipeline: an ordered list of edits and score rules applied to a word,
// followed by candidate generation.

use tracing::debug;
use wordscore_core::Case;

use crate::rules::ScoreRule;
use crate::sequence::{ScoredSequence, WordScoreOptions};
use crate::tables::{COMMON_WORDS, common_abbreviations};
use crate::WordScoreError;

/// One pipeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Delete every occurrence of each string (case-sensitive).
    Remove(Vec<String>),
    /// Add a built-in rule's deltas, scaled by `weight`.
    Score { weight: i32, rule: ScoreRule },
    /// Replace the first occurrence of each full name (case-insensitive),
    /// seeding the new characters with `weight`.
    Abbreviate {
        weight: i32,
        table: Vec<(String, String)>,
    },
    /// Apply a one-to-one case conversion.
    SetCase(Case),
}

impl Step {
    pub fn remove<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Step::Remove(targets.into_iter().map(Into::into).collect())
    }

    pub fn abbreviate<I, K, V>(weight: i32, table: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Step::Abbreviate {
            weight,
            table: table
                .into_iter()
                .map(|(full, abbr)| (full.into(), abbr.into()))
                .collect(),
        }
    }

    pub fn score(weight: i32, rule: ScoreRule) -> Self {
        Step::Score { weight, rule }
    }

    /// Apply this step to `sequence`.
    pub fn apply(&self, sequence: &mut ScoredSequence) -> Result<(), WordScoreError> {
        match self {
            Step::Remove(targets) => {
                sequence.remove(targets);
            }
            Step::Score { weight, rule } => {
                sequence.score(*weight, rule)?;
            }
            Step::Abbreviate { weight, table } => {
                sequence.abbreviate(*weight, table.iter().map(|(f, a)| (f, a)));
            }
            Step::SetCase(case) => {
                sequence.set_case(*case);
            }
        }
        Ok(())
    }
}

/// A fixed sequence of steps plus the options for the sequences it builds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pipeline {
    steps: Vec<Step>,
    options: WordScoreOptions,
}

impl Pipeline {
    pub fn new(options: WordScoreOptions) -> Self {
        Self {
            steps: Vec::new(),
            options,
        }
    }

    /// Append a step.
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn options(&self) -> WordScoreOptions {
        self.options
    }

    /// Build a sequence from `word` and run every step on it.
    pub fn apply(&self, word: &str) -> Result<ScoredSequence, WordScoreError> {
        let mut sequence = ScoredSequence::with_options(word, self.options);
        for step in &self.steps {
            debug!(?step, "apply step");
            step.apply(&mut sequence)?;
        }
        debug!(text = %sequence.text(), scores = ?sequence.scores(), "pipeline done");
        Ok(sequence)
    }

    /// Run every step on `word`, then generate candidates of `length`
    /// characters.
    pub fn run(&self, word: &str, length: usize) -> Result<Vec<String>, WordScoreError> {
        self.apply(word)?.combinations(length)
    }
}

/// The standard identifier pipeline:
///
/// 1. drop [`COMMON_WORDS`]
/// 2. score capitals
/// 3. score acronym runs
/// 4. abbreviate country names and common words
/// 5. convert to upper case
/// 6. score consonants
/// 7. score letters
///
/// Every step uses weight 1.
pub fn default_pipeline(max_combinations: usize) -> Pipeline {
    let options = WordScoreOptions::default().with_max_combinations(max_combinations);
    Pipeline::new(options)
        .step(Step::remove(COMMON_WORDS.iter().copied()))
        .step(Step::score(1, ScoreRule::Capital))
        .step(Step::score(1, ScoreRule::Acronym))
        .step(Step::abbreviate(1, common_abbreviations()))
        .step(Step::SetCase(Case::Upper))
        .step(Step::score(1, ScoreRule::Consonant))
        .step(Step::score(1, ScoreRule::Letter))
}

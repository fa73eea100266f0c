//! Ranked identifier generation from scored characters.
//!
//! A word or phrase becomes a [`ScoredSequence`]: one [`CharUnit`] per
//! character, each carrying an accumulated score. Score rules add identifying
//! value (capitals, acronym letters, consonants, letters), sequence edits keep
//! the units aligned while text is removed or abbreviated, and the combination
//! engine turns the final scores into a ranked list of fixed-length
//! candidates such as ticker codes.
//!
//! # Architecture
//!
//! - [`rules`] -- Score rules (capital, acronym, consonant, letter, custom)
//! - [`sequence`] -- The scored sequence and its edit operations
//! - [`combination`] -- Tiered candidate selection
//! - [`tables`] -- Built-in abbreviation and noise-word tables
//! - [`pipeline`] -- Ordered composition of edits, rules and selection

pub mod combination;
pub mod pipeline;
pub mod rules;
pub mod sequence;
pub mod tables;

pub use pipeline::{Pipeline, Step, default_pipeline};
pub use rules::{ScoreRule, Scorer};
pub use sequence::{ScoredSequence, WordScoreOptions};
pub use wordscore_core::{Case, CharUnit};

/// Error type for scoring, editing and candidate generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordScoreError {
    #[error("invalid target length {length}: must be positive")]
    InvalidLength { length: i64 },
    #[error("shape mismatch: expected {expected} characters, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("unknown score rule: {0}")]
    UnknownRule(String),
}

/// Default cap on the number of candidates returned.
pub const DEFAULT_MAX_COMBINATIONS: usize = 10;

/// Filler appended to candidates shorter than the target length.
pub const PAD_CHAR: char = '0';

/// Validate a raw target length coming from configuration.
pub fn target_length(length: i64) -> Result<usize, WordScoreError> {
    if length <= 0 {
        return Err(WordScoreError::InvalidLength { length });
    }
    usize::try_from(length).map_err(|_| WordScoreError::InvalidLength { length })
}

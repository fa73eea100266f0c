// CharUnit: one character of a scored sequence

/// A single character together with its accumulated score and its current
/// position in the owning sequence.
///
/// The score only ever accumulates; rules add to it and never reset it. The
/// index is owned by the sequence and is renumbered after every structural
/// edit, so it always equals the unit's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharUnit {
    /// The character (a single Unicode scalar value).
    pub ch: char,
    /// Accumulated identifying value.
    pub score: i32,
    /// Zero-based position in the live sequence.
    pub index: usize,
}

impl CharUnit {
    /// Create an unscored unit at `index`.
    pub fn new(ch: char, index: usize) -> Self {
        Self::with_score(ch, 0, index)
    }

    /// Create a unit seeded with an initial score.
    pub fn with_score(ch: char, score: i32, index: usize) -> Self {
        Self { ch, score, index }
    }

    /// Whether this unit may take part in a candidate.
    #[inline]
    pub fn is_eligible(&self) -> bool {
        self.score > 0
    }
}

/// Render a run of units as a string, in slice order.
pub fn units_to_string<'a>(units: impl IntoIterator<Item = &'a CharUnit>) -> String {
    units.into_iter().map(|u| u.ch).collect()
}

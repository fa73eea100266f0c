// Letter-case queries and one-to-one case conversion over scored text.

use crate::character::{is_lower, simple_lower, simple_upper};

/// Target case for [`convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Upper,
    Lower,
}

impl Case {
    /// Map one character to this case. Characters whose full mapping
    /// expands to several characters keep only the first one.
    pub fn map(self, c: char) -> char {
        match self {
            Case::Upper => simple_upper(c),
            Case::Lower => simple_lower(c),
        }
    }
}

/// `true` when any character is a lowercase letter.
pub fn has_lowercase(chars: &[char]) -> bool {
    chars.iter().any(|&c| is_lower(c))
}

/// Convert every character of `chars` to `case` in place.
///
/// The slice length never changes, so scores attached by position stay
/// aligned. The cost is that multi-character expansions are truncated
/// ("ß" becomes "S", not "SS").
pub fn convert(chars: &mut [char], case: Case) {
    for c in chars.iter_mut() {
        *c = case.map(*c);
    }
}

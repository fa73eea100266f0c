// Character classification and simple case mapping used by the score rules.

// ---------------------------------------------------------------------------
// Vowels
// ---------------------------------------------------------------------------

/// Vowels (uppercase). Every other letter counts as a consonant.
const VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U'];

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Letter,
    Digit,
    Whitespace,
    /// Punctuation and symbol characters (`-`, `&`, `$`, `+`, ...).
    Punctuation,
    /// Control characters and anything else with no visible role.
    Other,
}

/// Returns the character type for a given character.
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if c.is_numeric() {
        return CharType::Digit;
    }
    if c.is_whitespace() {
        return CharType::Whitespace;
    }
    if c.is_control() {
        return CharType::Other;
    }
    CharType::Punctuation
}

/// Check whether a character is a letter.
pub fn is_letter(c: char) -> bool {
    get_char_type(c) == CharType::Letter
}

/// Check whether a character is a letter or a digit.
pub fn is_letter_or_digit(c: char) -> bool {
    matches!(get_char_type(c), CharType::Letter | CharType::Digit)
}

/// Check whether a character splits a phrase into runs
/// (whitespace, punctuation or symbol).
pub fn is_separator(c: char) -> bool {
    matches!(get_char_type(c), CharType::Whitespace | CharType::Punctuation)
}

// ---------------------------------------------------------------------------
// Vowel / consonant classification
// ---------------------------------------------------------------------------

/// Check whether a character is one of A, E, I, O, U (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&simple_upper(c))
}

/// Check whether a character is a consonant: any letter that is not a vowel.
///
/// Letters outside the basic Latin alphabet (`Ä`, `Ñ`, `Ж`) are consonants
/// under this definition.
pub fn is_consonant(c: char) -> bool {
    is_letter(c) && !is_vowel(c)
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase / to_uppercase produce iterators
// because some characters map to multiple characters. Score units are
// positional, so only the one-to-one mapping is used: the first character
// of the expansion.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only
/// the first character.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
///
/// For characters with multi-character uppercase expansions (`ß` -> `SS`),
/// returns only the first character.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c.is_uppercase()
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c.is_lowercase()
}

/// Compare two character slices for equality, ignoring character case.
pub fn equals_ignore_case(a: &[char], b: &[char]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .all(|(&ca, &cb)| simple_upper(ca) == simple_upper(cb))
}

/// Find the first position where `needle` occurs in `haystack`, ignoring case.
///
/// Returns `None` for an empty needle.
pub fn find_ignore_case(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| equals_ignore_case(window, needle))
}

/// Find the first position where `needle` occurs in `haystack`, exact match.
///
/// Returns `None` for an empty needle.
pub fn find_exact(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    // -- CharType tests --

    #[test]
    fn char_type_letters() {
        assert_eq!(get_char_type('A'), CharType::Letter);
        assert_eq!(get_char_type('z'), CharType::Letter);
        assert_eq!(get_char_type('\u{00C4}'), CharType::Letter); // Ä
        assert_eq!(get_char_type('\u{0416}'), CharType::Letter); // Ж
    }

    #[test]
    fn char_type_digits() {
        assert_eq!(get_char_type('0'), CharType::Digit);
        assert_eq!(get_char_type('9'), CharType::Digit);
    }

    #[test]
    fn char_type_whitespace() {
        assert_eq!(get_char_type(' '), CharType::Whitespace);
        assert_eq!(get_char_type('\u{00A0}'), CharType::Whitespace); // NO-BREAK SPACE
    }

    #[test]
    fn char_type_punctuation_and_symbols() {
        assert_eq!(get_char_type('.'), CharType::Punctuation);
        assert_eq!(get_char_type('-'), CharType::Punctuation);
        assert_eq!(get_char_type('&'), CharType::Punctuation);
        assert_eq!(get_char_type('$'), CharType::Punctuation);
        assert_eq!(get_char_type('+'), CharType::Punctuation);
    }

    #[test]
    fn char_type_control() {
        assert_eq!(get_char_type('\u{0007}'), CharType::Other);
    }

    #[test]
    fn separators() {
        assert!(is_separator(' '));
        assert!(is_separator('\t'));
        assert!(is_separator('/'));
        assert!(is_separator('@'));
        assert!(!is_separator('a'));
        assert!(!is_separator('7'));
    }

    // -- Vowel / Consonant tests --

    #[test]
    fn vowels() {
        for c in ['a', 'e', 'i', 'o', 'u', 'A', 'E', 'I', 'O', 'U'] {
            assert!(is_vowel(c), "{c} should be a vowel");
        }
        assert!(!is_vowel('y'));
        assert!(!is_vowel('b'));
    }

    #[test]
    fn consonants() {
        assert!(is_consonant('b'));
        assert!(is_consonant('K'));
        assert!(is_consonant('y'));
        assert!(is_consonant('\u{00C4}')); // Ä
        assert!(!is_consonant('a'));
        assert!(!is_consonant('1'));
        assert!(!is_consonant(' '));
    }

    // -- Case functions --

    #[test]
    fn simple_case_mapping() {
        assert_eq!(simple_upper('a'), 'A');
        assert_eq!(simple_lower('Z'), 'z');
        assert_eq!(simple_upper('\u{00E4}'), '\u{00C4}'); // ä -> Ä
        assert_eq!(simple_upper('1'), '1');
    }

    #[test]
    fn simple_upper_is_one_to_one() {
        // ß expands to "SS"; only the first character is kept
        assert_eq!(simple_upper('\u{00DF}'), 'S');
    }

    #[test]
    fn upper_lower_predicates() {
        assert!(is_upper('A'));
        assert!(!is_upper('a'));
        assert!(!is_upper('1'));
        assert!(is_lower('a'));
        assert!(!is_lower('A'));
        assert!(!is_lower('-'));
    }

    // -- Searching --

    #[test]
    fn equals_ignore_case_basic() {
        assert!(equals_ignore_case(&chars("Hong Kong"), &chars("HONG KONG")));
        assert!(!equals_ignore_case(&chars("Hong"), &chars("Kong")));
        assert!(!equals_ignore_case(&chars("ab"), &chars("abc")));
        assert!(equals_ignore_case(&[], &[]));
    }

    #[test]
    fn find_ignore_case_first_occurrence() {
        let hay = chars("China Bank of china");
        assert_eq!(find_ignore_case(&hay, &chars("CHINA")), Some(0));
        assert_eq!(find_ignore_case(&hay, &chars("BANK")), Some(6));
        assert_eq!(find_ignore_case(&hay, &chars("JAPAN")), None);
    }

    #[test]
    fn find_rejects_empty_and_oversized_needles() {
        let hay = chars("abc");
        assert_eq!(find_ignore_case(&hay, &[]), None);
        assert_eq!(find_exact(&hay, &[]), None);
        assert_eq!(find_exact(&hay, &chars("abcd")), None);
    }

    #[test]
    fn find_exact_is_case_sensitive() {
        let hay = chars("Venture VENTURE");
        assert_eq!(find_exact(&hay, &chars("VENTURE")), Some(8));
        assert_eq!(find_exact(&hay, &chars("Venture")), Some(0));
        assert_eq!(find_exact(&hay, &chars("venture")), None);
    }
}

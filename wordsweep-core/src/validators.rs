// File: wordsweep-core/src/validators.rs
//! Programmatic validation functions for dictionary words, replacement
//! characters and input text.
//!
//! These mirror the checks the word store and request boundary apply, so the
//! engine can re-validate its own inputs instead of trusting callers.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Maximum length of a sensitive word, in characters.
pub const MAX_WORD_LENGTH: usize = 100;

/// Maximum length of a text accepted for sanitization, in characters.
pub const MAX_TEXT_LENGTH: usize = 10_000;

// Letters, digits, whitespace, hyphens and underscores only.
static WORD_TEXT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9\s\-_]+$").expect("static word pattern is valid")
});

/// Returns `true` if `word` only contains characters a stored sensitive word may contain.
///
/// The check is applied to the raw word, before normalization, exactly as the
/// word store receives it.
pub fn is_valid_word_text(word: &str) -> bool {
    WORD_TEXT_REGEX.is_match(word)
}

/// Returns `s` if it is exactly one extended grapheme cluster (one
/// user-perceived character), or `None` if it is empty or holds more.
///
/// # Examples
///
/// ```
/// use wordsweep_core::validators::single_grapheme;
///
/// assert_eq!(single_grapheme("#"), Some("#"));
/// assert_eq!(single_grapheme("e\u{301}"), Some("e\u{301}"));
/// assert_eq!(single_grapheme("**"), None);
/// assert_eq!(single_grapheme(""), None);
/// ```
pub fn single_grapheme(s: &str) -> Option<&str> {
    let mut graphemes = s.graphemes(true);
    let (Some(g), None) = (graphemes.next(), graphemes.next()) else {
        return None;
    };
    Some(g)
}

/// The `\w` class used for whole-word boundaries: any alphanumeric character
/// or an underscore.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A grapheme cluster is a word character when its base character is.
/// Combining marks therefore take the class of the character they attach to.
#[inline]
pub fn is_word_grapheme(g: &str) -> bool {
    g.chars().next().is_some_and(is_word_char)
}

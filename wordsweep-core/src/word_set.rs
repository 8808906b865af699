// wordsweep-core/src/word_set.rs
//! Sensitive words and the normalized, generation-stamped sets built from them.
//!
//! A [`WordSet`] is the immutable input to
//! [`MatchAutomaton::compile`](crate::automaton::MatchAutomaton::compile): every
//! entry is trimmed, upper-cased with the locale-independent Unicode mapping and
//! deduplicated. The generation number always comes from the word store; the
//! engine never invents one.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, WordsweepError};
use crate::validators::MAX_WORD_LENGTH;

/// A dictionary entry as held by the word store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitiveWord {
    pub id: i64,
    pub word: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SensitiveWord {
    /// Creates an entry stamped with the current time.
    pub fn new(id: i64, word: impl Into<String>) -> Self {
        Self {
            id,
            word: word.into(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Trims `raw` and folds it to upper case.
///
/// Fails with [`WordsweepError::InvalidWord`] if nothing is left after trimming
/// or the folded word is longer than [`MAX_WORD_LENGTH`] characters.
///
/// # Examples
///
/// ```
/// use wordsweep_core::word_set::normalize;
///
/// assert_eq!(normalize("  BadWord ").unwrap(), "BADWORD");
/// assert!(normalize("   ").is_err());
/// ```
pub fn normalize(raw: &str) -> Result<String> {
    let folded = raw.trim().to_uppercase();
    if folded.is_empty() {
        return Err(WordsweepError::invalid_word(raw, "word is empty"));
    }
    let length = folded.chars().count();
    if length > MAX_WORD_LENGTH {
        return Err(WordsweepError::invalid_word(
            raw,
            format!("length ({}) exceeds maximum allowed ({})", length, MAX_WORD_LENGTH),
        ));
    }
    Ok(folded)
}

/// A normalized, deduplicated snapshot of the active dictionary.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: Vec<String>,
    generation: u64,
}

impl WordSet {
    /// Normalizes every entry of `raw_words`, keeping the first of any duplicates.
    ///
    /// A single invalid entry fails the whole build.
    pub fn build<I, S>(raw_words: I, generation: u64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut words = Vec::new();
        let mut duplicates = 0usize;

        for raw in raw_words {
            let word = normalize(raw.as_ref())?;
            if seen.insert(word.clone()) {
                words.push(word);
            } else {
                duplicates += 1;
            }
        }

        debug!(
            "Built word set for generation {}: {} words ({} duplicates dropped).",
            generation,
            words.len(),
            duplicates
        );
        Ok(Self { words, generation })
    }

    /// Builds a set from a word store snapshot.
    pub fn from_words(entries: &[SensitiveWord], generation: u64) -> Result<Self> {
        Self::build(entries.iter().map(|e| e.word.as_str()), generation)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Checks membership, normalizing the query first.
    pub fn contains(&self, word: &str) -> bool {
        normalize(word)
            .map(|w| self.words.iter().any(|member| *member == w))
            .unwrap_or(false)
    }

    /// Iterates over the normalized words in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_uppercases() {
        assert_eq!(normalize("  badword\t").unwrap(), "BADWORD");
        assert_eq!(normalize("Bad Word").unwrap(), "BAD WORD");
    }

    #[test]
    fn test_normalize_uses_full_unicode_uppercase() {
        assert_eq!(normalize("straße").unwrap(), "STRASSE");
    }

    #[test]
    fn test_normalize_rejects_empty_and_overlong() {
        assert!(matches!(normalize(""), Err(WordsweepError::InvalidWord { .. })));
        assert!(matches!(normalize(" \n "), Err(WordsweepError::InvalidWord { .. })));

        let at_limit = "a".repeat(MAX_WORD_LENGTH);
        assert!(normalize(&at_limit).is_ok());

        let too_long = "a".repeat(MAX_WORD_LENGTH + 1);
        assert!(matches!(normalize(&too_long), Err(WordsweepError::InvalidWord { .. })));
    }

    #[test]
    fn test_build_drops_case_and_whitespace_duplicates() {
        let set = WordSet::build(["badword", " BADWORD ", "BadWord", "offensive"], 3).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.generation(), 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["BADWORD", "OFFENSIVE"]);
    }

    #[test]
    fn test_build_member_set_is_order_independent() {
        let a = WordSet::build(["one", "two", "three"], 1).unwrap();
        let b = WordSet::build(["three", "ONE", "two", "one"], 1).unwrap();
        let mut left: Vec<_> = a.iter().collect();
        let mut right: Vec<_> = b.iter().collect();
        left.sort_unstable();
        right.sort_unstable();
        assert_eq!(left, right);
    }

    #[test]
    fn test_build_fails_on_any_invalid_entry() {
        let result = WordSet::build(["fine", "  "], 1);
        assert!(matches!(result, Err(WordsweepError::InvalidWord { .. })));
    }

    #[test]
    fn test_contains_normalizes_query() {
        let set = WordSet::build(["badword"], 1).unwrap();
        assert!(set.contains(" BadWord"));
        assert!(!set.contains("goodword"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_from_words_uses_entry_text() {
        let entries = vec![SensitiveWord::new(1, "alpha"), SensitiveWord::new(2, "Alpha")];
        let set = WordSet::from_words(&entries, 9).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains("ALPHA"));
    }
}

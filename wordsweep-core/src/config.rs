//! Configuration management for `wordsweep-core`.
//!
//! This module defines the engine settings and the on-disk word list format.
//! It handles deserialization of YAML configurations and provides utilities
//! for loading, merging, and validating them.
//!
//! ```yaml
//! words:
//!   - badword
//!   - offensive
//! engine:
//!   replacement: "#"
//!   max_text_chars: 10000
//!   strict: false
//! ```
//!
//! License: MIT OR Apache-2.0

use std::collections::HashSet;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, WordsweepError};
use crate::validators::{is_valid_word_text, single_grapheme, MAX_TEXT_LENGTH};
use crate::word_set::normalize;

/// Runtime settings for [`SanitizationEngine`](crate::engine::SanitizationEngine).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Character used by `sanitize_default`: exactly one grapheme cluster.
    pub replacement: String,
    /// Longest accepted input, in characters. `None` disables the check.
    pub max_text_chars: Option<usize>,
    /// Refuse to publish an automaton built from an empty dictionary.
    pub strict: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            replacement: "*".to_string(),
            max_text_chars: Some(MAX_TEXT_LENGTH),
            strict: false,
        }
    }
}

impl EngineConfig {
    pub fn cache_options(&self) -> CacheOptions {
        CacheOptions {
            strict: self.strict,
        }
    }
}

/// Options for [`AutomatonCache`](crate::cache::AutomatonCache).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheOptions {
    /// Rebuilds from an empty snapshot fail with `EmptyWordSet`.
    pub strict: bool,
}

/// Represents the top-level word list file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WordListConfig {
    /// Raw sensitive words, in the casing the author wrote them.
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(default)]
    pub engine: EngineConfig,
}

impl WordListConfig {
    /// Loads a word list from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading word list from: {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|e| {
            WordsweepError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        let config = Self::from_yaml_str(&text).map_err(|e| match e {
            WordsweepError::Config(msg) => {
                WordsweepError::Config(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })?;
        info!("Loaded {} words from file {}.", config.words.len(), path.display());
        Ok(config)
    }

    /// Parses and validates a word list held in memory.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: WordListConfig = serde_yml::from_str(yaml)
            .map_err(|e| WordsweepError::Config(format!("Failed to parse word list: {}", e)))?;
        validate_words(&config.words)?;
        if single_grapheme(&config.engine.replacement).is_none() {
            return Err(WordsweepError::Config(format!(
                "engine.replacement must be exactly one display character, got '{}'",
                config.engine.replacement
            )));
        }
        if config.engine.max_text_chars == Some(0) {
            return Err(WordsweepError::Config(
                "engine.max_text_chars must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }
}

/// Appends `extra` words to `base`, skipping any that normalize to a word
/// already present. The first spelling of a word is the one kept.
///
/// Every extra word is checked the way a word list entry is; any invalid
/// entry fails the whole merge.
pub fn merge_words(base: WordListConfig, extra: &[String]) -> Result<WordListConfig> {
    debug!(
        "merge_words called. Base words: {}, extra words: {}",
        base.words.len(),
        extra.len()
    );
    let mut seen: HashSet<String> = base
        .words
        .iter()
        .filter_map(|w| normalize(w).ok())
        .collect();
    let mut words = base.words;
    let mut errors = Vec::new();

    for word in extra {
        match check_word(word) {
            Ok(normalized) if seen.insert(normalized.clone()) => words.push(word.clone()),
            Ok(_) => debug!("Skipping duplicate word in merge."),
            Err(e) => errors.push(e),
        }
    }
    if !errors.is_empty() {
        return Err(validation_failed(&errors));
    }

    debug!("Final word count after merge: {}", words.len());
    Ok(WordListConfig {
        words,
        engine: base.engine,
    })
}

/// Validates word integrity: allowed alphabet, length, no normalized duplicates.
fn validate_words(words: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for word in words {
        match check_word(word) {
            Ok(normalized) => {
                if !seen.insert(normalized) {
                    errors.push(format!("Duplicate word found: '{}'.", word));
                }
            }
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(validation_failed(&errors))
    }
}

/// Alphabet and length checks for one raw word; returns its normalized form.
fn check_word(word: &str) -> std::result::Result<String, String> {
    if !is_valid_word_text(word) {
        return Err(format!(
            "'{}' can only contain letters, numbers, spaces, hyphens, and underscores.",
            word
        ));
    }
    normalize(word).map_err(|e| e.to_string())
}

fn validation_failed(errors: &[String]) -> WordsweepError {
    WordsweepError::Config(format!(
        "Word list validation failed:\n{}",
        errors.join("\n")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.replacement, "*");
        assert_eq!(config.max_text_chars, Some(MAX_TEXT_LENGTH));
        assert!(!config.strict);
        assert!(!config.cache_options().strict);
    }

    #[test]
    fn test_from_yaml_str_fills_defaults() {
        let config = WordListConfig::from_yaml_str("words: [badword]\n").unwrap();
        assert_eq!(config.words, vec!["badword".to_string()]);
        assert_eq!(config.engine, EngineConfig::default());
    }

    #[test]
    fn test_from_yaml_str_rejects_multi_char_replacement() {
        let yaml = "words: []\nengine:\n  replacement: \"**\"\n";
        assert!(matches!(
            WordListConfig::from_yaml_str(yaml),
            Err(WordsweepError::Config(_))
        ));
    }

    #[test]
    fn test_from_yaml_str_rejects_normalized_duplicates() {
        let yaml = "words:\n  - badword\n  - \" BADWORD\"\n";
        let err = WordListConfig::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("Duplicate word"));
    }

    #[test]
    fn test_from_yaml_str_accepts_multi_scalar_replacement() {
        let yaml = "words: []\nengine:\n  replacement: \"e\u{0301}\"\n";
        let config = WordListConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.engine.replacement, "e\u{0301}");
    }

    #[test]
    fn test_merge_words_keeps_first_spelling() {
        let base = WordListConfig {
            words: vec!["BadWord".to_string()],
            engine: EngineConfig::default(),
        };
        let merged = merge_words(base, &["badword".to_string(), "other".to_string()]).unwrap();
        assert_eq!(merged.words, vec!["BadWord".to_string(), "other".to_string()]);
    }

    #[test]
    fn test_merge_words_rejects_invalid_extras() {
        let extra = vec!["bad!".to_string(), "fine".to_string(), "  ".to_string()];
        let err = merge_words(WordListConfig::default(), &extra).unwrap_err();
        assert!(matches!(err, WordsweepError::Config(_)));
        let message = err.to_string();
        assert!(message.contains("'bad!' can only contain letters"));
        assert!(message.contains("word is empty"));
        assert!(!message.contains("fine"));
    }
}

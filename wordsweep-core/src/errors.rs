//! errors.rs - Custom error types for the wordsweep-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//! Every variant is a recoverable validation or collaborator failure; nothing
//! in the core is process-fatal.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `wordsweep-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WordsweepError {
    #[error("Invalid sensitive word '{word}': {reason}")]
    InvalidWord { word: String, reason: String },

    #[error("Replacement must be exactly one display character, got '{0}'")]
    InvalidReplacement(String),

    #[error("Word set is empty and the strict policy requires at least one word")]
    EmptyWordSet,

    #[error("Text length ({length} chars) exceeds maximum allowed ({max})")]
    TextTooLong { length: usize, max: usize },

    #[error("Sensitive word with name {0} already exists.")]
    DuplicateWord(String),

    #[error("Sensitive word with ID {0} not found.")]
    WordNotFound(i64),

    #[error("Failed to build match automaton: {0}")]
    AutomatonBuild(String),

    #[error("Word source failed to produce a snapshot: {0}")]
    WordSource(#[source] anyhow::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl WordsweepError {
    pub(crate) fn invalid_word(word: &str, reason: impl Into<String>) -> Self {
        WordsweepError::InvalidWord {
            word: word.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = WordsweepError> = std::result::Result<T, E>;

// wordsweep-core/src/headless.rs
//! `headless.rs`
//! Convenience wrapper for one-shot sanitization without a store or a
//! long-lived cache.

use std::sync::Arc;

use crate::cache::AutomatonCache;
use crate::config::CacheOptions;
use crate::detection::DetectionResult;
use crate::engine::SanitizationEngine;
use crate::errors::Result;
use crate::word_set::WordSet;

/// Sanitizes `text` against `words` in a single call.
///
/// The automaton is compiled for this call only and dropped afterwards, so
/// callers that sanitize repeatedly should keep a [`SanitizationEngine`]
/// instead.
///
/// # Arguments
///
/// * `words` - Raw dictionary words; they are normalized here.
/// * `text` - The string to be sanitized.
/// * `replacement` - Exactly one character.
pub fn headless_sanitize_string<I, S>(
    words: I,
    text: &str,
    replacement: &str,
) -> Result<DetectionResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let word_set = WordSet::build(words, 1)?;
    let cache = AutomatonCache::with_word_set(word_set, CacheOptions::default())?;
    SanitizationEngine::new(Arc::new(cache)).sanitize(text, replacement)
}

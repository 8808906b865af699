// wordsweep-core/src/engine.rs
//! Defines the `SanitizationEngine`, the public entry point of the library.
//!
//! The engine validates its inputs, fetches the current automaton from an
//! [`AutomatonCache`], scans the text once, and produces a
//! [`DetectionResult`]: a copy of the text in which every matched span is
//! replaced by the replacement character repeated once per user-perceived
//! character of the span, plus the distinct words that were matched.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::automaton::Match;
use crate::cache::AutomatonCache;
use crate::config::EngineConfig;
use crate::detection::{log_match_debug, DetectionResult};
use crate::errors::{Result, WordsweepError};
use crate::validators::single_grapheme;

/// Detects and redacts dictionary words using the cache's current automaton.
#[derive(Debug, Clone)]
pub struct SanitizationEngine {
    cache: Arc<AutomatonCache>,
    config: EngineConfig,
}

impl SanitizationEngine {
    pub fn new(cache: Arc<AutomatonCache>) -> Self {
        Self::with_config(cache, EngineConfig::default())
    }

    pub fn with_config(cache: Arc<AutomatonCache>, config: EngineConfig) -> Self {
        Self { cache, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<AutomatonCache> {
        &self.cache
    }

    /// Generation of the automaton the next scan would use.
    pub fn current_generation(&self) -> u64 {
        self.cache.generation()
    }

    /// Sanitizes `text`, redacting each match with `replacement`.
    ///
    /// `replacement` must be exactly one grapheme cluster; longer strings are
    /// rejected rather than truncated.
    pub fn sanitize(&self, text: &str, replacement: &str) -> Result<DetectionResult> {
        let replacement = single_grapheme(replacement)
            .ok_or_else(|| WordsweepError::InvalidReplacement(replacement.to_string()))?;
        self.sanitize_with(text, replacement)
    }

    /// Sanitizes `text` with the configured replacement character.
    pub fn sanitize_default(&self, text: &str) -> Result<DetectionResult> {
        self.sanitize(text, &self.config.replacement)
    }

    /// Returns the distinct words found in `text`, without redacting.
    pub fn detect(&self, text: &str) -> Result<Vec<String>> {
        self.check_length(text)?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let matches = self.cache.get_current().scan(text);
        Ok(distinct_words(text, &matches))
    }

    fn sanitize_with(&self, text: &str, replacement: &str) -> Result<DetectionResult> {
        self.check_length(text)?;
        if text.trim().is_empty() {
            return Ok(DetectionResult::unchanged(text));
        }

        let automaton = self.cache.get_current();
        let matches = automaton.scan(text);
        debug!(
            "Scanned {} bytes against generation {}: {} matches.",
            text.len(),
            automaton.generation(),
            matches.len()
        );
        if matches.is_empty() {
            return Ok(DetectionResult::unchanged(text));
        }

        let mut sanitized = String::with_capacity(text.len());
        let mut last_end = 0usize;
        for m in &matches {
            let matched = &text[m.start..m.end];
            log_match_debug(module_path!(), &m.word, matched, m.start, m.end);
            sanitized.push_str(&text[last_end..m.start]);
            sanitized.push_str(&replacement.repeat(matched.graphemes(true).count()));
            last_end = m.end;
        }
        sanitized.push_str(&text[last_end..]);

        Ok(DetectionResult {
            original_text: text.to_string(),
            sanitized_text: sanitized,
            detected_words: distinct_words(text, &matches),
        })
    }

    fn check_length(&self, text: &str) -> Result<()> {
        let Some(max) = self.config.max_text_chars else {
            return Ok(());
        };
        // Byte length bounds char count from above; skip counting short texts.
        if text.len() <= max {
            return Ok(());
        }
        let length = text.chars().count();
        if length > max {
            return Err(WordsweepError::TextTooLong { length, max });
        }
        Ok(())
    }
}

/// One entry per dictionary word, spelled as it first appeared in `text`.
fn distinct_words(text: &str, matches: &[Match]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for m in matches {
        if seen.insert(m.word.as_str()) {
            words.push(text[m.start..m.end].to_string());
        }
    }
    words
}

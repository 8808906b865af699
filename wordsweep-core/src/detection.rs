// wordsweep-core/src/detection.rs
//! Provides the per-call detection result and the helpers that keep matched
//! text out of debug logs unless explicitly allowed.

use serde::{Deserialize, Serialize};
use log::debug;

use lazy_static::lazy_static;

lazy_static! {
    /// A static boolean that is initialized once to determine if matched text is allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("WORDSWEEP_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Outcome of one sanitize call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub original_text: String,
    pub sanitized_text: String,
    /// Distinct matched words as they appeared in the text, in order of first occurrence.
    pub detected_words: Vec<String>,
}

impl DetectionResult {
    /// A result for text that was not scanned or had nothing to redact.
    pub fn unchanged(text: &str) -> Self {
        Self {
            original_text: text.to_string(),
            sanitized_text: text.to_string(),
            detected_words: Vec::new(),
        }
    }

    pub fn has_detections(&self) -> bool {
        !self.detected_words.is_empty()
    }
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.chars().count())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_match_debug(module_path: &str, word: &str, matched: &str, start: usize, end: usize) {
    debug!(
        "{} Matched word '{}' at {}..{}: '{}'",
        module_path,
        get_loggable_content(word),
        start,
        end,
        get_loggable_content(matched)
    );
}

// wordsweep-core/src/lib.rs
//! # Wordsweep Core Library
//!
//! `wordsweep-core` detects and redacts words from a managed dictionary of
//! sensitive words. Matching is case-insensitive, respects whole-word
//! boundaries, and runs as a single Aho-Corasick pass over the text no matter
//! how large the dictionary grows.
//!
//! The dictionary can change at any time. Every accepted change advances a
//! generation number, and the [`AutomatonCache`] rebuilds the compiled
//! automaton and publishes it atomically. In-flight scans keep the automaton
//! they started with; later scans see the new one.
//!
//! ## Modules
//!
//! * `word_set`: Normalization and the immutable [`WordSet`] snapshot.
//! * `automaton`: The compiled [`MatchAutomaton`] and its scan.
//! * `cache`: The [`AutomatonCache`] and the [`WordSource`] it rebuilds from.
//! * `engine`: The [`SanitizationEngine`] front door.
//! * `store`: An in-memory, thread-safe word store.
//! * `config`: YAML word lists and engine settings.
//! * `detection`: The per-call [`DetectionResult`] and log redaction helpers.
//! * `validators`: Word, replacement and text checks.
//! * `headless`: One-shot sanitization.
//!
//! ## Usage Example
//!
//! ```rust
//! use std::sync::Arc;
//! use wordsweep_core::{AutomatonCache, InMemoryWordStore, SanitizationEngine};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let cache = Arc::new(AutomatonCache::new());
//!     let store = InMemoryWordStore::new().attach_cache(Arc::clone(&cache));
//!     store.create("badword")?;
//!     store.create("offensive")?;
//!
//!     let engine = SanitizationEngine::new(cache);
//!     let result = engine.sanitize("This is a badword and offensive text", "*")?;
//!
//!     assert_eq!(result.sanitized_text, "This is a ******* and ********* text");
//!     assert_eq!(result.detected_words, vec!["badword", "offensive"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`WordsweepError`]. Collaborator failures from a
//! [`WordSource`] are carried as `anyhow::Error` inside
//! [`WordsweepError::WordSource`].
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod automaton;
pub mod cache;
pub mod config;
pub mod detection;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod store;
pub mod validators;
pub mod word_set;

/// Re-exports the configuration types used to set up an engine.
pub use config::{merge_words, CacheOptions, EngineConfig, WordListConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::WordsweepError;

pub use automaton::{Match, MatchAutomaton};
pub use cache::{AutomatonCache, WordSource};
pub use engine::SanitizationEngine;
pub use store::InMemoryWordStore;
pub use word_set::{normalize, SensitiveWord, WordSet};

/// Re-exports the result type and the log redaction helper.
pub use detection::{redact_sensitive, DetectionResult};

/// Re-exports the one-shot helper for non-interactive use.
pub use headless::headless_sanitize_string;

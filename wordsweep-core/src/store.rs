// wordsweep-core/src/store.rs
//! An in-memory word store.
//!
//! The store validates and normalizes words, assigns ids, stamps
//! creation/update times, and counts accepted mutations in a generation
//! number. When attached to an [`AutomatonCache`] it notifies the cache of
//! every mutation before returning, so later sanitize calls see the change.
//!
//! License: MIT OR APACHE 2.0

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use log::{info, warn};

use crate::cache::{AutomatonCache, WordSource};
use crate::errors::{Result, WordsweepError};
use crate::validators::is_valid_word_text;
use crate::word_set::{normalize, SensitiveWord};

#[derive(Debug, Default)]
struct StoreState {
    words: BTreeMap<i64, SensitiveWord>,
    next_id: i64,
    generation: u64,
}

/// Thread-safe dictionary of sensitive words.
#[derive(Debug, Default)]
pub struct InMemoryWordStore {
    state: RwLock<StoreState>,
    cache: Option<Arc<AutomatonCache>>,
}

impl InMemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifies `cache` of every future mutation, and brings it up to date now.
    pub fn attach_cache(mut self, cache: Arc<AutomatonCache>) -> Self {
        self.cache = Some(cache);
        let generation = self.generation();
        if generation > 0 {
            self.notify(generation);
        }
        self
    }

    /// Number of accepted mutations so far.
    pub fn generation(&self) -> u64 {
        self.read().generation
    }

    /// All words, ordered by id.
    pub fn list(&self) -> Vec<SensitiveWord> {
        self.read().words.values().cloned().collect()
    }

    pub fn get(&self, id: i64) -> Option<SensitiveWord> {
        self.read().words.get(&id).cloned()
    }

    /// Looks a word up by its normalized text.
    pub fn get_by_word(&self, word: &str) -> Option<SensitiveWord> {
        let normalized = normalize(word).ok()?;
        self.read()
            .words
            .values()
            .find(|w| w.word == normalized)
            .cloned()
    }

    pub fn exists(&self, id: i64) -> bool {
        self.read().words.contains_key(&id)
    }

    pub fn create(&self, word: &str) -> Result<SensitiveWord> {
        let normalized = validate(word)?;
        let (created, generation) = {
            let mut state = self.write();
            if state.words.values().any(|w| w.word == normalized) {
                return Err(WordsweepError::DuplicateWord(normalized));
            }
            state.next_id += 1;
            let entry = SensitiveWord::new(state.next_id, normalized);
            state.words.insert(entry.id, entry.clone());
            state.generation += 1;
            (entry, state.generation)
        };
        info!("Created sensitive word {} (generation {}).", created.id, generation);
        self.notify(generation);
        Ok(created)
    }

    pub fn update(&self, id: i64, word: &str) -> Result<SensitiveWord> {
        let normalized = validate(word)?;
        let (updated, generation) = {
            let mut state = self.write();
            if state
                .words
                .values()
                .any(|w| w.id != id && w.word == normalized)
            {
                return Err(WordsweepError::DuplicateWord(normalized));
            }
            let entry = state
                .words
                .get_mut(&id)
                .ok_or(WordsweepError::WordNotFound(id))?;
            entry.word = normalized;
            entry.updated_at = Some(Utc::now());
            let updated = entry.clone();
            state.generation += 1;
            (updated, state.generation)
        };
        info!("Updated sensitive word {} (generation {}).", id, generation);
        self.notify(generation);
        Ok(updated)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let generation = {
            let mut state = self.write();
            if state.words.remove(&id).is_none() {
                return Err(WordsweepError::WordNotFound(id));
            }
            state.generation += 1;
            state.generation
        };
        info!("Deleted sensitive word {} (generation {}).", id, generation);
        self.notify(generation);
        Ok(())
    }

    fn notify(&self, generation: u64) {
        let Some(cache) = &self.cache else {
            return;
        };
        // The mutation is committed either way; a failed rebuild is retried by
        // the next invalidation for this or a later generation.
        if let Err(e) = cache.invalidate(generation, self) {
            warn!("Cache refresh for generation {} failed: {}", generation, e);
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WordSource for InMemoryWordStore {
    fn list_active_words(&self) -> anyhow::Result<Vec<SensitiveWord>> {
        Ok(self.list())
    }
}

fn validate(word: &str) -> Result<String> {
    if !is_valid_word_text(word) {
        return Err(WordsweepError::invalid_word(
            word,
            "can only contain letters, numbers, spaces, hyphens, and underscores",
        ));
    }
    normalize(word)
}

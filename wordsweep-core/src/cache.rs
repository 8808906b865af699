//! cache.rs - Holds the published match automaton and rebuilds it when the
//! dictionary generation advances.
//!
//! Readers clone an `Arc` under a read lock that is held only for the clone,
//! so a scan never waits for a rebuild and an automaton stays alive for as
//! long as any scan still holds it. Rebuilds are serialized by a separate
//! mutex; invalidations that pile up behind a running rebuild collapse into a
//! single rebuild for the newest requested generation.
//!
//! License: MIT OR APACHE 2.0

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use log::{debug, info, warn};

use crate::automaton::MatchAutomaton;
use crate::config::CacheOptions;
use crate::errors::{Result, WordsweepError};
use crate::word_set::{SensitiveWord, WordSet};

/// Supplies complete snapshots of the active dictionary.
///
/// Implemented by the word store, and by any closure returning a snapshot.
pub trait WordSource: Send + Sync {
    fn list_active_words(&self) -> anyhow::Result<Vec<SensitiveWord>>;
}

impl<F> WordSource for F
where
    F: Fn() -> anyhow::Result<Vec<SensitiveWord>> + Send + Sync,
{
    fn list_active_words(&self) -> anyhow::Result<Vec<SensitiveWord>> {
        self()
    }
}

/// Owner of the current [`MatchAutomaton`].
#[derive(Debug)]
pub struct AutomatonCache {
    current: RwLock<Arc<MatchAutomaton>>,
    // Newest generation any invalidation has asked for.
    pending: AtomicU64,
    rebuild: Mutex<()>,
    options: CacheOptions,
    #[cfg(test)]
    pub(crate) loads: std::sync::atomic::AtomicUsize,
}

impl Default for AutomatonCache {
    fn default() -> Self {
        Self::new()
    }
}

impl AutomatonCache {
    /// A cache publishing an empty automaton for generation 0.
    pub fn new() -> Self {
        Self::with_options(CacheOptions::default())
    }

    pub fn with_options(options: CacheOptions) -> Self {
        Self::from_automaton(MatchAutomaton::empty(0), options)
    }

    /// A cache publishing `word_set` right away.
    pub fn with_word_set(word_set: WordSet, options: CacheOptions) -> Result<Self> {
        let automaton = compile(&word_set, options)?;
        Ok(Self::from_automaton(automaton, options))
    }

    fn from_automaton(automaton: MatchAutomaton, options: CacheOptions) -> Self {
        Self {
            pending: AtomicU64::new(automaton.generation()),
            current: RwLock::new(Arc::new(automaton)),
            rebuild: Mutex::new(()),
            options,
            #[cfg(test)]
            loads: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Returns the latest published automaton.
    ///
    /// Never waits on a rebuild: while one is running, callers get the
    /// previous generation.
    pub fn get_current(&self) -> Arc<MatchAutomaton> {
        #[cfg(test)]
        self.loads.fetch_add(1, Ordering::Relaxed);
        // The guarded value is always a valid Arc, so a poisoned lock is still usable.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Generation of the published automaton.
    pub fn generation(&self) -> u64 {
        self.get_current().generation()
    }

    /// Newest generation requested through [`invalidate`](Self::invalidate).
    pub fn pending_generation(&self) -> u64 {
        self.pending.load(Ordering::Acquire)
    }

    /// Signals that the dictionary changed and republishes it from `source`.
    ///
    /// Returns the automaton that is current when the call finishes. If a
    /// concurrent call already published `new_generation` (or newer), no
    /// rebuild happens. On failure the previous automaton stays current.
    pub fn invalidate<S>(&self, new_generation: u64, source: &S) -> Result<Arc<MatchAutomaton>>
    where
        S: WordSource + ?Sized,
    {
        self.pending.fetch_max(new_generation, Ordering::AcqRel);
        let _rebuild = self.rebuild.lock().unwrap_or_else(PoisonError::into_inner);

        let target = self.pending.load(Ordering::Acquire);
        let published = self.get_current();
        if published.generation() >= target {
            debug!(
                "Invalidation for generation {} already covered by published generation {}.",
                new_generation,
                published.generation()
            );
            return Ok(published);
        }

        match self.build(target, source) {
            Ok(automaton) => {
                let automaton = Arc::new(automaton);
                *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&automaton);
                info!(
                    "Published automaton for generation {} ({} words).",
                    automaton.generation(),
                    automaton.word_count()
                );
                Ok(automaton)
            }
            Err(e) => {
                warn!(
                    "Rebuild for generation {} failed, keeping generation {}: {}",
                    target,
                    published.generation(),
                    e
                );
                Err(e)
            }
        }
    }

    fn build<S>(&self, generation: u64, source: &S) -> Result<MatchAutomaton>
    where
        S: WordSource + ?Sized,
    {
        let words = source
            .list_active_words()
            .map_err(WordsweepError::WordSource)?;
        let word_set = WordSet::from_words(&words, generation)?;
        compile(&word_set, self.options)
    }
}

fn compile(word_set: &WordSet, options: CacheOptions) -> Result<MatchAutomaton> {
    if options.strict {
        MatchAutomaton::compile_strict(word_set)
    } else {
        MatchAutomaton::compile(word_set)
    }
}

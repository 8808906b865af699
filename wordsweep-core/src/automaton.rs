// wordsweep-core/src/automaton.rs
//! The compiled, immutable matcher for one generation of the dictionary.
//!
//! A [`MatchAutomaton`] wraps a double-array Aho-Corasick automaton built over
//! the upper-cased words of a [`WordSet`]. Scanning folds the text to upper
//! case once, runs the automaton once, and then applies two rules to the raw
//! hits:
//!
//! * **Whole words only.** A hit must start and end on grapheme-cluster
//!   edges, and the clusters on either side of it must not be word characters
//!   (see [`is_word_grapheme`]). A combining mark belongs to the character it
//!   follows, so `cafe` does not match the decomposed `cafe\u{301}`. A hit
//!   that starts or ends inside the case expansion of a single character (the
//!   `SS` of `ß`) is dropped as well.
//! * **Leftmost, then longest.** Accepted hits are taken left to right without
//!   overlap. When several words start at the same offset the longest one wins.
//!   This depends only on the words, never on dictionary order.
//!
//! Scan cost is linear in the text length plus the number of raw hits,
//! whatever the size of the dictionary.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;
use std::fmt;

use daachorse::DoubleArrayAhoCorasick;
use log::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::errors::{Result, WordsweepError};
use crate::validators::is_word_grapheme;
use crate::word_set::WordSet;

/// One accepted occurrence of a dictionary word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Byte offset of the first matched byte in the scanned text.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
    /// The dictionary word, in its stored upper-case form.
    pub word: String,
}

/// A compiled, read-only matcher for one [`WordSet`] generation.
pub struct MatchAutomaton {
    // None for an empty dictionary: daachorse refuses to build from no patterns.
    automaton: Option<DoubleArrayAhoCorasick<usize>>,
    words: Vec<String>,
    generation: u64,
}

impl fmt::Debug for MatchAutomaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchAutomaton")
            .field("automaton", &"<DoubleArrayAhoCorasick>")
            .field("words", &self.words.len())
            .field("generation", &self.generation)
            .finish()
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    start: usize,
    end: usize,
    pattern: usize,
}

impl MatchAutomaton {
    /// Compiles `word_set`. An empty set yields an automaton that never matches.
    pub fn compile(word_set: &WordSet) -> Result<Self> {
        let generation = word_set.generation();
        let words: Vec<String> = word_set.iter().map(str::to_owned).collect();

        if words.is_empty() {
            debug!("Compiled empty automaton for generation {}.", generation);
            return Ok(Self::empty(generation));
        }

        let automaton = DoubleArrayAhoCorasick::new(words.iter().map(String::as_bytes))
            .map_err(|e| WordsweepError::AutomatonBuild(e.to_string()))?;

        debug!(
            "Compiled automaton for generation {} over {} words.",
            generation,
            words.len()
        );
        Ok(Self {
            automaton: Some(automaton),
            words,
            generation,
        })
    }

    /// Like [`compile`](Self::compile), but an empty set is an error.
    pub fn compile_strict(word_set: &WordSet) -> Result<Self> {
        if word_set.is_empty() {
            return Err(WordsweepError::EmptyWordSet);
        }
        Self::compile(word_set)
    }

    /// An automaton with no words.
    pub fn empty(generation: u64) -> Self {
        Self {
            automaton: None,
            words: Vec::new(),
            generation,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Finds every whole-word occurrence of a dictionary word in `text`.
    ///
    /// Returned matches are ordered by `start` and never overlap.
    pub fn scan(&self, text: &str) -> Vec<Match> {
        let Some(automaton) = &self.automaton else {
            return Vec::new();
        };
        if text.is_empty() {
            return Vec::new();
        }

        let folded = FoldedText::new(text);
        let edges = GraphemeEdges::new(text);
        let mut candidates: Vec<Candidate> = automaton
            .find_overlapping_iter(folded.as_str())
            .filter_map(|hit| {
                let start = folded.original_offset(hit.start())?;
                let end = folded.original_offset(hit.end())?;
                is_whole_word(text, &edges, start, end).then_some(Candidate {
                    start,
                    end,
                    pattern: hit.value(),
                })
            })
            .collect();

        candidates.sort_unstable_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then(b.end.cmp(&a.end))
                .then(a.pattern.cmp(&b.pattern))
        });

        let mut matches = Vec::new();
        let mut cursor = 0usize;
        for candidate in candidates {
            if candidate.start < cursor {
                continue;
            }
            cursor = candidate.end;
            matches.push(Match {
                start: candidate.start,
                end: candidate.end,
                word: self.words[candidate.pattern].clone(),
            });
        }
        matches
    }
}

/// `text[start..end]` covers whole grapheme clusters and is delimited by the
/// string edges or non-word clusters.
fn is_whole_word(text: &str, edges: &GraphemeEdges, start: usize, end: usize) -> bool {
    if !edges.is_edge(start) || !edges.is_edge(end) {
        return false;
    }
    let before_ok = text[..start]
        .graphemes(true)
        .next_back()
        .map_or(true, |g| !is_word_grapheme(g));
    let after_ok = text[end..]
        .graphemes(true)
        .next()
        .map_or(true, |g| !is_word_grapheme(g));
    before_ok && after_ok
}

/// Byte offsets of the grapheme-cluster edges of a text.
struct GraphemeEdges {
    // Empty for ASCII text, where every byte offset is an edge.
    edges: Vec<bool>,
}

impl GraphemeEdges {
    fn new(text: &str) -> Self {
        if text.is_ascii() {
            return Self { edges: Vec::new() };
        }
        let mut edges = vec![false; text.len() + 1];
        for (index, _) in text.grapheme_indices(true) {
            edges[index] = true;
        }
        edges[text.len()] = true;
        Self { edges }
    }

    fn is_edge(&self, offset: usize) -> bool {
        self.edges.is_empty() || self.edges.get(offset).copied().unwrap_or(false)
    }
}

/// Upper-cased copy of a text plus the map from its byte offsets back to the
/// original ones.
struct FoldedText<'a> {
    folded: Cow<'a, str>,
    // origin[i] is the original offset of the character whose fold starts at
    // folded byte i; None inside a fold or a multi-byte sequence. Empty when
    // folding kept every byte offset unchanged.
    origin: Vec<Option<usize>>,
}

impl<'a> FoldedText<'a> {
    fn new(text: &'a str) -> Self {
        if text.is_ascii() {
            let folded = if text.bytes().any(|b| b.is_ascii_lowercase()) {
                Cow::Owned(text.to_ascii_uppercase())
            } else {
                Cow::Borrowed(text)
            };
            return Self {
                folded,
                origin: Vec::new(),
            };
        }

        let mut folded = String::with_capacity(text.len());
        let mut origin = Vec::with_capacity(text.len() + 1);
        for (index, ch) in text.char_indices() {
            origin.push(Some(index));
            folded.extend(ch.to_uppercase());
            origin.resize(folded.len(), None);
        }
        origin.push(Some(text.len()));

        Self {
            folded: Cow::Owned(folded),
            origin,
        }
    }

    fn as_str(&self) -> &str {
        &self.folded
    }

    fn original_offset(&self, folded_offset: usize) -> Option<usize> {
        if self.origin.is_empty() {
            Some(folded_offset)
        } else {
            self.origin.get(folded_offset).copied().flatten()
        }
    }
}

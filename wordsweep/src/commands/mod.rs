// wordsweep/src/commands/mod.rs
//! Command implementations and the setup they share.

pub mod detect;
pub mod sanitize;

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use wordsweep_core::{merge_words, AutomatonCache, SanitizationEngine, WordListConfig, WordSet};

use crate::cli::WordArgs;

/// Loads the word list (if any), merges `--word` additions, and compiles an
/// engine for it.
pub fn build_engine(args: &WordArgs) -> Result<SanitizationEngine> {
    let base = match &args.words_file {
        Some(path) => WordListConfig::load_from_file(path)
            .with_context(|| format!("Failed to load word list {}", path.display()))?,
        None => WordListConfig::default(),
    };
    let config = merge_words(base, &args.words).context("Invalid --word value")?;
    info!("Using {} sensitive words.", config.words.len());

    let word_set = WordSet::build(&config.words, 1).context("Invalid sensitive word")?;
    let cache = AutomatonCache::with_word_set(word_set, config.engine.cache_options())
        .context("Failed to compile the word list")?;
    Ok(SanitizationEngine::with_config(Arc::new(cache), config.engine))
}

/// Reads the whole input from `path`, or from stdin when `path` is `None`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            debug!("Reading input from file: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            debug!("Reading input from stdin.");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

// wordsweep-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

use wordsweep_core::config::{merge_words, WordListConfig};
use wordsweep_core::{AutomatonCache, SanitizationEngine, WordSet, WordsweepError};

fn write_yaml(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_from_file() -> Result<()> {
    let file = write_yaml(
        r##"
words:
  - badword
  - offensive words
engine:
  replacement: "#"
  max_text_chars: 500
"##,
    )?;
    let config = WordListConfig::load_from_file(file.path())?;
    assert_eq!(config.words, vec!["badword", "offensive words"]);
    assert_eq!(config.engine.replacement, "#");
    assert_eq!(config.engine.max_text_chars, Some(500));
    assert!(!config.engine.strict);
    Ok(())
}

#[test]
fn test_load_from_missing_file_names_the_path() {
    let err = WordListConfig::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(matches!(err, WordsweepError::Config(_)));
    assert!(err.to_string().contains("/definitely/not/here.yaml"));
}

#[test]
fn test_load_from_file_reports_every_invalid_word() -> Result<()> {
    let file = write_yaml("words:\n  - \"bad!\"\n  - ok\n  - \"what?\"\n")?;
    let err = WordListConfig::load_from_file(file.path()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("bad!"));
    assert!(message.contains("what?"));
    assert!(!message.contains("'ok'"));
    Ok(())
}

#[test]
fn test_zero_text_cap_is_rejected() -> Result<()> {
    let file = write_yaml("words: [bad]\nengine:\n  max_text_chars: 0\n")?;
    assert!(WordListConfig::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_loaded_config_drives_an_engine() -> Result<()> {
    let file = write_yaml("words: [badword]\nengine:\n  replacement: \"-\"\n")?;
    let config = merge_words(
        WordListConfig::load_from_file(file.path())?,
        &["offensive".to_string()],
    )?;

    let word_set = WordSet::build(&config.words, 1)?;
    let cache = AutomatonCache::with_word_set(word_set, config.engine.cache_options())?;
    let engine = SanitizationEngine::with_config(Arc::new(cache), config.engine);

    let result = engine.sanitize_default("a badword, an OFFENSIVE one")?;
    assert_eq!(result.sanitized_text, "a -------, an --------- one");
    Ok(())
}

#[test]
fn test_strict_config_refuses_empty_dictionary() -> Result<()> {
    let file = write_yaml("words: []\nengine:\n  strict: true\n")?;
    let config = WordListConfig::load_from_file(file.path())?;
    let word_set = WordSet::build(&config.words, 1)?;
    let err = AutomatonCache::with_word_set(word_set, config.engine.cache_options()).unwrap_err();
    assert!(matches!(err, WordsweepError::EmptyWordSet));
    Ok(())
}

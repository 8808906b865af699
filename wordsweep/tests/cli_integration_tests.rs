// wordsweep/tests/cli_integration_tests.rs
//! Command-line integration tests for the `wordsweep` binary.
//!
//! The binary is run through `assert_cmd`; word lists, inputs and outputs
//! live in `tempfile` fixtures so every test is isolated. Stdout and stderr
//! are not terminals here, so output carries no color codes.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, tempdir};

/// Runs `wordsweep` with `args`, feeding `input` on stdin.
fn run_wordsweep(input: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("wordsweep").unwrap();
    cmd.env_remove("WORDSWEEP_WORDS");
    cmd.env_remove("WORDSWEEP_ALLOW_DEBUG_PII");
    cmd.env("RUST_LOG", "debug");
    cmd.args(args);
    cmd.write_stdin(input.as_bytes());
    cmd.assert()
}

fn word_list(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

#[test]
fn test_sanitize_from_stdin_with_word_flags() {
    run_wordsweep(
        "This is a badword and offensive text",
        &["sanitize", "--word", "badword", "--word", "OFFENSIVE"],
    )
    .success()
    .stdout("This is a ******* and ********* text\n")
    .stderr(predicate::str::contains("Detected 2 sensitive word(s):"));
}

#[test]
fn test_sanitize_with_word_list_file_and_custom_replacement() -> Result<()> {
    let words = word_list("words:\n  - badword\n")?;
    run_wordsweep(
        "no BADWORD here, but classic is fine",
        &["sanitize", "-w", words.path().to_str().unwrap(), "-r", "#", "--no-summary"],
    )
    .success()
    .stdout("no ####### here, but classic is fine\n")
    .stderr(predicate::str::contains("sensitive word(s)").not());
    Ok(())
}

#[test]
fn test_sanitize_uses_word_list_replacement() -> Result<()> {
    let words = word_list("words: [bad]\nengine:\n  replacement: \"-\"\n")?;
    run_wordsweep("so bad", &["-q", "sanitize", "-w", words.path().to_str().unwrap()])
        .success()
        .stdout("so ---\n")
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_sanitize_rejects_multi_character_replacement() {
    run_wordsweep("bad", &["sanitize", "--word", "bad", "-r", "**"])
        .failure()
        .stderr(predicate::str::contains("exactly one display character"));
}

#[test]
fn test_sanitize_accepts_single_cluster_replacement() {
    run_wordsweep("so bad", &["sanitize", "--word", "bad", "-r", "e\u{0301}", "--no-summary"])
        .success()
        .stdout("so e\u{0301}e\u{0301}e\u{0301}\n");
}

#[test]
fn test_word_flag_is_validated_like_word_list_entries() {
    run_wordsweep("text with bad! in it", &["sanitize", "--word", "bad!"])
        .failure()
        .stderr(predicate::str::contains("Invalid --word value"))
        .stderr(predicate::str::contains("can only contain letters"));

    run_wordsweep("text", &["detect", "--word", "ok", "--word", "   "])
        .failure()
        .stderr(predicate::str::contains("word is empty"));
}

#[test]
fn test_sanitize_reads_file_and_writes_output_file() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, "first bad line\nsecond line\n")?;

    run_wordsweep(
        "",
        &[
            "sanitize",
            "--word",
            "bad",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ],
    )
    .success()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("Wrote sanitized content to"));

    assert_eq!(fs::read_to_string(&output)?, "first *** line\nsecond line\n");
    Ok(())
}

#[test]
fn test_sanitize_json_output() -> Result<()> {
    let assert = run_wordsweep("a BadWord", &["sanitize", "--word", "badword", "--json"]).success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(value["originalText"], "a BadWord");
    assert_eq!(value["sanitizedText"], "a *******");
    assert_eq!(value["detectedWords"], serde_json::json!(["BadWord"]));
    Ok(())
}

#[test]
fn test_sanitize_invalid_word_list_fails() -> Result<()> {
    let words = word_list("words:\n  - \"bad!\"\n")?;
    run_wordsweep("text", &["sanitize", "-w", words.path().to_str().unwrap()])
        .failure()
        .stderr(predicate::str::contains("Failed to load word list"));
    Ok(())
}

#[test]
fn test_sanitize_empty_input_passes_through() {
    run_wordsweep("", &["sanitize", "--word", "bad", "--no-summary"])
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_detect_lists_first_spelling_once() {
    run_wordsweep(
        "Offensive, offensive and BADWORD",
        &["detect", "--word", "badword", "--word", "offensive"],
    )
    .success()
    .stdout("Offensive\nBADWORD\n");
}

#[test]
fn test_detect_json() {
    run_wordsweep("nothing to see", &["detect", "--word", "badword", "--json"])
        .success()
        .stdout(predicate::str::contains("\"detectedWords\": []"));
}

#[test]
fn test_detect_fail_over_threshold() {
    run_wordsweep(
        "bad and worse",
        &["detect", "--word", "bad", "--word", "worse", "--fail-over-threshold", "1"],
    )
    .failure()
    .stderr(predicate::str::contains("exceeding the threshold of 1"));

    run_wordsweep(
        "bad and worse",
        &["detect", "--word", "bad", "--word", "worse", "--fail-over-threshold", "2"],
    )
    .success();
}

#[test]
fn test_debug_logs_do_not_leak_matched_text() {
    run_wordsweep(
        "a secretword here",
        &["--debug", "sanitize", "--word", "secretword", "--no-summary"],
    )
    .success()
    .stdout("a ********** here\n")
    .stderr(predicate::str::contains("[REDACTED: 10 chars]"))
    .stderr(predicate::str::contains("secretword").not())
    .stderr(predicate::str::contains("SECRETWORD").not());
}

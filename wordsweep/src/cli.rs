// wordsweep/src/cli.rs
//! This file defines the command-line interface (CLI) for the wordsweep application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "wordsweep",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Redact words from a sensitive-word dictionary",
    long_about = "Wordsweep finds every whole-word, case-insensitive occurrence of the words in a sensitive-word dictionary and masks it with a replacement character. The dictionary comes from a YAML word list, from --word flags, or both.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `wordsweep` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes an input file or stdin, masking every dictionary word.
    #[command(about = "Sanitizes an input file or stdin, masking every dictionary word.")]
    Sanitize(SanitizeCommand),

    /// Lists the dictionary words found in an input without redacting it.
    #[command(about = "Lists the dictionary words found in an input without redacting it.")]
    Detect(DetectCommand),
}

/// Where the dictionary comes from. Shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct WordArgs {
    /// Path to a YAML word list.
    #[arg(long = "words", short = 'w', value_name = "FILE", env = "WORDSWEEP_WORDS", help = "Path to a YAML word list.")]
    pub words_file: Option<PathBuf>,

    /// Additional words, merged after the word list.
    #[arg(long = "word", value_name = "WORD", help = "Add a sensitive word (repeatable).")]
    pub words: Vec<String>,
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    #[command(flatten)]
    pub dictionary: WordArgs,

    /// Replacement character; defaults to the word list's setting.
    #[arg(long, short = 'r', value_name = "CHAR", help = "Character used to mask each matched character.")]
    pub replacement: Option<String>,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Print the full detection result as JSON.
    #[arg(long, help = "Print the original text, sanitized text and detected words as JSON.")]
    pub json: bool,

    /// Suppress the detection summary.
    #[arg(long = "no-summary", help = "Suppress the detection summary.")]
    pub no_summary: bool,
}

/// Arguments for the `detect` command.
#[derive(Parser, Debug)]
pub struct DetectCommand {
    #[command(flatten)]
    pub dictionary: WordArgs,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Print detected words as JSON.
    #[arg(long, help = "Print the detected words as a JSON object.")]
    pub json: bool,

    /// Exit with a non-zero code if the number of distinct detected words exceeds this threshold.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero code if more than N distinct words are detected.")]
    pub fail_over_threshold: Option<usize>,
}

// wordsweep/src/commands/sanitize.rs
//! `wordsweep sanitize`: masks every dictionary word in the input.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use wordsweep_core::{DetectionResult, SanitizationEngine};

use crate::cli::SanitizeCommand;
use crate::ui::output_format;

/// Options for [`run_sanitize_opts`], independent of how they were parsed.
pub struct SanitizeOptions {
    pub input: String,
    pub replacement: Option<String>,
    pub output_path: Option<PathBuf>,
    pub json: bool,
    pub no_summary: bool,
    pub quiet: bool,
}

pub fn run(cmd: SanitizeCommand, quiet: bool) -> Result<()> {
    let engine = super::build_engine(&cmd.dictionary)?;
    let input = super::read_input(cmd.input_file.as_deref())?;
    let opts = SanitizeOptions {
        input,
        replacement: cmd.replacement,
        output_path: cmd.output,
        json: cmd.json,
        no_summary: cmd.no_summary,
        quiet,
    };
    run_sanitize_opts(&engine, &opts)
}

pub fn run_sanitize_opts(engine: &SanitizationEngine, opts: &SanitizeOptions) -> Result<()> {
    info!("Starting sanitize operation.");
    let result = match &opts.replacement {
        Some(replacement) => engine.sanitize(&opts.input, replacement),
        None => engine.sanitize_default(&opts.input),
    }
    .context("Sanitization failed")?;
    debug!(
        "Sanitized {} chars, {} distinct words detected.",
        opts.input.chars().count(),
        result.detected_words.len()
    );

    let rendered = render(&result, opts.json)?;
    match &opts.output_path {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            if !opts.quiet {
                let colorize = io::stderr().is_terminal();
                output_format::print_info_message(
                    &mut io::stderr(),
                    &format!("Wrote sanitized content to {}", path.display()),
                    colorize,
                )?;
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    if !opts.no_summary && !opts.quiet && !opts.json {
        let colorize = io::stderr().is_terminal();
        output_format::print_detection_summary(&mut io::stderr(), &result.detected_words, colorize)?;
    }
    info!("Sanitize operation completed.");
    Ok(())
}

fn render(result: &DetectionResult, json: bool) -> Result<String> {
    let mut out = if json {
        serde_json::to_string_pretty(result).context("Failed to serialize result")?
    } else {
        result.sanitized_text.clone()
    };
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

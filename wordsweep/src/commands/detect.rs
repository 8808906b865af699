// wordsweep/src/commands/detect.rs
//! `wordsweep detect`: reports dictionary words without redacting.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use std::io::{self, Write};

use crate::cli::DetectCommand;
use crate::ui::output_format;

/// Runs the command. Returns `false` when the detection count exceeded
/// `--fail-over-threshold`.
pub fn run(cmd: DetectCommand, quiet: bool) -> Result<bool> {
    let engine = super::build_engine(&cmd.dictionary)?;
    let input = super::read_input(cmd.input_file.as_deref())?;
    let detected = engine.detect(&input).context("Detection failed")?;
    info!("Detected {} distinct sensitive words.", detected.len());

    let mut stdout = io::stdout().lock();
    if cmd.json {
        let value = serde_json::json!({ "detectedWords": detected });
        writeln!(stdout, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        for word in &detected {
            writeln!(stdout, "{}", word)?;
        }
    }
    stdout.flush()?;

    if let Some(threshold) = cmd.fail_over_threshold {
        if detected.len() > threshold {
            if !quiet {
                let colorize = io::stderr().is_terminal();
                output_format::print_error_message(
                    &mut io::stderr(),
                    &format!(
                        "{} sensitive words detected, exceeding the threshold of {}.",
                        detected.len(),
                        threshold
                    ),
                    colorize,
                )?;
            }
            return Ok(false);
        }
    }
    Ok(true)
}

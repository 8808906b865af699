// wordsweep/src/ui/output_format.rs
//! Message and summary formatting for the terminal.
//!
//! Every printer takes an explicit writer and a `colorize` flag so the same
//! code serves terminals, redirected streams and tests.

use std::io::{self, Write};

use owo_colors::OwoColorize;

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, colorize: bool) -> io::Result<()> {
    if colorize {
        writeln!(writer, "{}", msg.cyan())
    } else {
        writeln!(writer, "{}", msg)
    }
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, colorize: bool) -> io::Result<()> {
    if colorize {
        writeln!(writer, "{} {}", "Error:".red().bold(), msg)
    } else {
        writeln!(writer, "Error: {}", msg)
    }
}

/// Prints how many distinct words were found, and which.
pub fn print_detection_summary<W: Write>(
    writer: &mut W,
    detected: &[String],
    colorize: bool,
) -> io::Result<()> {
    if detected.is_empty() {
        return print_info_message(writer, "No sensitive words detected.", colorize);
    }
    let header = format!("Detected {} sensitive word(s):", detected.len());
    if colorize {
        writeln!(writer, "{}", header.yellow().bold())?;
    } else {
        writeln!(writer, "{}", header)?;
    }
    for word in detected {
        writeln!(writer, "  - {}", word)?;
    }
    Ok(())
}

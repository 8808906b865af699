// wordsweep/src/main.rs
//! Wordsweep entry point.
//!
//! Parses arguments, installs the logger and dispatches to a command.

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use log::LevelFilter;
use std::io;
use std::process::ExitCode;

use wordsweep::cli::{Cli, Commands};
use wordsweep::commands::{detect, sanitize};
use wordsweep::logger;
use wordsweep::ui::output_format;

fn main() -> ExitCode {
    let args = Cli::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            let colorize = io::stderr().is_terminal();
            let _ = output_format::print_error_message(&mut io::stderr(), &format!("{:#}", e), colorize);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<bool> {
    match args.command {
        Commands::Sanitize(cmd) => sanitize::run(cmd, args.quiet).map(|()| true),
        Commands::Detect(cmd) => detect::run(cmd, args.quiet),
    }
}

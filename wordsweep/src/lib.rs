// wordsweep/src/lib.rs
//! # Wordsweep CLI Application
//!
//! This crate provides the command-line front end for `wordsweep-core`:
//! `sanitize` masks dictionary words in a file or pipe, `detect` lists them.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

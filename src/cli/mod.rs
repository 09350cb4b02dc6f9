// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the typeahead command-line interface.
//!
//! Two subcommands: `complete` for exact-prefix enumeration and `fuzzy`
//! for bounded edit-distance matching. Both load a word list, build the
//! trie in memory, run one query, and print what they found.

pub mod display;

use clap::{Parser, Subcommand};
use std::fmt;
use std::io;

#[derive(Parser)]
#[command(
    name = "typeahead",
    about = "Byte-trie typeahead index with bounded fuzzy matching",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List stored keys that begin with a prefix
    Complete {
        /// Word list file, one key per line (empty lines are skipped)
        #[arg(short, long)]
        words: String,

        /// Prefix to complete
        prefix: String,

        /// Maximum number of matches to print (all by default)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Emit a JSON object instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// List stored keys within an edit-distance bound of a query
    Fuzzy {
        /// Word list file, one key per line (empty lines are skipped)
        #[arg(short, long)]
        words: String,

        /// Query to match approximately
        query: String,

        /// Maximum Levenshtein distance (insertions, deletions, substitutions)
        #[arg(short = 'd', long, default_value = "2")]
        max_distance: usize,

        /// Maximum number of matches to print (all by default)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Emit a JSON object instead of human-readable text
        #[arg(long)]
        json: bool,
    },
}

/// Errors from the CLI front end.
///
/// The index core itself is infallible: empty result sets are ordinary
/// values, and allocation failure aborts rather than unwinding back here.
#[derive(Debug)]
pub enum CliError {
    /// The word-list file could not be read.
    WordList { path: String, source: io::Error },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::WordList { path, source } => {
                write!(f, "failed to read word list {path}: {source}")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::WordList { source, .. } => Some(source),
        }
    }
}

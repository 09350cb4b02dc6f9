use clap::Parser;
use serde::Serialize;
use std::path::Path;
use std::time::{Duration, Instant};

use typeahead::{search_fuzzy, search_prefix, wordlist, Trie};

mod cli;
use cli::{display, Cli, CliError, Commands};

/// Shape of `--json` output for both subcommands.
#[derive(Serialize)]
struct QueryOutput {
    query: String,
    count: usize,
    matches: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Complete {
            words,
            prefix,
            limit,
            json,
        } => {
            let trie = load(&words)?;
            let started = Instant::now();
            let matches = search_prefix(&trie, prefix.as_bytes());
            report(&prefix, &matches, limit, json, started.elapsed(), trie.len());
        }
        Commands::Fuzzy {
            words,
            query,
            max_distance,
            limit,
            json,
        } => {
            let trie = load(&words)?;
            let started = Instant::now();
            let matches = search_fuzzy(&trie, query.as_bytes(), max_distance);
            report(&query, &matches, limit, json, started.elapsed(), trie.len());
        }
    }
    Ok(())
}

fn load(path: &str) -> Result<Trie, CliError> {
    wordlist::load(Path::new(path)).map_err(|source| CliError::WordList {
        path: path.to_string(),
        source,
    })
}

fn report(
    query: &str,
    matches: &[Vec<u8>],
    limit: Option<usize>,
    json: bool,
    elapsed: Duration,
    indexed: usize,
) {
    if json {
        let shown = limit.unwrap_or(matches.len()).min(matches.len());
        let out = QueryOutput {
            query: query.to_string(),
            count: matches.len(),
            matches: matches[..shown]
                .iter()
                .map(|key| String::from_utf8_lossy(key).into_owned())
                .collect(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&out).expect("output is serializable")
        );
    } else {
        display::print_matches(query, matches, limit, elapsed, indexed);
    }
}

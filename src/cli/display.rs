// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the typeahead CLI.
//!
//! Deliberately plain: a summary line, the matches, a timing line. Color
//! only lands on a real TTY, and `NO_COLOR` wins over everything.

use std::sync::OnceLock;
use std::time::Duration;

/// Cached color decision, evaluated once per process.
static COLOR: OnceLock<bool> = OnceLock::new();

fn color_enabled() -> bool {
    *COLOR.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

fn paint(text: &str, code: &str) -> String {
    if color_enabled() {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

fn bold(text: &str) -> String {
    paint(text, "1")
}

fn dim(text: &str) -> String {
    paint(text, "2")
}

fn green(text: &str) -> String {
    paint(text, "32")
}

/// Render one match for terminal output. Keys are byte strings; anything
/// that isn't valid UTF-8 is shown lossily.
fn render(key: &[u8]) -> String {
    String::from_utf8_lossy(key).into_owned()
}

/// Print a result set in human-readable form.
pub fn print_matches(
    query: &str,
    matches: &[Vec<u8>],
    limit: Option<usize>,
    elapsed: Duration,
    indexed: usize,
) {
    let total = matches.len();
    let shown = limit.unwrap_or(total).min(total);
    let noun = if total == 1 { "match" } else { "matches" };

    println!(
        "{} {} for {} ({} keys indexed)",
        green(&total.to_string()),
        noun,
        bold(query),
        indexed
    );
    for key in &matches[..shown] {
        println!("  {}", render(key));
    }
    if shown < total {
        println!("  {}", dim(&format!("... and {} more", total - shown)));
    }
    println!("{}", dim(&format!("searched in {:.2?}", elapsed)));
}

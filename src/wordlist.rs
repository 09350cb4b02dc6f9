// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word-list loading for the CLI: one key per line, bytes taken as-is.

use std::fs;
use std::io;
use std::path::Path;

use crate::Trie;

/// Build a trie from a word-list file.
///
/// Lines are raw bytes split on `\n`; a trailing `\r` is stripped so DOS
/// line endings behave, and empty lines are skipped.
pub fn load(path: &Path) -> io::Result<Trie> {
    let bytes = fs::read(path)?;
    Ok(parse(&bytes))
}

/// Split a word-list buffer into keys and index them.
pub fn parse(bytes: &[u8]) -> Trie {
    let mut trie = Trie::new();
    for line in bytes.split(|&b| b == b'\n') {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        trie.insert(line);
    }
    trie
}

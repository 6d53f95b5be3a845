// This file is part of Correct Horse.
//
// Copyright (c) 2026  The Correct Horse contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use unicode_normalization::UnicodeNormalization;

/// Shortest word kept, in characters.
pub const MIN_WORD_CHARS: usize = 4;
/// Longest word kept, in characters. Longer words are tedious to type.
pub const MAX_WORD_CHARS: usize = 11;

/// Normalized, deduplicated candidate words in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Reads `path` one word per line. An empty result is not an error here.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let wordlist = Self::from_lines(data.lines());
        debug!(
            path = %path.display(),
            lines = data.lines().count(),
            words = wordlist.len(),
            "loaded word list"
        );

        match wordlist.len() {
            0 => warn!(path = %path.display(), "no usable words in word list"),
            1 => warn!(path = %path.display(), "word list has a single usable word"),
            _ => {}
        }

        Ok(wordlist)
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words = lines
            .into_iter()
            .filter_map(|line| normalize_word(line.as_ref()))
            .filter(|word| seen.insert(word.clone()))
            .collect();

        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

fn normalize_word(line: &str) -> Option<String> {
    let word: String = line.trim().nfc().collect::<String>().to_lowercase();
    let chars = word.chars().count();

    (MIN_WORD_CHARS..=MAX_WORD_CHARS)
        .contains(&chars)
        .then_some(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_wordlist(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_filters_and_deduplicates() {
        let file = write_wordlist("cat\nCAT\ndogs\na\nelephantine\n");
        let wordlist = Wordlist::load(file.path()).unwrap();
        assert_eq!(wordlist.words(), ["dogs", "elephantine"]);
    }

    #[test]
    fn test_case_insensitive_dedup_keeps_first_position() {
        let wordlist = Wordlist::from_lines(["Horse", "battery", "HORSE", "staple", "horse"]);
        assert_eq!(wordlist.words(), ["horse", "battery", "staple"]);
    }

    #[test]
    fn test_length_bounds() {
        let wordlist = Wordlist::from_lines([
            "abc",
            "abcd",
            "abcdefghijk",
            "abcdefghijkl",
        ]);
        assert_eq!(wordlist.words(), ["abcd", "abcdefghijk"]);
    }

    #[test]
    fn test_whitespace_trimmed_before_length_check() {
        let wordlist = Wordlist::from_lines(["  tree  ", "\tbark\r", "   ab   "]);
        assert_eq!(wordlist.words(), ["tree", "bark"]);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let wordlist = Wordlist::from_lines(["café", "Äpfel", "日本語です"]);
        assert_eq!(wordlist.words(), ["café", "äpfel", "日本語です"]);
    }

    #[test]
    fn test_nfd_and_nfc_spellings_collapse() {
        let wordlist = Wordlist::from_lines(["café", "cafe\u{0301}"]);
        assert_eq!(wordlist.len(), 1);
        assert_eq!(wordlist.words()[0], "café");
    }

    #[test]
    fn test_empty_file_is_valid() {
        let file = write_wordlist("");
        let wordlist = Wordlist::load(file.path()).unwrap();
        assert!(wordlist.is_empty());
    }

    #[test]
    fn test_load_is_deterministic() {
        let file = write_wordlist("zebra\napple\nmango\nkiwi\napple\n");
        let first = Wordlist::load(file.path()).unwrap();
        let second = Wordlist::load(file.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.words(), ["zebra", "apple", "mango", "kiwi"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        match Wordlist::load(&missing) {
            Err(Error::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}

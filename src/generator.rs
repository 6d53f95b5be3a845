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

use crate::entropy::{StrengthLevel, repetitions_needed, word_entropy};
use crate::error::Result;
use crate::wordlist::Wordlist;
use rand::Rng;
use tracing::debug;
use zeroize::Zeroizing;

const SEPARATOR: &str = "-";

/// A generated passphrase with its estimated entropy.
#[derive(Debug, Clone)]
pub struct Passphrase {
    phrase: Zeroizing<String>,
    entropy_bits: u64,
}

impl Passphrase {
    pub fn as_str(&self) -> &str {
        &self.phrase
    }

    /// Floor of `n * log2(|wordlist|)`.
    ///
    /// Treats every draw as full entropy even though words may repeat, so
    /// this slightly overstates the strength of passphrases built from
    /// small word lists.
    pub fn entropy_bits(&self) -> u64 {
        self.entropy_bits
    }
}

/// Draws enough words from `wordlist` to reach `strength`, uniformly and
/// with replacement.
///
/// With `camel_case` the words are capitalized and concatenated, otherwise
/// they are joined with hyphens. The word list itself is never modified.
pub fn generate<R: Rng + ?Sized>(
    wordlist: &Wordlist,
    strength: StrengthLevel,
    camel_case: bool,
    rng: &mut R,
) -> Result<Passphrase> {
    let per_word = word_entropy(wordlist)?;
    let word_count = repetitions_needed(strength.min_entropy(), per_word)?;

    let words = wordlist.words();
    let longest = words.iter().map(String::len).max().unwrap_or(0);
    let mut phrase = Zeroizing::new(String::with_capacity(word_count * (longest + 1)));

    for i in 0..word_count {
        let word = &words[rng.random_range(0..words.len())];

        if camel_case {
            push_capitalized(&mut phrase, word);
        } else {
            if i > 0 {
                phrase.push_str(SEPARATOR);
            }
            phrase.push_str(word);
        }
    }

    let entropy_bits = (per_word * word_count as f64).floor() as u64;
    debug!(%strength, word_count, entropy_bits, "generated passphrase");

    Ok(Passphrase {
        phrase,
        entropy_bits,
    })
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

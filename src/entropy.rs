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
use crate::wordlist::Wordlist;
use std::fmt;

/// Target strength tiers, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub const ALL: [Self; 3] = [Self::Weak, Self::Medium, Self::Strong];

    /// Minimum entropy in bits a passphrase of this tier must reach.
    pub const fn min_entropy(self) -> u32 {
        match self {
            Self::Weak => 40,
            Self::Medium => 60,
            Self::Strong => 80,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Entropy of one uniform pick from `wordlist`, in bits.
pub fn word_entropy(wordlist: &Wordlist) -> Result<f64> {
    if wordlist.is_empty() {
        return Err(Error::domain("word list is empty"));
    }

    Ok((wordlist.len() as f64).log2())
}

/// Number of words needed so that `per_word_entropy * n >= min_entropy_bits`.
pub fn repetitions_needed(min_entropy_bits: u32, per_word_entropy: f64) -> Result<usize> {
    if !per_word_entropy.is_finite() || per_word_entropy <= 0.0 {
        return Err(Error::domain(format!(
            "each word carries {} bits of entropy; at least two distinct words are required",
            per_word_entropy
        )));
    }

    let repetitions = (f64::from(min_entropy_bits) / per_word_entropy).ceil();
    Ok(repetitions as usize)
}

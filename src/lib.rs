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

pub mod crack;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod report;
pub mod wordlist;

pub use crack::{AttackerModel, CrackEstimate, estimate, seconds_to_human};
pub use entropy::{StrengthLevel, repetitions_needed, word_entropy};
pub use error::{Error, Result};
pub use generator::{Passphrase, generate};
pub use report::{Report, format_report};
pub use wordlist::Wordlist;

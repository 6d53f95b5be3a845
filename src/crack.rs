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

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Attacker capabilities the crack time is projected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackerModel {
    /// Guessing against a live service.
    Online,
    /// A well-funded GPU cluster working on a stolen hash.
    Offline,
    /// No financial or technological limits; roughly the Bitcoin network hash rate.
    OfflineNsa,
}

impl AttackerModel {
    pub const ALL: [Self; 3] = [Self::Online, Self::Offline, Self::OfflineNsa];

    pub const fn guesses_per_second(self) -> u64 {
        match self {
            Self::Online => 10_000,
            Self::Offline => 350_000_000_000,
            Self::OfflineNsa => 100_000_000_000_000_000,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
            Self::OfflineNsa => "Offline NSA",
        }
    }
}

/// Human readable crack times, one per attacker model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrackEstimate {
    pub online: String,
    pub offline: String,
    pub offline_nsa: String,
}

impl CrackEstimate {
    pub fn get(&self, model: AttackerModel) -> &str {
        match model {
            AttackerModel::Online => &self.online,
            AttackerModel::Offline => &self.offline,
            AttackerModel::OfflineNsa => &self.offline_nsa,
        }
    }
}

/// Whole seconds `model` needs for `2^entropy_bits` guesses.
pub fn seconds_to_crack(entropy_bits: u64, model: AttackerModel) -> BigUint {
    let guesses = BigUint::one() << entropy_bits;
    guesses / model.guesses_per_second()
}

pub fn estimate(entropy_bits: u64) -> CrackEstimate {
    let human = |model| seconds_to_human(&seconds_to_crack(entropy_bits, model));

    CrackEstimate {
        online: human(AttackerModel::Online),
        offline: human(AttackerModel::Offline),
        offline_nsa: human(AttackerModel::OfflineNsa),
    }
}

/// Formats `seconds` as its largest nonzero unit only, e.g. `~3 days`.
///
/// Years are 365 days. Units below the largest are dropped, not rounded.
pub fn seconds_to_human(seconds: &BigUint) -> String {
    let (minutes, secs) = seconds.div_rem(&BigUint::from(60u32));
    let (hours, mins) = minutes.div_rem(&BigUint::from(60u32));
    let (days, hrs) = hours.div_rem(&BigUint::from(24u32));
    let (years, days) = days.div_rem(&BigUint::from(365u32));

    let (value, unit) = if !years.is_zero() {
        (years, "years")
    } else if !days.is_zero() {
        (days, "days")
    } else if !hrs.is_zero() {
        (hrs, "hours")
    } else if !mins.is_zero() {
        (mins, "minutes")
    } else {
        (secs, "seconds")
    };

    format!("~{} {}", value, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human(seconds: u64) -> String {
        seconds_to_human(&BigUint::from(seconds))
    }

    #[test]
    fn test_zero_entropy_is_zero_seconds_everywhere() {
        let estimate = estimate(0);
        assert_eq!(estimate.online, "~0 seconds");
        assert_eq!(estimate.offline, "~0 seconds");
        assert_eq!(estimate.offline_nsa, "~0 seconds");
    }

    #[test]
    fn test_guess_rates() {
        assert_eq!(AttackerModel::Online.guesses_per_second(), 10_000);
        assert_eq!(AttackerModel::Offline.guesses_per_second(), 350_000_000_000);
        assert_eq!(
            AttackerModel::OfflineNsa.guesses_per_second(),
            100_000_000_000_000_000
        );
    }

    #[test]
    fn test_seconds_to_crack_floors() {
        // 2^20 = 1_048_576 guesses
        assert_eq!(
            seconds_to_crack(20, AttackerModel::Online),
            BigUint::from(104u32)
        );
        assert!(seconds_to_crack(20, AttackerModel::Offline).is_zero());
    }

    #[test]
    fn test_largest_unit_only() {
        assert_eq!(human(0), "~0 seconds");
        assert_eq!(human(59), "~59 seconds");
        assert_eq!(human(60), "~1 minutes");
        assert_eq!(human(61), "~1 minutes");
        assert_eq!(human(3_599), "~59 minutes");
        assert_eq!(human(3_600), "~1 hours");
        assert_eq!(human(86_399), "~23 hours");
        assert_eq!(human(86_400), "~1 days");
        assert_eq!(human(364 * 86_400 + 86_399), "~364 days");
        assert_eq!(human(365 * 86_400), "~1 years");
    }

    #[test]
    fn test_years_drop_leftover_days() {
        assert_eq!(human(2 * 365 * 86_400 + 100 * 86_400), "~2 years");
    }

    #[test]
    fn test_whole_years_with_zero_remainders() {
        // exactly one year plus one second still reports years
        assert_eq!(human(365 * 86_400 + 1), "~1 years");
    }

    #[test]
    fn test_forty_bits() {
        // 2^40 / 10_000 = 109_951_162 s
        let estimate = estimate(40);
        assert_eq!(estimate.online, "~3 years");
        assert_eq!(estimate.offline, "~3 seconds");
        assert_eq!(estimate.offline_nsa, "~0 seconds");
    }

    #[test]
    fn test_beyond_u128() {
        let seconds = seconds_to_crack(300, AttackerModel::OfflineNsa);
        assert!(seconds.bits() > 128);

        let expected_years = (BigUint::one() << 300u32)
            / BigUint::from(100_000_000_000_000_000u64)
            / BigUint::from(365u32 * 86_400);
        assert_eq!(
            estimate(300).offline_nsa,
            format!("~{} years", expected_years)
        );
    }

    #[test]
    fn test_monotonic_in_entropy() {
        for model in AttackerModel::ALL {
            let mut previous = BigUint::zero();
            for bits in 0..200u64 {
                let seconds = seconds_to_crack(bits, model);
                assert!(seconds >= previous, "{} at {} bits", model.label(), bits);
                previous = seconds;
            }
        }
    }

    #[test]
    fn test_get_by_model() {
        let estimate = estimate(80);
        for model in AttackerModel::ALL {
            assert!(estimate.get(model).starts_with('~'));
        }
        assert_eq!(estimate.get(AttackerModel::Online), estimate.online);
    }
}

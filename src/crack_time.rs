//! Brute-force crack-time heuristic.
//!
//! The estimate is `U^L / 1_000_000` seconds, where `L` is the password length
//! and `U` the number of distinct characters. It is illustrative only and has
//! no cryptographic meaning.

use std::collections::HashSet;
use std::fmt;

const GUESSES_PER_SECOND: f64 = 1_000_000.0;

const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_YEAR: f64 = 31_556_952.0;
const SECONDS_PER_CENTURY: f64 = SECONDS_PER_YEAR * 100.0;

/// Display band for an estimate. Variants are ordered from fastest to slowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CrackTime {
    Seconds(u64),
    Hours(u64),
    Days(u64),
    OverAYear,
    Centuries,
}

impl CrackTime {
    /// Bands a number of seconds. Larger units are checked first, with strict
    /// comparisons; counts are floored. An infinite input lands in `Centuries`.
    pub fn from_seconds(seconds: f64) -> Self {
        if seconds > SECONDS_PER_CENTURY {
            CrackTime::Centuries
        } else if seconds > SECONDS_PER_YEAR {
            CrackTime::OverAYear
        } else if seconds > SECONDS_PER_DAY {
            CrackTime::Days((seconds / SECONDS_PER_DAY).floor() as u64)
        } else if seconds > SECONDS_PER_HOUR {
            CrackTime::Hours((seconds / SECONDS_PER_HOUR).floor() as u64)
        } else {
            CrackTime::Seconds(seconds.floor() as u64)
        }
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrackTime::Centuries => f.write_str("∞ (Extremely Secure)"),
            CrackTime::OverAYear => f.write_str("more than 1 year"),
            CrackTime::Days(d) => write!(f, "{} days", d),
            CrackTime::Hours(h) => write!(f, "{} hours", h),
            CrackTime::Seconds(s) => write!(f, "{} seconds", s),
        }
    }
}

/// Raw estimate in seconds. Overflows to `f64::INFINITY` for long passwords.
pub fn estimated_seconds(password: &str) -> f64 {
    let length = password.chars().count();
    let unique = password.chars().collect::<HashSet<char>>().len();

    // powf(0, 0) == 1, so the empty password costs one guess.
    (unique as f64).powf(length as f64) / GUESSES_PER_SECOND
}

/// Estimates how long a brute-force attack would take.
pub fn estimate_crack_time(password: &str) -> CrackTime {
    CrackTime::from_seconds(estimated_seconds(password))
}

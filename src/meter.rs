//! Data for rendering a strength meter next to the evaluation.
//!
//! None of this feeds into the score.

/// Educational tips shown alongside every evaluation.
pub const STRONG_PASSWORD_TIPS: [&str; 5] = [
    "Use at least 12 characters",
    "Include uppercase (A-Z) & lowercase (a-z) letters",
    "Add numbers (0-9)",
    "Use special characters (!@#$%^&*)",
    "Avoid using personal details like your name or birthdate",
];

/// Progress bar fill in percent: ten points per character, capped at 100.
pub fn strength_meter_percent(password: &str) -> u8 {
    password.chars().count().saturating_mul(10).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_scales_with_length() {
        assert_eq!(strength_meter_percent(""), 0);
        assert_eq!(strength_meter_percent("abc"), 30);
        assert_eq!(strength_meter_percent("abcdefghij"), 100);
    }

    #[test]
    fn test_meter_caps_at_100() {
        assert_eq!(strength_meter_percent(&"x".repeat(500)), 100);
    }

    #[test]
    fn test_meter_counts_chars() {
        assert_eq!(strength_meter_percent("éé"), 20);
    }
}

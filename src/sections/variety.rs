//! Character variety sections - digits, uppercase, lowercase, special chars.
//!
//! Only ASCII classes count; `É` is not an uppercase letter here.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Characters accepted by the special character check.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

fn check(password: &SecretString, pred: impl Fn(char) -> bool, reason: &str) -> SectionResult {
    if password.expose_secret().chars().any(pred) {
        None
    } else {
        Some(reason.to_string())
    }
}

pub fn digit_section(password: &SecretString) -> SectionResult {
    check(password, |c| c.is_ascii_digit(), "Add at least one number (0-9).")
}

pub fn uppercase_section(password: &SecretString) -> SectionResult {
    check(
        password,
        |c| c.is_ascii_uppercase(),
        "Include at least one uppercase letter (A-Z).",
    )
}

pub fn lowercase_section(password: &SecretString) -> SectionResult {
    check(
        password,
        |c| c.is_ascii_lowercase(),
        "Include at least one lowercase letter (a-z).",
    )
}

/// Passes when the password holds a character from [`SPECIAL_CHARS`].
/// Other punctuation such as `_` or `-` does not count.
pub fn special_char_section(password: &SecretString) -> SectionResult {
    check(
        password,
        |c| SPECIAL_CHARS.contains(c),
        "Add at least one special character (!@#$%^&*).",
    )
}

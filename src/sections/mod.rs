//! Password evaluation sections
//!
//! Each section checks one criterion and reports a deficiency when it fails.

mod length;
mod variety;

pub use length::{length_section, MIN_LENGTH};
pub use variety::{
    SPECIAL_CHARS, digit_section, lowercase_section, special_char_section, uppercase_section,
};

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;

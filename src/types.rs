//! Evaluation types shared by the evaluator and its callers.

use std::fmt;

/// Qualitative strength derived from the criterion score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    Weak,
    Moderate,
    Strong,
}

impl StrengthLabel {
    /// Maps a score in `0..=5` to a label.
    ///
    /// Scores 3 and 4 are both `Moderate`, whichever criteria failed.
    pub fn from_score(score: u8) -> Self {
        match score {
            5.. => StrengthLabel::Strong,
            3..=4 => StrengthLabel::Moderate,
            _ => StrengthLabel::Weak,
        }
    }

    pub fn summary_message(&self) -> &'static str {
        match self {
            StrengthLabel::Strong => "Your password is very secure!",
            StrengthLabel::Moderate => "Your password is okay, but can be improved.",
            StrengthLabel::Weak => "Your password is too weak. Try making it stronger.",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
        };
        f.write_str(s)
    }
}

/// One of the pass/fail checks contributing a point to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    MinLength,
    HasDigit,
    HasUppercase,
    HasLowercase,
    HasSpecialChar,
}

impl Criterion {
    /// All criteria, in evaluation order. Feedback follows this order.
    pub const ALL: [Criterion; 5] = [
        Criterion::MinLength,
        Criterion::HasDigit,
        Criterion::HasUppercase,
        Criterion::HasLowercase,
        Criterion::HasSpecialChar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Criterion::MinLength => "length",
            Criterion::HasDigit => "digit",
            Criterion::HasUppercase => "uppercase",
            Criterion::HasLowercase => "lowercase",
            Criterion::HasSpecialChar => "special",
        }
    }
}

/// Outcome of a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    /// Number of criteria met, `0..=5`.
    pub score: u8,
    pub label: StrengthLabel,
    pub summary_message: String,
    /// Deficiency messages in criterion order; empty when every criterion passed.
    pub feedback: Vec<String>,
    pub crack_time_estimate: String,
}

impl EvaluationResult {
    pub fn is_strong(&self) -> bool {
        self.label == StrengthLabel::Strong
    }
}

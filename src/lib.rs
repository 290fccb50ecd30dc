//! Password strength meter library
//!
//! Scores a password against five criteria (length, digit, uppercase,
//! lowercase, special character), labels it Weak, Moderate or Strong,
//! lists what is missing, and estimates a brute-force crack time. Also
//! generates random strong passwords.
//!
//! # Features
//!
//! - `async` (default): Enables channel delivery of evaluations with cancellation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password_strength, generate_password, StrengthLabel};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let password = SecretString::new("P@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! assert_eq!(evaluation.label, StrengthLabel::Strong);
//! assert!(evaluation.feedback.is_empty());
//! println!("Crack time: {}", evaluation.crack_time_estimate);
//!
//! let suggestion = generate_password();
//! assert_eq!(suggestion.expose_secret().chars().count(), 12);
//! ```

// Internal modules
mod crack_time;
mod evaluator;
mod generator;
mod meter;
mod sections;
mod types;

// Public API
pub use crack_time::{estimate_crack_time, estimated_seconds, CrackTime};
pub use evaluator::{evaluate, evaluate_password_strength};
pub use generator::{
    generate_password, generate_password_with, GeneratorConfig, GeneratorError,
    DEFAULT_ALPHABET, DEFAULT_PASSWORD_LENGTH,
};
pub use meter::{strength_meter_percent, STRONG_PASSWORD_TIPS};
pub use sections::{MIN_LENGTH, SPECIAL_CHARS};
pub use types::{Criterion, EvaluationResult, StrengthLabel};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;

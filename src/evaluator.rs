//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::crack_time::estimate_crack_time;
use crate::sections::{
    SectionResult, digit_section, length_section, lowercase_section, special_char_section,
    uppercase_section,
};
use crate::types::{Criterion, EvaluationResult, StrengthLabel};

fn section_for(criterion: Criterion) -> fn(&SecretString) -> SectionResult {
    match criterion {
        Criterion::MinLength => length_section,
        Criterion::HasDigit => digit_section,
        Criterion::HasUppercase => uppercase_section,
        Criterion::HasLowercase => lowercase_section,
        Criterion::HasSpecialChar => special_char_section,
    }
}

/// Evaluates password strength against the five criteria.
///
/// Total over all inputs: the empty password scores 0 with five feedback
/// entries.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// An `EvaluationResult` with score, label, feedback and crack-time estimate.
pub fn evaluate_password_strength(password: &SecretString) -> EvaluationResult {
    let mut score: u8 = 0;
    let mut feedback = Vec::new();

    // Orchestrator: execute sections in criterion order
    for criterion in Criterion::ALL {
        match section_for(criterion)(password) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password criterion failed: {}", criterion.name());
                feedback.push(reason);
            }
            None => score += 1,
        }
    }

    let crack_time_estimate = estimate_crack_time(password.expose_secret()).to_string();
    let label = StrengthLabel::from_score(score);

    EvaluationResult {
        score,
        label,
        summary_message: label.summary_message().to_string(),
        feedback,
        crack_time_estimate,
    }
}

/// Convenience wrapper for callers holding a plain string.
pub fn evaluate(password: &str) -> EvaluationResult {
    evaluate_password_strength(&SecretString::new(password.into()))
}

/// Async version that sends the evaluation result via channel.
///
/// Waits a short debounce delay first; if `token` is cancelled by then the
/// evaluation is skipped and nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<EvaluationResult>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled before start");
        return;
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

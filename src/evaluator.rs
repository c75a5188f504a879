//! Password analyzer - main analysis logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::breach::{BreachLookup, BreachStatus};
use crate::charset::{charset_size, password_dna};
use crate::crack_time::crack_seconds;
use crate::entropy::{entropy_bits, strength_score};
use crate::report::{PasswordReport, StrengthLabel};
use crate::sections::{keyboard_pattern_section, suggestions};

/// Analyzes a password and returns a full report.
///
/// # Arguments
/// * `password` - The password to analyze
/// * `lookup` - Breach lookup consulted for known exposure
///
/// # Returns
/// A `PasswordReport` with entropy, strength, crack time estimate,
/// breach status, suggestions, pattern warning and DNA.
pub fn analyze_password(password: &SecretString, lookup: &impl BreachLookup) -> PasswordReport {
    let entropy = entropy_bits(password);
    let score = strength_score(entropy);

    // A failed lookup is not evidence either way; report Unknown instead
    // of Clear.
    let breach = match lookup.check(password) {
        Ok(true) => BreachStatus::Breached,
        Ok(false) => BreachStatus::Clear,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("breach lookup failed: {}", _e);
            BreachStatus::Unknown
        }
    };

    PasswordReport {
        charset_size: charset_size(password),
        entropy_bits: entropy,
        score,
        strength: StrengthLabel::from_score(score),
        crack_seconds: crack_seconds(entropy),
        breach,
        suggestions: suggestions(password),
        pattern_warning: keyboard_pattern_section(password),
        dna: password_dna(password),
    }
}

/// Async version that debounces, honors cancellation, and sends the
/// report via channel.
///
/// Cancellation is checked after the debounce window and again after the
/// analysis completes, so a report for stale input never reaches the
/// channel.
#[cfg(feature = "async")]
pub async fn analyze_password_tx<L>(
    password: SecretString,
    lookup: Arc<L>,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordReport>,
) where
    L: BreachLookup + Send + Sync + 'static,
{
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("analysis cancelled during debounce");
        return;
    }

    // The breach lookup blocks on the network; keep it off the async
    // workers.
    let handle = tokio::task::spawn_blocking(move || analyze_password(&password, lookup.as_ref()));

    match handle.await {
        Ok(report) => {
            if token.is_cancelled() {
                #[cfg(feature = "tracing")]
                tracing::debug!("discarding analysis report for stale input");
                return;
            }
            if let Err(_e) = tx.send(report).await {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send password analysis report: {}", _e);
            }
        }
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("password analysis task failed: {}", _e);
        }
    }
}

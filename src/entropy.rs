//! Entropy heuristic and strength score.

use secrecy::{ExposeSecret, SecretString};

use crate::charset::charset_size;

/// Bits of entropy worth one score point.
const ENTROPY_PER_POINT: f64 = 10.0;

/// Upper bound of the strength score scale.
pub const MAX_SCORE: f64 = 5.0;

/// Estimated password entropy in bits.
///
/// entropy = length * log2(charset size). The charset is clamped to 1 so
/// a degenerate password yields 0 bits instead of NaN.
pub fn entropy_bits(password: &SecretString) -> f64 {
    let chars = password.expose_secret().chars().count() as f64;
    let charset = f64::from(charset_size(password)).max(1.0);
    chars * charset.log2()
}

/// Maps entropy to the 0 to 5 strength score.
pub fn strength_score(entropy: f64) -> f64 {
    (entropy / ENTROPY_PER_POINT).min(MAX_SCORE)
}

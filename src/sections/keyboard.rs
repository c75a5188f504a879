//! Keyboard pattern section - flags predictable key-walk substrings.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Substrings that betray a keyboard walk or a counting run.
const KEYBOARD_PATTERNS: [&str; 3] = ["qwerty", "asdf", "1234"];

/// Warns when the password contains a predictable keyboard pattern.
///
/// Matching is a case-insensitive substring test, so "MyQwerty99" is as
/// risky as "qwerty" itself.
///
/// # Returns
/// - `Some(warning)` if any known pattern appears
/// - `None` otherwise
pub fn keyboard_pattern_section(password: &SecretString) -> SectionResult {
    let lower = password.expose_secret().to_lowercase();
    if KEYBOARD_PATTERNS.iter().any(|pattern| lower.contains(pattern)) {
        return Some("Your password contains predictable keyboard patterns.".to_string());
    }
    None
}

//! Character variety sections - uppercase, digit and symbol coverage.
//!
//! Each class gets its own section so tips trigger independently.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::charset::CharClass;

/// Suggests uppercase letters when none are present.
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    if !contains_class(password, CharClass::Uppercase) {
        return Some("Add uppercase letters.".to_string());
    }
    None
}

/// Suggests digits when none are present.
pub fn digit_section(password: &SecretString) -> SectionResult {
    if !contains_class(password, CharClass::Numbers) {
        return Some("Include numbers.".to_string());
    }
    None
}

/// Suggests special symbols when the password is purely alphanumeric.
pub fn symbol_section(password: &SecretString) -> SectionResult {
    if !contains_class(password, CharClass::Symbols) {
        return Some("Use special symbols.".to_string());
    }
    None
}

fn contains_class(password: &SecretString, class: CharClass) -> bool {
    password.expose_secret().chars().any(|c| class.matches(c))
}

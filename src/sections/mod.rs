//! Password advisory sections
//!
//! Each section inspects one aspect of the password and yields advisory
//! text when that aspect needs improvement.

mod keyboard;
mod length;
mod variety;

pub use keyboard::keyboard_pattern_section;
pub use length::length_section;
pub use variety::{digit_section, symbol_section, uppercase_section};

use secrecy::SecretString;

/// Result type for section evaluation functions.
/// - `Some(text)` - Section triggered with advisory text
/// - `None` - Section passed
pub type SectionResult = Option<String>;

/// Collects the advisory tips for a password.
///
/// Sections run in a fixed order (length, uppercase, digits, symbols) so
/// the tip list is deterministic. An empty list means every section passed.
pub fn suggestions(password: &SecretString) -> Vec<String> {
    let sections: [fn(&SecretString) -> SectionResult; 4] = [
        length_section,
        uppercase_section,
        digit_section,
        symbol_section,
    ];

    sections
        .iter()
        .filter_map(|section| section(password))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_suggestions_all_tips_in_order() {
        let tips = suggestions(&secret("abc"));
        assert_eq!(
            tips,
            vec![
                "Use at least 12 characters.",
                "Add uppercase letters.",
                "Include numbers.",
                "Use special symbols.",
            ]
        );
    }

    #[test]
    fn test_suggestions_none_for_covering_password() {
        let tips = suggestions(&secret("Abcdefghij1!"));
        assert!(tips.is_empty());
    }

    #[test]
    fn test_suggestions_partial() {
        // Long enough and has symbols, but no uppercase or digits.
        let tips = suggestions(&secret("abcdefghijk!?"));
        assert_eq!(tips, vec!["Add uppercase letters.", "Include numbers."]);
    }

    #[test]
    fn test_suggestions_empty_password() {
        assert_eq!(suggestions(&secret("")).len(), 4);
    }
}

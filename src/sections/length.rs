//! Length section - recommends a comfortable minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const RECOMMENDED_LENGTH: usize = 12;

/// Suggests lengthening passwords below the recommended size.
///
/// # Returns
/// - `Some(tip)` if the password has fewer than 12 characters
/// - `None` otherwise
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < RECOMMENDED_LENGTH {
        return Some(format!("Use at least {} characters.", RECOMMENDED_LENGTH));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        let result = length_section(&pwd);
        assert_eq!(result, Some("Use at least 12 characters.".to_string()));
    }

    #[test]
    fn test_length_section_exactly_recommended() {
        let pwd = SecretString::new("abcdefghijkl".to_string().into());
        let result = length_section(&pwd);
        assert_eq!(result, None);
    }

    #[test]
    fn test_length_section_one_below_recommended() {
        let pwd = SecretString::new("abcdefghijk".to_string().into());
        assert!(length_section(&pwd).is_some());
    }

    #[test]
    fn test_length_section_counts_characters_not_bytes() {
        // 12 two-byte characters still satisfy the recommendation.
        let pwd = SecretString::new("é".repeat(12).into());
        assert_eq!(length_section(&pwd), None);
    }
}

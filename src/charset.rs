//! Character class detection - charset size estimate and DNA breakdown.

use secrecy::{ExposeSecret, SecretString};

/// A character category contributing to the charset-size estimate.
///
/// Categories mirror the classic `[a-z]`, `[A-Z]`, `[0-9]` and
/// `[^A-Za-z0-9]` membership tests: anything outside the ASCII
/// alphanumerics counts as a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharClass {
    /// All categories, in their fixed check order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    /// Alphabet size this category adds to the charset estimate.
    pub fn alphabet_size(self) -> u32 {
        match self {
            CharClass::Lowercase | CharClass::Uppercase => 26,
            CharClass::Numbers => 10,
            CharClass::Symbols => 32,
        }
    }

    /// Whether a single character belongs to this category.
    pub fn matches(self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Numbers => c.is_ascii_digit(),
            CharClass::Symbols => !c.is_ascii_alphanumeric(),
        }
    }

    /// Display name used in the DNA breakdown.
    pub fn name(self) -> &'static str {
        match self {
            CharClass::Lowercase => "Lowercase",
            CharClass::Uppercase => "Uppercase",
            CharClass::Numbers => "Numbers",
            CharClass::Symbols => "Symbols",
        }
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lists the character categories present in the password, in fixed order.
pub fn password_dna(password: &SecretString) -> Vec<CharClass> {
    let pwd = password.expose_secret();
    CharClass::ALL
        .into_iter()
        .filter(|class| pwd.chars().any(|c| class.matches(c)))
        .collect()
}

/// Estimates the charset size a brute-force attacker has to cover.
///
/// Each category present contributes its full alphabet size, summing to at
/// most 94 (26 + 26 + 10 + 32). An empty password yields 0.
pub fn charset_size(password: &SecretString) -> u32 {
    password_dna(password)
        .iter()
        .map(|class| class.alphabet_size())
        .sum()
}

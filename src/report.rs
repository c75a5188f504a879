//! Report assembly - strength labels and display rendering.

use crate::breach::BreachStatus;
use crate::charset::CharClass;
use crate::crack_time::format_crack_time;

/// Strength band derived from the score.
///
/// The band is the single source for the label text and the display
/// palette, so the meter text, bar color and glow can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    VeryWeak,
    Moderate,
    Strong,
}

impl StrengthLabel {
    /// Classifies a score into a strength band.
    ///
    /// Scores above 4 are `Strong`, above 2.5 `Moderate`, anything else
    /// `VeryWeak`.
    pub fn from_score(score: f64) -> Self {
        if score > 4.0 {
            StrengthLabel::Strong
        } else if score > 2.5 {
            StrengthLabel::Moderate
        } else {
            StrengthLabel::VeryWeak
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
        }
    }

    /// Bar color for this band.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "red",
            StrengthLabel::Moderate => "#ffcc00",
            StrengthLabel::Strong => "#65ff4d",
        }
    }

    /// Glow shadow color for this band.
    pub fn glow(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "rgba(255, 0, 0, 0.4)",
            StrengthLabel::Moderate => "rgba(255, 204, 0, 0.4)",
            StrengthLabel::Strong => "rgba(101, 255, 77, 0.4)",
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Full analysis of a single password.
///
/// Produced by [`crate::analyze_password`]; the `*_line` methods render
/// the individual display fragments and [`render`](Self::render) joins
/// them into one block.
#[derive(Debug, Clone)]
pub struct PasswordReport {
    /// Size of the guessing alphabet implied by the character classes.
    pub charset_size: u32,
    /// Estimated entropy in bits.
    pub entropy_bits: f64,
    /// Strength score on a 0 to 5 scale.
    pub score: f64,
    /// Strength band for the score.
    pub strength: StrengthLabel,
    /// Estimated brute-force time in seconds.
    pub crack_seconds: f64,
    /// Outcome of the breach lookup.
    pub breach: BreachStatus,
    /// Improvement tips, empty when nothing applies.
    pub suggestions: Vec<String>,
    /// Set when the password contains a predictable keyboard run.
    pub pattern_warning: Option<String>,
    /// Character classes present, in fixed class order.
    pub dna: Vec<CharClass>,
}

impl PasswordReport {
    /// Meter fill as a percentage, `score * 20`.
    pub fn bar_width_percent(&self) -> f64 {
        self.score * 20.0
    }

    /// Number of crack attempts shown by the simulation.
    ///
    /// Weaker passwords simulate more attempts: `floor((6 - score) * 1000)`.
    pub fn simulated_attempts(&self) -> u64 {
        ((6.0 - self.score) * 1000.0).floor() as u64
    }

    pub fn strength_line(&self) -> String {
        format!("Strength: {}", self.strength)
    }

    pub fn entropy_line(&self) -> String {
        format!("🔐 Entropy: {:.2} bits", self.entropy_bits)
    }

    pub fn crack_time_line(&self) -> String {
        format!(
            "⏱️ Estimated time to crack: {}",
            format_crack_time(self.crack_seconds)
        )
    }

    pub fn breach_line(&self) -> String {
        match self.breach {
            BreachStatus::Breached => "⚠️ This password has been exposed in breaches.".to_string(),
            BreachStatus::Clear => "✅ No known breaches detected.".to_string(),
            BreachStatus::Unknown => {
                "ℹ️ Breach status unknown (lookup unavailable).".to_string()
            }
        }
    }

    /// Suggestion list as a bullet block, or an all-clear line.
    pub fn suggestions_block(&self) -> String {
        if self.suggestions.is_empty() {
            "✅ Your password looks good!".to_string()
        } else {
            let mut block = String::from("💡 Suggestions:");
            for tip in &self.suggestions {
                block.push_str("\n• ");
                block.push_str(tip);
            }
            block
        }
    }

    /// Keyboard pattern warning, or an empty string when none fired.
    pub fn pattern_line(&self) -> String {
        match &self.pattern_warning {
            Some(warning) => format!("⚠️ {}", warning),
            None => String::new(),
        }
    }

    pub fn dna_line(&self) -> String {
        let names: Vec<&str> = self.dna.iter().map(|class| class.name()).collect();
        format!("🧬 Password DNA: {}", names.join(", "))
    }

    pub fn attempts_line(&self) -> String {
        format!("Simulating {} crack attempts...", self.simulated_attempts())
    }

    /// Renders the whole report as one text block, one fragment per line.
    ///
    /// The pattern warning line is omitted entirely when no pattern was
    /// detected.
    pub fn render(&self) -> String {
        let mut lines = vec![
            self.strength_line(),
            self.entropy_line(),
            self.crack_time_line(),
            self.breach_line(),
            self.suggestions_block(),
        ];
        let pattern = self.pattern_line();
        if !pattern.is_empty() {
            lines.push(pattern);
        }
        lines.push(self.dna_line());
        lines.push(self.attempts_line());
        lines.join("\n")
    }
}

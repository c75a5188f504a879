//! Password entropy estimation library
//!
//! This library estimates password strength from charset entropy and
//! checks known exposure against a Have I Been Pwned style range API
//! using k-anonymity, so the password itself never leaves the process.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async analysis with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BREACH_ENDPOINT`: Custom breach range endpoint
//!   (default: `https://api.pwnedpasswords.com/range`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_entropy::{analyze_password, HibpClient};
//! use secrecy::SecretString;
//!
//! let lookup = HibpClient::new().expect("Failed to build breach client");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = analyze_password(&password, &lookup);
//!
//! println!("{}", report.render());
//! ```

// Internal modules
mod breach;
mod charset;
mod crack_time;
mod entropy;
mod evaluator;
mod report;
mod sections;

// Public API
pub use breach::{
    get_breach_endpoint, range_contains, sha1_prefix_suffix, BreachError, BreachLookup,
    BreachStatus, HibpClient, DEFAULT_BREACH_ENDPOINT,
};
pub use charset::{charset_size, password_dna, CharClass};
pub use crack_time::{crack_seconds, format_crack_time};
pub use entropy::{entropy_bits, strength_score, MAX_SCORE};
pub use evaluator::analyze_password;
pub use report::{PasswordReport, StrengthLabel};
pub use sections::{keyboard_pattern_section, suggestions};

#[cfg(feature = "async")]
pub use evaluator::analyze_password_tx;

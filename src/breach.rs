//! k-anonymity breach lookup against a Have I Been Pwned style range API.
//!
//! The full password hash never leaves the process: only the first five hex
//! characters of the SHA-1 digest are sent, and the returned range is
//! scanned locally for the remainder.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use thiserror::Error;

/// Public range endpoint queried when no override is configured.
pub const DEFAULT_BREACH_ENDPOINT: &str = "https://api.pwnedpasswords.com/range";

/// Hex characters of the digest sent to the range API.
const PREFIX_LEN: usize = 5;

/// Give up on a range request after this long. No retries.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum BreachError {
    #[error("breach range request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("breach range endpoint returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Verdict of a breach lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachStatus {
    /// The password appears in known breach corpora.
    Breached,
    /// The password was not found in its hash range.
    Clear,
    /// The lookup could not be completed; the status stays unknown.
    Unknown,
}

/// Capability the evaluator uses to consult breach data.
///
/// Implemented by [`HibpClient`] for the live API, and blanket-implemented
/// for plain functions so tests can inject a lookup without touching the
/// network.
pub trait BreachLookup {
    /// Returns whether the password is known to be breached.
    fn check(&self, password: &SecretString) -> Result<bool, BreachError>;
}

impl<F> BreachLookup for F
where
    F: Fn(&SecretString) -> Result<bool, BreachError>,
{
    fn check(&self, password: &SecretString) -> Result<bool, BreachError> {
        self(password)
    }
}

/// Returns the breach range endpoint.
///
/// Priority:
/// 1. Environment variable `PWD_BREACH_ENDPOINT`
/// 2. Default public endpoint
pub fn get_breach_endpoint() -> String {
    std::env::var("PWD_BREACH_ENDPOINT").unwrap_or_else(|_| DEFAULT_BREACH_ENDPOINT.to_string())
}

/// Uppercase SHA-1 hex of the password, split into range prefix and suffix.
pub fn sha1_prefix_suffix(password: &SecretString) -> (String, String) {
    let digest = Sha1::digest(password.expose_secret().as_bytes());
    let hash = hex::encode_upper(digest);
    let (prefix, suffix) = hash.split_at(PREFIX_LEN);
    (prefix.to_string(), suffix.to_string())
}

/// Scans a range response body for a record starting with the hash suffix.
///
/// Records look like `SUFFIX:COUNT`, one per line; the count is not
/// consumed.
pub fn range_contains(body: &str, suffix: &str) -> bool {
    body.lines().any(|line| line.starts_with(suffix))
}

/// Blocking client for the Have I Been Pwned password range API.
pub struct HibpClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl HibpClient {
    /// Builds a client against [`get_breach_endpoint`].
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self, BreachError> {
        Self::with_endpoint(get_breach_endpoint())
    }

    /// Builds a client against a specific range endpoint.
    ///
    /// Use this to target a mirror or a test server directly instead of
    /// relying on environment variables.
    pub fn with_endpoint<S: Into<String>>(endpoint: S) -> Result<Self, BreachError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    /// Fetches the plaintext range body for a 5-character hash prefix.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub fn fetch_range(&self, prefix: &str) -> Result<String, BreachError> {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), prefix);
        let response = self.http.get(&url).send()?;

        let status = response.status();
        if !status.is_success() {
            #[cfg(feature = "tracing")]
            tracing::warn!("breach range lookup returned status {}", status);
            return Err(BreachError::Status(status));
        }

        Ok(response.text()?)
    }
}

impl BreachLookup for HibpClient {
    fn check(&self, password: &SecretString) -> Result<bool, BreachError> {
        let (prefix, suffix) = sha1_prefix_suffix(password);
        let body = self.fetch_range(&prefix)?;
        Ok(range_contains(&body, &suffix))
    }
}

//! Mapping entity: a short code and the URL it points at.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Number of characters in every short code.
pub const CODE_LENGTH: usize = 6;

/// Compiled regex for short code validation.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6}$").expect("static regex is valid"));

/// A six character alphanumeric short code.
///
/// Can only be built from a string that has the exact shape of a generated
/// code, so anything holding a `ShortCode` never needs to re-check it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    /// Parses a candidate code. Returns `None` for anything that is not
    /// exactly six characters from `[A-Za-z0-9]`.
    pub fn parse(raw: &str) -> Option<Self> {
        CODE_REGEX.is_match(raw).then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Builds the public short URL, `<base>/<code>`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A stored short code with its destination and click counter.
///
/// `original_url` is kept exactly as submitted. `clicks` only ever grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub short_code: ShortCode,
    pub original_url: String,
    pub clicks: i64,
}

impl Mapping {
    pub fn new(short_code: ShortCode, original_url: String, clicks: i64) -> Self {
        Self {
            short_code,
            original_url,
            clicks,
        }
    }
}

//! The ordered `major.minor.patch` triple.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Leading `major.minor` with an optional `.patch`, anchored at the start.
/// Only ASCII digits count.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\.([0-9]+)(?:\.([0-9]+))?").expect("version pattern is valid")
});

/// A parsed version number.
///
/// Ordering compares `major`, then `minor`, then `patch` numerically, so
/// `2.10.0 > 2.9.9`. The empty value (nothing matched during parsing) is
/// distinct from a parsed `0.0.0` and sorts before every parsed version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct VersionNumber {
    // Field order drives the derived ordering.
    major: u32,
    minor: u32,
    patch: u32,
    parsed: bool,
}

impl VersionNumber {
    /// Parse a version from the start of `text`.
    ///
    /// Trailing text after the match is ignored (`"4.3.1 Patched"` parses as
    /// `4.3.1`), a missing patch component defaults to 0, and input with no
    /// leading `digits.digits` gives the empty version. A component that does
    /// not fit in a `u32` is read as 0.
    pub fn parse(text: &str) -> Self {
        let Some(caps) = VERSION_PATTERN.captures(text) else {
            return Self::default();
        };
        let component = |i: usize| {
            caps.get(i)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .unwrap_or(0)
        };
        Self {
            major: component(1),
            minor: component(2),
            patch: component(3),
            parsed: true,
        }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    /// Whether parsing found no version at all.
    ///
    /// A parsed `0.0.0` is *not* empty.
    pub fn is_empty(&self) -> bool {
        !self.parsed
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl From<&str> for VersionNumber {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for VersionNumber {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

// The empty version serializes as "" so that it survives a round trip.
impl From<VersionNumber> for String {
    fn from(version: VersionNumber) -> Self {
        if version.is_empty() {
            String::new()
        } else {
            version.to_string()
        }
    }
}

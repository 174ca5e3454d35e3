//! Configuration-facing runtime selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VersionError;
use crate::number::VersionNumber;

/// Sentinel meaning "use whichever installation is detected as the default".
pub const DEFAULT_VERSION: &str = "Default";

/// Word size of a runtime installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Architecture {
    Bits32,
    Bits64,
}

impl Architecture {
    /// The canonical tag (`"32"` or `"64"`).
    pub fn tag(&self) -> &'static str {
        match self {
            Architecture::Bits32 => "32",
            Architecture::Bits64 => "64",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Architecture {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "32" | "i386" | "x86" => Ok(Architecture::Bits32),
            "64" | "x64" | "x86_64" | "amd64" => Ok(Architecture::Bits64),
            _ => Err(VersionError::UnknownArchitecture { tag: s.to_string() }),
        }
    }
}

impl TryFrom<String> for Architecture {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Architecture> for String {
    fn from(arch: Architecture) -> Self {
        arch.tag().to_string()
    }
}

/// A selected runtime: a version string plus an optional architecture.
///
/// The version string is kept verbatim because it may be the
/// [`DEFAULT_VERSION`] sentinel rather than a number. Use
/// [`version_number`](Self::version_number) when an ordering key is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionDescriptor {
    /// Version string or the `"Default"` sentinel.
    #[serde(default = "default_number")]
    pub number: String,
    /// Advisory architecture; not part of the version number.
    #[serde(default)]
    pub arch: Option<Architecture>,
}

fn default_number() -> String {
    DEFAULT_VERSION.to_string()
}

impl Default for VersionDescriptor {
    fn default() -> Self {
        Self {
            number: default_number(),
            arch: None,
        }
    }
}

impl VersionDescriptor {
    pub fn new(number: impl Into<String>, arch: Option<Architecture>) -> Self {
        Self {
            number: number.into(),
            arch,
        }
    }

    /// True exactly when the version string is the `"Default"` sentinel.
    pub fn is_default(&self) -> bool {
        self.number == DEFAULT_VERSION
    }

    /// Parse the version string. The sentinel parses as the empty version.
    pub fn version_number(&self) -> VersionNumber {
        VersionNumber::parse(&self.number)
    }
}

impl fmt::Display for VersionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.arch {
            Some(arch) => write!(f, "{} ({}-bit)", self.number, arch),
            None => f.write_str(&self.number),
        }
    }
}

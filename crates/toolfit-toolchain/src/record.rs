//! Installed toolchain records.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use toolfit_version::VersionNumber;

/// The runtime versions a toolchain release declares support for.
///
/// The minimum is always inclusive. The maximum is optional (no upper limit)
/// and carries its own inclusive/exclusive flag, since toolchain metadata
/// expresses both "up to 4.3.99" and "anything before 4.4".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SupportedRange {
    /// Lowest supported runtime version (inclusive).
    pub min: VersionNumber,
    /// Upper runtime bound, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<VersionNumber>,
    /// Whether `max` itself is supported.
    #[serde(default)]
    pub max_inclusive: bool,
}

impl SupportedRange {
    /// `min` and every later runtime.
    pub fn at_least(min: VersionNumber) -> Self {
        Self {
            min,
            max: None,
            max_inclusive: false,
        }
    }

    /// `min <= v < max`.
    pub fn half_open(min: VersionNumber, max: VersionNumber) -> Self {
        Self {
            min,
            max: Some(max),
            max_inclusive: false,
        }
    }

    /// `min <= v <= max`.
    pub fn closed(min: VersionNumber, max: VersionNumber) -> Self {
        Self {
            min,
            max: Some(max),
            max_inclusive: true,
        }
    }

    /// Whether `version` lies within the range.
    ///
    /// Pure bound check; the empty-version policy lives in
    /// [`crate::compat::is_compatible`].
    pub fn contains(&self, version: &VersionNumber) -> bool {
        if *version < self.min {
            return false;
        }
        match &self.max {
            None => true,
            Some(max) => version < max || (self.max_inclusive && version == max),
        }
    }

    /// Whether no version at all can satisfy the range.
    pub fn is_vacuous(&self) -> bool {
        match &self.max {
            None => false,
            Some(max) => *max < self.min || (*max == self.min && !self.max_inclusive),
        }
    }
}

impl std::fmt::Display for SupportedRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.max {
            None => write!(f, ">={}", self.min),
            Some(max) if self.max_inclusive => write!(f, ">={}, <={}", self.min, max),
            Some(max) => write!(f, ">={}, <{}", self.min, max),
        }
    }
}

/// One installed toolchain, as reported by discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ToolchainRecord {
    /// Display name (e.g., "rtools43").
    pub name: String,
    /// The toolchain's own release version.
    pub version: VersionNumber,
    /// Directories that must be on the search path, in declaration order.
    #[serde(default)]
    pub bin_dirs: Vec<PathBuf>,
    /// Runtime versions this release can build against.
    pub supports: SupportedRange,
}

impl ToolchainRecord {
    pub fn new(
        name: impl Into<String>,
        version: VersionNumber,
        supports: SupportedRange,
        bin_dirs: Vec<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            version,
            supports,
            bin_dirs,
        }
    }
}

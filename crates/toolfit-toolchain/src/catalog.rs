//! TOML catalogs of discovered toolchains.
//!
//! A catalog is a list of `[[toolchain]]` tables:
//!
//! ```toml
//! [[toolchain]]
//! name = "rtools43"
//! version = "4.3"
//! bin-dirs = ["C:/rtools43/usr/bin"]
//!
//! [toolchain.supports]
//! min = "4.3.0"
//! max = "4.4.0"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ToolchainError};
use crate::record::ToolchainRecord;

/// A list of toolchain records as written by discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, rename = "toolchain")]
    pub toolchains: Vec<ToolchainRecord>,
}

/// A validation issue found in a toolchain record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Severity: "error" or "warning".
    pub severity: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// Load a catalog from a TOML file.
pub fn load_catalog_toml(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(ToolchainError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_catalog_toml(&content)
}

/// Parse a catalog from a TOML string.
pub fn parse_catalog_toml(toml_str: &str) -> Result<Catalog> {
    let catalog: Catalog = toml::from_str(toml_str)?;
    Ok(catalog)
}

/// Check a record for values that would make it silently useless.
///
/// Lenient version parsing turns typos into empty versions, so this is the
/// place where they surface.
pub fn validate_record(record: &ToolchainRecord) -> std::result::Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if record.name.trim().is_empty() {
        issues.push(ValidationIssue {
            severity: "error",
            message: "toolchain has an empty name".into(),
        });
    }

    if record.version.is_empty() {
        issues.push(ValidationIssue {
            severity: "warning",
            message: format!("toolchain '{}' has no recognizable version", record.name),
        });
    }

    let range = &record.supports;
    if range.min.is_empty() {
        issues.push(ValidationIssue {
            severity: "error",
            message: format!(
                "toolchain '{}' has no recognizable minimum runtime version",
                record.name
            ),
        });
    }
    if let Some(max) = &range.max {
        if max.is_empty() {
            issues.push(ValidationIssue {
                severity: "error",
                message: format!(
                    "toolchain '{}' has an unrecognizable maximum runtime version",
                    record.name
                ),
            });
        } else if range.is_vacuous() {
            issues.push(ValidationIssue {
                severity: "error",
                message: format!(
                    "toolchain '{}' supports no runtime version ({})",
                    record.name, range
                ),
            });
        }
    }

    if record.bin_dirs.is_empty() {
        issues.push(ValidationIssue {
            severity: "warning",
            message: format!("toolchain '{}' lists no binary directories", record.name),
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

//! CLI command implementations.

pub mod check;
pub mod doctor;
pub mod env;
pub mod parse;
pub mod path;

use anyhow::{bail, Result};
use toolfit_version::VersionNumber;

/// Output format shared by commands with machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub fn parse(format: Option<&str>) -> Result<Self> {
        match format {
            None | Some("text") => Ok(Format::Text),
            Some("json") => Ok(Format::Json),
            Some(other) => bail!("unknown format '{other}' (expected text or json)"),
        }
    }
}

/// Print warnings from the core to stderr.
pub fn print_warnings<'a>(warnings: impl IntoIterator<Item = &'a String>) {
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
}

/// A runtime version for messages; the empty version reads as "unknown".
pub fn runtime_label(runtime: &VersionNumber) -> String {
    if runtime.is_empty() {
        "unknown".to_string()
    } else {
        runtime.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names() {
        assert_eq!(Format::parse(None).unwrap(), Format::Text);
        assert_eq!(Format::parse(Some("json")).unwrap(), Format::Json);
        assert!(Format::parse(Some("xml")).is_err());
    }

    #[test]
    fn empty_runtime_label() {
        assert_eq!(runtime_label(&VersionNumber::parse("Default")), "unknown");
        assert_eq!(runtime_label(&VersionNumber::parse("4.3")), "4.3.0");
    }
}

//! `toolfit check`: runtime/toolchain compatibility report.

use anyhow::{bail, Result};
use toolfit_toolchain::{is_compatible, select_compatible, validate_record, ToolchainRecord};

use super::runtime_label;
use crate::manifest::ToolfitManifest;

/// Print each toolchain's compatibility with the configured runtime.
///
/// Fails when a toolchain is required on this platform and none fits.
pub fn run(manifest: &ToolfitManifest, toolchains: &[ToolchainRecord]) -> Result<()> {
    let settings = manifest.build_settings();
    let runtime = settings.runtime;

    println!("Runtime: {}", manifest.runtime.descriptor());
    println!("Version: {}", runtime_label(&runtime));
    println!();

    if toolchains.is_empty() {
        println!("No toolchains configured.");
    }
    for toolchain in toolchains {
        let status = if is_compatible(&runtime, toolchain) {
            "compatible"
        } else {
            "incompatible"
        };
        println!(
            "  {:<20} {:<10} supports {:<24} {status}",
            toolchain.name,
            toolchain.version.to_string(),
            toolchain.supports.to_string(),
        );
        if let Err(issues) = validate_record(toolchain) {
            for issue in issues {
                println!("      {}: {}", issue.severity, issue.message);
            }
        }
    }
    println!();

    match select_compatible(&runtime, toolchains) {
        Some(toolchain) => {
            println!("Selected: {} {}", toolchain.name, toolchain.version);
            Ok(())
        }
        None if settings.require_toolchain => {
            bail!(
                "no configured toolchain supports runtime {}",
                runtime_label(&runtime)
            )
        }
        None => {
            println!(
                "Selected: none (a toolchain is not required on {})",
                settings.platform
            );
            Ok(())
        }
    }
}

//! `toolfit doctor`: configuration and toolchain diagnostics.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use toolfit_env::{DirectoryProbe, EnvironmentState, FsProbe, PlatformTag};
use toolfit_toolchain::{is_compatible, validate_record, ToolchainRecord};

use super::runtime_label;
use crate::manifest::{ToolfitManifest, MANIFEST_FILE};

/// Print diagnostic information.
pub fn run(
    manifest: &ToolfitManifest,
    manifest_dir: Option<&Path>,
    toolchains: &[ToolchainRecord],
) -> Result<()> {
    let settings = manifest.build_settings();
    let platform = settings.platform;

    println!("=== toolfit doctor ===");
    println!();
    println!("toolfit version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("--- Configuration ---");
    match manifest_dir {
        Some(dir) => println!("  {MANIFEST_FILE}: found at {}", dir.display()),
        None => println!("  {MANIFEST_FILE}: not found (using defaults)"),
    }
    println!("  Platform: {platform} (host: {})", PlatformTag::host());
    println!("  Runtime:  {}", manifest.runtime.descriptor());
    println!("  Resolved: {}", runtime_label(&settings.runtime));
    println!(
        "  Toolchain required: {}",
        if settings.require_toolchain { "yes" } else { "no" }
    );
    if let Some(temp_dir) = &settings.temp_dir {
        println!("  Temp dir: {} [{}]", temp_dir.display(), dir_status(temp_dir));
    }
    println!();

    println!("--- Toolchains ---");
    if toolchains.is_empty() {
        println!("  none configured");
    }
    for toolchain in toolchains {
        let compat = if is_compatible(&settings.runtime, toolchain) {
            "compatible"
        } else {
            "incompatible"
        };
        println!(
            "  {} {} (supports {}): {compat}",
            toolchain.name, toolchain.version, toolchain.supports
        );
        for dir in &toolchain.bin_dirs {
            println!("    {} [{}]", dir.display(), dir_status(dir));
        }
        if let Err(issues) = validate_record(toolchain) {
            for issue in issues {
                println!("    {}: {}", issue.severity, issue.message);
            }
        }
    }
    println!();

    println!("--- Search Path ---");
    let entries = EnvironmentState::from_process().path_entries(platform);
    let mut seen = HashSet::new();
    let duplicates = entries.iter().filter(|e| !seen.insert(e.as_str())).count();
    println!("  {} entries, {duplicates} duplicate(s)", entries.len());

    Ok(())
}

fn dir_status(dir: &Path) -> String {
    match FsProbe.probe(dir) {
        Ok(()) => "ok".to_string(),
        Err(reason) => reason.to_string(),
    }
}

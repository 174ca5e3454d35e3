//! `toolfit env`: variables a build process would receive.

use anyhow::Result;
use serde_json::json;
use toolfit_env::{prepare_build_environment, BuildSettings, EnvironmentState, PathAugmenter};
use toolfit_toolchain::ToolchainRecord;

use super::{print_warnings, Format};

/// Prepare a build environment from this process's environment and print
/// the variables that differ from it.
pub fn run(settings: &BuildSettings, toolchains: &[ToolchainRecord], format: Option<&str>) -> Result<()> {
    let format = Format::parse(format)?;
    let current = EnvironmentState::from_process();
    let prepared = prepare_build_environment(settings, &current, toolchains, &PathAugmenter::new());
    let changed = prepared.env.changed_since(&current, settings.platform);

    match format {
        Format::Text => {
            print_warnings(&prepared.warnings);
            if let Some(toolchain) = &prepared.toolchain {
                println!("# toolchain: {toolchain}");
            }
            for (name, value) in changed {
                println!("{name}={value}");
            }
        }
        Format::Json => {
            let vars: serde_json::Map<String, serde_json::Value> = changed
                .into_iter()
                .map(|(name, value)| (name.to_string(), json!(value)))
                .collect();
            let out = json!({
                "platform": settings.platform.name(),
                "toolchain": prepared.toolchain,
                "changed": vars,
                "warnings": prepared.warnings,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

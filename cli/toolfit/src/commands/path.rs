//! `toolfit path`: the search path with a compatible toolchain folded in.

use anyhow::Result;
use serde_json::json;
use toolfit_env::{decode_path, encode_path, AugmentedPath, BuildSettings, EnvironmentState, PathAugmenter};
use toolfit_toolchain::{select_compatible, ToolchainRecord};

use super::{print_warnings, runtime_label, Format};

/// Print the merged search path.
///
/// Starts from `current` when given, otherwise from this process's path
/// variable. Without a compatible toolchain the path is printed unchanged
/// along with a warning.
pub fn run(
    settings: &BuildSettings,
    toolchains: &[ToolchainRecord],
    current: Option<&str>,
    format: Option<&str>,
) -> Result<()> {
    let format = Format::parse(format)?;
    let platform = settings.platform;
    let entries = match current {
        Some(value) => decode_path(value, platform),
        None => EnvironmentState::from_process().path_entries(platform),
    };

    let mut warnings = Vec::new();
    let selected = select_compatible(&settings.runtime, toolchains);
    let merged = match selected {
        Some(toolchain) => PathAugmenter::new().add_toolchain_to_path(&entries, toolchain),
        None => {
            warnings.push(format!(
                "no configured toolchain supports runtime {}; path left unchanged",
                runtime_label(&settings.runtime)
            ));
            AugmentedPath {
                path: entries,
                added: Vec::new(),
                warning: None,
            }
        }
    };
    warnings.extend(merged.warning.clone());

    match format {
        Format::Text => {
            print_warnings(&warnings);
            println!("{}", encode_path(&merged.path, platform));
        }
        Format::Json => {
            let out = json!({
                "platform": platform.name(),
                "toolchain": selected.map(|t| t.name.as_str()),
                "path": merged.path,
                "added": merged.added,
                "warnings": warnings,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

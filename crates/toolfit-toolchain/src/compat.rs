//! Runtime/toolchain compatibility decisions.
//!
//! Runtime and toolchain releases are versioned independently, so a
//! toolchain is never matched by equality with the runtime version; only the
//! toolchain's declared [`SupportedRange`](crate::SupportedRange) decides.

use toolfit_version::VersionNumber;
use tracing::debug;

use crate::record::ToolchainRecord;

/// Whether `toolchain` can build against the `runtime` version.
///
/// An empty (unparsed) runtime version is never compatible: an unknown
/// runtime cannot be confirmed to fall in any range.
pub fn is_compatible(runtime: &VersionNumber, toolchain: &ToolchainRecord) -> bool {
    if runtime.is_empty() {
        return false;
    }
    toolchain.supports.contains(runtime)
}

/// All candidates compatible with `runtime`, in input order.
pub fn compatible<'a>(
    runtime: &'a VersionNumber,
    candidates: &'a [ToolchainRecord],
) -> impl Iterator<Item = &'a ToolchainRecord> + 'a {
    candidates.iter().filter(move |t| is_compatible(runtime, t))
}

/// Pick the compatible candidate with the highest declared toolchain version.
///
/// Ties keep the earlier candidate, so discovery order breaks ties.
pub fn select_compatible<'a>(
    runtime: &VersionNumber,
    candidates: &'a [ToolchainRecord],
) -> Option<&'a ToolchainRecord> {
    let mut best: Option<&ToolchainRecord> = None;
    for candidate in candidates {
        if !is_compatible(runtime, candidate) {
            debug!(
                toolchain = %candidate.name,
                supports = %candidate.supports,
                %runtime,
                "toolchain does not support runtime"
            );
            continue;
        }
        match best {
            Some(current) if !(current.version < candidate.version) => {}
            _ => best = Some(candidate),
        }
    }
    if let Some(chosen) = best {
        debug!(toolchain = %chosen.name, version = %chosen.version, %runtime, "selected toolchain");
    }
    best
}

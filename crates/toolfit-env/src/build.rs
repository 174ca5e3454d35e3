//! Preparing the environment of a build process.
//!
//! Ties the pieces together the way a build launcher needs them: pick a
//! toolchain compatible with the active runtime, fold it into the search
//! path, and point the temp-directory variables at the configured location.

use std::path::PathBuf;

use toolfit_toolchain::{select_compatible, ToolchainRecord};
use toolfit_version::VersionNumber;
use tracing::{info, warn};

use crate::augment::PathAugmenter;
use crate::platform::PlatformTag;
use crate::probe::DirectoryProbe;
use crate::state::EnvironmentState;

/// Resolved inputs for preparing a build environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    /// Version of the runtime the build targets (may be empty if unknown).
    pub runtime: VersionNumber,
    pub platform: PlatformTag,
    /// Directory to export through the platform's temp variables.
    pub temp_dir: Option<PathBuf>,
    /// Whether a native toolchain must be put on the search path.
    pub require_toolchain: bool,
}

impl BuildSettings {
    /// Settings with no temp directory and the platform's default toolchain
    /// requirement.
    pub fn new(runtime: VersionNumber, platform: PlatformTag) -> Self {
        Self {
            runtime,
            platform,
            temp_dir: None,
            require_toolchain: platform.requires_native_toolchain(),
        }
    }

    pub fn with_temp_dir(mut self, temp_dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(temp_dir.into());
        self
    }

    pub fn with_require_toolchain(mut self, require: bool) -> Self {
        self.require_toolchain = require;
        self
    }
}

/// The environment to hand to a build process, plus what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedEnvironment {
    pub env: EnvironmentState,
    /// Name of the toolchain folded into the search path, if any.
    pub toolchain: Option<String>,
    /// Human-readable problems worth surfacing; the build may still proceed.
    pub warnings: Vec<String>,
}

/// Compute the environment for a build process from `env`.
///
/// `env` is not modified. Problems never abort preparation; they are
/// collected in [`PreparedEnvironment::warnings`].
pub fn prepare_build_environment<P: DirectoryProbe>(
    settings: &BuildSettings,
    env: &EnvironmentState,
    candidates: &[ToolchainRecord],
    augmenter: &PathAugmenter<P>,
) -> PreparedEnvironment {
    let platform = settings.platform;
    let mut prepared = PreparedEnvironment {
        env: env.clone(),
        toolchain: None,
        warnings: Vec::new(),
    };

    if settings.require_toolchain {
        match select_compatible(&settings.runtime, candidates) {
            Some(toolchain) => {
                info!(toolchain = %toolchain.name, runtime = %settings.runtime, "adding toolchain to build environment");
                let merged = augmenter.add_toolchain_to_environment(env, platform, toolchain);
                prepared.env = merged.env;
                prepared.toolchain = Some(toolchain.name.clone());
                prepared.warnings.extend(merged.warning);
            }
            None => {
                let message = no_toolchain_message(&settings.runtime, candidates.len());
                warn!("{message}");
                prepared.warnings.push(message);
            }
        }
    }

    if let Some(temp_dir) = &settings.temp_dir {
        match temp_dir.to_str() {
            Some(value) => {
                for var in platform.temp_vars() {
                    prepared.env.set(var, value, platform);
                }
            }
            None => {
                let message = format!(
                    "temporary directory {} is not valid Unicode and was not exported",
                    temp_dir.display()
                );
                warn!("{message}");
                prepared.warnings.push(message);
            }
        }
    }

    prepared
}

fn no_toolchain_message(runtime: &VersionNumber, candidates: usize) -> String {
    if runtime.is_empty() {
        return "the runtime version is unknown, so no build toolchain can be confirmed \
                compatible; native code may fail to compile"
            .to_string();
    }
    format!(
        "none of the {candidates} installed build toolchain(s) supports runtime {runtime}; \
         native code may fail to compile"
    )
}

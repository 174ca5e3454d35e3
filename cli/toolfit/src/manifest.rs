//! `toolfit.toml` parsing and resolution into core settings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toolfit_env::{BuildSettings, PlatformTag};
use toolfit_toolchain::ToolchainRecord;
use toolfit_version::{Architecture, VersionDescriptor, VersionNumber, DEFAULT_VERSION};

pub const MANIFEST_FILE: &str = "toolfit.toml";

/// The top-level manifest structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolfitManifest {
    /// Runtime selection.
    #[serde(default)]
    pub runtime: RuntimeConfig,
    /// Build environment settings.
    #[serde(default)]
    pub build: BuildConfig,
    /// Toolchains reported by discovery.
    #[serde(default, rename = "toolchain")]
    pub toolchains: Vec<ToolchainRecord>,
}

/// `[runtime]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// A version number or "Default".
    #[serde(default = "default_version")]
    pub version: String,
    /// Architecture tag ("32", "64", "x64", ...).
    #[serde(default)]
    pub arch: Option<Architecture>,
    /// Version of the installation that "Default" resolves to.
    #[serde(default)]
    pub detected: Option<String>,
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            arch: None,
            detected: None,
        }
    }
}

impl RuntimeConfig {
    pub fn descriptor(&self) -> VersionDescriptor {
        VersionDescriptor::new(self.version.clone(), self.arch)
    }

    /// The runtime version builds will run against.
    ///
    /// For the "Default" selection this is the detected installation's
    /// version, or the empty version when nothing was detected.
    pub fn effective_version(&self) -> VersionNumber {
        let descriptor = self.descriptor();
        if descriptor.is_default() {
            self.detected
                .as_deref()
                .map(VersionNumber::parse)
                .unwrap_or_default()
        } else {
            descriptor.version_number()
        }
    }
}

/// `[build]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuildConfig {
    /// Platform conventions to apply; defaults to the host.
    #[serde(default)]
    pub platform: Option<PlatformTag>,
    /// Temporary directory exported to builds.
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
    /// Overrides the platform's default toolchain requirement.
    #[serde(default)]
    pub require_toolchain: Option<bool>,
}

impl ToolfitManifest {
    /// Search upward from `start_dir` for a `toolfit.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: ToolfitManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing toolfit.toml")
    }

    pub fn platform(&self) -> PlatformTag {
        self.build.platform.unwrap_or_else(PlatformTag::host)
    }

    /// Resolve the manifest into settings for the core.
    pub fn build_settings(&self) -> BuildSettings {
        let mut settings = BuildSettings::new(self.runtime.effective_version(), self.platform());
        if let Some(temp_dir) = &self.build.temp_dir {
            settings = settings.with_temp_dir(temp_dir.clone());
        }
        if let Some(require) = self.build.require_toolchain {
            settings = settings.with_require_toolchain(require);
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
[runtime]
version = "Default"
arch = "64"
detected = "4.3.1"

[build]
platform = "windows"
temp-dir = "D:/scratch"
require-toolchain = true

[[toolchain]]
name = "rtools43"
version = "4.3"
bin-dirs = ["C:/rtools43/usr/bin", "C:/rtools43/x86_64-w64-mingw32.static.posix/bin"]

[toolchain.supports]
min = "4.3.0"
max = "4.4.0"
"#;

    #[test]
    fn parse_full_manifest() {
        let manifest = ToolfitManifest::from_str(FULL).unwrap();
        assert!(manifest.runtime.descriptor().is_default());
        assert_eq!(manifest.runtime.arch, Some(Architecture::Bits64));
        assert_eq!(manifest.runtime.effective_version(), VersionNumber::parse("4.3.1"));
        assert_eq!(manifest.platform(), PlatformTag::Windows);
        assert_eq!(manifest.toolchains.len(), 1);
        assert_eq!(manifest.toolchains[0].bin_dirs.len(), 2);

        let settings = manifest.build_settings();
        assert_eq!(settings.platform, PlatformTag::Windows);
        assert_eq!(settings.temp_dir, Some(PathBuf::from("D:/scratch")));
        assert!(settings.require_toolchain);
    }

    #[test]
    fn parse_minimal_manifest() {
        let manifest = ToolfitManifest::from_str("").unwrap();
        assert!(manifest.runtime.descriptor().is_default());
        assert!(manifest.runtime.effective_version().is_empty());
        assert!(manifest.toolchains.is_empty());
        assert_eq!(manifest.platform(), PlatformTag::host());
    }

    #[test]
    fn explicit_version_ignores_detected() {
        let manifest = ToolfitManifest::from_str(
            "[runtime]\nversion = \"4.2.3\"\ndetected = \"4.3.1\"\n",
        )
        .unwrap();
        assert_eq!(manifest.runtime.effective_version(), VersionNumber::parse("4.2.3"));
    }

    #[test]
    fn require_toolchain_defaults_to_platform() {
        let manifest = ToolfitManifest::from_str("[build]\nplatform = \"unix\"\n").unwrap();
        assert!(!manifest.build_settings().require_toolchain);
        let manifest = ToolfitManifest::from_str("[build]\nplatform = \"windows\"\n").unwrap();
        assert!(manifest.build_settings().require_toolchain);
    }

    #[test]
    fn platform_aliases() {
        let manifest = ToolfitManifest::from_str("[build]\nplatform = \"linux\"\n").unwrap();
        assert_eq!(manifest.platform(), PlatformTag::Unix);
        let manifest = ToolfitManifest::from_str("[build]\nplatform = \"Win32\"\n").unwrap();
        assert_eq!(manifest.platform(), PlatformTag::Windows);
    }

    #[test]
    fn reject_bad_values() {
        assert!(ToolfitManifest::from_str("[runtime]\narch = \"sparc\"\n").is_err());
        let err = ToolfitManifest::from_str("[build]\nplatform = \"beos\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("unknown platform 'beos'"));
        assert!(ToolfitManifest::from_str("this is not valid toml [[[").is_err());
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), FULL).unwrap();
        let nested = dir.path().join("pkg").join("src");
        std::fs::create_dir_all(&nested).unwrap();

        let (manifest, found_dir) = ToolfitManifest::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(found_dir, dir.path());
        assert_eq!(manifest.toolchains[0].name, "rtools43");
    }

    #[test]
    fn find_and_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "[runtime\n").unwrap();
        let err = ToolfitManifest::find_and_load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }
}

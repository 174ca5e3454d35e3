//! Folding a toolchain's directories into a search path.
//!
//! The merge is mechanical: callers decide compatibility first (see
//! [`toolfit_toolchain::is_compatible`]) and call in here only when they want
//! the toolchain on the path.
//!
//! For each directory of the toolchain, in declaration order:
//! 1. a directory the [`DirectoryProbe`] rejects is skipped and reported;
//! 2. a directory already present (byte-equal entry) stays where it is;
//! 3. anything else is prepended, so toolchain binaries shadow same-named
//!    binaries further down the path.
//!
//! Because each directory is prepended in turn, the last new directory ends
//! up first. Re-running the merge with the same toolchain changes nothing.

use std::path::Path;

use toolfit_toolchain::ToolchainRecord;
use tracing::{debug, warn};

use crate::platform::PlatformTag;
use crate::probe::{DirectoryProbe, FsProbe, SkipReason};
use crate::state::EnvironmentState;

/// Result of merging a toolchain into a decoded search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentedPath {
    /// The merged search path.
    pub path: Vec<String>,
    /// Entries that were newly prepended, in the order they were added.
    pub added: Vec<String>,
    /// Aggregated description of skipped directories, if any.
    pub warning: Option<String>,
}

/// Result of merging a toolchain into a whole environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentedEnvironment {
    pub env: EnvironmentState,
    pub warning: Option<String>,
}

/// Merges toolchain directories into search paths.
#[derive(Debug, Clone, Default)]
pub struct PathAugmenter<P = FsProbe> {
    probe: P,
}

impl PathAugmenter<FsProbe> {
    /// An augmenter that checks directories against the real filesystem.
    pub fn new() -> Self {
        Self { probe: FsProbe }
    }
}

impl<P: DirectoryProbe> PathAugmenter<P> {
    pub fn with_probe(probe: P) -> Self {
        Self { probe }
    }

    /// Merge `toolchain`'s directories into `current`.
    ///
    /// Never fails: directories that cannot be used are left out and listed
    /// in the returned warning, and the valid ones are still merged.
    pub fn add_toolchain_to_path(
        &self,
        current: &[String],
        toolchain: &ToolchainRecord,
    ) -> AugmentedPath {
        let mut path = current.to_vec();
        let mut added = Vec::new();
        let mut skipped: Vec<(&Path, SkipReason)> = Vec::new();

        for dir in &toolchain.bin_dirs {
            let Some(entry) = dir.to_str() else {
                skipped.push((dir.as_path(), SkipReason::NotUnicode));
                continue;
            };
            if let Err(reason) = self.probe.probe(dir) {
                warn!(toolchain = %toolchain.name, dir = entry, %reason, "skipping toolchain directory");
                skipped.push((dir.as_path(), reason));
                continue;
            }
            if path.iter().any(|existing| existing == entry) {
                debug!(toolchain = %toolchain.name, dir = entry, "already on search path");
                continue;
            }
            debug!(toolchain = %toolchain.name, dir = entry, "prepending to search path");
            path.insert(0, entry.to_string());
            added.push(entry.to_string());
        }

        AugmentedPath {
            path,
            added,
            warning: skip_warning(&toolchain.name, &skipped),
        }
    }

    /// Merge `toolchain` into the search-path variable of a copy of `env`.
    ///
    /// All other variables are left untouched. An unset path variable counts
    /// as empty and is created under the platform's canonical name, but only
    /// when something was added to it.
    pub fn add_toolchain_to_environment(
        &self,
        env: &EnvironmentState,
        platform: PlatformTag,
        toolchain: &ToolchainRecord,
    ) -> AugmentedEnvironment {
        let was_set = env.get(platform.path_var_name(), platform).is_some();
        let current = env.path_entries(platform);
        let merged = self.add_toolchain_to_path(&current, toolchain);

        let mut env = env.clone();
        if was_set || !merged.added.is_empty() {
            env.set_path_entries(&merged.path, platform);
        }
        AugmentedEnvironment {
            env,
            warning: merged.warning,
        }
    }
}

fn skip_warning(toolchain: &str, skipped: &[(&Path, SkipReason)]) -> Option<String> {
    if skipped.is_empty() {
        return None;
    }
    let noun = if skipped.len() == 1 {
        "directory was"
    } else {
        "directories were"
    };
    let mut message = format!(
        "toolchain '{toolchain}': {} {noun} not added to the search path:",
        skipped.len()
    );
    for (dir, reason) in skipped {
        message.push_str(&format!("\n  {} ({reason})", dir.display()));
    }
    Some(message)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use toolfit_toolchain::SupportedRange;
    use toolfit_version::VersionNumber;

    use super::*;

    fn toolchain(dirs: &[&str]) -> ToolchainRecord {
        ToolchainRecord::new(
            "tool",
            VersionNumber::parse("1.0"),
            SupportedRange::at_least(VersionNumber::parse("1.0")),
            dirs.iter().map(PathBuf::from).collect(),
        )
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn accept_all(_: &Path) -> Result<(), SkipReason> {
        Ok(())
    }

    #[test]
    fn present_directory_is_left_alone_new_one_prepended() {
        let augmenter = PathAugmenter::with_probe(accept_all);
        let current = strings(&["/usr/bin", "/opt/tool/bin"]);
        let result =
            augmenter.add_toolchain_to_path(&current, &toolchain(&["/opt/tool/bin", "/opt/tool/extra"]));
        assert_eq!(result.path, strings(&["/opt/tool/extra", "/usr/bin", "/opt/tool/bin"]));
        assert_eq!(result.added, strings(&["/opt/tool/extra"]));
        assert!(result.warning.is_none());
    }

    #[test]
    fn sequential_prepend_puts_last_directory_first() {
        let augmenter = PathAugmenter::with_probe(accept_all);
        let result = augmenter
            .add_toolchain_to_path(&strings(&["/usr/bin"]), &toolchain(&["/t/a", "/t/b"]));
        assert_eq!(result.path, strings(&["/t/b", "/t/a", "/usr/bin"]));
    }

    #[test]
    fn merge_is_idempotent() {
        let augmenter = PathAugmenter::with_probe(accept_all);
        let tc = toolchain(&["/t/a", "/usr/bin", "/t/b"]);
        let once = augmenter.add_toolchain_to_path(&strings(&["/usr/bin", "/bin"]), &tc);
        let twice = augmenter.add_toolchain_to_path(&once.path, &tc);
        assert_eq!(once.path, twice.path);
        assert!(twice.added.is_empty());
    }

    #[test]
    fn duplicate_toolchain_entries_are_added_once() {
        let augmenter = PathAugmenter::with_probe(accept_all);
        let result = augmenter.add_toolchain_to_path(&[], &toolchain(&["/t/a", "/t/a"]));
        assert_eq!(result.path, strings(&["/t/a"]));
    }

    #[test]
    fn comparison_is_byte_exact() {
        let augmenter = PathAugmenter::with_probe(accept_all);
        let result =
            augmenter.add_toolchain_to_path(&strings(&["/opt/tool/bin/"]), &toolchain(&["/opt/tool/bin"]));
        assert_eq!(result.path, strings(&["/opt/tool/bin", "/opt/tool/bin/"]));
    }

    #[test]
    fn missing_directories_are_skipped_with_one_warning() {
        let root = tempfile::tempdir().unwrap();
        let real = root.path().join("bin");
        std::fs::create_dir(&real).unwrap();
        let file = root.path().join("not-a-dir");
        std::fs::write(&file, b"").unwrap();
        let missing = root.path().join("gone");

        let tc = ToolchainRecord::new(
            "rtools43",
            VersionNumber::parse("4.3"),
            SupportedRange::at_least(VersionNumber::parse("4.3")),
            vec![missing.clone(), real.clone(), file.clone()],
        );
        let result = PathAugmenter::new().add_toolchain_to_path(&strings(&["/usr/bin"]), &tc);

        let real_entry = real.to_str().unwrap().to_string();
        assert_eq!(result.path, vec![real_entry, "/usr/bin".to_string()]);

        let warning = result.warning.expect("warning for skipped directories");
        assert!(warning.contains("rtools43"));
        assert!(warning.contains("2 directories were"));
        assert!(warning.contains(&format!("{} (does not exist)", missing.display())));
        assert!(warning.contains(&format!("{} (is not a directory)", file.display())));
    }

    #[test]
    fn skipped_directory_already_on_path_stays() {
        let augmenter = PathAugmenter::with_probe(|_: &Path| -> Result<(), SkipReason> { Err(SkipReason::Missing) });
        let current = strings(&["/gone", "/usr/bin"]);
        let result = augmenter.add_toolchain_to_path(&current, &toolchain(&["/gone"]));
        assert_eq!(result.path, current);
        assert!(result.warning.unwrap().contains("1 directory was"));
    }

    #[test]
    fn uninspectable_directory_reads_as_missing() {
        let augmenter = PathAugmenter::with_probe(|dir: &Path| -> Result<(), SkipReason> {
            if dir == Path::new("/locked/bin") {
                Err(SkipReason::Uninspectable("permission denied".to_string()))
            } else {
                Ok(())
            }
        });
        let result = augmenter
            .add_toolchain_to_path(&strings(&["/usr/bin"]), &toolchain(&["/locked/bin", "/t/bin"]));
        assert_eq!(result.path, strings(&["/t/bin", "/usr/bin"]));
        assert_eq!(
            result.warning.as_deref(),
            Some(
                "toolchain 'tool': 1 directory was not added to the search path:\n  \
                 /locked/bin (does not exist or cannot be inspected: permission denied)"
            )
        );
    }

    #[test]
    fn environment_overload_touches_only_path() {
        let env = EnvironmentState::from_vars([
            ("HOME", r"C:\Users\dev"),
            ("PATH", r"C:\Windows;C:\rtools43\usr\bin"),
            ("R_HOME", r"C:\R\R-4.3.1"),
        ]);
        let tc = toolchain(&[r"C:\rtools43\usr\bin", r"C:\rtools43\mingw64\bin"]);
        let result = PathAugmenter::with_probe(accept_all).add_toolchain_to_environment(
            &env,
            PlatformTag::Windows,
            &tc,
        );
        assert!(result.warning.is_none());

        let vars: Vec<(&str, &str)> = result.env.iter().collect();
        assert_eq!(
            vars,
            vec![
                ("HOME", r"C:\Users\dev"),
                ("PATH", r"C:\rtools43\mingw64\bin;C:\Windows;C:\rtools43\usr\bin"),
                ("R_HOME", r"C:\R\R-4.3.1"),
            ]
        );
        // The input is untouched.
        assert_eq!(env.get("PATH", PlatformTag::Windows), Some(r"C:\Windows;C:\rtools43\usr\bin"));
    }

    #[test]
    fn environment_without_path_gets_canonical_variable() {
        let env = EnvironmentState::from_vars([("HOME", "/root")]);
        let result = PathAugmenter::with_probe(accept_all).add_toolchain_to_environment(
            &env,
            PlatformTag::Unix,
            &toolchain(&["/opt/tool/bin"]),
        );
        assert_eq!(result.env.get("PATH", PlatformTag::Unix), Some("/opt/tool/bin"));
    }

    #[test]
    fn environment_without_path_and_nothing_added_stays_unset() {
        let env = EnvironmentState::from_vars([("HOME", "/root")]);
        let result = PathAugmenter::with_probe(|_: &Path| -> Result<(), SkipReason> { Err(SkipReason::Missing) })
            .add_toolchain_to_environment(&env, PlatformTag::Unix, &toolchain(&["/opt/tool/bin"]));
        assert_eq!(result.env, env);
        assert!(result.warning.is_some());
    }
}

//! Platform tag.
//!
//! Resolved once at the boundary (from configuration or [`PlatformTag::host`])
//! and passed into everything that needs variable names or separators, so
//! the rest of the crate has no compile-time platform branches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EnvError;

/// The platform family whose environment conventions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlatformTag {
    /// `;`-separated `Path`, case-insensitive variable names.
    Windows,
    /// `:`-separated `PATH`, case-sensitive variable names.
    Unix,
}

impl PlatformTag {
    /// The tag for the platform this binary was compiled for.
    pub fn host() -> Self {
        if cfg!(windows) {
            PlatformTag::Windows
        } else {
            PlatformTag::Unix
        }
    }

    /// Canonical name of the search-path variable.
    pub fn path_var_name(&self) -> &'static str {
        match self {
            PlatformTag::Windows => "Path",
            PlatformTag::Unix => "PATH",
        }
    }

    /// Separator between search-path entries.
    pub fn path_separator(&self) -> char {
        match self {
            PlatformTag::Windows => ';',
            PlatformTag::Unix => ':',
        }
    }

    /// Variables that name the temporary directory.
    pub fn temp_vars(&self) -> &'static [&'static str] {
        match self {
            PlatformTag::Windows => &["TMP", "TEMP"],
            PlatformTag::Unix => &["TMPDIR"],
        }
    }

    /// Whether variable names `a` and `b` refer to the same variable.
    pub fn names_match(&self, a: &str, b: &str) -> bool {
        match self {
            PlatformTag::Windows => a.eq_ignore_ascii_case(b),
            PlatformTag::Unix => a == b,
        }
    }

    /// Whether building native code needs a separately installed toolchain
    /// by default. Unix hosts ship a system compiler.
    pub fn requires_native_toolchain(&self) -> bool {
        matches!(self, PlatformTag::Windows)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlatformTag::Windows => "windows",
            PlatformTag::Unix => "unix",
        }
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlatformTag {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "win32" => Ok(PlatformTag::Windows),
            "unix" | "linux" | "macos" | "darwin" => Ok(PlatformTag::Unix),
            _ => Err(EnvError::UnknownPlatform { name: s.to_string() }),
        }
    }
}

impl TryFrom<String> for PlatformTag {
    type Error = EnvError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PlatformTag> for String {
    fn from(platform: PlatformTag) -> Self {
        platform.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_conventions() {
        let p = PlatformTag::Windows;
        assert_eq!(p.path_var_name(), "Path");
        assert_eq!(p.path_separator(), ';');
        assert!(p.names_match("PATH", "Path"));
        assert_eq!(p.temp_vars(), &["TMP", "TEMP"]);
        assert!(p.requires_native_toolchain());
    }

    #[test]
    fn unix_conventions() {
        let p = PlatformTag::Unix;
        assert_eq!(p.path_var_name(), "PATH");
        assert_eq!(p.path_separator(), ':');
        assert!(!p.names_match("PATH", "Path"));
        assert!(p.names_match("PATH", "PATH"));
        assert_eq!(p.temp_vars(), &["TMPDIR"]);
        assert!(!p.requires_native_toolchain());
    }

    #[test]
    fn parse_names() {
        assert_eq!("Windows".parse::<PlatformTag>(), Ok(PlatformTag::Windows));
        assert_eq!("linux".parse::<PlatformTag>(), Ok(PlatformTag::Unix));
        assert_eq!(
            "beos".parse::<PlatformTag>(),
            Err(EnvError::UnknownPlatform { name: "beos".to_string() })
        );
        assert_eq!(PlatformTag::Unix.to_string(), "unix");
    }

    #[test]
    fn serde_accepts_same_names_as_parse() {
        for (text, expected) in [
            ("windows", PlatformTag::Windows),
            ("Win32", PlatformTag::Windows),
            ("unix", PlatformTag::Unix),
            ("linux", PlatformTag::Unix),
            ("darwin", PlatformTag::Unix),
        ] {
            let p: PlatformTag = serde_json::from_str(&format!("\"{text}\"")).unwrap();
            assert_eq!(p, expected, "{text}");
        }
        assert!(serde_json::from_str::<PlatformTag>("\"beos\"").is_err());
        assert_eq!(serde_json::to_string(&PlatformTag::Windows).unwrap(), "\"windows\"");
    }
}

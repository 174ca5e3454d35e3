//! Error types for toolchain catalog operations.

use std::path::PathBuf;

/// Errors that can occur while loading toolchain catalogs.
#[derive(Debug, thiserror::Error)]
pub enum ToolchainError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error reading a catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file not found.
    #[error("catalog file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },
}

/// Result type for toolchain operations.
pub type Result<T> = std::result::Result<T, ToolchainError>;

//! Error types for version configuration values.

/// Errors raised while resolving configuration-facing version values.
///
/// Version *numbers* never produce errors; only the stricter tags that
/// arrive through configuration do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// An architecture tag that is neither a 32-bit nor a 64-bit marker.
    #[error("unknown architecture tag '{tag}' (expected 32 or 64)")]
    UnknownArchitecture {
        /// The tag as written.
        tag: String,
    },
}

/// Result type for version operations.
pub type Result<T> = std::result::Result<T, VersionError>;

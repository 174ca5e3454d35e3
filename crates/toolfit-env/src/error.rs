//! Error types for environment configuration values.

/// Errors raised while reading environment settings from configuration.
///
/// The environment operations themselves never fail; only the platform tag
/// that arrives through configuration can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    #[error("unknown platform '{name}' (expected windows or unix)")]
    UnknownPlatform { name: String },
}

/// Result type for environment operations.
pub type Result<T> = std::result::Result<T, EnvError>;

//! Build environment augmentation for toolfit.
//!
//! Given a compatible [`ToolchainRecord`](toolfit_toolchain::ToolchainRecord),
//! computes the environment a spawned build process should receive so that
//! the toolchain's binaries are found first on the search path.
//!
//! Nothing here touches the live process environment. Every operation takes
//! an [`EnvironmentState`] (or a decoded path) and returns a new one together
//! with any warning, leaving the caller to inspect, log, discard or apply it.
//!
//! - [`platform`]: the platform tag that fixes variable names and separators
//! - [`path`]: path-list decoding and encoding
//! - [`state`]: ordered variable mapping
//! - [`probe`]: directory existence checks
//! - [`augment`]: the toolchain-to-path merge
//! - [`build`]: full preparation of a build environment
//! - [`error`]: configuration errors

pub mod augment;
pub mod build;
pub mod error;
pub mod path;
pub mod platform;
pub mod probe;
pub mod state;

pub use augment::{AugmentedEnvironment, AugmentedPath, PathAugmenter};
pub use build::{prepare_build_environment, BuildSettings, PreparedEnvironment};
pub use error::{EnvError, Result};
pub use path::{decode_path, encode_path};
pub use platform::PlatformTag;
pub use probe::{DirectoryProbe, FsProbe, SkipReason};
pub use state::EnvironmentState;

//! Version parsing for runtime and toolchain installations.
//!
//! Version strings come from installer metadata and registry values, so
//! parsing here never fails: text that does not start with `major.minor`
//! yields the empty [`VersionNumber`], which callers must treat as
//! "unknown" rather than as `0.0.0`.
//!
//! - [`VersionNumber`] is the ordered `major.minor.patch` triple.
//! - [`VersionDescriptor`] is the configuration-facing pairing of a version
//!   string (possibly the `"Default"` sentinel) with an [`Architecture`].

pub mod descriptor;
pub mod error;
pub mod number;

pub use descriptor::{Architecture, VersionDescriptor, DEFAULT_VERSION};
pub use error::{Result, VersionError};
pub use number::VersionNumber;

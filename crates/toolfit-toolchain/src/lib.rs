//! Toolchain records and runtime compatibility for toolfit.
//!
//! A toolchain (compiler, linker, supporting utilities) declares the range of
//! runtime versions it can build against. This crate holds that record model,
//! decides whether a runtime falls inside a toolchain's range, picks the best
//! candidate out of several, and loads candidate lists from TOML catalogs
//! written by whatever discovered the installations.

pub mod catalog;
pub mod compat;
pub mod error;
pub mod record;

pub use catalog::{load_catalog_toml, parse_catalog_toml, validate_record, Catalog, ValidationIssue};
pub use compat::{compatible, is_compatible, select_compatible};
pub use error::{Result, ToolchainError};
pub use record::{SupportedRange, ToolchainRecord};

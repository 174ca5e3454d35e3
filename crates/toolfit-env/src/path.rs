//! Search-path codec.
//!
//! The path variable is only ever handled as a flat string here. Everything
//! else in the crate works on the decoded `Vec<String>`.

use crate::platform::PlatformTag;

/// Split a path variable value into its entries.
///
/// An empty value has no entries. Otherwise every segment is kept in order,
/// including empty ones, so that [`encode_path`] restores the value exactly.
pub fn decode_path(value: &str, platform: PlatformTag) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value
        .split(platform.path_separator())
        .map(str::to_string)
        .collect()
}

/// Join entries back into a path variable value.
pub fn encode_path(entries: &[String], platform: PlatformTag) -> String {
    let sep = platform.path_separator().to_string();
    entries.join(sep.as_str())
}

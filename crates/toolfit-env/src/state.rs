//! Ordered environment variable mapping.

use serde::{Deserialize, Serialize};

use crate::path::{decode_path, encode_path};
use crate::platform::PlatformTag;

/// A copy of a process environment, in its original order.
///
/// Name matching follows the [`PlatformTag`] passed to each lookup, so the
/// same state can be inspected with Windows or Unix rules. Setting an
/// existing variable keeps its position and original spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentState {
    vars: Vec<(String, String)>,
}

impl EnvironmentState {
    /// Build a state from `(name, value)` pairs, keeping their order.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are left out.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    fn position(&self, name: &str, platform: PlatformTag) -> Option<usize> {
        self.vars
            .iter()
            .position(|(k, _)| platform.names_match(k, name))
    }

    pub fn get(&self, name: &str, platform: PlatformTag) -> Option<&str> {
        self.position(name, platform)
            .map(|i| self.vars[i].1.as_str())
    }

    /// Set `name`, replacing the first matching variable in place or
    /// appending a new one.
    pub fn set(&mut self, name: &str, value: impl Into<String>, platform: PlatformTag) {
        let value = value.into();
        match self.position(name, platform) {
            Some(i) => self.vars[i].1 = value,
            None => self.vars.push((name.to_string(), value)),
        }
    }

    /// Decoded entries of the search-path variable (empty when unset).
    pub fn path_entries(&self, platform: PlatformTag) -> Vec<String> {
        self.get(platform.path_var_name(), platform)
            .map(|value| decode_path(value, platform))
            .unwrap_or_default()
    }

    /// Encode `entries` into the search-path variable.
    pub fn set_path_entries(&mut self, entries: &[String], platform: PlatformTag) {
        self.set(platform.path_var_name(), encode_path(entries, platform), platform);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Variables in `self` that are new or have a different value than in
    /// `before`.
    pub fn changed_since<'a>(
        &'a self,
        before: &EnvironmentState,
        platform: PlatformTag,
    ) -> Vec<(&'a str, &'a str)> {
        self.iter()
            .filter(|(k, v)| before.get(k, platform) != Some(*v))
            .collect()
    }
}

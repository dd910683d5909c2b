//! Child process environment

use std::ffi::{OsStr, OsString};

/// Variable carrying the Firebase CI token
pub const TOKEN_VAR: &str = "FIREBASE_TOKEN";

/// Variable enabling verbose output in the Firebase CLI
pub const DEBUG_VAR: &str = "DEBUG";

/// An ordered list of environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: Vec<(OsString, OsString)>,
}

impl Environment {
    /// Snapshot of the current process environment
    pub fn capture() -> Self {
        std::env::vars_os().collect()
    }

    /// Environment for a firebase invocation.
    ///
    /// Existing `FIREBASE_TOKEN` and `DEBUG` entries are dropped, the rest keep
    /// their order. `FIREBASE_TOKEN=<token>` is appended, followed by
    /// `DEBUG=true` when `debug` is set.
    pub fn for_firebase(&self, token: &str, debug: bool) -> Self {
        let mut vars: Vec<(OsString, OsString)> = self
            .vars
            .iter()
            .filter(|(key, _)| key != TOKEN_VAR && key != DEBUG_VAR)
            .cloned()
            .collect();

        vars.push((TOKEN_VAR.into(), token.into()));
        if debug {
            vars.push((DEBUG_VAR.into(), "true".into()));
        }

        Self { vars }
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&OsStr> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_os_str())
    }

    /// Number of entries named `key`
    pub fn count(&self, key: &str) -> usize {
        self.vars.iter().filter(|(k, _)| k == key).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Entries rendered as `KEY=VALUE`
    pub fn to_strings(&self) -> Vec<String> {
        self.vars
            .iter()
            .map(|(k, v)| format!("{}={}", k.to_string_lossy(), v.to_string_lossy()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

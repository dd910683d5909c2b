//! Error types for the Firebase plugin
//!
//! Messages do not repeat their source; print with `{:#}` through `anyhow`
//! to get the whole chain on one line.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the Firebase plugin
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("invalid JSON")]
    InvalidJson(#[from] serde_json::Error),

    #[error("'{0}' does not exist in JSON dictionary")]
    MissingField(&'static str),

    #[error("Unable to unmarshal '{key}'")]
    Decode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unable to use workspace path {}", .path.display())]
    Workdir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` {}", exit_description(.code))]
    Execution { command: String, code: Option<i32> },

    #[error("Configuration error: {0}")]
    Config(String),
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

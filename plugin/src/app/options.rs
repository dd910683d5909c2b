//! Application configuration options

use crate::deploy::command::DEFAULT_PROGRAM;
use crate::deploy::env::Environment;
use crate::errors::PluginError;
use crate::logs::LogLevel;

/// Variable overriding the firebase binary
pub const FIREBASE_BIN_VAR: &str = "PLUGIN_FIREBASE_BIN";

/// Variable setting the log level
pub const LOG_LEVEL_VAR: &str = "PLUGIN_LOG_LEVEL";

/// Variable selecting the log format, `text` or `json`
pub const LOG_FORMAT_VAR: &str = "PLUGIN_LOG_FORMAT";

/// Process level settings, read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Firebase CLI binary, resolved through `PATH` when not absolute
    pub firebase_bin: String,

    /// Log level
    pub log_level: LogLevel,

    /// Emit diagnostics as JSON lines
    pub log_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            firebase_bin: DEFAULT_PROGRAM.to_string(),
            log_level: LogLevel::Info,
            log_json: false,
        }
    }
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, PluginError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset or blank values keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PluginError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(bin) = value(FIREBASE_BIN_VAR) {
            settings.firebase_bin = bin.trim().to_string();
        }

        if let Some(level) = value(LOG_LEVEL_VAR) {
            settings.log_level = level
                .parse()
                .map_err(|e| PluginError::Config(format!("{}: {}", LOG_LEVEL_VAR, e)))?;
        }

        if let Some(format) = value(LOG_FORMAT_VAR) {
            settings.log_json = match format.trim().to_lowercase().as_str() {
                "json" => true,
                "text" => false,
                other => {
                    return Err(PluginError::Config(format!(
                        "{}: unknown format {}",
                        LOG_FORMAT_VAR, other
                    )))
                }
            };
        }

        Ok(settings)
    }
}

/// Options for a deployment run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Firebase CLI binary
    pub program: String,

    /// Environment the child environments are derived from
    pub base_env: Environment,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            base_env: Environment::default(),
        }
    }
}

impl RunOptions {
    /// Options for `settings` over the current process environment
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            program: settings.firebase_bin.clone(),
            base_env: Environment::capture(),
        }
    }
}

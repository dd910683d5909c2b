//! Logging configuration
//!
//! Diagnostics go to standard error. Standard output is reserved for the
//! status and trace lines the pipeline shows to users.

use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

use crate::errors::PluginError;

/// Log level configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_level(&self) -> Level {
        match self {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }

    pub fn to_filter_string(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// The more verbose of the two levels
    pub fn max_verbosity(self, other: LogLevel) -> LogLevel {
        if other.to_level() > self.to_level() {
            other
        } else {
            self
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Logging options
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Log level, used when `RUST_LOG` is not set
    pub log_level: LogLevel,

    /// Enable JSON format
    pub json_format: bool,
}

/// Handle on the installed subscriber's level
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    level: LogLevel,
    pinned: bool,
}

impl LogHandle {
    /// Make logging at least as verbose as `level`. No-op when `RUST_LOG` is set.
    pub fn raise_to(&mut self, level: LogLevel) -> Result<(), PluginError> {
        let level = self.level.max_verbosity(level);
        if self.pinned || level == self.level {
            return Ok(());
        }

        self.filter
            .reload(EnvFilter::new(level.to_filter_string()))
            .map_err(|e| PluginError::Config(e.to_string()))?;
        self.level = level;
        Ok(())
    }
}

/// Initialize logging
pub fn init_logging(options: LogOptions) -> Result<LogHandle, PluginError> {
    let (filter, pinned) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(options.log_level.to_filter_string()), false),
    };
    let (filter, handle) = reload::Layer::new(filter);

    let subscriber = tracing_subscriber::registry().with(filter);
    let ansi = std::io::stderr().is_terminal();

    if options.json_format {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| PluginError::Config(e.to_string()))?;
    } else {
        subscriber
            .with(fmt::layer().with_ansi(ansi).with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| PluginError::Config(e.to_string()))?;
    }

    Ok(LogHandle {
        filter: handle,
        level: options.log_level,
        pinned,
    })
}

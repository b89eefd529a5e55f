//! Logger configuration, deserialized from the application config file.

use serde::Deserialize;

/// Log config settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Logging to a console.
    pub console: LogConsole,
    /// Logging to a file.
    pub file: LogFile,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            console: LogConsole::default(),
            file: LogFile::default(),
        }
    }
}

/// Logging to a console.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConsole {
    /// Whether the console logging is enabled.
    pub enabled: bool,
    /// Minimum level of the watched crates to print.
    pub level: LogLevel,
    /// Console log output format.
    pub log_format: LogFormat,
}

impl Default for LogConsole {
    fn default() -> Self {
        Self {
            enabled: true,
            level: LogLevel::Info,
            log_format: LogFormat::Default,
        }
    }
}

/// Logging to a file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogFile {
    /// Whether the file logging is enabled.
    pub enabled: bool,
    /// Minimum level of the watched crates to write.
    pub level: LogLevel,
    /// Directory for log files, relative to the workspace root.
    pub path: String,
    /// Name of the hourly-rolled log file.
    pub file_name: String,
}

impl Default for LogFile {
    fn default() -> Self {
        Self {
            enabled: false,
            level: LogLevel::Info,
            path: "logs".to_string(),
            file_name: "connector.log".to_string(),
        }
    }
}

/// Verbosity of a logging layer.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,
    /// Designates lower priority information.
    Debug,
    /// Designates useful information.
    Info,
    /// Designates hazardous situations.
    Warn,
    /// Designates very serious errors.
    Error,
    /// Logging is disabled.
    Off,
}

impl LogLevel {
    pub(super) fn into_level(self) -> Option<tracing::Level> {
        match self {
            Self::Trace => Some(tracing::Level::TRACE),
            Self::Debug => Some(tracing::Level::DEBUG),
            Self::Info => Some(tracing::Level::INFO),
            Self::Warn => Some(tracing::Level::WARN),
            Self::Error => Some(tracing::Level::ERROR),
            Self::Off => None,
        }
    }
}

/// Console log output format.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable compact format.
    Default,
    /// One JSON object per line.
    Json,
}

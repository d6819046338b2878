use serde::Serialize;
use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLevelParseError(pub String);

impl fmt::Display for LogLevelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: {}", self.0)
    }
}

impl FromStr for LogLevel {
    type Err = LogLevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(LogLevelParseError(s.to_string())),
        }
    }
}

thread_local! {
    static MIN_LEVEL: Cell<LogLevel> = const { Cell::new(LogLevel::Info) };
}

/// Component-tagged logging to the browser console
pub struct Logger;

impl Logger {
    /// Set the minimum level; called once at startup
    pub fn init(level: LogLevel) {
        MIN_LEVEL.with(|min| min.set(level));
    }

    pub fn enabled(level: LogLevel) -> bool {
        MIN_LEVEL.with(|min| level >= min.get())
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Debug, message, component);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, message, component);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, message, component);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Error, message, component);
    }

    /// Log `message` followed by the JSON form of `payload`.
    /// A payload that fails to serialize is reported as an error instead.
    pub fn info_with_payload<T: Serialize>(component: &str, message: &str, payload: &T) {
        match payload_line(message, payload) {
            Ok(line) => Self::info_with_component(component, &line),
            Err(line) => Self::error_with_component(component, &line),
        }
    }

    fn log(level: LogLevel, message: &str, component: &str) {
        if !Self::enabled(level) {
            return;
        }

        let line = format_line(level, component, message);
        match level {
            LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }
    }
}

fn payload_line<T: Serialize>(message: &str, payload: &T) -> Result<String, String> {
    serde_json::to_string(payload)
        .map(|json| format!("{} {}", message, json))
        .map_err(|e| format!("{} (payload not serializable: {})", message, e))
}

fn format_line(level: LogLevel, component: &str, message: &str) -> String {
    format!("[{}] [{}] {}", level.as_str(), component, message)
}

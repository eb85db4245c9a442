use derive_more::Display;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Log levels with automatic Display implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[display(fmt = "TRACE")]
    Trace = 0,
    #[display(fmt = "DEBUG")]
    Debug = 1,
    #[display(fmt = " INFO")]
    Info = 2,
    #[display(fmt = " WARN")]
    Warn = 3,
    #[display(fmt = "ERROR")]
    Error = 4,
}

/// Log components with automatic Display implementation
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

/// Structured log entry
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    pub metadata: Option<String>,
}

/// Domain abstraction for time service
pub trait TimeProvider: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

/// Domain abstraction for structured logging
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    fn trace(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Trace, component, message));
    }

    fn debug(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Debug, component, message));
    }

    fn info(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Info, component, message));
    }

    fn warn(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Warn, component, message));
    }

    fn error(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Error, component, message));
    }

    /// Log with structured metadata
    fn log_with_metadata(&self, level: LogLevel, component: LogComponent, message: &str, metadata: &str) {
        self.log(LogEntry::new_with_metadata(level, component, message, metadata));
    }
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: &str) -> Self {
        Self {
            timestamp: get_time_provider().current_timestamp(),
            level,
            component,
            message: message.to_string(),
            metadata: None,
        }
    }

    pub fn new_with_metadata(level: LogLevel, component: LogComponent, message: &str, metadata: &str) -> Self {
        Self {
            timestamp: get_time_provider().current_timestamp(),
            level,
            component,
            message: message.to_string(),
            metadata: Some(metadata.to_string()),
        }
    }
}

// Slots are swappable so `shutdown()` can uninstall what `initialize()` installed.
static GLOBAL_LOGGER: Lazy<RwLock<Option<Arc<dyn Logger>>>> = Lazy::new(|| RwLock::new(None));
static GLOBAL_TIME_PROVIDER: Lazy<RwLock<Option<Arc<dyn TimeProvider>>>> =
    Lazy::new(|| RwLock::new(None));

static NOOP_LOGGER: Lazy<Arc<dyn Logger>> = Lazy::new(|| Arc::new(NoOpLogger));
static BASIC_TIME_PROVIDER: Lazy<Arc<dyn TimeProvider>> = Lazy::new(|| Arc::new(BasicTimeProvider));

/// Install the global logger, replacing any previous one.
pub fn init_logger(logger: Arc<dyn Logger>) {
    if let Ok(mut slot) = GLOBAL_LOGGER.write() {
        *slot = Some(logger);
    }
}

/// Install the global time provider, replacing any previous one.
pub fn init_time_provider(time_provider: Arc<dyn TimeProvider>) {
    if let Ok(mut slot) = GLOBAL_TIME_PROVIDER.write() {
        *slot = Some(time_provider);
    }
}

/// Remove the global logger; subsequent calls fall back to the no-op logger.
pub fn reset_logger() {
    if let Ok(mut slot) = GLOBAL_LOGGER.write() {
        *slot = None;
    }
}

/// Remove the global time provider.
pub fn reset_time_provider() {
    if let Ok(mut slot) = GLOBAL_TIME_PROVIDER.write() {
        *slot = None;
    }
}

/// Get global logger reference
pub fn get_logger() -> Arc<dyn Logger> {
    GLOBAL_LOGGER
        .read()
        .ok()
        .and_then(|slot| slot.clone())
        .unwrap_or_else(|| Arc::clone(&NOOP_LOGGER))
}

/// Get global time provider reference
pub fn get_time_provider() -> Arc<dyn TimeProvider> {
    GLOBAL_TIME_PROVIDER
        .read()
        .ok()
        .and_then(|slot| slot.clone())
        .unwrap_or_else(|| Arc::clone(&BASIC_TIME_PROVIDER))
}

/// No-op logger fallback
struct NoOpLogger;
impl Logger for NoOpLogger {
    fn log(&self, _entry: LogEntry) {}
}

/// Basic time provider fallback
struct BasicTimeProvider;
impl TimeProvider for BasicTimeProvider {
    fn current_timestamp(&self) -> u64 {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        COUNTER.fetch_add(1, Ordering::SeqCst)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("{:06}", timestamp)
    }
}

/// Simplified logging macros
#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::get_logger().trace($component, &format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::get_logger().debug($component, &format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().info($component, &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().warn($component, &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().error($component, &format!($($arg)*));
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_ordering_follows_severity() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!(LogLevel::Info.to_string(), " INFO");
    }

    #[test]
    fn component_display_tags_layer() {
        assert_eq!(LogComponent::Domain("Range").to_string(), "DOM:Range");
        assert_eq!(LogComponent::Infrastructure("ChartJs").to_string(), "INF:ChartJs");
    }

    #[test]
    fn entry_with_metadata_keeps_payload() {
        let entry = LogEntry::new_with_metadata(
            LogLevel::Warn,
            LogComponent::Application("Load"),
            "fallback",
            "range=7Y",
        );
        assert_eq!(entry.metadata.as_deref(), Some("range=7Y"));
        assert_eq!(entry.level, LogLevel::Warn);
    }
}

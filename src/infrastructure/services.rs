//! Runtime implementations of the domain logging abstractions.

use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};
use chrono::{DateTime, Utc};
use std::sync::Mutex;

/// Wall-clock time provider backed by `chrono::Utc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeProvider;

impl SystemTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for SystemTimeProvider {
    fn current_timestamp(&self) -> u64 {
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format_clock(timestamp)
    }
}

fn format_clock(timestamp: u64) -> String {
    i64::try_from(timestamp)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|date| date.format("%H:%M:%S%.3f").to_string())
        .unwrap_or_else(|| format!("{:06}", timestamp))
}

/// Logger writing formatted lines to stderr
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn format_log_entry(entry: &LogEntry) -> String {
        let timestamp = format_clock(entry.timestamp);
        match &entry.metadata {
            Some(metadata) => format!(
                "[{}] {} {} | {} | {}",
                timestamp, entry.level, entry.component, entry.message, metadata
            ),
            None => format!("[{}] {} {} | {}", timestamp, entry.level, entry.component, entry.message),
        }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level >= self.min_level {
            eprintln!("{}", Self::format_log_entry(&entry));
        }
    }
}

/// Logger that keeps entries in memory, for inspection in tests.
#[derive(Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().map(|entries| entries.clone()).unwrap_or_default()
    }

    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|e| e.level == level)
            .map(|e| e.message)
            .collect()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, entry: LogEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logging::LogComponent;

    #[test]
    fn formats_entry_with_utc_clock() {
        let entry = LogEntry {
            timestamp: 3_723_004,
            level: LogLevel::Warn,
            component: LogComponent::Application("Load"),
            message: "no data".to_string(),
            metadata: Some("symbol=AAPL".to_string()),
        };
        assert_eq!(
            ConsoleLogger::format_log_entry(&entry),
            "[01:02:03.004]  WARN APP:Load | no data | symbol=AAPL"
        );
    }

    #[test]
    fn memory_logger_filters_by_level() {
        let logger = MemoryLogger::new();
        logger.info(LogComponent::Domain("Test"), "kept");
        logger.warn(LogComponent::Domain("Test"), "other");
        assert_eq!(logger.messages_at(LogLevel::Info), vec!["kept".to_string()]);
        assert_eq!(logger.entries().len(), 2);
    }

    #[test]
    fn metadata_travels_with_entry() {
        let logger = MemoryLogger::new();
        logger.log_with_metadata(LogLevel::Warn, LogComponent::Application("Load"), "discarded", "symbol=IBM");
        let entries = logger.entries();
        assert_eq!(entries[0].level, LogLevel::Warn);
        assert_eq!(entries[0].metadata.as_deref(), Some("symbol=IBM"));
    }
}

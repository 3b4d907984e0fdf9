//! Log event structure

use super::context::LogContext;
use super::log_level::LogLevel;
use super::message::LogMessage;
use std::borrow::Cow;
use std::fmt;

/// A stable identity distinguishing one logical log statement from
/// another, independent of how many times it executes. Used as the
/// repeat-throttling key and rendered in the metadata tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventId(Cow<'static, str>);

impl EventId {
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        EventId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for EventId {
    fn from(id: &'static str) -> Self {
        EventId(Cow::Borrowed(id))
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        EventId(Cow::Owned(id))
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One log event, created at the call site and consumed immediately by
/// the active logger. Never persisted.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub level: LogLevel,
    pub message: LogMessage,
    pub module: String,
    pub file: String,
    pub line: u32,
    pub id: EventId,
    /// Progress fraction in [0, 1]; selects in-place bar rendering.
    pub progress: Option<f64>,
    /// Render with a leading horizontal rule for visual emphasis.
    pub banner: bool,
    pub context: LogContext,
}

impl LogEvent {
    pub fn new(level: LogLevel, id: impl Into<EventId>, message: impl Into<LogMessage>) -> Self {
        Self {
            level,
            message: message.into(),
            module: String::new(),
            file: String::new(),
            line: 0,
            id: id.into(),
            progress: None,
            banner: false,
            context: LogContext::new(),
        }
    }

    #[must_use]
    pub fn with_location(mut self, file: &str, line: u32, module: &str) -> Self {
        self.file = file.to_string();
        self.line = line;
        self.module = module.to_string();
        self
    }

    #[must_use]
    pub fn with_progress(mut self, fraction: f64) -> Self {
        self.progress = Some(fraction);
        self
    }

    #[must_use]
    pub fn with_banner(mut self) -> Self {
        self.banner = true;
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: LogContext) -> Self {
        self.context = context;
        self
    }

    /// Add a single context field
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<super::context::FieldValue>,
    {
        self.context.add_field(key, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_fills_fields() {
        let event = LogEvent::new(LogLevel::WARN, "e7", "low disk space")
            .with_location("src/storage.rs", 42, "app::storage")
            .with_field("free_mb", 12)
            .with_banner();

        assert_eq!(event.level, LogLevel::WARN);
        assert_eq!(event.module, "app::storage");
        assert_eq!(event.line, 42);
        assert_eq!(event.id.as_str(), "e7");
        assert!(event.banner);
        assert!(event.progress.is_none());
        assert_eq!(event.context.len(), 1);
    }

    #[test]
    fn test_event_id_equality_and_display() {
        let a = EventId::from("mod:file.rs:10");
        let b = EventId::from("mod:file.rs:10".to_string());
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "mod:file.rs:10");
    }
}

//! Null logger implementation

use crate::core::error::Result;
use crate::core::event::{EventId, LogEvent};
use crate::core::log_level::LogLevel;
use crate::core::logger::{LogOptions, Logger};

/// A logger that accepts nothing. Install it (globally or via a scoped
/// override) to silence a dynamic extent entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn should_log(
        &mut self,
        _level: LogLevel,
        _module: &str,
        _file: &str,
        _line: u32,
        _id: &EventId,
        _max_repeats: Option<u64>,
        _progress: Option<f64>,
    ) -> bool {
        false
    }

    fn min_enabled_level(&self) -> LogLevel {
        LogLevel::ABOVE_MAX
    }

    fn handle_message(&mut self, _event: LogEvent) -> Result<()> {
        Ok(())
    }

    fn configure(&mut self, _module: Option<&str>, _options: LogOptions) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_everything() {
        let mut logger = NullLogger;
        let id = EventId::from("e1");
        assert!(!logger.should_log(LogLevel::ERROR, "app", "a.rs", 1, &id, None, None));
        assert_eq!(logger.min_enabled_level(), LogLevel::ABOVE_MAX);
    }
}

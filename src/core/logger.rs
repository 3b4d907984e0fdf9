//! The logger capability contract
//!
//! Every logger implementation supports the same four entry points,
//! used polymorphically by the emission call sites: an accept/reject
//! decision, a minimum-enabled-level query, the final rendering call,
//! and threshold configuration. Implementations are peers of this
//! trait, not subclasses sharing state.

use super::error::Result;
use super::event::{EventId, LogEvent};
use super::log_level::LogLevel;

/// Threshold options passed to [`Logger::configure`].
///
/// Carries at minimum the floor level; absent fields leave the current
/// setting untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions {
    pub min_level: Option<LogLevel>,
}

impl LogOptions {
    pub fn min_level(level: LogLevel) -> Self {
        Self {
            min_level: Some(level),
        }
    }
}

/// The dispatch/filtering contract shared by all logger implementations.
///
/// Call sites drive it in a fixed order: consult
/// [`min_enabled_level`](Logger::min_enabled_level) before constructing
/// a message at all, then [`should_log`](Logger::should_log), and only
/// on acceptance materialize the message and call
/// [`handle_message`](Logger::handle_message). Expensive message
/// formatting must never run for suppressed events.
pub trait Logger: Send {
    /// Decide whether an event logs. Observable side effects are
    /// limited to updating repeat-throttling counters; no I/O happens
    /// here.
    #[allow(clippy::too_many_arguments)]
    fn should_log(
        &mut self,
        level: LogLevel,
        module: &str,
        file: &str,
        line: u32,
        id: &EventId,
        max_repeats: Option<u64>,
        progress: Option<f64>,
    ) -> bool;

    /// The lowest level for which [`should_log`](Logger::should_log)
    /// can possibly return true.
    fn min_enabled_level(&self) -> LogLevel;

    /// Render the event. Only invoked after
    /// [`should_log`](Logger::should_log) returned true. A failing
    /// output stream propagates as [`LoggerError::Render`]; it is never
    /// silently swallowed.
    ///
    /// [`LoggerError::Render`]: super::error::LoggerError::Render
    fn handle_message(&mut self, event: LogEvent) -> Result<()>;

    /// Mutate thresholds. `module = None` performs a global reset:
    /// every module override is cleared, then `min_level` (if present)
    /// becomes the default floor. `Some(module)` sets only that
    /// module's override, leaving the rest untouched.
    fn configure(&mut self, module: Option<&str>, options: LogOptions);
}

//! Process-wide active-logger registry
//!
//! At any call site exactly one logger is "current": the innermost
//! scoped override on this thread if one is active, otherwise the
//! global logger, lazily initialized to a terminal logger on stderr at
//! first use. Loggers are handed out behind a mutex because the logger
//! types themselves define no internal locking; the registry is the
//! external mutual exclusion their state requires.
//!
//! Swapping the global logger is serialized by the registry lock; calls
//! already in flight keep the instance they resolved.

use super::logger::Logger;
use crate::loggers::TerminalLogger;
use parking_lot::{Mutex, RwLock};
use std::cell::RefCell;
use std::sync::Arc;

/// A logger handle as handed out by the registry.
pub type SharedLogger = Arc<Mutex<dyn Logger>>;

static GLOBAL_LOGGER: RwLock<Option<SharedLogger>> = RwLock::new(None);

thread_local! {
    static SCOPED_LOGGERS: RefCell<Vec<SharedLogger>> = const { RefCell::new(Vec::new()) };
}

/// Wrap a logger value into a registry-compatible shared handle.
pub fn shared(logger: impl Logger + 'static) -> SharedLogger {
    Arc::new(Mutex::new(logger))
}

/// The logger current at this call site.
pub fn current_logger() -> SharedLogger {
    if let Some(scoped) = SCOPED_LOGGERS.with(|stack| stack.borrow().last().cloned()) {
        return scoped;
    }
    if let Some(global) = GLOBAL_LOGGER.read().clone() {
        return global;
    }
    let mut slot = GLOBAL_LOGGER.write();
    slot.get_or_insert_with(|| shared(TerminalLogger::on_stderr()))
        .clone()
}

/// Replace the global logger. Scoped overrides on any thread still win
/// for their dynamic extent.
pub fn set_global_logger(logger: SharedLogger) {
    *GLOBAL_LOGGER.write() = Some(logger);
}

struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        SCOPED_LOGGERS.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// Run `f` with `logger` as the current logger on this thread.
/// Restoration is guaranteed on exit, including unwinds.
///
/// # Example
///
/// ```
/// use term_logger::loggers::NullLogger;
/// use term_logger::{with_logger, shared, current_logger, LogLevel};
///
/// with_logger(shared(NullLogger), || {
///     assert_eq!(current_logger().lock().min_enabled_level(), LogLevel::ABOVE_MAX);
/// });
/// ```
pub fn with_logger<R>(logger: SharedLogger, f: impl FnOnce() -> R) -> R {
    SCOPED_LOGGERS.with(|stack| stack.borrow_mut().push(logger));
    let _guard = ScopeGuard;
    f()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_level::LogLevel;
    use crate::loggers::NullLogger;

    #[test]
    fn test_scoped_override_nests_and_restores() {
        let outer = shared(NullLogger);
        let inner = shared(TerminalLogger::new(Vec::new(), 40, false));

        with_logger(outer.clone(), || {
            assert!(Arc::ptr_eq(&current_logger(), &outer));
            with_logger(inner.clone(), || {
                assert!(Arc::ptr_eq(&current_logger(), &inner));
            });
            assert!(Arc::ptr_eq(&current_logger(), &outer));
        });
    }

    #[test]
    fn test_scoped_override_restores_on_panic() {
        let outer = shared(NullLogger);
        with_logger(outer.clone(), || {
            let result = std::panic::catch_unwind(|| {
                with_logger(shared(NullLogger), || panic!("boom"));
            });
            assert!(result.is_err());
            assert!(Arc::ptr_eq(&current_logger(), &outer));
        });
    }

    #[test]
    fn test_scoped_override_resolves_without_global() {
        // Runs entirely under a scoped override; the global slot is
        // never consulted or initialized from here.
        let scoped = shared(NullLogger);
        with_logger(scoped.clone(), || {
            assert_eq!(
                current_logger().lock().min_enabled_level(),
                LogLevel::ABOVE_MAX
            );
        });
    }
}

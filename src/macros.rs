//! Logging macros for ergonomic log emission.
//!
//! These macros drive the registry's current logger through the full
//! call-site protocol: the minimum-enabled-level check happens before
//! the message is formatted at all, so suppressed events never pay
//! formatting cost; the event identity is derived from the call site
//! (`module:file:line`); and `should_log` gates `handle_message` under
//! one lock acquisition. Each macro evaluates to
//! [`Result<()>`](crate::core::error::Result) so render failures
//! surface at the call site.
//!
//! # Examples
//!
//! ```
//! let port = 8080;
//! let _ = term_logger::info!("listening on port {}", port);
//!
//! // Throttled: at most two emissions for this call site.
//! for _ in 0..5 {
//!     let _ = term_logger::warn!(max_repeats = 2, "connection pool exhausted");
//! }
//! ```

/// Log a message at an explicit level, with automatic formatting.
///
/// An optional leading `max_repeats = n` caps how many times this call
/// site emits.
///
/// # Examples
///
/// ```
/// use term_logger::LogLevel;
/// let _ = term_logger::log_event!(LogLevel::INFO, "cache warmed");
/// let _ = term_logger::log_event!(LogLevel::ERROR, "request failed: {}", 500);
/// ```
#[macro_export]
macro_rules! log_event {
    ($level:expr, max_repeats = $cap:expr, $($arg:tt)+) => {
        $crate::__emit!($level, Some($cap), None, $($arg)+)
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::__emit!($level, None, None, $($arg)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    ($level:expr, $cap:expr, $progress:expr, $($arg:tt)+) => {{
        let level = $level;
        let logger = $crate::current_logger();
        let mut logger = logger.lock();
        let mut outcome: $crate::Result<()> = Ok(());
        if level >= logger.min_enabled_level() {
            let id = $crate::EventId::new(concat!(module_path!(), ":", file!(), ":", line!()));
            let progress: Option<f64> = $progress;
            if logger.should_log(level, module_path!(), file!(), line!(), &id, $cap, progress) {
                let mut event =
                    $crate::LogEvent::new(level, id, $crate::LogMessage::text(format!($($arg)+)))
                        .with_location(file!(), line!(), module_path!());
                if let Some(fraction) = progress {
                    event = event.with_progress(fraction);
                }
                outcome = logger.handle_message(event);
            }
        }
        outcome
    }};
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// let _ = term_logger::debug!("cache state: {} entries", 12);
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log_event!($crate::LogLevel::DEBUG, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// let _ = term_logger::info!("processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log_event!($crate::LogLevel::INFO, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// let _ = term_logger::warn!("retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::log_event!($crate::LogLevel::WARN, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// let _ = term_logger::error!("failed to connect: {}", "timeout");
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log_event!($crate::LogLevel::ERROR, $($arg)+)
    };
}

/// Emit an info-level progress event with a fraction in [0, 1].
///
/// Consecutive calls with the same message text update one in-place bar
/// on an interactive terminal.
///
/// # Examples
///
/// ```
/// for step in 0..=10 {
///     let _ = term_logger::progress!(step as f64 / 10.0, "downloading");
/// }
/// ```
#[macro_export]
macro_rules! progress {
    ($fraction:expr, $($arg:tt)+) => {
        $crate::__emit!($crate::LogLevel::INFO, None, Some(($fraction) as f64), $($arg)+)
    };
}

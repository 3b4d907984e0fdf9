//! # term_logger
//!
//! A terminal-aware, pluggable logging front-end: call sites emit
//! leveled events carrying a message, source location, and a stable
//! event identity; the active logger decides whether to accept each
//! event and how to render it.
//!
//! ## Features
//!
//! - **Pluggable**: one capability contract
//!   (`should_log` / `min_enabled_level` / `handle_message` /
//!   `configure`), used polymorphically by every call site
//! - **Cheap when disabled**: messages are never formatted for
//!   suppressed events
//! - **Terminal-aware**: right-aligned colored metadata, banner rules,
//!   and in-place progress bars on interactive terminals; deterministic
//!   single-line output everywhere else
//! - **Per-module control**: module level overrides and per-event
//!   repeat throttling
//!
//! ## Example
//!
//! ```
//! use term_logger::{shared, with_logger, LogLevel, LogOptions, Logger, TerminalLogger};
//!
//! let logger = shared(TerminalLogger::new(Vec::new(), 80, false));
//! logger.lock().configure(None, LogOptions::min_level(LogLevel::DEBUG));
//! with_logger(logger, || {
//!     let _ = term_logger::debug!("visible at the new floor");
//! });
//! ```

pub mod core;
pub mod loggers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        current_logger, set_global_logger, shared, with_logger, CapturedError, EventId,
        FieldValue, LogContext, LogEvent, LogLevel, LogMessage, LogOptions, Logger, LoggerError,
        Result, SharedLogger, StyledText,
    };
    pub use crate::loggers::{NullLogger, TerminalLogger};
}

pub use crate::core::{
    current_logger, set_global_logger, shared, with_logger, CapturedError, EventId, FieldValue,
    LogContext, LogEvent, LogLevel, LogMessage, LogOptions, Logger, LoggerError, Result,
    SharedLogger, StyledText,
};
pub use crate::loggers::{NullLogger, TerminalLogger};

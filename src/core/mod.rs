//! Core types and traits

pub mod context;
pub mod error;
pub mod event;
pub mod layout;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod registry;

pub use context::{FieldValue, LogContext};
pub use error::{LoggerError, Result};
pub use event::{EventId, LogEvent};
pub use log_level::LogLevel;
pub use logger::{LogOptions, Logger};
pub use message::{CapturedError, LogMessage, StyledText};
pub use registry::{current_logger, set_global_logger, shared, with_logger, SharedLogger};

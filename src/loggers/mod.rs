//! Logger implementations
//!
//! Peers of the [`Logger`](crate::core::logger::Logger) contract:
//! - `TerminalLogger`: the terminal-aware reference implementation
//! - `NullLogger`: accepts nothing

pub mod null;
pub mod terminal;

pub use null::NullLogger;
pub use terminal::TerminalLogger;

//! Log level definitions
//!
//! Levels are integer-backed rather than a fixed enum so callers can
//! define custom thresholds between the named anchors (for example a
//! level halfway between `INFO` and `WARN`). Ordering is total and is
//! the only property the rest of the crate relies on.

use super::error::LoggerError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An ordered log severity value.
///
/// The named anchors satisfy
/// `BELOW_MIN < DEBUG < INFO < WARN < ERROR < ABOVE_MAX`; any integer in
/// between is a valid, comparable level.
///
/// # Examples
///
/// ```
/// use term_logger::LogLevel;
///
/// assert!(LogLevel::DEBUG < LogLevel::INFO);
/// assert!(LogLevel(500) > LogLevel::INFO);
/// assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::WARN);
/// assert!("15".parse::<LogLevel>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogLevel(pub i32);

impl LogLevel {
    /// Below every enabled level; nothing logs at or under this.
    pub const BELOW_MIN: LogLevel = LogLevel(-1_000_001);
    pub const DEBUG: LogLevel = LogLevel(-1_000);
    pub const INFO: LogLevel = LogLevel(0);
    pub const WARN: LogLevel = LogLevel(1_000);
    pub const ERROR: LogLevel = LogLevel(2_000);
    /// Above every enabled level; a floor of this disables all logging.
    pub const ABOVE_MAX: LogLevel = LogLevel(1_000_001);

    /// The anchor name, if this value is one of the named anchors.
    pub fn name(&self) -> Option<&'static str> {
        match *self {
            LogLevel::BELOW_MIN => Some("BelowMinLevel"),
            LogLevel::DEBUG => Some("Debug"),
            LogLevel::INFO => Some("Info"),
            LogLevel::WARN => Some("Warn"),
            LogLevel::ERROR => Some("Error"),
            LogLevel::ABOVE_MAX => Some("AboveMaxLevel"),
            _ => None,
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        if *self >= LogLevel::ERROR {
            Red
        } else if *self >= LogLevel::WARN {
            Yellow
        } else if *self >= LogLevel::INFO {
            Cyan
        } else {
            BrightBlack
        }
    }

    /// Whether metadata tags at this level render in bold weight.
    pub fn is_bold(&self) -> bool {
        *self >= LogLevel::WARN
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::INFO
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "LogLevel({})", self.0),
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    /// Parse a level from one of the names `Debug`, `Info`, `Warn`,
    /// `Error` (case-insensitive). Numeric text is rejected; canonical
    /// values pass through by construction (`LogLevel(n)`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::DEBUG),
            "info" => Ok(LogLevel::INFO),
            "warn" => Ok(LogLevel::WARN),
            "error" => Ok(LogLevel::ERROR),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_i32(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LevelVisitor;

        impl Visitor<'_> for LevelVisitor {
            type Value = LogLevel;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a level name (Debug, Info, Warn, Error) or an integer level value")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<LogLevel, E> {
                value.parse().map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<LogLevel, E> {
                i32::try_from(value)
                    .map(LogLevel)
                    .map_err(|_| E::custom(format!("level value {} out of range", value)))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<LogLevel, E> {
                i32::try_from(value)
                    .map(LogLevel)
                    .map_err(|_| E::custom(format!("level value {} out of range", value)))
            }
        }

        deserializer.deserialize_any(LevelVisitor)
    }
}

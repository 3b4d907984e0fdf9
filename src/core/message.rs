//! Log message payloads
//!
//! A message is one of a closed set of kinds, each with its own
//! rendering rule: plain text, an ordered sequence of sub-messages, a
//! styled span document, or a captured error value. Every kind renders
//! to a single text blob before layout; rendering never fails.

use colored::{Color, Colorize};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;

#[derive(Debug, Clone)]
pub enum LogMessage {
    /// Plain text, passed through verbatim.
    Text(String),
    /// Ordered sub-messages; rendering appends a newline after every
    /// part, including the last.
    Multi(Vec<LogMessage>),
    /// A styled span document, rendered with ANSI styling only in
    /// interactive mode.
    Styled(StyledText),
    /// A captured application error, rendered as human-readable text.
    Error(CapturedError),
}

impl LogMessage {
    pub fn text(text: impl Into<String>) -> Self {
        LogMessage::Text(text.into())
    }

    pub fn multi(parts: Vec<LogMessage>) -> Self {
        LogMessage::Multi(parts)
    }

    /// Capture `err` (description, source chain, and a backtrace when
    /// one is available here) for later rendering.
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        LogMessage::Error(CapturedError::capture(err))
    }

    /// Render to a single text blob. `interactive` selects ANSI styling
    /// for styled documents; the other kinds render identically in both
    /// modes.
    pub fn render(&self, interactive: bool) -> String {
        match self {
            LogMessage::Text(text) => text.clone(),
            LogMessage::Multi(parts) => {
                let mut blob = String::new();
                for part in parts {
                    blob.push_str(&part.render(interactive));
                    blob.push('\n');
                }
                blob
            }
            LogMessage::Styled(doc) => {
                if interactive {
                    strip_single_trailing_newline(doc.render_styled())
                } else {
                    doc.render_plain()
                }
            }
            LogMessage::Error(err) => err.describe(),
        }
    }
}

impl From<String> for LogMessage {
    fn from(text: String) -> Self {
        LogMessage::Text(text)
    }
}

impl From<&str> for LogMessage {
    fn from(text: &str) -> Self {
        LogMessage::Text(text.to_string())
    }
}

/// Remove one trailing newline, looking through a trailing color-reset
/// escape so styling is not visually truncated.
fn strip_single_trailing_newline(mut blob: String) -> String {
    const RESET: &str = "\x1b[0m";
    if blob.ends_with(RESET) {
        let reset_start = blob.len() - RESET.len();
        if blob[..reset_start].ends_with('\n') {
            blob.remove(reset_start - 1);
        }
        return blob;
    }
    if blob.ends_with('\n') {
        blob.pop();
    }
    blob
}

/// A sequence of text spans with per-span color and weight.
///
/// # Example
///
/// ```
/// use colored::Color;
/// use term_logger::StyledText;
///
/// let doc = StyledText::new()
///     .plain("fetching ")
///     .colored("registry", Color::Cyan)
///     .plain(" metadata");
/// assert!(!doc.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyledText {
    spans: Vec<Span>,
}

#[derive(Debug, Clone)]
struct Span {
    text: String,
    color: Option<Color>,
    bold: bool,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn plain(mut self, text: impl Into<String>) -> Self {
        self.spans.push(Span {
            text: text.into(),
            color: None,
            bold: false,
        });
        self
    }

    #[must_use]
    pub fn colored(mut self, text: impl Into<String>, color: Color) -> Self {
        self.spans.push(Span {
            text: text.into(),
            color: Some(color),
            bold: false,
        });
        self
    }

    /// A bold, colored span.
    #[must_use]
    pub fn strong(mut self, text: impl Into<String>, color: Color) -> Self {
        self.spans.push(Span {
            text: text.into(),
            color: Some(color),
            bold: true,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    fn render_styled(&self) -> String {
        let mut blob = String::new();
        for span in &self.spans {
            match span.color {
                Some(color) => {
                    let painted = span.text.color(color);
                    let painted = if span.bold { painted.bold() } else { painted };
                    blob.push_str(&painted.to_string());
                }
                None if span.bold => blob.push_str(&span.text.bold().to_string()),
                None => blob.push_str(&span.text),
            }
        }
        blob
    }

    fn render_plain(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// An application error captured at the log call site.
///
/// Rendering an error-as-message must never fail: whatever was captured
/// is formatted best-effort, and a missing backtrace simply leaves the
/// description and cause chain.
#[derive(Debug, Clone)]
pub struct CapturedError {
    description: String,
    causes: Vec<String>,
    backtrace: Option<String>,
}

impl CapturedError {
    pub fn capture(err: &dyn std::error::Error) -> Self {
        let description = err.to_string();
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }
        let backtrace = Backtrace::capture();
        let backtrace = match backtrace.status() {
            BacktraceStatus::Captured => Some(backtrace.to_string()),
            _ => None,
        };
        Self {
            description,
            causes,
            backtrace,
        }
    }

    pub fn describe(&self) -> String {
        let mut text = self.description.clone();
        for cause in &self.causes {
            text.push_str("\ncaused by: ");
            text.push_str(cause);
        }
        if let Some(trace) = &self.backtrace {
            text.push_str("\nstack trace:\n");
            text.push_str(trace);
        }
        text
    }
}

impl fmt::Display for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

//! Terminal logger implementation
//!
//! The reference implementation of the [`Logger`] contract: per-module
//! level overrides, per-event repeat throttling, multi-line layout with
//! right-aligned metadata, and an in-place progress-bar mode that
//! coexists with ordinary line output.

use crate::core::error::{LoggerError, Result};
use crate::core::event::{EventId, LogEvent};
use crate::core::layout;
use crate::core::log_level::LogLevel;
use crate::core::logger::{LogOptions, Logger};
use is_terminal::IsTerminal;
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;

const DEFAULT_WIDTH: usize = 80;

/// A stateful logger rendering to one output stream.
///
/// Interactive mode (a real terminal) renders decorated lines with a
/// right-aligned, level-colored `"<event id> <level>"` tag, and renders
/// progress events as a single in-place bar rewritten with `\r`.
/// Non-interactive mode emits one deterministic
/// `"<level> [<module>:<file>:<line>]: <message>"` line per event, with
/// no escape sequences or cursor control.
///
/// Terminal width and interactivity are fixed at construction. Repeat
/// counters grow without bound over the logger's lifetime: every
/// throttle-checked call increments its event's counter, including the
/// calls past the cap, and nothing resets them. The struct has no
/// internal locking; concurrent use requires external mutual exclusion
/// (the registry's shared handles provide it).
///
/// # Example
///
/// ```
/// use term_logger::{LogEvent, LogLevel, Logger, TerminalLogger};
///
/// let mut logger = TerminalLogger::new(Vec::new(), 40, false);
/// let event = LogEvent::new(LogLevel::INFO, "e1", "build ok")
///     .with_location("a.rs", 10, "app");
/// logger.handle_message(event).unwrap();
/// assert_eq!(logger.into_writer(), b"Info [app:a.rs:10]: build ok\n");
/// ```
pub struct TerminalLogger<W: Write + Send> {
    out: W,
    width: usize,
    interactive: bool,
    default_min_level: LogLevel,
    module_limits: HashMap<String, LogLevel>,
    message_counts: HashMap<EventId, u64>,
    /// Message text of the progress bar currently occupying the last
    /// line, if any.
    prev_progress: Option<String>,
}

impl TerminalLogger<io::Stderr> {
    /// A logger on stderr, sized and moded from the environment:
    /// `COLUMNS` (default 80) and whether stderr is a terminal.
    pub fn on_stderr() -> Self {
        let interactive = io::stderr().is_terminal();
        Self::new(io::stderr(), detect_width(), interactive)
    }
}

fn detect_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|columns| columns.parse().ok())
        .filter(|width| *width > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

impl<W: Write + Send> TerminalLogger<W> {
    pub fn new(out: W, width: usize, interactive: bool) -> Self {
        Self {
            out,
            width,
            interactive,
            default_min_level: LogLevel::INFO,
            module_limits: HashMap::new(),
            message_counts: HashMap::new(),
            prev_progress: None,
        }
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.default_min_level = level;
        self
    }

    /// Consume the logger and return its output stream.
    pub fn into_writer(self) -> W {
        self.out
    }

    fn effective_floor(&self, module: &str) -> LogLevel {
        self.module_limits
            .get(module)
            .copied()
            .unwrap_or(self.default_min_level)
    }

    /// One deterministic line per event; no color, no alignment, no
    /// progress special-casing. For files, pipes, and CI logs.
    fn render_plain(&mut self, event: &LogEvent) -> Result<()> {
        let rendered = event.message.render(false);
        write!(
            self.out,
            "{} [{}:{}:{}]: {}",
            event.level,
            event.module,
            file_name(&event.file),
            event.line,
            rendered
        )
        .map_err(|e| LoggerError::render("writing log line", e))?;
        if !rendered.ends_with('\n') {
            writeln!(self.out).map_err(|e| LoggerError::render("writing log line", e))?;
        }
        self.out
            .flush()
            .map_err(|e| LoggerError::render("flushing output", e))
    }

    /// Decorated line output. Terminates any in-flight progress bar,
    /// then prints each message line padded so the level-colored
    /// metadata tag right-aligns at the terminal edge.
    fn render_lines(&mut self, event: &LogEvent) -> Result<()> {
        if self.prev_progress.take().is_some() {
            writeln!(self.out).map_err(|e| LoggerError::render("terminating progress bar", e))?;
        }

        let rendered = event.message.render(true);
        let mut lines: Vec<String> = rendered.lines().map(str::to_owned).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        for (key, value) in event.context.iter() {
            lines.push(format!("  {} = {}", key, value));
        }

        let tag = format!("{} {}", event.id, event.level);
        let tag_width = layout::visible_width(&tag);
        if event.banner {
            lines.insert(0, layout::horizontal_rule(self.width.saturating_sub(tag_width)));
        }

        for (index, line) in lines.iter().enumerate() {
            let meta = if index == 0 { tag.as_str() } else { "..." };
            let pad = layout::alignment_padding(
                layout::visible_width(line),
                layout::visible_width(meta),
                self.width,
            );
            writeln!(
                self.out,
                "{}{:pad$}{}",
                line,
                "",
                layout::paint(meta, event.level)
            )
            .map_err(|e| LoggerError::render("writing log line", e))?;
        }
        self.out
            .flush()
            .map_err(|e| LoggerError::render("flushing output", e))
    }

    /// In-place progress bar. The same message text keeps rewriting one
    /// line; a different message first terminates the old bar with a
    /// newline.
    fn render_progress(&mut self, event: &LogEvent, fraction: f64) -> Result<()> {
        let rendered = event.message.render(true);
        if let Some(prev) = &self.prev_progress {
            if *prev != rendered {
                writeln!(self.out)
                    .map_err(|e| LoggerError::render("terminating progress bar", e))?;
            }
        }

        let tag = format!("{} {}", event.id, event.level);
        let tag_width = layout::visible_width(&tag);
        let bar_width = self
            .width
            .saturating_sub(layout::visible_width(&rendered) + tag_width + 4)
            .max(1);
        write!(
            self.out,
            "\r{} [{}] {}",
            rendered,
            layout::progress_bar(fraction, bar_width),
            layout::paint(&tag, event.level)
        )
        .map_err(|e| LoggerError::render("writing progress bar", e))?;
        self.out
            .flush()
            .map_err(|e| LoggerError::render("flushing output", e))?;
        self.prev_progress = Some(rendered);
        Ok(())
    }
}

fn file_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

impl<W: Write + Send> Logger for TerminalLogger<W> {
    fn should_log(
        &mut self,
        level: LogLevel,
        module: &str,
        _file: &str,
        _line: u32,
        id: &EventId,
        max_repeats: Option<u64>,
        _progress: Option<f64>,
    ) -> bool {
        if level < self.effective_floor(module) {
            return false;
        }
        if let Some(cap) = max_repeats {
            // Incremented before the comparison, and on every call from
            // then on; counters are never reset.
            let count = self.message_counts.entry(id.clone()).or_insert(0);
            *count += 1;
            if *count > cap {
                return false;
            }
        }
        true
    }

    fn min_enabled_level(&self) -> LogLevel {
        self.module_limits
            .values()
            .fold(self.default_min_level, |floor, limit| floor.min(*limit))
    }

    fn handle_message(&mut self, event: LogEvent) -> Result<()> {
        if !self.interactive {
            return self.render_plain(&event);
        }
        match event.progress {
            Some(fraction) => self.render_progress(&event, fraction),
            None => self.render_lines(&event),
        }
    }

    fn configure(&mut self, module: Option<&str>, options: LogOptions) {
        match module {
            None => {
                self.module_limits.clear();
                if let Some(level) = options.min_level {
                    self.default_min_level = level;
                }
            }
            Some(module) => {
                if let Some(level) = options.min_level {
                    self.module_limits.insert(module.to_string(), level);
                }
            }
        }
    }
}

//! Terminal-width-aware layout helpers
//!
//! Alignment math works on *visible* width: ANSI `ESC ... m` styling
//! sequences occupy no columns, every other character occupies one.

use super::log_level::LogLevel;
use colored::Colorize;

/// Number of terminal columns `s` occupies, treating any ANSI
/// `ESC ... 'm'` sequence as zero-width.
pub fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for escaped in chars.by_ref() {
                if escaped == 'm' {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Style `text` with the color and weight selected by `level`.
pub fn paint(text: &str, level: LogLevel) -> String {
    let painted = text.color(level.color_code());
    if level.is_bold() {
        painted.bold().to_string()
    } else {
        painted.to_string()
    }
}

/// Spaces needed between a line and its right-aligned metadata tag.
/// Always at least one, even when the line is too wide to fit.
pub fn alignment_padding(line_width: usize, meta_width: usize, terminal_width: usize) -> usize {
    terminal_width.saturating_sub(line_width + meta_width).max(1)
}

/// A horizontal rule of at least one column.
pub fn horizontal_rule(len: usize) -> String {
    "-".repeat(len.max(1))
}

/// The interior of a progress bar: `fraction` of `width` columns filled.
/// Out-of-range fractions are clamped rather than rejected.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    let mut bar = String::with_capacity(width);
    bar.push_str(&"-".repeat(filled));
    bar.push_str(&" ".repeat(width - filled));
    bar
}

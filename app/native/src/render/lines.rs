//! Line formatting for rendered text.
//!
//! Splits an opaque text blob into the ordered display lines that the
//! compositor lays out. No line is ever dropped here.

use std::fmt;

/// A single line of text destined for the canvas.
///
/// Trailing carriage returns are removed on construction. Leading whitespace
/// is kept so indented source output stays indented on screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayLine(String);

impl DisplayLine {
    /// Creates a display line, stripping trailing carriage returns and newlines.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let mut text = text.into();
        let trimmed_len = text.trim_end_matches(['\r', '\n']).len();
        text.truncate(trimmed_len);
        Self(text)
    }

    /// Returns the line text.
    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }

    /// Returns `true` if the line is empty or contains only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool { self.0.trim().is_empty() }
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for DisplayLine {
    fn from(text: &str) -> Self { Self::new(text) }
}

impl From<String> for DisplayLine {
    fn from(text: String) -> Self { Self::new(text) }
}

impl AsRef<str> for DisplayLine {
    fn as_ref(&self) -> &str { &self.0 }
}

/// Turns a raw text blob into display lines, one per input line.
///
/// Both `\n` and `\r\n` line endings are accepted. Blank lines are kept because
/// they still occupy a row in the layout. An empty blob yields no lines.
#[must_use]
pub fn format_lines(raw: &str) -> Vec<DisplayLine> { raw.lines().map(DisplayLine::new).collect() }

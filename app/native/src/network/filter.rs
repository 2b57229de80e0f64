//! Keyword allow-list for display lines.
//!
//! Full `ipconfig /all` output does not fit on a lock screen. When keywords are
//! configured, only lines mentioning one of them are kept. Blank lines are kept
//! too so adapter blocks stay visually separated.

use crate::render::DisplayLine;

/// Keywords that pick the interesting parts of `ipconfig /all` and of the
/// adapter summary.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "Media State",
    "Connection-specific DNS Suffix",
    "Description",
    "Physical Address",
    "DHCP Enabled",
    "Autoconfiguration Enabled",
    "Link-local IPv6 Address",
    "IPv4 Address",
    "Subnet Mask",
    "Default Gateway",
    "DNS Servers",
    "Network Configuration",
    "Adapter:",
    "IP Addresses:",
    "Gateways:",
];

/// Default number of lines kept by a keyword filter.
///
/// The limit is exact: a filter with limit `n` keeps at most `n` lines. The
/// body is not capped again at draw time; set `CanvasSpec::max_lines` for a
/// tighter bound.
pub const DEFAULT_FILTER_LIMIT: usize = 30;

/// Keeps lines that mention one of the configured keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineFilter {
    keywords: Vec<String>,
    limit: Option<usize>,
}

impl LineFilter {
    /// Creates a filter. Empty keywords are ignored; with no keywords left the
    /// filter passes every line through unchanged.
    #[must_use]
    pub fn new(keywords: impl IntoIterator<Item = impl Into<String>>, limit: Option<usize>) -> Self {
        let keywords = keywords
            .into_iter()
            .map(Into::into)
            .filter(|keyword: &String| !keyword.trim().is_empty())
            .collect();
        Self { keywords, limit }
    }

    /// Returns `true` if the filter keeps every line.
    #[must_use]
    pub fn is_pass_through(&self) -> bool { self.keywords.is_empty() }

    fn matches(&self, text: &str) -> bool {
        text.is_empty() || self.keywords.iter().any(|keyword| text.contains(keyword.as_str()))
    }

    /// Applies the filter. Kept lines are trimmed.
    #[must_use]
    pub fn apply(&self, lines: Vec<DisplayLine>) -> Vec<DisplayLine> {
        if self.is_pass_through() {
            return lines;
        }

        let limit = self.limit.unwrap_or(usize::MAX);
        lines
            .iter()
            .map(|line| line.as_str().trim())
            .filter(|text| self.matches(text))
            .take(limit)
            .map(DisplayLine::from)
            .collect()
    }
}

//! Indentation Analyzer
//!
//! Splits raw lines into leading whitespace and content, and infers from
//! the stream itself how wide one nesting level is.
//!
//! The first non-blank line fixes the global margin, a padding shared by
//! the whole document and excluded from every measurement. The first
//! change in indentation between consecutive non-blank lines fixes the
//! unit width, which then holds for the rest of the stream even when
//! later lines disagree with it.

use log::debug;

/// Columns a tab expands to.
pub const TAB_WIDTH: usize = 4;

/// A non-blank input line, split at the end of its leading whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Leading whitespace, tabs already expanded.
    pub indent: String,
    /// Everything after the indent, with trailing whitespace removed.
    pub content: String,
}

impl Line {
    /// Split a raw line. Returns `None` for blank or whitespace-only lines.
    pub fn split(raw: &str) -> Option<Line> {
        let expanded = expand_tabs(raw);
        let content = expanded.trim();
        if content.is_empty() {
            return None;
        }
        let indent_len = expanded.len() - expanded.trim_start().len();
        Some(Line {
            indent: expanded[..indent_len].to_string(),
            content: content.to_string(),
        })
    }

    /// Width of the leading whitespace in characters.
    pub fn indent_width(&self) -> usize {
        self.indent.chars().count()
    }
}

/// Replace every tab with a fixed run of spaces.
pub fn expand_tabs(line: &str) -> String {
    line.replace('\t', &" ".repeat(TAB_WIDTH))
}

/// Position of a line relative to the inferred indentation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measure {
    /// Whole levels below the global margin.
    pub depth: usize,
    /// Columns left over past the last whole level.
    pub remainder: usize,
}

impl Measure {
    /// True when the line sits between two levels rather than on one.
    pub fn is_fractional(&self) -> bool {
        self.remainder != 0
    }
}

/// Per-stream indentation state.
#[derive(Debug, Clone)]
pub struct IndentProfile {
    global_margin: Option<String>,
    unit_width: usize,
    locked: bool,
    previous: Option<usize>,
}

impl Default for IndentProfile {
    fn default() -> Self {
        Self {
            global_margin: None,
            unit_width: 1,
            locked: false,
            previous: None,
        }
    }
}

impl IndentProfile {
    /// Create a profile with no margin and an unlocked unit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a line's leading whitespace on the indentation grid,
    /// learning the margin and unit width as the stream goes.
    pub fn measure(&mut self, indent: &str) -> Measure {
        let width = indent.chars().count();

        if self.global_margin.is_none() {
            debug!("global margin set to {} columns", width);
            self.global_margin = Some(indent.to_string());
        }

        if !self.locked {
            if let Some(previous) = self.previous {
                let change = width.abs_diff(previous);
                if change != 0 {
                    self.unit_width = change;
                    self.locked = true;
                    debug!("indentation unit locked at {} columns", change);
                }
            }
        }
        self.previous = Some(width);

        let offset = width.saturating_sub(self.margin_width());
        Measure {
            depth: offset / self.unit_width,
            remainder: offset % self.unit_width,
        }
    }

    /// Whole nesting depth of a line's leading whitespace.
    pub fn depth(&mut self, indent: &str) -> usize {
        self.measure(indent).depth
    }

    /// Margin captured from the first non-blank line, or empty before it.
    pub fn global_margin(&self) -> &str {
        self.global_margin.as_deref().unwrap_or("")
    }

    fn margin_width(&self) -> usize {
        self.global_margin().chars().count()
    }

    /// Columns per level; 1 until the first change in indentation.
    pub fn unit_width(&self) -> usize {
        self.unit_width
    }

    /// Whether the unit width has been inferred yet.
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

//! Run configuration shared by every pipeline.

use std::fmt;
use std::str::FromStr;

use crate::error::{OutlineError, Result};
use crate::numbering::Style;

/// Default wrap column.
pub const DEFAULT_WIDTH: usize = 79;

/// Which way the stream flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Indented markup to numbered outline.
    #[default]
    Encode,
    /// Numbered outline back to indented markup.
    Decode,
    /// Numbered outline to freshly numbered and wrapped outline.
    Recode,
}

/// Line termination policy for rendered items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    /// Blank line after items that wrapped onto several rows only.
    #[default]
    Mixed,
    /// Never a blank line between items.
    Single,
    /// Always a blank line between items.
    Double,
}

impl Spacing {
    /// Terminator for an item rendered onto `rows` physical lines.
    pub fn terminator(&self, rows: usize) -> &'static str {
        match self {
            Spacing::Mixed if rows > 1 => "\n\n",
            Spacing::Mixed | Spacing::Single => "\n",
            Spacing::Double => "\n\n",
        }
    }
}

impl FromStr for Spacing {
    type Err = OutlineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mixed" => Ok(Spacing::Mixed),
            "single" => Ok(Spacing::Single),
            "double" => Ok(Spacing::Double),
            _ => Err(OutlineError::UnknownSpacing(s.to_string())),
        }
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spacing::Mixed => f.write_str("mixed"),
            Spacing::Single => f.write_str("single"),
            Spacing::Double => f.write_str("double"),
        }
    }
}

/// Rendering options, selected once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub style: Style,
    pub width: usize,
    pub spacing: Spacing,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            style: Style::Traditional,
            width: DEFAULT_WIDTH,
            spacing: Spacing::Mixed,
        }
    }
}

impl Options {
    /// Reject settings no rendering can honor.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(OutlineError::InvalidWidth(self.width));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.style, Style::Traditional);
        assert_eq!(options.width, 79);
        assert_eq!(options.spacing, Spacing::Mixed);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_zero_width_rejected() {
        let options = Options {
            width: 0,
            ..Options::default()
        };
        assert!(matches!(
            options.validate(),
            Err(OutlineError::InvalidWidth(0))
        ));
    }

    #[test]
    fn test_terminators() {
        assert_eq!(Spacing::Mixed.terminator(1), "\n");
        assert_eq!(Spacing::Mixed.terminator(2), "\n\n");
        assert_eq!(Spacing::Single.terminator(3), "\n");
        assert_eq!(Spacing::Double.terminator(1), "\n\n");
    }

    #[test]
    fn test_parse_spacing() {
        assert_eq!("single".parse::<Spacing>().unwrap(), Spacing::Single);
        assert_eq!(Spacing::Double.to_string(), "double");
        assert!("triple".parse::<Spacing>().is_err());
    }
}

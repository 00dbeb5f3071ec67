//! Numbering Formatter
//!
//! Maps a nesting depth and the running level counters to the marker that
//! heads an outline item.
//!
//! The traditional scheme covers fifteen depths. Depths 0 through 4 cycle
//! through upper roman, upper letter, integer, lower letter, and lower
//! roman, each followed by a period. Depths 5 through 9 repeat the cycle
//! with a closing parenthesis, and depths 10 through 14 wrap the number in
//! parentheses. Anything deeper falls back to a doubly parenthesized integer.

use std::fmt;
use std::str::FromStr;

use crate::error::OutlineError;

/// Number of depths with a dedicated traditional marker.
pub const TRADITIONAL_DEPTHS: usize = 15;

/// Numbering scheme, fixed for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Roman, letters, and integers cycling by depth: `I.`, `A.`, `1.`, ...
    #[default]
    Traditional,
    /// Dot-joined counters of every enclosing level: `1.`, `1.2`, `1.2.3`.
    Decimal,
}

impl Style {
    /// Render the marker for an item at `depth`.
    ///
    /// `counters` holds the running counter of every level, outermost first.
    /// Levels missing from the slice read as zero.
    pub fn format(&self, depth: usize, counters: &[usize]) -> String {
        match self {
            Style::Traditional => traditional(depth, counter_at(counters, depth)),
            Style::Decimal => decimal(depth, counters),
        }
    }
}

impl FromStr for Style {
    type Err = OutlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "traditional" => Ok(Style::Traditional),
            "decimal" | "numeric" => Ok(Style::Decimal),
            _ => Err(OutlineError::UnknownStyle(s.to_string())),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Traditional => f.write_str("traditional"),
            Style::Decimal => f.write_str("decimal"),
        }
    }
}

fn counter_at(counters: &[usize], depth: usize) -> usize {
    counters.get(depth).copied().unwrap_or(0)
}

fn traditional(depth: usize, n: usize) -> String {
    if depth >= TRADITIONAL_DEPTHS {
        return format!("(({}))", n);
    }
    let number = match depth % 5 {
        0 => to_roman(n),
        1 => to_letters(n),
        2 => n.to_string(),
        3 => to_letters(n).to_ascii_lowercase(),
        _ => to_roman(n).to_ascii_lowercase(),
    };
    match depth / 5 {
        0 => format!("{}.", number),
        1 => format!("{})", number),
        _ => format!("({})", number),
    }
}

fn decimal(depth: usize, counters: &[usize]) -> String {
    let mut parts: Vec<String> = (0..=depth)
        .map(|level| counter_at(counters, level).to_string())
        .collect();
    // A lone top-level number still ends with a separator.
    if depth == 0 {
        parts.push(String::new());
    }
    parts.join(".")
}

/// Subtractive roman numerals; thousands repeat `M` without bound.
pub fn to_roman(mut n: usize) -> String {
    const TABLE: [(usize, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut out = String::new();
    for &(value, digits) in TABLE.iter() {
        while n >= value {
            out.push_str(digits);
            n -= value;
        }
    }
    out
}

/// Uppercase letters where each pass past `Z` repeats the letter once more:
/// 1 is `A`, 26 is `Z`, 27 is `AA`, 28 is `BB`.
pub fn to_letters(n: usize) -> String {
    if n == 0 {
        return String::new();
    }
    let letter = char::from(b'A' + ((n - 1) % 26) as u8);
    std::iter::repeat(letter).take((n - 1) / 26 + 1).collect()
}

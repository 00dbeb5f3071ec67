//! Encoder: indented markup to numbered outline.
//!
//! Each non-blank markup line becomes one outline item. The item's depth
//! comes from its indentation, its number from the level counters, and its
//! text is re-flowed under the marker with a hanging indent one column
//! short of a full level, so a reader can tell a wrapped row from a child.

use log::debug;

use crate::counter::LevelCounter;
use crate::indent::{IndentProfile, Line};
use crate::options::Options;

/// Columns of indentation per rendered level.
pub const LEVEL_WIDTH: usize = 4;

/// Columns of indentation for wrapped rows, relative to their item.
pub const CONTINUATION_WIDTH: usize = LEVEL_WIDTH - 1;

/// Streaming encoder state for one markup stream.
#[derive(Debug, Clone)]
pub struct Encoder {
    profile: IndentProfile,
    counter: LevelCounter,
    options: Options,
    items: usize,
}

impl Encoder {
    /// Create an encoder rendering with `options`.
    pub fn new(options: &Options) -> Self {
        Self {
            profile: IndentProfile::new(),
            counter: LevelCounter::new(),
            options: options.clone(),
            items: 0,
        }
    }

    /// Render one markup line. Blank lines render as nothing.
    pub fn encode_line(&mut self, raw: &str) -> String {
        let line = match Line::split(raw) {
            Some(line) => line,
            None => return String::new(),
        };

        let depth = self.profile.depth(&line.indent);
        self.counter.bump(depth);
        self.items += 1;

        let marker = self.options.style.format(depth, self.counter.counts());
        let indent = format!(
            "{}{}",
            self.profile.global_margin(),
            " ".repeat(depth * LEVEL_WIDTH)
        );
        let heading = format!("{}{} ", indent, marker);
        let hanging = format!("{}{}", indent, " ".repeat(CONTINUATION_WIDTH));

        let rows = wrap(&line.content, self.options.width, &heading, &hanging);
        let mut out = rows.join("\n");
        out.push_str(self.options.spacing.terminator(rows.len()));
        out
    }

    /// End of stream. The encoder holds nothing back.
    pub fn flush(&mut self) -> String {
        debug!(
            "encoded {} items, deepest level {}",
            self.items,
            self.counter.max_depth().map_or(0, |depth| depth + 1)
        );
        String::new()
    }
}

/// Greedy word wrap. The first row starts with `first_prefix`, later rows
/// with `rest_prefix`; prefixes count toward `width`. A word too long for
/// any row gets a row of its own.
fn wrap(text: &str, width: usize, first_prefix: &str, rest_prefix: &str) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = first_prefix.to_string();
    let mut current_width = first_prefix.chars().count();
    let mut has_words = false;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();
        if has_words && current_width + 1 + word_width > width {
            rows.push(current);
            current = rest_prefix.to_string();
            current_width = rest_prefix.chars().count();
            has_words = false;
        }
        if has_words {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
        has_words = true;
    }

    rows.push(current);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbering::Style;
    use crate::options::Spacing;

    fn encode_all(options: &Options, lines: &[&str]) -> String {
        let mut encoder = Encoder::new(options);
        let mut out: String = lines.iter().map(|line| encoder.encode_line(line)).collect();
        out.push_str(&encoder.flush());
        out
    }

    #[test]
    fn test_wrap_short() {
        assert_eq!(wrap("a b c", 20, "I. ", "   "), vec!["I. a b c"]);
    }

    #[test]
    fn test_wrap_exact_width_fits() {
        assert_eq!(wrap("abcd efgh", 12, "I. ", "   "), vec!["I. abcd efgh"]);
        assert_eq!(
            wrap("abcd efghi", 12, "I. ", "   "),
            vec!["I. abcd", "   efghi"]
        );
    }

    #[test]
    fn test_wrap_long_word() {
        assert_eq!(
            wrap("tiny enormousword x", 10, "I. ", "   "),
            vec!["I. tiny", "   enormousword", "   x"]
        );
    }

    #[test]
    fn test_nested_items() {
        let out = encode_all(&Options::default(), &["one", "  two", "    three", "four"]);
        assert_eq!(out, "I. one\n    A. two\n        1. three\nII. four\n");
    }

    #[test]
    fn test_blank_lines_dropped() {
        let out = encode_all(&Options::default(), &["a", "", "  b"]);
        assert_eq!(out, "I. a\n    A. b\n");
    }

    #[test]
    fn test_margin_is_kept() {
        let out = encode_all(&Options::default(), &["  a", "    b", "  c"]);
        assert_eq!(out, "  I. a\n      A. b\n  II. c\n");
    }

    #[test]
    fn test_decimal_style() {
        let options = Options {
            style: Style::Decimal,
            ..Options::default()
        };
        let out = encode_all(&options, &["a", "\tb", "\t\tc", "\tb"]);
        assert_eq!(out, "1. a\n    1.1 b\n        1.1.1 c\n    1.2 b\n");
    }

    #[test]
    fn test_mixed_spacing_separates_wrapped_items() {
        let options = Options {
            width: 20,
            ..Options::default()
        };
        let out = encode_all(&options, &["short", "this item is long enough to wrap", "end"]);
        assert_eq!(
            out,
            "I. short\nII. this item is\n   long enough to\n   wrap\n\nIII. end\n"
        );
    }

    #[test]
    fn test_single_and_double_spacing() {
        let single = Options {
            width: 20,
            spacing: Spacing::Single,
            ..Options::default()
        };
        assert_eq!(
            encode_all(&single, &["this item is long enough to wrap"]),
            "I. this item is long\n   enough to wrap\n"
        );
        let double = Options {
            spacing: Spacing::Double,
            ..Options::default()
        };
        assert_eq!(encode_all(&double, &["a", "b"]), "I. a\n\nII. b\n\n");
    }

    #[test]
    fn test_hanging_indent_follows_depth() {
        let options = Options {
            width: 24,
            ..Options::default()
        };
        let out = encode_all(&options, &["top", "    child item that wraps over"]);
        assert_eq!(
            out,
            "I. top\n    A. child item that\n       wraps over\n\n"
        );
    }
}

//! Decoder: numbered outline back to indented markup.
//!
//! A line that lands exactly on a level of the inferred indentation grid
//! starts a new item; its first word is taken to be the marker and
//! dropped. A line that lands between levels is a wrapped row of the item
//! before it and is folded back into that item. Items are held in a
//! buffer until the next item starts or the stream ends, so output lags
//! input by one item.
//!
//! Content whose first word is not really a marker still loses that word.
//! Decoding is line-local and cannot tell the difference.

use log::{debug, trace};

use crate::indent::{IndentProfile, Line};

/// Streaming decoder state for one outline stream.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    profile: IndentProfile,
    buffer: String,
    items: usize,
    continuations: usize,
}

impl Decoder {
    /// Create a decoder with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one outline line. Returns the previous item, newline
    /// terminated, when this line starts a new one; otherwise nothing.
    pub fn decode_line(&mut self, raw: &str) -> String {
        let line = match Line::split(raw) {
            Some(line) => line,
            None => return String::new(),
        };

        let measure = self.profile.measure(&line.indent);
        if measure.is_fractional() {
            trace!(
                "continuation at depth {} (+{} columns)",
                measure.depth,
                measure.remainder
            );
            self.continuations += 1;
            self.append(&line);
            return String::new();
        }

        trace!("item at depth {}", measure.depth);
        self.items += 1;
        let flushed = self.take();
        self.buffer = format!("{}{}", line.indent, strip_marker(&line.content));
        flushed
    }

    /// Emit the buffered item at end of stream.
    pub fn flush(&mut self) -> String {
        debug!(
            "decoded {} items with {} wrapped rows",
            self.items, self.continuations
        );
        self.take()
    }

    fn append(&mut self, line: &Line) {
        if self.buffer.trim().is_empty() {
            if self.buffer.is_empty() {
                self.buffer.push_str(&line.indent);
            }
            self.buffer.push_str(&line.content);
        } else {
            self.buffer.push(' ');
            self.buffer.push_str(&line.content);
        }
    }

    fn take(&mut self) -> String {
        let mut out = std::mem::take(&mut self.buffer);
        if out.trim().is_empty() {
            return String::new();
        }
        out.push('\n');
        out
    }
}

/// Drop the first whitespace-delimited word.
fn strip_marker(content: &str) -> &str {
    content
        .split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim_start())
        .unwrap_or("")
}

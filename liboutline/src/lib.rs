//! Outline transcoder.
//!
//! Converts whitespace-indented plain-text markup into a numbered outline
//! and reads such outlines back.
//!
//! # Pipelines
//!
//! 1. **Encoder**: infers nesting depth from indentation, counts items per
//!    level, renders a marker for each item, and word-wraps its text under
//!    the marker with a hanging indent.
//!
//! 2. **Decoder**: infers depth the same way, tells new items from wrapped
//!    rows by whether a line sits on or between indentation levels, strips
//!    markers, and joins wrapped rows back into one line per item.
//!
//! 3. **Recoder**: decodes and immediately re-encodes, repairing numbering
//!    and wrapping in place.
//!
//! All three work one line at a time and keep their state in an owned
//! value, so independent streams never share anything.

mod counter;
mod decoder;
mod encoder;
mod error;
mod indent;
mod numbering;
mod options;
mod recoder;
mod stream;

pub use counter::LevelCounter;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{OutlineError, Result};
pub use indent::{IndentProfile, Line, Measure};
pub use numbering::{to_letters, to_roman, Style};
pub use options::{Mode, Options, Spacing, DEFAULT_WIDTH};
pub use recoder::Recoder;
pub use stream::{decode, encode, recode, run, transform, transformer, Transform, Transformed};

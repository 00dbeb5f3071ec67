//! Error types for outline transcoding.
//!
//! The line transducers never fail; malformed input degrades into a
//! best-effort rendering. Errors only arise at the edges: option values
//! that cannot be parsed and I/O on the underlying streams.

use thiserror::Error;

/// Result type for outline operations.
pub type Result<T> = std::result::Result<T, OutlineError>;

/// Error type for outline transcoding.
#[derive(Error, Debug)]
pub enum OutlineError {
    /// Reading input or writing output failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Unrecognized line-spacing mode.
    #[error("Unknown spacing \"{0}\" (expected mixed, single, or double)")]
    UnknownSpacing(String),

    /// Unrecognized numbering style.
    #[error("Unknown numbering style \"{0}\" (expected traditional or decimal)")]
    UnknownStyle(String),

    /// Wrap width too narrow to hold any text.
    #[error("Invalid wrap width {0} (must be at least 1)")]
    InvalidWidth(usize),
}

//! Streaming drivers.
//!
//! Every pipeline is a line transducer: each input line yields zero or
//! more newline-terminated output lines, and one final flush releases
//! whatever the pipeline still holds. Output is produced in input order
//! and written as soon as it exists.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use log::{info, warn};

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Result;
use crate::options::{Mode, Options};
use crate::recoder::Recoder;

/// A line-at-a-time text transformation.
pub trait Transform {
    /// Consume one input line (without its terminator).
    fn feed(&mut self, line: &str) -> String;

    /// Release anything still held at end of stream.
    fn finish(&mut self) -> String;
}

impl Transform for Encoder {
    fn feed(&mut self, line: &str) -> String {
        self.encode_line(line)
    }

    fn finish(&mut self) -> String {
        self.flush()
    }
}

impl Transform for Decoder {
    fn feed(&mut self, line: &str) -> String {
        self.decode_line(line)
    }

    fn finish(&mut self) -> String {
        self.flush()
    }
}

impl Transform for Recoder {
    fn feed(&mut self, line: &str) -> String {
        self.recode_line(line)
    }

    fn finish(&mut self) -> String {
        self.flush()
    }
}

impl<T: Transform + ?Sized> Transform for Box<T> {
    fn feed(&mut self, line: &str) -> String {
        (**self).feed(line)
    }

    fn finish(&mut self) -> String {
        (**self).finish()
    }
}

/// Build the pipeline for `mode`.
pub fn transformer(mode: Mode, options: &Options) -> Box<dyn Transform> {
    match mode {
        Mode::Encode => Box::new(Encoder::new(options)),
        Mode::Decode => Box::new(Decoder::new()),
        Mode::Recode => Box::new(Recoder::new(options)),
    }
}

/// Lazy output of a transform over a sequence of input lines.
///
/// Yields non-empty output chunks in order, then the end-of-stream flush.
/// Once exhausted it stays exhausted.
pub struct Transformed<I, T> {
    lines: I,
    transform: T,
    finished: bool,
}

/// Run `transform` lazily over `lines`.
pub fn transform<I, T>(lines: I, transform: T) -> Transformed<I::IntoIter, T>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    T: Transform,
{
    Transformed {
        lines: lines.into_iter(),
        transform,
        finished: false,
    }
}

impl<I, T> Iterator for Transformed<I, T>
where
    I: Iterator,
    I::Item: AsRef<str>,
    T: Transform,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while !self.finished {
            let chunk = match self.lines.next() {
                Some(line) => self.transform.feed(line.as_ref()),
                None => {
                    self.finished = true;
                    self.transform.finish()
                }
            };
            if !chunk.is_empty() {
                return Some(chunk);
            }
        }
        None
    }
}

/// Render indented markup as a numbered outline.
pub fn encode(input: &str, options: &Options) -> String {
    transform(input.lines(), Encoder::new(options)).collect()
}

/// Recover indented markup from a numbered outline.
pub fn decode(input: &str) -> String {
    transform(input.lines(), Decoder::new()).collect()
}

/// Renumber and re-wrap an existing outline.
pub fn recode(input: &str, options: &Options) -> String {
    transform(input.lines(), Recoder::new(options)).collect()
}

/// Stream `reader` through the `mode` pipeline into `writer`.
pub fn run<R: BufRead, W: Write>(
    mode: Mode,
    options: &Options,
    mut reader: R,
    mut writer: W,
) -> Result<()> {
    options.validate()?;
    info!(
        "{:?} with {} numbering, width {}, {} spacing",
        mode, options.style, options.width, options.spacing
    );

    let mut pipeline = transformer(mode, options);
    let mut count = 0usize;
    let mut buf = Vec::new();
    while read_line(&mut reader, &mut buf)? {
        count += 1;
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            warn!("line {}: invalid UTF-8 replaced", count);
        }
        writer.write_all(pipeline.feed(&line).as_bytes())?;
    }
    writer.write_all(pipeline.finish().as_bytes())?;
    writer.flush()?;

    info!("processed {} input lines", count);
    Ok(())
}

/// Read one raw line into `buf` without its `\n` or `\r\n` terminator.
/// Returns false at end of input.
fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> Result<bool> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(true)
}

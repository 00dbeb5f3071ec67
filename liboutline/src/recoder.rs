//! Recoder: decode then re-encode, one line at a time.
//!
//! Renumbers and re-wraps an existing outline without going back to the
//! markup it came from.

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::options::Options;

/// Decoder feeding straight into an encoder.
#[derive(Debug, Clone)]
pub struct Recoder {
    decoder: Decoder,
    encoder: Encoder,
}

impl Recoder {
    /// Create a recoder rendering with `options`.
    pub fn new(options: &Options) -> Self {
        Self {
            decoder: Decoder::new(),
            encoder: Encoder::new(options),
        }
    }

    /// Re-render whatever item this outline line completes.
    pub fn recode_line(&mut self, raw: &str) -> String {
        let decoded = self.decoder.decode_line(raw);
        self.encoder.encode_line(decoded.trim_end_matches('\n'))
    }

    /// Re-render the final buffered item.
    pub fn flush(&mut self) -> String {
        let decoded = self.decoder.flush();
        let mut out = self.encoder.encode_line(decoded.trim_end_matches('\n'));
        out.push_str(&self.encoder.flush());
        out
    }
}

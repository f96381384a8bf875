//! Byte-to-text decoding for uploaded files and archive entries.

use encoding_rs::{Encoding, UTF_8};

/// Decodes raw bytes as text, honouring a leading byte order mark.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDecoder {
    lossy: bool,
}

impl TextDecoder {
    /// Strict decoder: malformed input is a failure
    pub fn strict() -> Self {
        Self { lossy: false }
    }

    /// Lossy decoder: malformed sequences become U+FFFD
    pub fn lossy() -> Self {
        Self { lossy: true }
    }

    pub fn new(lossy: bool) -> Self {
        Self { lossy }
    }

    /// Decode `bytes`, sniffing UTF-8 and UTF-16 BOMs and falling back to UTF-8.
    ///
    /// Returns `None` when the input is malformed and the decoder is strict.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        let (encoding, body) = match Encoding::for_bom(bytes) {
            Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
            None => (UTF_8, bytes),
        };
        let (text, had_errors) = encoding.decode_without_bom_handling(body);
        if had_errors && !self.lossy {
            return None;
        }
        Some(text.into_owned())
    }
}

//! Reading of plain-text header lines.
//!
//! Old NIF files start with a text line such as `NetImmerse File Format, Version 4.0.0.2\n`.
//! These lines are single-byte text, so each byte is decoded as the char with the same code
//! point (Latin-1).
//!
//! The length bound works like this:
//! * At most `max_count` bytes are consumed.
//! * A `'\n'` ends the line early. It is consumed but is not part of the result.
//! * If `max_count` bytes are read without a newline, reading stops there; the next byte is
//!   left in the stream.
//! * If the stream ends before either of those happens, the read fails with
//!   [`Error::UnexpectedEof`](crate::Error::UnexpectedEof).
//!
//! Trailing NUL bytes are removed from the result.

use std::io::Read;

use crate::{EndianReader, Result};

impl<R: Read> EndianReader<R> {
    /// Reads one text line of at most `max_count` bytes and decodes it as Latin-1, with trailing
    /// NULs removed. See the module docs for how the bound and the newline interact.
    pub fn read_line(&mut self, max_count: usize) -> Result<String> {
        let bytes = self.read_line_raw(max_count)?;
        Ok(bytes.iter().map(|&b| b as char).collect())
    }

    /// Same as [`EndianReader::read_line`], but returns the raw bytes instead of decoding them.
    #[cfg(feature = "bstr")]
    pub fn read_line_bytes(&mut self, max_count: usize) -> Result<bstr::BString> {
        Ok(bstr::BString::from(self.read_line_raw(max_count)?))
    }

    fn read_line_raw(&mut self, max_count: usize) -> Result<Vec<u8>> {
        let mut line = Vec::new();
        while line.len() < max_count {
            let b = self.read_u8()?;
            if b == b'\n' {
                break;
            }
            line.push(b);
        }

        if max_count != 0 && line.len() == max_count {
            tracing::trace!(max_count, "text line reached its length bound without a newline");
        }

        while line.last() == Some(&0) {
            line.pop();
        }
        Ok(line)
    }
}

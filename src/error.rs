use std::io;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by the readers and writers in this crate.
///
/// None of the operations retry. When an error is returned, any bytes that were already consumed
/// from (or emitted to) the stream stay consumed; the stream position is not rolled back.
#[derive(Error, Debug)]
pub enum Error {
    /// The stream ended before a fixed-width value (or a text line) could be read completely.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// The underlying stream failed. The original I/O error is passed through unchanged.
    #[error("transport fault: {0}")]
    Transport(#[source] io::Error),

    /// A NIF header endian byte had a value other than `0` (big) or `1` (little).
    #[error("invalid endian mode {0:#04x}")]
    InvalidEndian(u8),

    /// The parts given for a decimal cannot be represented in 128-bit decimal form.
    #[error("invalid decimal: {0}")]
    InvalidDecimal(&'static str),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Self::UnexpectedEof
        } else {
            Self::Transport(e)
        }
    }
}

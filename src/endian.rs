use crate::{Error, Result};

/// Byte order applied to every multi-byte value read or written by an adapter.
///
/// NIF files are little-endian unless the header says otherwise, so `Little` is the default.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Endian {
    /// Least-significant byte first.
    #[default]
    Little,
    /// Most-significant byte first.
    Big,
}

impl Endian {
    /// Decodes the endian byte of a NIF header. `0` means big-endian and `1` means
    /// little-endian. Any other value is rejected with [`Error::InvalidEndian`].
    pub fn from_header_byte(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Big),
            1 => Ok(Self::Little),
            _ => Err(Error::InvalidEndian(value)),
        }
    }

    /// The value of the NIF header endian byte for this byte order.
    pub fn header_byte(self) -> u8 {
        match self {
            Self::Big => 0,
            Self::Little => 1,
        }
    }
}

impl TryFrom<u8> for Endian {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_header_byte(value)
    }
}

use std::io::Read;

use half::f16;
use zerocopy::byteorder::{BE, LE, U32};

use crate::{Decimal128, Endian, Error, Result};

/// Reads primitive values from a byte stream, using the byte order given at construction.
///
/// Each `read_*` call consumes exactly the encoded size of its value. The reader holds no
/// buffered state between calls, so the position of the underlying stream is always just past
/// the last value read. If a call fails, the bytes it already consumed are not given back.
///
/// If the stream is a file or socket, consider wrapping it in [`std::io::BufReader`] first;
/// every call issues at least one `read` on the underlying stream.
///
/// The byte order cannot be changed in place. A file whose sections use different byte orders
/// should be read through [`EndianReader::section`], which borrows the same stream under a
/// different byte order, or by rebuilding the reader with [`EndianReader::with_endian`].
#[derive(Debug)]
pub struct EndianReader<R> {
    inner: R,
    endian: Endian,
}

impl<R: Read> EndianReader<R> {
    /// Creates a reader that decodes every multi-byte value from `inner` in `endian` byte
    /// order.
    pub fn new(inner: R, endian: Endian) -> Self {
        Self { inner, endian }
    }

    /// The byte order used by this reader.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Rebuilds this reader with a different byte order, keeping the same stream.
    pub fn with_endian(self, endian: Endian) -> Self {
        Self {
            inner: self.inner,
            endian,
        }
    }

    /// Borrows the underlying stream under a different byte order. Values read through the
    /// returned reader advance the same stream; `self` keeps its own byte order.
    pub fn section(&mut self, endian: Endian) -> EndianReader<&mut R> {
        EndianReader::new(&mut self.inner, endian)
    }

    /// Extracts the underlying stream
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Accesses the underlying stream
    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Reads a small array of bytes, with a constant length.
    #[inline]
    pub fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.inner.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Reads `len` bytes.
    ///
    /// The buffer grows with the data actually read, so a corrupt length does not cause a huge
    /// allocation up front.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.inner.by_ref().take(len as u64).read_to_end(&mut buf)?;
        if buf.len() != len {
            return Err(Error::UnexpectedEof);
        }
        Ok(buf)
    }

    /// Reads a single `u8` value.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        let [b] = self.read_cbytes()?;
        Ok(b)
    }

    /// Reads a single `i8` value.
    #[inline]
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Reads a one-byte `bool`. Any non-zero byte is `true`.
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads a `u16` in the reader's byte order.
    #[inline(always)]
    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_cbytes()?;
        Ok(match self.endian {
            Endian::Little => u16::from_le_bytes(bytes),
            Endian::Big => u16::from_be_bytes(bytes),
        })
    }

    /// Reads a `i16` in the reader's byte order.
    #[inline(always)]
    pub fn read_i16(&mut self) -> Result<i16> {
        let bytes = self.read_cbytes()?;
        Ok(match self.endian {
            Endian::Little => i16::from_le_bytes(bytes),
            Endian::Big => i16::from_be_bytes(bytes),
        })
    }

    /// Reads a `u32` in the reader's byte order.
    #[inline(always)]
    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_cbytes()?;
        Ok(match self.endian {
            Endian::Little => u32::from_le_bytes(bytes),
            Endian::Big => u32::from_be_bytes(bytes),
        })
    }

    /// Reads a `i32` in the reader's byte order.
    #[inline(always)]
    pub fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.read_cbytes()?;
        Ok(match self.endian {
            Endian::Little => i32::from_le_bytes(bytes),
            Endian::Big => i32::from_be_bytes(bytes),
        })
    }

    /// Reads a `u64` in the reader's byte order.
    #[inline(always)]
    pub fn read_u64(&mut self) -> Result<u64> {
        let bytes = self.read_cbytes()?;
        Ok(match self.endian {
            Endian::Little => u64::from_le_bytes(bytes),
            Endian::Big => u64::from_be_bytes(bytes),
        })
    }

    /// Reads a `i64` in the reader's byte order.
    #[inline(always)]
    pub fn read_i64(&mut self) -> Result<i64> {
        let bytes = self.read_cbytes()?;
        Ok(match self.endian {
            Endian::Little => i64::from_le_bytes(bytes),
            Endian::Big => i64::from_be_bytes(bytes),
        })
    }

    /// Reads an `f32`. The 4 bytes are put in order and reinterpreted as an IEEE 754 bit
    /// pattern; no arithmetic conversion happens, so NaN payloads survive.
    #[inline]
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Reads an `f64`. See [`EndianReader::read_f32`].
    #[inline]
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    /// Reads a half-precision float (1 sign bit, 5 exponent bits, 10 mantissa bits). The byte
    /// order applies to the 2-byte unit as a whole.
    #[inline]
    pub fn read_f16(&mut self) -> Result<f16> {
        Ok(f16::from_bits(self.read_u16()?))
    }

    /// Reads a 128-bit decimal.
    ///
    /// The encoding is four 32-bit words in the order `lo, mid, hi, flags`. The byte order
    /// applies to each word on its own: in big-endian mode the bytes *within* each word are
    /// reversed, but the words stay in `lo, mid, hi, flags` order. Existing files depend on
    /// this layout, so it must not be "fixed" into a full 16-byte reversal.
    ///
    /// The words are returned as found; see [`Decimal128::is_valid`].
    pub fn read_decimal(&mut self) -> Result<Decimal128> {
        let raw: [u8; 16] = self.read_cbytes()?;
        let words = match self.endian {
            Endian::Little => {
                let words: [U32<LE>; 4] = zerocopy::transmute!(raw);
                words.map(|w| w.get())
            }
            Endian::Big => {
                let words: [U32<BE>; 4] = zerocopy::transmute!(raw);
                words.map(|w| w.get())
            }
        };
        Ok(Decimal128::from_words(words))
    }
}

use std::io::Write;

use half::f16;
use zerocopy::byteorder::{BE, LE, U32};
use zerocopy::IntoBytes;

use crate::{Decimal128, Endian, Result};

/// Encodes primitive values into a byte stream, using the byte order given at construction.
///
/// This is the mirror image of [`EndianReader`](crate::EndianReader): every value written by a
/// `write_*` method can be read back by the `read_*` method of the same name under the same
/// byte order, bit for bit.
///
/// Nothing is buffered here and nothing is flushed implicitly. Call
/// [`EndianWriter::flush`] (or flush the stream yourself) when done.
#[derive(Debug)]
pub struct EndianWriter<W> {
    /// The output stream.
    pub out: W,
    endian: Endian,
}

impl<W: Write> EndianWriter<W> {
    /// Wraps `out`. Every multi-byte value is encoded in `endian` byte order.
    pub fn wrap(out: W, endian: Endian) -> Self {
        Self { out, endian }
    }

    /// The byte order used by this writer.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Rebuilds this writer with a different byte order, keeping the same stream.
    pub fn with_endian(self, endian: Endian) -> Self {
        Self {
            out: self.out,
            endian,
        }
    }

    /// Borrows the output stream under a different byte order. `self` keeps its own byte order.
    pub fn section(&mut self, endian: Endian) -> EndianWriter<&mut W> {
        EndianWriter::wrap(&mut self.out, endian)
    }

    /// Extracts the output stream
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Accesses the output stream
    pub fn inner_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Flushes the output stream.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Writes `bytes` to the output.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.out.write_all(bytes)?;
        Ok(())
    }

    /// Writes a small, fixed-size array of bytes.
    pub fn write_cbytes<const N: usize>(&mut self, value: [u8; N]) -> Result<()> {
        self.write_bytes(&value)
    }

    /// Writes a single `u8` value
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_bytes(&[value])
    }

    /// Writes a single `i8` value
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write_bytes(&[value as u8])
    }

    /// Writes a `bool` value. True is encoded as 1. False is encoded as 0.
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_u8(value as u8)
    }

    /// Writes a single `u16` value in the writer's byte order.
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        match self.endian {
            Endian::Little => self.write_cbytes(value.to_le_bytes()),
            Endian::Big => self.write_cbytes(value.to_be_bytes()),
        }
    }

    /// Writes a single `i16` value in the writer's byte order.
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        match self.endian {
            Endian::Little => self.write_cbytes(value.to_le_bytes()),
            Endian::Big => self.write_cbytes(value.to_be_bytes()),
        }
    }

    /// Writes a single `u32` value in the writer's byte order.
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        match self.endian {
            Endian::Little => self.write_cbytes(value.to_le_bytes()),
            Endian::Big => self.write_cbytes(value.to_be_bytes()),
        }
    }

    /// Writes a single `i32` value in the writer's byte order.
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        match self.endian {
            Endian::Little => self.write_cbytes(value.to_le_bytes()),
            Endian::Big => self.write_cbytes(value.to_be_bytes()),
        }
    }

    /// Writes a single `u64` value in the writer's byte order.
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        match self.endian {
            Endian::Little => self.write_cbytes(value.to_le_bytes()),
            Endian::Big => self.write_cbytes(value.to_be_bytes()),
        }
    }

    /// Writes a single `i64` value in the writer's byte order.
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        match self.endian {
            Endian::Little => self.write_cbytes(value.to_le_bytes()),
            Endian::Big => self.write_cbytes(value.to_be_bytes()),
        }
    }

    /// Writes an `f32` from its IEEE 754 bit pattern. In big-endian mode all 4 bytes are
    /// reversed.
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.write_u32(value.to_bits())
    }

    /// Writes an `f64` from its IEEE 754 bit pattern. In big-endian mode all 8 bytes are
    /// reversed.
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.write_u64(value.to_bits())
    }

    /// Writes a half-precision float as a 2-byte unit.
    pub fn write_f16(&mut self, value: f16) -> Result<()> {
        self.write_u16(value.to_bits())
    }

    /// Writes a 128-bit decimal as four 32-bit words: `lo, mid, hi, flags`.
    ///
    /// The byte order is applied to each word separately. The word sequence itself is never
    /// reversed, even in big-endian mode. This matches the layout used by existing files and by
    /// [`EndianReader::read_decimal`](crate::EndianReader::read_decimal); do not change it to a
    /// whole-value reversal.
    pub fn write_decimal(&mut self, value: Decimal128) -> Result<()> {
        let words = value.to_words();
        match self.endian {
            Endian::Little => self.write_bytes(words.map(U32::<LE>::new).as_bytes()),
            Endian::Big => self.write_bytes(words.map(U32::<BE>::new).as_bytes()),
        }
    }
}

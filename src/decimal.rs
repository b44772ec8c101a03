use crate::{Error, Result};

const SIGN_MASK: u32 = 0x8000_0000;
const SCALE_MASK: u32 = 0x00ff_0000;
const SCALE_SHIFT: u32 = 16;
const MAX_SCALE: u8 = 28;
const MANTISSA_LIMIT: u128 = 1 << 96;

/// A 128-bit decimal, stored as the four 32-bit words produced by .NET's `decimal.GetBits`.
///
/// * `lo`, `mid` and `hi` hold the 96-bit unsigned mantissa, least-significant word first.
/// * `flags` holds the scale (power of ten to divide by, 0..=28) in bits 16..=23 and the sign
///   in bit 31. All other bits are zero in a well-formed value.
///
/// The value is `(-1)^sign * mantissa / 10^scale`.
///
/// Decoding does not validate the words, so values read from a stream are written back
/// bit-for-bit. Use [`Decimal128::is_valid`] to check them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Decimal128 {
    /// Bits 0..32 of the mantissa.
    pub lo: u32,
    /// Bits 32..64 of the mantissa.
    pub mid: u32,
    /// Bits 64..96 of the mantissa.
    pub hi: u32,
    /// Scale and sign.
    pub flags: u32,
}

impl Decimal128 {
    /// Positive zero with scale 0.
    pub const ZERO: Self = Self {
        lo: 0,
        mid: 0,
        hi: 0,
        flags: 0,
    };

    /// Builds a decimal from its mantissa, scale and sign.
    ///
    /// Fails with [`Error::InvalidDecimal`] if `mantissa` does not fit in 96 bits or `scale`
    /// is greater than 28.
    pub fn new(mantissa: u128, scale: u8, negative: bool) -> Result<Self> {
        if mantissa >= MANTISSA_LIMIT {
            return Err(Error::InvalidDecimal("mantissa does not fit in 96 bits"));
        }
        if scale > MAX_SCALE {
            return Err(Error::InvalidDecimal("scale is greater than 28"));
        }

        let mut flags = (scale as u32) << SCALE_SHIFT;
        if negative {
            flags |= SIGN_MASK;
        }

        Ok(Self {
            lo: mantissa as u32,
            mid: (mantissa >> 32) as u32,
            hi: (mantissa >> 64) as u32,
            flags,
        })
    }

    /// Builds a decimal from words in `GetBits` order: `[lo, mid, hi, flags]`.
    pub fn from_words(words: [u32; 4]) -> Self {
        let [lo, mid, hi, flags] = words;
        Self { lo, mid, hi, flags }
    }

    /// Returns the words in `GetBits` order: `[lo, mid, hi, flags]`. This is also the order in
    /// which they appear on the wire.
    pub fn to_words(self) -> [u32; 4] {
        [self.lo, self.mid, self.hi, self.flags]
    }

    /// The 96-bit unsigned mantissa.
    pub fn mantissa(self) -> u128 {
        (self.hi as u128) << 64 | (self.mid as u128) << 32 | self.lo as u128
    }

    /// The scale, i.e. the number of decimal digits after the point.
    pub fn scale(self) -> u8 {
        ((self.flags & SCALE_MASK) >> SCALE_SHIFT) as u8
    }

    /// True if the sign bit is set. Note that negative zero is representable.
    pub fn is_negative(self) -> bool {
        self.flags & SIGN_MASK != 0
    }

    /// True if the unused flag bits are zero and the scale is at most 28.
    pub fn is_valid(self) -> bool {
        self.flags & !(SIGN_MASK | SCALE_MASK) == 0 && self.scale() <= MAX_SCALE
    }
}

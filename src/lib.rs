//! Reads and writes the primitive values of NIF scene-graph files, with a byte order that is
//! chosen per stream (or per section of a stream).
//!
//! [`EndianReader`] and [`EndianWriter`] wrap any [`std::io::Read`] or [`std::io::Write`] and
//! encode 16/32/64-bit integers, `f16`/`f32`/`f64` floats and 128-bit decimals.
//! [`NiStreamReader`] and [`NiStreamWriter`] bind one of those adapters to the file being parsed
//! or written, without taking ownership of the underlying stream.
//!
//! # References
//! * <https://learn.microsoft.com/en-us/dotnet/api/system.decimal.getbits?view=net-9.0>
//! * <https://en.wikipedia.org/wiki/Half-precision_floating-point_format>

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod decimal;
mod endian;
mod error;
mod line;
mod reader;
mod session;
mod writer;


pub use decimal::Decimal128;
pub use endian::Endian;
pub use error::{Error, Result};
pub use half::f16;
pub use reader::EndianReader;
pub use session::{NiStreamReader, NiStreamWriter};
pub use writer::EndianWriter;

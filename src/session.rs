//! Sessions that bind a stream adapter to the file being parsed or written.
//!
//! A session borrows the stream; it never owns or closes it. The file handle `F` is opaque here
//! and is only carried along for the code that parses or serializes records.

use std::io::{Read, Seek, Write};

use tracing::{debug, trace};

use crate::{Endian, EndianReader, EndianWriter, Result};

/// Reads one NIF file from a borrowed stream.
pub struct NiStreamReader<'a, R, F> {
    reader: EndianReader<&'a mut R>,
    file: &'a F,
}

impl<'a, R: Read, F> NiStreamReader<'a, R, F> {
    /// Creates a session reading `stream` in the given byte order. The caller keeps ownership of
    /// `stream`.
    pub fn new(stream: &'a mut R, file: &'a F, endian: Endian) -> Self {
        debug!(?endian, "opened NIF read session");
        Self {
            reader: EndianReader::new(stream, endian),
            file,
        }
    }

    /// The primitive reader.
    pub fn reader(&self) -> &EndianReader<&'a mut R> {
        &self.reader
    }

    /// The primitive reader, for reading values.
    pub fn reader_mut(&mut self) -> &mut EndianReader<&'a mut R> {
        &mut self.reader
    }

    /// The file being parsed.
    pub fn file(&self) -> &'a F {
        self.file
    }

    /// Switches the byte order for everything read after this call, e.g. once the header has
    /// revealed the file's byte order.
    pub fn switch_endian(self, endian: Endian) -> Self {
        debug!(from = ?self.reader.endian(), to = ?endian, "NIF read session byte order changed");
        Self {
            reader: self.reader.with_endian(endian),
            file: self.file,
        }
    }

    /// Reads a plain-text header line. See [`EndianReader::read_line`].
    pub fn get_line(&mut self, max_count: usize) -> Result<String> {
        self.reader.read_line(max_count)
    }
}

/// Writes one NIF file to a borrowed stream.
pub struct NiStreamWriter<'a, W, F> {
    writer: EndianWriter<&'a mut W>,
    file: &'a F,

    /// Offset of a size field whose value is not known yet.
    ///
    /// The caller records the stream position of the reserved field here before writing the
    /// body that the field describes, then seeks back to it once the body length is known.
    /// This type only stores the offset.
    pub block_size_pos: u64,
}

impl<'a, W: Write, F> NiStreamWriter<'a, W, F> {
    /// Creates a session writing to `stream` in the given byte order. The caller keeps ownership
    /// of `stream`.
    pub fn new(stream: &'a mut W, file: &'a F, endian: Endian) -> Self {
        debug!(?endian, "opened NIF write session");
        Self {
            writer: EndianWriter::wrap(stream, endian),
            file,
            block_size_pos: 0,
        }
    }

    /// The primitive writer.
    pub fn writer(&self) -> &EndianWriter<&'a mut W> {
        &self.writer
    }

    /// The primitive writer, for writing values.
    pub fn writer_mut(&mut self) -> &mut EndianWriter<&'a mut W> {
        &mut self.writer
    }

    /// The file being written.
    pub fn file(&self) -> &'a F {
        self.file
    }

    /// Switches the byte order for everything written after this call.
    pub fn switch_endian(self, endian: Endian) -> Self {
        debug!(from = ?self.writer.endian(), to = ?endian, "NIF write session byte order changed");
        Self {
            writer: self.writer.with_endian(endian),
            file: self.file,
            block_size_pos: self.block_size_pos,
        }
    }

    /// Flushes everything written so far. The stream stays open.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()
    }
}

impl<W: Write + Seek, F> NiStreamWriter<'_, W, F> {
    /// Records the current stream position in [`NiStreamWriter::block_size_pos`] and returns it.
    ///
    /// Call this right before writing the placeholder of a size field, so the recorded offset
    /// points at the start of that field.
    pub fn mark_block_size_pos(&mut self) -> Result<u64> {
        let pos = self.writer.inner_mut().stream_position()?;
        trace!(pos, "recorded block size position");
        self.block_size_pos = pos;
        Ok(pos)
    }
}

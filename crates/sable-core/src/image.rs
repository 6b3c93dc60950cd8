//! Program image and loader.
//!
//! An image is the full byte buffer handed over by the host, logically
//! divided into a header (initial instruction pointer, symbol table) and a
//! code region. Loading parses the header once, resolves every symbol to an
//! absolute offset, and leaves the cursor at the initial instruction
//! pointer. The buffer is read-only after that; only the cursor moves.

use std::collections::HashMap;

use crate::reader::{self, ReadError};

/// A loaded program image with its read cursor.
///
/// Jump and call targets are expressed relative to base-of-code; they are
/// converted to absolute offsets by adding [`Image::base`] before seeking.
#[derive(Debug)]
pub struct Image {
    /// The full program buffer, header included.
    data: Vec<u8>,
    /// Current absolute read position.
    pos: usize,
    /// Absolute offset of the first code byte.
    base: usize,
    /// Absolute offset of the declared initial instruction pointer.
    entry: usize,
    /// Symbol name -> absolute code offset.
    symbols: HashMap<String, usize>,
}

impl Image {
    /// Parse the header and symbol table of `data`.
    ///
    /// On success the cursor is positioned at the initial instruction
    /// pointer, ready for execution. A truncated header or a name without
    /// its terminating NUL is a fatal load error.
    pub fn load(data: Vec<u8>) -> Result<Self, ReadError> {
        let mut pos = 0;

        let initial_ip = reader::read_u32(&data, &mut pos)? as usize;
        let count = reader::read_u32(&data, &mut pos)? as usize;

        // Offsets in the raw entries are relative to base-of-code, which is
        // only known once the last entry has been read.
        let mut raw = Vec::with_capacity(count);
        for _ in 0..count {
            let name = reader::read_cstr(&data, &mut pos)?;
            let offset = reader::read_u32(&data, &mut pos)? as usize;
            raw.push((name, offset));
        }

        let base = pos;
        let symbols = raw
            .into_iter()
            .map(|(name, offset)| (name, base + offset))
            .collect();
        let entry = base + initial_ip;

        Ok(Self {
            data,
            pos: entry,
            base,
            entry,
            symbols,
        })
    }

    /// The full program buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Absolute offset of the first code byte.
    pub fn base(&self) -> usize {
        self.base
    }

    /// Absolute offset of the declared initial instruction pointer.
    pub fn entry(&self) -> usize {
        self.entry
    }

    /// Look up a symbol's absolute code offset.
    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.symbols.get(name).copied()
    }

    /// Iterate over all symbols as (name, absolute offset) pairs.
    pub fn symbols(&self) -> impl Iterator<Item = (&str, usize)> {
        self.symbols.iter().map(|(name, off)| (name.as_str(), *off))
    }

    /// Current absolute read position.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move the cursor to an absolute position.
    ///
    /// Seeking past the end is legal; the next read reports truncation.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Read one byte at the cursor.
    pub fn read_u8(&mut self) -> Result<u8, ReadError> {
        reader::read_u8(&self.data, &mut self.pos)
    }

    /// Read a little-endian u32 at the cursor.
    pub fn read_u32(&mut self) -> Result<u32, ReadError> {
        reader::read_u32(&self.data, &mut self.pos)
    }

    /// Read a little-endian f32 at the cursor.
    pub fn read_f32(&mut self) -> Result<f32, ReadError> {
        reader::read_f32(&self.data, &mut self.pos)
    }

    /// Read a NUL-terminated UTF-8 string at the cursor.
    pub fn read_cstr(&mut self) -> Result<String, ReadError> {
        reader::read_cstr(&self.data, &mut self.pos)
    }
}

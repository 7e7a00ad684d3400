//! raw font bytes

use font_types::Tag;

use crate::read::ReadError;

/// A reference to raw binary font data.
///
/// This is a wrapper around a byte slice that provides bounds-checked,
/// big-endian reads. No method ever touches memory outside of the slice;
/// reads that would cross the end return [`ReadError::OutOfBounds`] instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontData<'a> {
    bytes: &'a [u8],
}

/// A cursor for reading sequential big-endian fields.
///
/// Each successful read advances the cursor by the width of the value read.
/// A failed read leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    pos: usize,
    data: FontData<'a>,
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData { bytes }
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the data starting at `pos`, or `None` if `pos` is past the end.
    pub fn split_off(&self, pos: usize) -> Option<FontData<'a>> {
        self.bytes.get(pos..).map(FontData::new)
    }

    /// Returns `len` bytes starting at `offset`, if they are all in bounds.
    pub fn slice(&self, offset: usize, len: usize) -> Option<FontData<'a>> {
        let end = offset.checked_add(len)?;
        self.bytes.get(offset..end).map(FontData::new)
    }

    /// Read a big-endian `u16` at `offset`.
    pub fn read_u16_at(&self, offset: usize) -> Result<u16, ReadError> {
        self.read_array_at(offset).map(u16::from_be_bytes)
    }

    /// Read a big-endian `u32` at `offset`.
    pub fn read_u32_at(&self, offset: usize) -> Result<u32, ReadError> {
        self.read_array_at(offset).map(u32::from_be_bytes)
    }

    /// Read a big-endian `i32` at `offset`.
    pub fn read_i32_at(&self, offset: usize) -> Result<i32, ReadError> {
        self.read_array_at(offset).map(i32::from_be_bytes)
    }

    /// Read a signed 16.16 fixed-point value at `offset`, as an `f64`.
    pub fn read_fixed_at(&self, offset: usize) -> Result<f64, ReadError> {
        self.read_i32_at(offset).map(fixed_to_f64)
    }

    /// Read a four-byte tag at `offset`.
    ///
    /// Tags are stored as raw bytes; no byte swapping happens here.
    pub fn read_tag_at(&self, offset: usize) -> Result<Tag, ReadError> {
        self.read_array_at(offset).map(Tag::from_be_bytes)
    }

    fn read_array_at<const N: usize>(&self, offset: usize) -> Result<[u8; N], ReadError> {
        offset
            .checked_add(N)
            .and_then(|end| self.bytes.get(offset..end))
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or(ReadError::OutOfBounds)
    }

    /// Returns a cursor positioned at the start of the data.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor {
            pos: 0,
            data: *self,
        }
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

/// Converts the raw bits of a 16.16 fixed-point number to a float.
///
/// This is lossless: every 16.16 value is representable as an `f64`.
pub(crate) fn fixed_to_f64(bits: i32) -> f64 {
    bits as f64 / 65536.0
}

impl<'a> Cursor<'a> {
    pub fn read_u16(&mut self) -> Result<u16, ReadError> {
        let temp = self.data.read_u16_at(self.pos)?;
        self.pos += 2;
        Ok(temp)
    }

    pub fn read_u32(&mut self) -> Result<u32, ReadError> {
        let temp = self.data.read_u32_at(self.pos)?;
        self.pos += 4;
        Ok(temp)
    }

    pub fn read_i32(&mut self) -> Result<i32, ReadError> {
        let temp = self.data.read_i32_at(self.pos)?;
        self.pos += 4;
        Ok(temp)
    }

    /// Read a signed 16.16 fixed-point value (`i32 / 65536.0`).
    pub fn read_fixed(&mut self) -> Result<f64, ReadError> {
        self.read_i32().map(fixed_to_f64)
    }

    pub fn read_tag(&mut self) -> Result<Tag, ReadError> {
        let temp = self.data.read_tag_at(self.pos)?;
        self.pos += 4;
        Ok(temp)
    }

    /// Move the cursor forward without reading.
    ///
    /// This never fails; a subsequent read past the end will.
    pub fn advance_by(&mut self, n_bytes: usize) {
        self.pos = self.pos.saturating_add(n_bytes);
    }

    /// The current position, relative to the start of the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The number of bytes between the cursor and the end of the data.
    pub fn remaining_bytes(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }
}

impl AsRef<[u8]> for FontData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl<'a> From<&'a [u8]> for FontData<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        FontData::new(bytes)
    }
}

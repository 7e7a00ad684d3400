//! small utilities for building big-endian test data

use font_types::{NameId, Tag};

/// Types that can be written to a [`BeBuffer`].
pub trait BeBytes {
    fn write_be(self, out: &mut Vec<u8>);
}

macro_rules! int_be_bytes {
    ($($ty:ty),*) => {
        $(
            impl BeBytes for $ty {
                fn write_be(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_be_bytes());
                }
            }
        )*
    };
}

int_be_bytes!(u8, i8, u16, i16, u32, i32, Tag, NameId);

impl<const N: usize> BeBytes for [u8; N] {
    fn write_be(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self);
    }
}

impl<const N: usize> BeBytes for &[u8; N] {
    fn write_be(self, out: &mut Vec<u8>) {
        out.extend_from_slice(self);
    }
}

impl BeBytes for &[u8] {
    fn write_be(self, out: &mut Vec<u8>) {
        out.extend_from_slice(self);
    }
}

/// A convenience type for generating a buffer of big-endian bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeBuffer {
    data: Vec<u8>,
}

impl BeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// The current length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer contains zero bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return a reference to the contents of the buffer
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Write any scalar to this buffer.
    pub fn push(mut self, item: impl BeBytes) -> Self {
        item.write_be(&mut self.data);
        self
    }

    /// Write multiple scalars into the buffer
    pub fn extend<T: BeBytes>(mut self, iter: impl IntoIterator<Item = T>) -> Self {
        for item in iter {
            item.write_be(&mut self.data);
        }
        self
    }

    /// Pad the buffer with zeros until it is `len` bytes long.
    pub fn pad_to(mut self, len: usize) -> Self {
        if self.data.len() < len {
            self.data.resize(len, 0);
        }
        self
    }

    /// Drop everything after the first `len` bytes.
    pub fn truncate(mut self, len: usize) -> Self {
        self.data.truncate(len);
        self
    }

    /// Overwrite the bytes at `offset` with `item`.
    pub fn write_at(&mut self, offset: usize, item: impl BeBytes) {
        let mut raw = Vec::new();
        item.write_be(&mut raw);
        let Some(dest) = self.data.get_mut(offset..offset + raw.len()) else {
            panic!("not enough room left in buffer for the requested write.");
        };
        dest.copy_from_slice(&raw);
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl std::ops::Deref for BeBuffer {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// Build a [`BeBuffer`] from a list of scalars.
///
/// ```
/// # use font_test_data::be_buffer;
/// let buf = be_buffer! { 1u16, 2i32, b"wght" };
/// assert_eq!(buf.len(), 10);
/// ```
#[macro_export]
macro_rules! be_buffer {
    ( $( $item:expr ),* $(,)? ) => {{
        let buf = $crate::bebuffer::BeBuffer::new();
        $( let buf = buf.push($item); )*
        buf
    }};
}

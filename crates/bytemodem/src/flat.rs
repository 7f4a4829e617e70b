use alloc::{boxed::Box, vec, vec::Vec};
use core::fmt;

use bstr::BStr;

use crate::{buffer::ByteBuffer, source::ByteSource};

/// A fully materialized byte source with a read cursor.
///
/// This is the flat leaf a [`SequenceStream`] ultimately concatenates, and
/// the only source kind that supports random access into its bytes: decode
/// streams refuse `get_byte_range` because their data may not have been
/// produced yet, a flat source has everything up front.
///
/// [`SequenceStream`]: crate::SequenceStream
pub struct FlatSource {
    data: Box<[u8]>,
    pos: usize,
}

impl FlatSource {
    /// Creates a source over `data` with the cursor at the start.
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data: data.into_boxed_slice(),
            pos: 0,
        }
    }

    /// Total length in bytes, regardless of the cursor.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the source holds zero bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current cursor position.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// All bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The bytes in `[begin, end)`, clamped to the valid range.
    #[must_use]
    pub fn get_byte_range(&self, begin: usize, end: usize) -> &[u8] {
        let len = self.data.len();
        let begin = begin.min(len);
        &self.data[begin..end.clamp(begin, len)]
    }

    /// Everything from the cursor to the end, advancing the cursor to the
    /// end. A second call returns an empty slice.
    pub fn read_remaining(&mut self) -> &[u8] {
        let start = self.pos;
        self.pos = self.data.len();
        &self.data[start..]
    }

    /// Rewinds the cursor to the start.
    pub fn reset(&mut self) {
        self.pos = 0;
    }
}

impl From<Vec<u8>> for FlatSource {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for FlatSource {
    fn from(data: &[u8]) -> Self {
        Self {
            data: data.into(),
            pos: 0,
        }
    }
}

impl<const N: usize> From<&[u8; N]> for FlatSource {
    fn from(data: &[u8; N]) -> Self {
        Self::from(data.as_slice())
    }
}

impl ByteSource for FlatSource {
    fn estimated_len(&self) -> usize {
        // Exact, not an estimate: the bytes are already materialized.
        self.data.len()
    }

    fn drain_into(&mut self, sink: &mut ByteBuffer) {
        sink.push_slice(self.read_remaining());
    }

    fn base_sources(&self) -> Vec<&FlatSource> {
        vec![self]
    }
}

impl fmt::Debug for FlatSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatSource")
            .field("len", &self.data.len())
            .field("pos", &self.pos)
            .field("data", &BStr::new(&self.data))
            .finish()
    }
}

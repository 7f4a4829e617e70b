use alloc::{boxed::Box, vec};
use core::fmt;

use bstr::BStr;

/// Smallest capacity any buffer will grow to.
const DEFAULT_MIN_CAPACITY: usize = 512;

/// Owned, growable byte storage backing a decode stream.
///
/// Capacity grows by doubling from a per-instance floor (`min_capacity`),
/// which keeps appends amortized O(1) and capacities power-of-two. A freshly
/// constructed buffer holds the zero-length boxed slice, which performs no
/// heap allocation; many streams are created whose buffers are never used,
/// and those stay allocation-free for their whole lifetime.
pub struct ByteBuffer {
    data: Box<[u8]>,
    len: usize,
    min_capacity: usize,
    raw_hint: usize,
}

impl ByteBuffer {
    /// Creates an empty buffer with the default capacity floor.
    #[must_use]
    pub fn new() -> Self {
        Self::with_size_hint(0)
    }

    /// Creates an empty buffer whose capacity floor is the smallest power of
    /// two that is at least 512 and at least `hint`.
    #[must_use]
    pub fn with_size_hint(hint: usize) -> Self {
        let mut min_capacity = DEFAULT_MIN_CAPACITY;
        while min_capacity < hint {
            min_capacity *= 2;
        }
        Self {
            data: Box::default(),
            len: 0,
            min_capacity,
            raw_hint: hint,
        }
    }

    /// Count of valid bytes currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no bytes are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current capacity. Zero until the first growth.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// The power-of-two capacity floor derived from the construction hint.
    #[must_use]
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// The construction hint as given, before rounding.
    #[must_use]
    pub fn raw_hint(&self) -> usize {
        self.raw_hint
    }

    /// The valid prefix.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Grows capacity to at least `requested` bytes, doubling from the
    /// capacity floor. Existing content is preserved. Never shrinks.
    pub fn ensure_capacity(&mut self, requested: usize) {
        if requested <= self.data.len() {
            return;
        }
        let mut size = self.min_capacity;
        while size < requested {
            size *= 2;
        }
        let mut grown = vec![0u8; size].into_boxed_slice();
        grown[..self.len].copy_from_slice(&self.data[..self.len]);
        self.data = grown;
    }

    /// Appends `bytes`, growing first if needed.
    pub fn push_slice(&mut self, bytes: &[u8]) {
        let new_len = self.len + bytes.len();
        self.ensure_capacity(new_len);
        self.data[self.len..new_len].copy_from_slice(bytes);
        self.len = new_len;
    }
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("len", &self.len)
            .field("capacity", &self.data.len())
            .field("min_capacity", &self.min_capacity)
            .field("data", &BStr::new(self.as_slice()))
            .finish()
    }
}

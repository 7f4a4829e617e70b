use core::fmt;

use bstr::BStr;

/// A non-owning window over a contiguous range of a stream's backing buffer.
///
/// Views are handed out by [`DecodeStream::make_sub_stream_view`] for
/// downstream consumers to parse further. A view borrows the stream that
/// created it, so the stream cannot produce more data (and in particular
/// cannot reallocate its buffer) while the view is alive.
///
/// [`DecodeStream::make_sub_stream_view`]: crate::DecodeStream::make_sub_stream_view
#[derive(Clone, Copy)]
pub struct SubStreamView<'a> {
    bytes: &'a [u8],
    start: usize,
}

impl<'a> SubStreamView<'a> {
    pub(crate) fn new(bytes: &'a [u8], start: usize) -> Self {
        Self { bytes, start }
    }

    /// Offset of this window within the parent stream's decoded bytes.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of bytes in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the window is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The windowed bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// A sub-range of the window, clamped to its bounds. `begin` and `end`
    /// are relative to the start of the window.
    #[must_use]
    pub fn get_byte_range(&self, begin: usize, end: usize) -> &'a [u8] {
        let len = self.bytes.len();
        let begin = begin.min(len);
        &self.bytes[begin..end.clamp(begin, len)]
    }
}

impl fmt::Debug for SubStreamView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubStreamView")
            .field("start", &self.start)
            .field("len", &self.bytes.len())
            .field("bytes", &BStr::new(self.bytes))
            .finish()
    }
}

//! The incremental decode-stream core.
//!
//! A [`DecodeStream`] exposes a byte-oriented, cursor-based interface over
//! data that a [`BlockProducer`] appends block by block. Every read that
//! outruns the buffered data calls the producer inline until enough bytes
//! exist or the producer reports exhaustion; decoded bytes are never
//! discarded, so [`reset`] followed by re-reading replays them from the
//! buffer without touching the producer again.
//!
//! [`reset`]: DecodeStream::reset

use alloc::vec::Vec;
use core::fmt;

use crate::{buffer::ByteBuffer, flat::FlatSource, source::ByteSource, view::SubStreamView};

/// Outcome of one [`BlockProducer::produce`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStatus {
    /// Bytes may have been appended; call again for more.
    Produced,
    /// Nothing was appended and nothing remains; the stream is at end of
    /// data and the producer will not be called again.
    Exhausted,
}

/// The decoder-specific step that feeds a [`DecodeStream`].
///
/// One `produce` call appends the next available block of decoded bytes to
/// `sink`, or returns [`BlockStatus::Exhausted`] when no input remains. The
/// stream stops calling `produce` after the first `Exhausted`, so producers
/// need not be defensive about being polled past the end.
///
/// A call may legitimately append nothing and still return `Produced` (for
/// example when a constituent source turns out to be empty), but every such
/// call must bring the producer strictly closer to exhaustion: a producer
/// that neither appends nor ever exhausts makes drain-to-end reads loop
/// forever. That termination obligation is a contract on implementations,
/// not something the stream can enforce.
pub trait BlockProducer {
    /// Appends the next block of decoded bytes to `sink`, or reports
    /// exhaustion.
    fn produce(&mut self, sink: &mut ByteBuffer) -> BlockStatus;

    /// Total decoded length, for producers that can compute it cheaply
    /// without decoding. `None` when unknown.
    fn decoded_len(&self) -> Option<usize> {
        None
    }

    /// The flat sources ultimately feeding this producer, if any.
    fn base_sources(&self) -> Vec<&FlatSource> {
        Vec::new()
    }
}

/// A lazy, incrementally growing byte stream over an injected producer.
///
/// The stream owns a [`ByteBuffer`] holding everything decoded so far, a
/// forward read cursor, and an end-of-data flag that moves from `false` to
/// `true` exactly once. End of data is not an error: single-value reads
/// return `None` once the cursor catches up with an exhausted producer, and
/// bulk reads silently return fewer bytes than requested.
///
/// # Examples
///
/// ```rust
/// use bytemodem::{BlockProducer, BlockStatus, ByteBuffer, DecodeStream};
///
/// /// Doubles each input byte, one block per call.
/// struct Doubler(Vec<u8>);
///
/// impl BlockProducer for Doubler {
///     fn produce(&mut self, sink: &mut ByteBuffer) -> BlockStatus {
///         if self.0.is_empty() {
///             return BlockStatus::Exhausted;
///         }
///         let byte = self.0.remove(0);
///         sink.push_slice(&[byte, byte]);
///         BlockStatus::Produced
///     }
/// }
///
/// let mut stream = DecodeStream::new(Doubler(vec![1, 2]));
/// assert_eq!(stream.read_bytes(3), &[1, 1, 2]);
/// assert_eq!(stream.read_byte(), Some(2));
/// assert_eq!(stream.read_byte(), None);
/// ```
pub struct DecodeStream<P> {
    buffer: ByteBuffer,
    pos: usize,
    eof: bool,
    producer: P,
}

impl<P: BlockProducer> DecodeStream<P> {
    /// Creates a stream with the default buffer sizing.
    pub fn new(producer: P) -> Self {
        Self::with_size_hint(producer, 0)
    }

    /// Creates a stream whose buffer is pre-sized for roughly `size_hint`
    /// decoded bytes. The hint is an optimization, not a bound.
    pub fn with_size_hint(producer: P, size_hint: usize) -> Self {
        Self {
            buffer: ByteBuffer::with_size_hint(size_hint),
            pos: 0,
            eof: false,
            producer,
        }
    }

    /// The backing buffer of decoded bytes.
    #[must_use]
    pub fn buffer(&self) -> &ByteBuffer {
        &self.buffer
    }

    /// The producer feeding this stream.
    #[must_use]
    pub fn producer(&self) -> &P {
        &self.producer
    }

    /// Current read cursor.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Whether the producer has reported exhaustion. Monotonic.
    #[must_use]
    pub fn eof(&self) -> bool {
        self.eof
    }

    /// Total decoded length.
    ///
    /// # Panics
    ///
    /// Panics when the producer cannot compute its decoded length cheaply;
    /// asking for it is a contract error, not a data condition.
    #[must_use]
    pub fn decoded_len(&self) -> usize {
        let Some(len) = self.producer.decoded_len() else {
            panic!("decoded length is not known for this producer");
        };
        len
    }

    /// Whether the stream decodes to zero bytes. Forces production until a
    /// byte exists or the producer is exhausted.
    #[allow(clippy::wrong_self_convention)]
    pub fn is_empty(&mut self) -> bool {
        while !self.eof && self.buffer.is_empty() {
            self.produce_block();
        }
        self.buffer.is_empty()
    }

    /// The next byte, advancing the cursor, or `None` at end of data.
    pub fn read_byte(&mut self) -> Option<u8> {
        while self.buffer.len() <= self.pos {
            if self.eof {
                return None;
            }
            self.produce_block();
        }
        let byte = self.buffer.as_slice()[self.pos];
        self.pos += 1;
        Some(byte)
    }

    /// Two bytes combined big-endian, or `None` if the stream ends first.
    pub fn read_u16_be(&mut self) -> Option<u16> {
        let b0 = self.read_byte()?;
        let b1 = self.read_byte()?;
        Some((u16::from(b0) << 8) | u16::from(b1))
    }

    /// Four bytes combined big-endian as a signed 32-bit value.
    ///
    /// Unlike [`read_u16_be`], this does not check the individual byte reads
    /// for end of data: each missing byte contributes `-1` to the combining
    /// arithmetic, so a stream that ends mid-read yields a numerically
    /// meaningless, non-failing value. Callers that care must check
    /// [`eof`] afterwards.
    ///
    /// [`read_u16_be`]: DecodeStream::read_u16_be
    /// [`eof`]: DecodeStream::eof
    pub fn read_i32_be(&mut self) -> i32 {
        let b0 = self.read_byte().map_or(-1, i32::from);
        let b1 = self.read_byte().map_or(-1, i32::from);
        let b2 = self.read_byte().map_or(-1, i32::from);
        let b3 = self.read_byte().map_or(-1, i32::from);
        b0.wrapping_shl(24)
            .wrapping_add(b1 << 16)
            .wrapping_add(b2 << 8)
            .wrapping_add(b3)
    }

    /// The next `n` bytes, advancing the cursor past them.
    ///
    /// Production runs until `n` bytes are buffered past the cursor or the
    /// producer is exhausted; if the stream ends early the returned slice is
    /// silently shorter than `n`.
    pub fn read_bytes(&mut self, n: usize) -> &[u8] {
        if n == 0 {
            return &[];
        }
        let start = self.pos;
        self.buffer.ensure_capacity(start + n);
        let mut end = start + n;
        while !self.eof && self.buffer.len() < end {
            self.produce_block();
        }
        end = end.min(self.buffer.len());
        self.pos = end;
        &self.buffer.as_slice()[start.min(end)..end]
    }

    /// Everything from the cursor to the end of the stream, forcing
    /// production to exhaustion.
    pub fn read_to_end(&mut self) -> &[u8] {
        while !self.eof {
            self.produce_block();
        }
        let start = self.pos.min(self.buffer.len());
        self.pos = self.buffer.len();
        &self.buffer.as_slice()[start..]
    }

    /// The next byte without consuming it.
    ///
    /// Any production triggered (and any buffer growth it causes) is kept;
    /// only the cursor is rewound.
    pub fn peek_byte(&mut self) -> Option<u8> {
        let byte = self.read_byte();
        if byte.is_some() {
            self.pos -= 1;
        }
        byte
    }

    /// Up to `n` bytes without consuming them. The cursor is rewound by
    /// exactly the number of bytes returned.
    pub fn peek_bytes(&mut self, n: usize) -> &[u8] {
        let len = self.read_bytes(n).len();
        self.pos -= len;
        &self.buffer.as_slice()[self.pos..self.pos + len]
    }

    /// A view over decoded bytes `[start, start + length)`, producing first
    /// until the range is covered. `None` drains the stream and takes
    /// everything from `start` on. If the stream ends before the range is
    /// covered the view is silently truncated.
    ///
    /// The view borrows this stream, so no further reads or production can
    /// happen while it is alive; whatever growth the view's range needed is
    /// final by the time the view exists.
    pub fn make_sub_stream_view(&mut self, start: usize, length: Option<usize>) -> SubStreamView<'_> {
        if let Some(length) = length {
            let end = start + length;
            while self.buffer.len() <= end && !self.eof {
                self.produce_block();
            }
        } else {
            while !self.eof {
                self.produce_block();
            }
        }
        let buffered = self.buffer.len();
        let begin = start.min(buffered);
        let end = length.map_or(buffered, |length| (start + length).clamp(begin, buffered));
        SubStreamView::new(&self.buffer.as_slice()[begin..end], start)
    }

    /// Random access into the decoded bytes.
    ///
    /// # Panics
    ///
    /// Always: a decode stream cannot address data it has not produced yet.
    /// Flat sources implement this; see [`FlatSource::get_byte_range`].
    #[must_use]
    pub fn get_byte_range(&self, _begin: usize, _end: usize) -> &[u8] {
        panic!("byte-range access is not supported on a decode stream");
    }

    /// Advances the cursor by `n` bytes without forcing production; the
    /// skipped range is produced lazily by the next read that needs it.
    pub fn skip(&mut self, n: usize) {
        self.pos += n;
    }

    /// Rewinds the cursor to the start. Buffered bytes and the end-of-data
    /// flag are retained, so re-reading replays the same bytes.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// The flat sources ultimately feeding this stream, or empty when the
    /// producer does not decode from flat sources.
    #[must_use]
    pub fn base_sources(&self) -> Vec<&FlatSource> {
        self.producer.base_sources()
    }

    fn produce_block(&mut self) {
        debug_assert!(!self.eof);
        if self.producer.produce(&mut self.buffer) == BlockStatus::Exhausted {
            self.eof = true;
        }
    }
}

impl<P: BlockProducer> Iterator for DecodeStream<P> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.read_byte()
    }
}

impl<P: BlockProducer> ByteSource for DecodeStream<P> {
    fn estimated_len(&self) -> usize {
        self.buffer.raw_hint()
    }

    fn drain_into(&mut self, sink: &mut ByteBuffer) {
        let remaining = self.read_to_end();
        sink.push_slice(remaining);
    }

    fn base_sources(&self) -> Vec<&FlatSource> {
        self.producer.base_sources()
    }
}

impl<P> fmt::Debug for DecodeStream<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeStream")
            .field("pos", &self.pos)
            .field("eof", &self.eof)
            .field("buffer", &self.buffer)
            .finish_non_exhaustive()
    }
}

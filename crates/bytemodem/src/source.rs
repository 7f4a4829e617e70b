use alloc::vec::Vec;

use crate::{buffer::ByteBuffer, flat::FlatSource};

/// A source of bytes that a [`SequenceStream`] can consume as one
/// constituent.
///
/// Implemented by [`FlatSource`] (exact length, bytes already materialized)
/// and by every [`DecodeStream`] (length only estimated, bytes produced on
/// demand), so a sequence can mix the two freely.
///
/// [`SequenceStream`]: crate::SequenceStream
/// [`DecodeStream`]: crate::DecodeStream
pub trait ByteSource {
    /// A cheap size estimate, used only to pre-size the consuming buffer.
    /// Exact for flat sources, a hint for decode streams.
    fn estimated_len(&self) -> usize;

    /// Appends everything remaining in this source to `sink`, consuming it.
    /// For a decode stream this forces production to the very end.
    fn drain_into(&mut self, sink: &mut ByteBuffer);

    /// The flat sources ultimately feeding this one, depth-first and
    /// left-to-right. A flat source lists itself.
    fn base_sources(&self) -> Vec<&FlatSource>;
}

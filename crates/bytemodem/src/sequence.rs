//! Lazy concatenation of an ordered list of byte sources.

use alloc::{boxed::Box, collections::VecDeque, vec::Vec};

use crate::{
    buffer::ByteBuffer,
    flat::FlatSource,
    source::ByteSource,
    stream::{BlockProducer, BlockStatus, DecodeStream},
};

/// Producer that drains an ordered list of constituent sources, one whole
/// constituent per production call.
///
/// Constituents may be flat sources or decode streams in any mix. Each one
/// is removed from the list and consumed exactly once, fully, before the
/// next is considered; the list becomes empty exactly when the owning
/// stream reaches end of data.
pub struct SequenceProducer {
    sources: VecDeque<Box<dyn ByteSource>>,
}

impl SequenceProducer {
    /// Number of constituents not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.sources.len()
    }
}

impl BlockProducer for SequenceProducer {
    fn produce(&mut self, sink: &mut ByteBuffer) -> BlockStatus {
        let Some(mut source) = self.sources.pop_front() else {
            return BlockStatus::Exhausted;
        };
        source.drain_into(sink);
        BlockStatus::Produced
    }

    fn base_sources(&self) -> Vec<&FlatSource> {
        self.sources
            .iter()
            .flat_map(|source| source.base_sources())
            .collect()
    }
}

/// A decode stream that lazily concatenates constituent sources in order.
pub type SequenceStream = DecodeStream<SequenceProducer>;

impl DecodeStream<SequenceProducer> {
    /// Creates a stream concatenating `sources` in order.
    ///
    /// The constituents' size estimates are summed into the stream's buffer
    /// size hint; the sum only pre-sizes the buffer and is not trusted as a
    /// bound on the decoded length.
    #[must_use]
    pub fn from_sources(sources: Vec<Box<dyn ByteSource>>) -> Self {
        let size_hint = sources.iter().map(|source| source.estimated_len()).sum();
        DecodeStream::with_size_hint(
            SequenceProducer {
                sources: sources.into(),
            },
            size_hint,
        )
    }
}

mod sequence;

use alloc::{collections::VecDeque, vec::Vec};

use crate::{BlockProducer, BlockStatus, ByteBuffer};

/// Test producer: yields fixed chunks one per production call, and counts
/// how often it was called.
pub(crate) struct ChunkProducer {
    chunks: VecDeque<Vec<u8>>,
    known_len: Option<usize>,
    calls: usize,
}

impl ChunkProducer {
    pub(crate) fn new<I>(chunks: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        Self {
            chunks: chunks.into_iter().collect(),
            known_len: None,
            calls: 0,
        }
    }

    /// Like `new`, but also reports the summed chunk length as the decoded
    /// length.
    pub(crate) fn with_known_len<I>(chunks: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let mut producer = Self::new(chunks);
        producer.known_len = Some(producer.chunks.iter().map(Vec::len).sum());
        producer
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls
    }
}

impl BlockProducer for ChunkProducer {
    fn produce(&mut self, sink: &mut ByteBuffer) -> BlockStatus {
        self.calls += 1;
        match self.chunks.pop_front() {
            Some(chunk) => {
                sink.push_slice(&chunk);
                BlockStatus::Produced
            }
            None => BlockStatus::Exhausted,
        }
    }

    fn decoded_len(&self) -> Option<usize> {
        self.known_len
    }
}

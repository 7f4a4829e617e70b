//! A lazy, incrementally growing decode-stream core.
//!
//! [`DecodeStream`] puts a byte-oriented, cursor-based interface over data
//! that a decoder produces gradually: reads pull blocks from an injected
//! [`BlockProducer`] only when the cursor outruns what has been buffered,
//! decoded bytes accumulate in a doubling [`ByteBuffer`], and end of data is
//! a sentinel condition rather than an error. [`SequenceStream`] is the one
//! concrete composition shipped here: it concatenates an ordered list of
//! constituent sources, draining one whole constituent per production step.
//!
//! ```rust
//! use bytemodem::{ByteSource, FlatSource, SequenceStream};
//!
//! let sources: Vec<Box<dyn ByteSource>> = vec![
//!     Box::new(FlatSource::from(b"lazy ")),
//!     Box::new(FlatSource::from(b"bytes")),
//! ];
//! let mut stream = SequenceStream::from_sources(sources);
//!
//! assert_eq!(stream.peek_byte(), Some(b'l'));
//! assert_eq!(stream.read_bytes(4), b"lazy");
//! assert_eq!(stream.read_to_end(), b" bytes");
//! assert!(stream.eof());
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod flat;
mod sequence;
mod source;
mod stream;
mod view;

#[cfg(test)]
mod tests;

pub use buffer::ByteBuffer;
pub use flat::FlatSource;
pub use sequence::{SequenceProducer, SequenceStream};
pub use source::ByteSource;
pub use stream::{BlockProducer, BlockStatus, DecodeStream};
pub use view::SubStreamView;

use alloc::{boxed::Box, vec, vec::Vec};

use super::ChunkProducer;
use crate::{ByteSource, DecodeStream, FlatSource, SequenceStream};

fn flat(bytes: &[u8]) -> Box<dyn ByteSource> {
    Box::new(FlatSource::from(bytes))
}

fn sources(parts: &[&[u8]]) -> Vec<Box<dyn ByteSource>> {
    parts.iter().map(|part| flat(part)).collect()
}

#[test]
fn drains_constituents_in_order() {
    let mut stream = SequenceStream::from_sources(sources(&[b"aa", b"bbb", b"c"]));
    assert_eq!(stream.read_to_end(), b"aabbbc");
    assert!(stream.eof());
}

#[test]
fn one_production_call_consumes_one_whole_constituent() {
    let mut stream = SequenceStream::from_sources(sources(&[b"aa", b"bb", b"cc"]));
    assert_eq!(stream.producer().remaining(), 3);
    assert_eq!(stream.read_bytes(2), b"aa");
    // The first constituent was consumed in full and nothing more.
    assert_eq!(stream.producer().remaining(), 2);
    assert_eq!(stream.buffer().len(), 2);
    assert!(!stream.eof());
}

#[test]
fn eof_arrives_exactly_when_the_list_is_empty() {
    let mut stream = SequenceStream::from_sources(sources(&[b"ab", b"cd"]));
    assert_eq!(stream.read_bytes(4), b"abcd");
    assert_eq!(stream.producer().remaining(), 0);
    assert!(!stream.eof());
    assert_eq!(stream.read_byte(), None);
    assert!(stream.eof());
}

#[test]
fn empty_sequence_is_immediately_empty() {
    let mut stream = SequenceStream::from_sources(Vec::new());
    assert!(stream.is_empty());
    assert!(stream.eof());
    assert_eq!(stream.read_byte(), None);
    assert_eq!(stream.read_to_end(), b"");
}

#[test]
fn empty_constituents_do_not_interrupt_the_concatenation() {
    let mut stream = SequenceStream::from_sources(sources(&[b"", b"ab", b"", b"cd", b""]));
    assert_eq!(stream.read_to_end(), b"abcd");
}

#[test]
fn constituents_may_be_decode_streams() {
    let inner = DecodeStream::new(ChunkProducer::new([b"deco".to_vec(), b"ded".to_vec()]));
    let constituents: Vec<Box<dyn ByteSource>> =
        vec![flat(b"flat|"), Box::new(inner), flat(b"|tail")];
    let mut stream = SequenceStream::from_sources(constituents);
    assert_eq!(stream.read_to_end(), b"flat|decoded|tail");
}

#[test]
fn constituents_contribute_only_what_remains_past_their_cursor() {
    let mut drained = FlatSource::from(b"xyz");
    let _ = drained.read_remaining();
    let mut rewound = FlatSource::from(b"abc");
    let _ = rewound.read_remaining();
    rewound.reset();

    let constituents: Vec<Box<dyn ByteSource>> = vec![Box::new(drained), Box::new(rewound)];
    let mut stream = SequenceStream::from_sources(constituents);
    assert_eq!(stream.read_to_end(), b"abc");
}

#[test]
fn nested_sequences_flatten_their_base_sources_in_order() {
    let inner = SequenceStream::from_sources(sources(&[b"b", b"c"]));
    let constituents: Vec<Box<dyn ByteSource>> = vec![flat(b"a"), Box::new(inner), flat(b"d")];
    let stream = SequenceStream::from_sources(constituents);

    let bases: Vec<&[u8]> = stream
        .base_sources()
        .iter()
        .map(|source| source.as_bytes())
        .collect();
    assert_eq!(bases, [b"a", b"b", b"c", b"d"]);
}

#[test]
fn base_sources_skip_plain_decoder_constituents() {
    let opaque = DecodeStream::new(ChunkProducer::new([b"zz".to_vec()]));
    let constituents: Vec<Box<dyn ByteSource>> = vec![flat(b"a"), Box::new(opaque)];
    let stream = SequenceStream::from_sources(constituents);
    let bases = stream.base_sources();
    assert_eq!(bases.len(), 1);
    assert_eq!(bases[0].as_bytes(), b"a");
}

#[test]
fn size_hint_sums_constituent_estimates() {
    let stream = SequenceStream::from_sources(sources(&[&[0u8; 300], &[0u8; 300]]));
    // 600 rounds up to the next power of two.
    assert_eq!(stream.buffer().min_capacity(), 1024);
    assert_eq!(stream.buffer().raw_hint(), 600);
}

#[test]
fn decode_stream_constituents_contribute_their_raw_hint() {
    let inner = DecodeStream::with_size_hint(ChunkProducer::new([b"x".to_vec()]), 700);
    let constituents: Vec<Box<dyn ByteSource>> = vec![Box::new(inner), flat(&[0u8; 100])];
    let stream = SequenceStream::from_sources(constituents);
    assert_eq!(stream.buffer().raw_hint(), 800);
    assert_eq!(stream.buffer().min_capacity(), 1024);
}

#[test]
fn sequence_reset_replays_the_concatenation() {
    let mut stream = SequenceStream::from_sources(sources(&[b"ab", b"cd"]));
    let first: Vec<u8> = stream.read_to_end().to_vec();
    stream.reset();
    assert_eq!(stream.read_to_end(), first);
    assert_eq!(stream.producer().remaining(), 0);
}

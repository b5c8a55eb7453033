//! Error path tests for symzip-codec

use crate::engine::{compress, decompress, huffman_decompress, rle_decompress, CodecEngine};
use crate::huffman::HuffmanCodec;
use crate::wire::{decode_payload, encode_payload};
use symzip_types::{
    AnalyzerThresholds, CodecKind, Error, ErrorKind, Payload, RleAlgorithm, RleItem, RlePayload,
    SerializedNode, Symbol, SymbolCodec, SymbolDomain, SymbolInput, WireFormat,
};

/// Every codec rejects empty input the same way
#[test]
fn test_empty_input_for_every_codec() {
    for kind in CodecKind::all() {
        for input in [SymbolInput::Text(""), SymbolInput::Bytes(&[])] {
            let err = compress(input, kind, AnalyzerThresholds::default()).unwrap_err();
            assert_eq!(err, Error::EmptyInput, "codec {}", kind);
            assert_eq!(err.kind(), ErrorKind::EmptyInput);
            assert!(!err.should_retry());
        }
    }
}

/// Truncating packed bytes loses symbols
#[test]
fn test_truncated_huffman_stream() {
    let mut payload = HuffmanCodec::new()
        .encode("the quick brown fox jumps over the lazy dog".into())
        .unwrap();
    payload.packed_bytes.truncate(payload.packed_bytes.len() / 2);
    payload.padding_bits = 0;

    assert!(matches!(
        huffman_decompress(&payload),
        Err(Error::LengthMismatch { .. })
    ));
}

/// A tree whose internal frequencies do not add up is rejected
#[test]
fn test_inconsistent_tree() {
    let mut payload = HuffmanCodec::new().encode("abcabc".into()).unwrap();
    if let SerializedNode::Internal { internal, .. } = &mut payload.tree {
        *internal += 1;
    }
    let err = huffman_decompress(&payload).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedPayload);
}

/// A corrupted stream either decodes to a wrong length or fails cleanly
#[test]
fn test_corrupted_huffman_stream_never_panics() {
    let codec = HuffmanCodec::new();
    let original = codec.encode("mississippi".into()).unwrap();

    for index in 0..original.packed_bytes.len() {
        for flip in [0x01u8, 0x80, 0xFF] {
            let mut payload = original.clone();
            payload.packed_bytes[index] ^= flip;
            // Any result is fine as long as it is not a panic.
            let _ = codec.decode(&payload);
        }
    }
}

/// Run counts that overflow on summation are a length mismatch
#[test]
fn test_overflowing_run_counts() {
    let symbol = Symbol::from_char('a');
    let payload = RlePayload {
        items: vec![
            RleItem::Run {
                symbol,
                count: usize::MAX,
            },
            RleItem::Run {
                symbol,
                count: usize::MAX,
            },
        ],
        original_length: 10,
        domain: SymbolDomain::Text,
        algorithm: RleAlgorithm::Basic,
    };
    assert_eq!(
        rle_decompress(&payload),
        Err(Error::LengthMismatch {
            expected: 10,
            actual: usize::MAX
        })
    );
}

/// Symbols outside the byte range cannot decode into bytes
#[test]
fn test_rle_symbol_outside_domain() {
    let payload = RlePayload {
        items: vec![RleItem::Run {
            symbol: Symbol::new(0x1F600),
            count: 2,
        }],
        original_length: 2,
        domain: SymbolDomain::Bytes,
        algorithm: RleAlgorithm::Basic,
    };
    assert!(matches!(
        rle_decompress(&payload),
        Err(Error::MalformedPayload { .. })
    ));
}

/// Surrogate code points are not valid text symbols
#[test]
fn test_rle_invalid_char_in_text() {
    let payload = RlePayload {
        items: vec![RleItem::Sequence {
            symbols: vec![Symbol::new(0x61), Symbol::new(0xD800)],
        }],
        original_length: 2,
        domain: SymbolDomain::Text,
        algorithm: RleAlgorithm::Adaptive,
    };
    assert!(matches!(
        rle_decompress(&payload),
        Err(Error::MalformedPayload { .. })
    ));
}

/// Vocabulary mixing is rejected in both directions
#[test]
fn test_foreign_vocabulary() {
    let symbol = Symbol::from_char('q');
    let short_run_in_basic = RlePayload {
        items: vec![RleItem::ShortRun { symbol, count: 2 }],
        original_length: 2,
        domain: SymbolDomain::Text,
        algorithm: RleAlgorithm::Basic,
    };
    let single_in_adaptive = RlePayload {
        items: vec![RleItem::Single { symbol }],
        original_length: 1,
        domain: SymbolDomain::Text,
        algorithm: RleAlgorithm::Adaptive,
    };

    for payload in [short_run_in_basic, single_in_adaptive] {
        let err = decompress(&Payload::Rle(payload)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownItemType);
    }
}

/// Errors surface through the engine and leave its statistics untouched
#[test]
fn test_engine_propagates_decode_errors() {
    let mut engine = CodecEngine::new();
    let mut payload = engine.compress("abcabc".into()).unwrap();
    if let Payload::Huffman(huffman) = &mut payload {
        huffman.original_length += 1;
    }

    assert!(matches!(
        engine.decompress(&payload),
        Err(Error::LengthMismatch { .. })
    ));
    assert_eq!(engine.stats().decompressions, 0);
}

/// A wire payload that parses but is inconsistent fails at decode time
#[test]
fn test_wire_then_decode_length_mismatch() {
    let payload = compress("aaaabbbcc".into(), CodecKind::Rle, AnalyzerThresholds::default())
        .unwrap();
    let bytes = encode_payload(&payload, WireFormat::MessagePack).unwrap();
    let mut decoded = decode_payload(&bytes, WireFormat::MessagePack).unwrap();
    if let Payload::Rle(rle) = &mut decoded {
        rle.original_length = 8;
    }
    assert_eq!(
        decompress(&decoded),
        Err(Error::LengthMismatch {
            expected: 8,
            actual: 9
        })
    );
}

/// Matching forged length and run count fail instead of aborting on allocation
#[test]
fn test_wire_forged_length_and_count() {
    let json = br#"{"codec":"rle","items":[{"type":"run","symbol":97,"count":4611686018427387904}],
        "original_length":4611686018427387904,"domain":"text","algorithm":"basic"}"#;
    let payload = decode_payload(json, WireFormat::Json).unwrap();
    let err = decompress(&payload).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedPayload);
}

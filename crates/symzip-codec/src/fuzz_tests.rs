//! Property tests for symzip-codec components

use crate::adaptive::{AdaptiveRleCodec, MAX_SEQUENCE_LEN};
use crate::analyzer::EffectivenessAnalyzer;
use crate::code_table::CodeTable;
use crate::engine::{compress, decompress};
use crate::frequency::FrequencyTable;
use crate::rle::RleCodec;
use crate::tree::HuffmanTree;
use crate::wire::{decode_payload, encode_payload};
use proptest::prelude::*;
use symzip_types::{
    AnalyzerThresholds, CodecKind, RleItem, SymbolCodec, SymbolInput, SymbolOutput, WireFormat,
};

/// Concrete codecs
fn codec_strategy() -> impl Strategy<Value = CodecKind> {
    prop_oneof![
        Just(CodecKind::Huffman),
        Just(CodecKind::Rle),
        Just(CodecKind::AdaptiveRle),
        Just(CodecKind::Auto),
    ]
}

/// Byte inputs ranging from noise to long runs
fn bytes_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 1..=2048),
        (any::<u8>(), 1usize..=4096).prop_map(|(byte, size)| vec![byte; size]),
        prop::collection::vec((any::<u8>(), 1usize..=12), 1..=200).prop_map(|runs| {
            runs.into_iter()
                .flat_map(|(byte, count)| std::iter::repeat(byte).take(count))
                .collect()
        }),
        prop::collection::vec(0u8..4, 1..=1024),
    ]
}

/// Text inputs across ASCII and multi-byte characters
fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{1,512}",
        "[ab]{1,256}",
        prop::collection::vec((any::<char>(), 1usize..=8), 1..=64).prop_map(|runs| {
            runs.into_iter()
                .flat_map(|(ch, count)| std::iter::repeat(ch).take(count))
                .collect()
        }),
    ]
}

proptest! {
    #[test]
    fn test_bytes_roundtrip(data in bytes_strategy(), kind in codec_strategy()) {
        let payload = compress((&data).into(), kind, AnalyzerThresholds::default()).unwrap();
        prop_assert_eq!(payload.original_length(), data.len());
        prop_assert_eq!(decompress(&payload).unwrap(), SymbolOutput::Bytes(data));
    }

    #[test]
    fn test_text_roundtrip(text in text_strategy(), kind in codec_strategy()) {
        let payload = compress((&text).into(), kind, AnalyzerThresholds::default()).unwrap();
        prop_assert_eq!(decompress(&payload).unwrap(), SymbolOutput::Text(text));
    }

    #[test]
    fn test_wire_roundtrip(data in bytes_strategy(), kind in codec_strategy(), json in any::<bool>()) {
        let format = if json { WireFormat::Json } else { WireFormat::MessagePack };
        let payload = compress((&data).into(), kind, AnalyzerThresholds::default()).unwrap();
        let bytes = encode_payload(&payload, format).unwrap();
        prop_assert_eq!(decode_payload(&bytes, format).unwrap(), payload);
    }

    #[test]
    fn test_code_table_prefix_free(text in text_strategy()) {
        let symbols = SymbolInput::from(&text).symbols();
        let frequencies = FrequencyTable::from_symbols(&symbols).unwrap();
        let tree = HuffmanTree::from_frequencies(&frequencies).unwrap();
        let codes = CodeTable::from_tree(&tree);

        prop_assert_eq!(codes.len(), frequencies.distinct());
        prop_assert!(codes.is_prefix_free());
        prop_assert_eq!(tree.root().freq(), symbols.len() as u64);
    }

    #[test]
    fn test_single_symbol_roundtrip(byte in any::<u8>(), count in 1usize..=2000, kind in codec_strategy()) {
        let data = vec![byte; count];
        let payload = compress((&data).into(), kind, AnalyzerThresholds::default()).unwrap();
        prop_assert_eq!(decompress(&payload).unwrap(), SymbolOutput::Bytes(data));
    }

    #[test]
    fn test_basic_items_are_maximal(data in bytes_strategy()) {
        let items = RleCodec::new().encode((&data).into()).unwrap().items;
        for pair in items.windows(2) {
            let symbol_of = |item: &RleItem| match item {
                RleItem::Run { symbol, .. } | RleItem::Single { symbol } => *symbol,
                other => panic!("unexpected item {:?}", other),
            };
            prop_assert_ne!(symbol_of(&pair[0]), symbol_of(&pair[1]));
        }
    }

    #[test]
    fn test_adaptive_item_bounds(data in bytes_strategy()) {
        let items = AdaptiveRleCodec::new().encode((&data).into()).unwrap().items;
        for item in &items {
            match item {
                RleItem::Run { count, .. } => prop_assert!(*count >= 4),
                RleItem::ShortRun { count, .. } => prop_assert!((2..=3).contains(count)),
                RleItem::Sequence { symbols } => {
                    prop_assert!(!symbols.is_empty() && symbols.len() <= MAX_SEQUENCE_LEN);
                    prop_assert!(symbols.windows(2).all(|pair| pair[0] != pair[1]));
                }
                RleItem::Single { .. } => prop_assert!(false, "single in adaptive output"),
            }
        }
    }

    #[test]
    fn test_analyzer_is_deterministic(data in bytes_strategy()) {
        let analyzer = EffectivenessAnalyzer::new();
        let first = analyzer.analyze((&data).into()).unwrap();
        let second = analyzer.analyze((&data).into()).unwrap();
        prop_assert!(first.compression_potential >= 0.0 && first.compression_potential <= 1.0);
        prop_assert!(first.longest_run >= 1);
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_sequence_split_at_256_distinct_symbols() {
    let data: Vec<u8> = (0..=255u8).collect();
    let payload = AdaptiveRleCodec::new().encode((&data).into()).unwrap();
    let lengths: Vec<usize> = payload
        .items
        .iter()
        .map(|item| match item {
            RleItem::Sequence { symbols } => symbols.len(),
            other => panic!("expected sequence, got {:?}", other),
        })
        .collect();
    assert_eq!(lengths, vec![255, 1]);
    assert_eq!(
        AdaptiveRleCodec::new().decode(&payload).unwrap(),
        SymbolOutput::Bytes(data)
    );
}

//! Codec benchmarks for SymZip
//!
//! Measures compression and decompression throughput of every codec across
//! the shared data patterns, plus wire encoding and run analysis.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use symzip_codec::{
    compress, decode_payload, decompress, encode_payload, EffectivenessAnalyzer,
};
use symzip_tests::{generate_test_data, generate_test_text, CommonSizes, TestDataPattern};
use symzip_types::{AnalyzerThresholds, CodecKind, SymbolInput, WireFormat};

const CODECS: [CodecKind; 3] = [CodecKind::Huffman, CodecKind::Rle, CodecKind::AdaptiveRle];

fn benchmark_compression(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    for (size_name, size) in CommonSizes::benchmark() {
        for pattern in [TestDataPattern::Runs, TestDataPattern::Random, TestDataPattern::Skewed] {
            let data = generate_test_data(size, pattern);
            group.throughput(Throughput::Bytes(size as u64));

            for kind in CODECS {
                group.bench_with_input(
                    BenchmarkId::new(format!("{}/{}", kind, pattern.name()), size_name),
                    &data,
                    |b, data| {
                        b.iter(|| {
                            compress(
                                black_box(SymbolInput::Bytes(data)),
                                kind,
                                AnalyzerThresholds::default(),
                            )
                        })
                    },
                );
            }
        }
    }

    group.finish();
}

fn benchmark_decompression(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");
    let size = CommonSizes::MEDIUM;

    for pattern in [TestDataPattern::Runs, TestDataPattern::Skewed] {
        let data = generate_test_data(size, pattern);
        group.throughput(Throughput::Bytes(size as u64));

        for kind in CODECS {
            let Ok(payload) = compress(SymbolInput::Bytes(&data), kind, AnalyzerThresholds::default())
            else {
                continue;
            };
            group.bench_with_input(
                BenchmarkId::new(kind.to_string(), pattern.name()),
                &payload,
                |b, payload| b.iter(|| decompress(black_box(payload))),
            );
        }
    }

    group.finish();
}

fn benchmark_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    let text = generate_test_text(64 * 1024);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for kind in CODECS {
        group.bench_function(kind.to_string(), |b| {
            b.iter(|| {
                compress(
                    black_box(SymbolInput::Text(&text)),
                    kind,
                    AnalyzerThresholds::default(),
                )
            })
        });
    }

    group.finish();
}

fn benchmark_wire(c: &mut Criterion) {
    let mut group = c.benchmark_group("wire");
    let data = generate_test_data(CommonSizes::SMALL, TestDataPattern::Mixed);

    let Ok(payload) = compress(
        SymbolInput::Bytes(&data),
        CodecKind::Huffman,
        AnalyzerThresholds::default(),
    ) else {
        return;
    };

    for format in [WireFormat::Json, WireFormat::MessagePack] {
        let Ok(encoded) = encode_payload(&payload, format) else {
            continue;
        };
        group.bench_function(BenchmarkId::new("encode", format.extension()), |b| {
            b.iter(|| encode_payload(black_box(&payload), format))
        });
        group.bench_function(BenchmarkId::new("decode", format.extension()), |b| {
            b.iter(|| decode_payload(black_box(&encoded), format))
        });
    }

    group.finish();
}

fn benchmark_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let analyzer = EffectivenessAnalyzer::new();

    for pattern in TestDataPattern::all() {
        let data = generate_test_data(CommonSizes::LARGE, pattern);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(pattern.name()),
            &data,
            |b, data| b.iter(|| analyzer.analyze(black_box(SymbolInput::Bytes(data)))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_compression,
    benchmark_decompression,
    benchmark_text,
    benchmark_wire,
    benchmark_analysis
);
criterion_main!(benches);

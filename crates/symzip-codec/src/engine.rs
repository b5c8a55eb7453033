//! Codec entry points and the stateful codec engine
//!
//! The free functions are the stateless public operations. [`CodecEngine`]
//! wraps them with a default codec, `Auto` resolution through the
//! [`EffectivenessAnalyzer`], and per-instance [`CodecStats`].

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use symzip_types::{
    AnalyzerThresholds, CodecKind, HuffmanPayload, Payload, Result, RleAlgorithm, RlePayload,
    SymbolCodec, SymbolInput, SymbolOutput,
};
use tracing::{debug, info};

use crate::adaptive::AdaptiveRleCodec;
use crate::analyzer::{EffectivenessAnalyzer, RleEffectiveness};
use crate::huffman::HuffmanCodec;
use crate::rle::RleCodec;

/// Huffman-compress an input
pub fn huffman_compress(input: SymbolInput<'_>) -> Result<HuffmanPayload> {
    HuffmanCodec::new().encode(input)
}

/// Decompress a Huffman payload
pub fn huffman_decompress(payload: &HuffmanPayload) -> Result<SymbolOutput> {
    HuffmanCodec::new().decode(payload)
}

/// Run-length compress an input with the chosen algorithm
pub fn rle_compress(input: SymbolInput<'_>, algorithm: RleAlgorithm) -> Result<RlePayload> {
    match algorithm {
        RleAlgorithm::Basic => RleCodec::new().encode(input),
        RleAlgorithm::Adaptive => AdaptiveRleCodec::new().encode(input),
    }
}

/// Decompress a run-length payload with the algorithm it records
pub fn rle_decompress(payload: &RlePayload) -> Result<SymbolOutput> {
    match payload.algorithm {
        RleAlgorithm::Basic => RleCodec::new().decode(payload),
        RleAlgorithm::Adaptive => AdaptiveRleCodec::new().decode(payload),
    }
}

/// Compress with any codec; `Auto` is resolved with `thresholds`
pub fn compress(
    input: SymbolInput<'_>,
    kind: CodecKind,
    thresholds: AnalyzerThresholds,
) -> Result<Payload> {
    let kind = resolve(input, kind, &EffectivenessAnalyzer::with_thresholds(thresholds))?;
    match kind {
        CodecKind::Rle => rle_compress(input, RleAlgorithm::Basic).map(Payload::from),
        CodecKind::AdaptiveRle => rle_compress(input, RleAlgorithm::Adaptive).map(Payload::from),
        CodecKind::Huffman | CodecKind::Auto => huffman_compress(input).map(Payload::from),
    }
}

/// Decompress any payload
pub fn decompress(payload: &Payload) -> Result<SymbolOutput> {
    match payload {
        Payload::Huffman(payload) => huffman_decompress(payload),
        Payload::Rle(payload) => rle_decompress(payload),
    }
}

fn resolve(
    input: SymbolInput<'_>,
    kind: CodecKind,
    analyzer: &EffectivenessAnalyzer,
) -> Result<CodecKind> {
    if kind != CodecKind::Auto {
        return Ok(kind);
    }
    let report = analyzer.analyze(input)?;
    let chosen = if report.recommended {
        CodecKind::AdaptiveRle
    } else {
        CodecKind::Huffman
    };
    debug!(
        "Auto selected {} ({} runs, longest {})",
        chosen, report.run_count, report.longest_run
    );
    Ok(chosen)
}

/// Size of a payload's encoded body: packed bytes for Huffman, items for RLE
pub fn encoded_units(payload: &Payload) -> usize {
    match payload {
        Payload::Huffman(payload) => payload.packed_bytes.len(),
        Payload::Rle(payload) => payload.items.len(),
    }
}

/// Engine configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Codec used by [`CodecEngine::compress`]
    pub default_codec: CodecKind,
    /// Thresholds for `Auto` resolution and analysis
    pub thresholds: AnalyzerThresholds,
}

/// Engine statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodecStats {
    /// Successful compressions
    pub compressions: u64,
    /// Successful decompressions
    pub decompressions: u64,
    /// Compressions that used Huffman
    pub huffman: u64,
    /// Compressions that used basic RLE
    pub rle: u64,
    /// Compressions that used adaptive RLE
    pub adaptive_rle: u64,
    /// Symbols fed into compression
    pub symbols_compressed: u64,
    /// Input bytes fed into compression
    pub bytes_compressed: u64,
    /// Encoded units produced, see [`encoded_units`]
    pub encoded_units: u64,
    /// Symbols produced by decompression
    pub symbols_decompressed: u64,
    /// Average compression time
    pub avg_compression_time: Duration,
    /// Average decompression time
    pub avg_decompression_time: Duration,
    /// Average encoded units per input symbol
    pub avg_compression_ratio: f64,
}

impl CodecStats {
    /// Overall encoded units per input symbol
    pub fn compression_ratio(&self) -> f64 {
        if self.symbols_compressed == 0 {
            1.0
        } else {
            self.encoded_units as f64 / self.symbols_compressed as f64
        }
    }

    /// Record one compression
    pub fn update_compression(
        &mut self,
        payload: &Payload,
        input_bytes: usize,
        duration: Duration,
    ) {
        self.compressions += 1;
        match payload.codec_name() {
            "huffman" => self.huffman += 1,
            "rle" => self.rle += 1,
            _ => self.adaptive_rle += 1,
        }

        let symbols = payload.original_length() as u64;
        let units = encoded_units(payload) as u64;
        self.symbols_compressed += symbols;
        self.bytes_compressed += input_bytes as u64;
        self.encoded_units += units;

        let total_time = self.avg_compression_time.as_nanos() as u64 * (self.compressions - 1)
            + duration.as_nanos() as u64;
        self.avg_compression_time = Duration::from_nanos(total_time / self.compressions);

        let ratio = units as f64 / symbols.max(1) as f64;
        self.avg_compression_ratio = (self.avg_compression_ratio * (self.compressions - 1) as f64
            + ratio)
            / self.compressions as f64;
    }

    /// Record one decompression
    pub fn update_decompression(&mut self, symbols: usize, duration: Duration) {
        self.decompressions += 1;
        self.symbols_decompressed += symbols as u64;

        let total_time = self.avg_decompression_time.as_nanos() as u64 * (self.decompressions - 1)
            + duration.as_nanos() as u64;
        self.avg_decompression_time = Duration::from_nanos(total_time / self.decompressions);
    }
}

/// Codec engine with a default codec and running statistics
#[derive(Debug, Clone, Default)]
pub struct CodecEngine {
    config: EngineConfig,
    analyzer: EffectivenessAnalyzer,
    stats: CodecStats,
}

impl CodecEngine {
    /// Create an engine with Huffman as default and default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            analyzer: EffectivenessAnalyzer::with_thresholds(config.thresholds),
            stats: CodecStats::default(),
        }
    }

    /// Get engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get engine statistics
    pub fn stats(&self) -> &CodecStats {
        &self.stats
    }

    /// Reset statistics
    pub fn reset_stats(&mut self) {
        self.stats = CodecStats::default();
    }

    /// Compress with the default codec
    pub fn compress(&mut self, input: SymbolInput<'_>) -> Result<Payload> {
        self.compress_with(input, self.config.default_codec)
    }

    /// Compress with an explicit codec
    pub fn compress_with(&mut self, input: SymbolInput<'_>, kind: CodecKind) -> Result<Payload> {
        let start_time = Instant::now();
        let kind = resolve(input, kind, &self.analyzer)?;
        let payload = compress(input, kind, self.config.thresholds)?;
        let duration = start_time.elapsed();

        self.stats
            .update_compression(&payload, input.byte_len(), duration);
        info!(
            "Compressed {} {} symbols with {} into {} units in {:?}",
            payload.original_length(),
            payload.domain(),
            payload.codec_name(),
            encoded_units(&payload),
            duration
        );
        Ok(payload)
    }

    /// Decompress any payload
    pub fn decompress(&mut self, payload: &Payload) -> Result<SymbolOutput> {
        let start_time = Instant::now();
        let output = decompress(payload)?;
        let duration = start_time.elapsed();

        self.stats.update_decompression(output.len(), duration);
        info!(
            "Decompressed {} payload into {} symbols in {:?}",
            payload.codec_name(),
            output.len(),
            duration
        );
        Ok(output)
    }

    /// Run the effectiveness analyzer
    pub fn analyze(&self, input: SymbolInput<'_>) -> Result<RleEffectiveness> {
        self.analyzer.analyze(input)
    }

    /// Codec `Auto` would pick for this input
    pub fn recommend(&self, input: SymbolInput<'_>) -> Result<CodecKind> {
        resolve(input, CodecKind::Auto, &self.analyzer)
    }
}

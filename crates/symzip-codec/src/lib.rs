//! Huffman and run-length codecs for SymZip
//!
//! This crate implements the two lossless codec families and everything around
//! them:
//!
//! - **Huffman**: frequency analysis, optimal prefix tree, code table, MSB-first
//!   bit packing and a self-contained payload carrying the serialized tree
//! - **Run-length**: a basic `Run`/`Single` encoder and an adaptive encoder with
//!   `Run`, `ShortRun` and bounded `Sequence` items
//! - **Analysis**: a single-pass heuristic recommending run-length coding
//! - **Engine**: codec selection (including `Auto`) with running statistics
//! - **Wire**: JSON and MessagePack payload encodings
//!
//! Every payload records the [`SymbolDomain`](symzip_types::SymbolDomain) of
//! its input, so text decodes to text and bytes decode to bytes.
//!
//! # Examples
//!
//! ```rust
//! use symzip_codec::{huffman_compress, huffman_decompress, rle_compress, rle_decompress};
//! use symzip_types::{RleAlgorithm, SymbolOutput};
//!
//! let payload = huffman_compress("abracadabra".into())?;
//! assert_eq!(huffman_decompress(&payload)?, SymbolOutput::Text("abracadabra".into()));
//!
//! let payload = rle_compress(b"\x00\x00\x00\x00\x01".as_slice().into(), RleAlgorithm::Adaptive)?;
//! assert_eq!(rle_decompress(&payload)?.into_bytes(), vec![0, 0, 0, 0, 1]);
//! # Ok::<(), symzip_types::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod adaptive;
pub mod analyzer;
pub mod bits;
pub mod code_table;
pub mod engine;
pub mod frequency;
pub mod huffman;
pub mod rle;
pub mod serializer;
pub mod tree;
pub mod wire;

#[cfg(test)]
mod error_tests;
#[cfg(test)]
mod fuzz_tests;

// Re-export main types
pub use adaptive::AdaptiveRleCodec;
pub use analyzer::{EffectivenessAnalyzer, RleEffectiveness};
pub use code_table::{Code, CodeTable};
pub use engine::{
    compress, decompress, huffman_compress, huffman_decompress, rle_compress, rle_decompress,
    CodecEngine, CodecStats, EngineConfig,
};
pub use frequency::FrequencyTable;
pub use huffman::HuffmanCodec;
pub use rle::RleCodec;
pub use tree::{HuffmanNode, HuffmanTree};
pub use wire::{decode_payload, decode_payload_auto, detect_format, encode_payload};

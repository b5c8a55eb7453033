//! Configuration types for SymZip
//!
//! This module provides type-safe configuration structures with validation
//! and serialization support.

// Serde is imported conditionally through cfg_attr
use std::fmt;
use std::str::FromStr;

/// Thresholds the effectiveness analyzer uses to recommend run-length coding
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalyzerThresholds {
    /// Recommend when runs exceed this fraction of the input length
    pub run_density: f64,
    /// Recommend when the longest run is longer than this
    pub longest_run: usize,
}

impl AnalyzerThresholds {
    /// Default run density (10% of the input)
    pub const DEFAULT_RUN_DENSITY: f64 = 0.1;
    /// Default longest-run threshold
    pub const DEFAULT_LONGEST_RUN: usize = 4;

    /// Create thresholds with validation
    pub fn new(run_density: f64, longest_run: usize) -> Result<Self, String> {
        if !(run_density > 0.0 && run_density <= 1.0) {
            Err(format!(
                "Run density {} must be in the range (0, 1]",
                run_density
            ))
        } else if longest_run == 0 {
            Err("Longest run threshold must be at least 1".to_string())
        } else {
            Ok(Self {
                run_density,
                longest_run,
            })
        }
    }
}

impl Default for AnalyzerThresholds {
    fn default() -> Self {
        Self {
            run_density: Self::DEFAULT_RUN_DENSITY,
            longest_run: Self::DEFAULT_LONGEST_RUN,
        }
    }
}

/// Codec selection for a compression call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CodecKind {
    /// Huffman entropy coding
    #[default]
    Huffman,
    /// Basic run-length coding
    Rle,
    /// Adaptive run-length coding
    AdaptiveRle,
    /// Let the effectiveness analyzer choose
    Auto,
}

impl CodecKind {
    /// Get all selectable codecs
    pub fn all() -> [CodecKind; 4] {
        [Self::Huffman, Self::Rle, Self::AdaptiveRle, Self::Auto]
    }

    /// Canonical name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Huffman => "huffman",
            Self::Rle => "rle",
            Self::AdaptiveRle => "adaptive_rle",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodecKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "huffman" => Ok(Self::Huffman),
            "rle" | "basic_rle" => Ok(Self::Rle),
            "adaptive_rle" | "adaptive-rle" | "adaptive" => Ok(Self::AdaptiveRle),
            "auto" => Ok(Self::Auto),
            other => Err(format!("Unknown codec '{}'", other)),
        }
    }
}

/// Encoding used to persist or transmit payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WireFormat {
    /// Human readable JSON
    #[default]
    Json,
    /// Compact MessagePack
    MessagePack,
}

impl WireFormat {
    /// Conventional file extension
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::MessagePack => "msgpack",
        }
    }

    /// Guess the format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "msgpack" | "mpk" => Some(Self::MessagePack),
            _ => None,
        }
    }
}

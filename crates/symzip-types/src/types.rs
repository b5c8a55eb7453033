//! Core data types for SymZip
//!
//! Symbols, the domain they belong to, and the self-contained payload shapes
//! produced by the Huffman and run-length codecs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Smallest compressible unit: a byte value or a Unicode scalar value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Symbol(u32);

impl Symbol {
    /// Create a symbol from a raw scalar value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Create a symbol from a byte
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte as u32)
    }

    /// Create a symbol from a character
    pub const fn from_char(ch: char) -> Self {
        Self(ch as u32)
    }

    /// Get the raw scalar value
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Interpret the symbol as a byte, if it fits
    pub fn to_byte(self) -> Option<u8> {
        u8::try_from(self.0).ok()
    }

    /// Interpret the symbol as a character, if it is a valid scalar value
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_char() {
            Some(ch) if !ch.is_control() => write!(f, "{:?}", ch),
            _ => write!(f, "0x{:02X}", self.0),
        }
    }
}

/// Whether a sequence holds raw bytes or text characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SymbolDomain {
    /// Raw byte stream, symbols in 0..=255
    Bytes,
    /// Character stream, symbols are Unicode scalar values
    Text,
}

impl SymbolDomain {
    /// Check whether a symbol can be represented in this domain
    pub fn contains(self, symbol: Symbol) -> bool {
        match self {
            Self::Bytes => symbol.to_byte().is_some(),
            Self::Text => symbol.to_char().is_some(),
        }
    }

    /// Human readable name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bytes => "bytes",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for SymbolDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed compression input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolInput<'a> {
    /// Raw bytes
    Bytes(&'a [u8]),
    /// Text, compressed character by character
    Text(&'a str),
}

impl<'a> SymbolInput<'a> {
    /// Domain of this input
    pub fn domain(&self) -> SymbolDomain {
        match self {
            Self::Bytes(_) => SymbolDomain::Bytes,
            Self::Text(_) => SymbolDomain::Text,
        }
    }

    /// Number of symbols (bytes, or characters for text)
    pub fn len(&self) -> usize {
        match self {
            Self::Bytes(bytes) => bytes.len(),
            Self::Text(text) => text.chars().count(),
        }
    }

    /// Check if the input holds no symbols
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bytes(bytes) => bytes.is_empty(),
            Self::Text(text) => text.is_empty(),
        }
    }

    /// Size of the input in bytes as it sits in memory
    pub fn byte_len(&self) -> usize {
        match self {
            Self::Bytes(bytes) => bytes.len(),
            Self::Text(text) => text.len(),
        }
    }

    /// Expand the input into its symbols
    pub fn symbols(&self) -> Vec<Symbol> {
        match self {
            Self::Bytes(bytes) => bytes.iter().copied().map(Symbol::from_byte).collect(),
            Self::Text(text) => text.chars().map(Symbol::from_char).collect(),
        }
    }
}

impl<'a> From<&'a [u8]> for SymbolInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for SymbolInput<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Bytes(bytes.as_slice())
    }
}

impl<'a> From<&'a str> for SymbolInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for SymbolInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

/// Decompressed output, reconstructed in the original domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolOutput {
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Text
    Text(String),
}

impl SymbolOutput {
    /// Reassemble symbols into the given domain
    ///
    /// Fails with [`Error::MalformedPayload`] when a symbol cannot be represented
    /// in `domain` (a byte payload carrying 0x1F600, for example).
    pub fn from_symbols(domain: SymbolDomain, symbols: &[Symbol]) -> Result<Self> {
        match domain {
            SymbolDomain::Bytes => symbols
                .iter()
                .map(|symbol| {
                    symbol.to_byte().ok_or_else(|| {
                        Error::malformed(format!("symbol {} is not a byte", symbol.value()))
                    })
                })
                .collect::<Result<Vec<u8>>>()
                .map(Self::Bytes),
            SymbolDomain::Text => symbols
                .iter()
                .map(|symbol| {
                    symbol.to_char().ok_or_else(|| {
                        Error::malformed(format!(
                            "symbol {} is not a Unicode scalar value",
                            symbol.value()
                        ))
                    })
                })
                .collect::<Result<String>>()
                .map(Self::Text),
        }
    }

    /// Domain of this output
    pub fn domain(&self) -> SymbolDomain {
        match self {
            Self::Bytes(_) => SymbolDomain::Bytes,
            Self::Text(_) => SymbolDomain::Text,
        }
    }

    /// Number of symbols
    pub fn len(&self) -> usize {
        match self {
            Self::Bytes(bytes) => bytes.len(),
            Self::Text(text) => text.chars().count(),
        }
    }

    /// Check if the output is empty
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bytes(bytes) => bytes.is_empty(),
            Self::Text(text) => text.is_empty(),
        }
    }

    /// Borrow the output as raw bytes (UTF-8 for text)
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Bytes(bytes) => bytes,
            Self::Text(text) => text.as_bytes(),
        }
    }

    /// Consume the output, returning raw bytes (UTF-8 for text)
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Bytes(bytes) => bytes,
            Self::Text(text) => text.into_bytes(),
        }
    }

    /// Borrow the output as text, if it came from the text domain
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Bytes(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Borrow the output as a compression input
    pub fn as_input(&self) -> SymbolInput<'_> {
        match self {
            Self::Bytes(bytes) => SymbolInput::Bytes(bytes),
            Self::Text(text) => SymbolInput::Text(text),
        }
    }
}

/// Portable form of a Huffman tree node
///
/// Serializes as `{"leaf": symbol, "freq": n}` or
/// `{"internal": n, "left": {...}, "right": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SerializedNode {
    /// Leaf carrying a symbol and its frequency
    Leaf {
        /// The symbol
        leaf: Symbol,
        /// Occurrence count
        freq: u64,
    },
    /// Internal node carrying the summed frequency of its subtree
    Internal {
        /// Summed frequency
        internal: u64,
        /// Subtree reached by a 0 bit
        left: Box<SerializedNode>,
        /// Subtree reached by a 1 bit
        right: Box<SerializedNode>,
    },
}

/// Self-contained Huffman compression result
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HuffmanPayload {
    /// Code bits packed MSB-first, final byte zero padded
    pub packed_bytes: Vec<u8>,
    /// Serialized prefix tree
    pub tree: SerializedNode,
    /// Number of symbols in the original input
    pub original_length: usize,
    /// Number of padding bits in the final byte (0-7)
    pub padding_bits: u8,
    /// Domain of the original input
    pub domain: SymbolDomain,
}

impl HuffmanPayload {
    /// Number of meaningful code bits
    pub fn bit_count(&self) -> usize {
        (self.packed_bytes.len() * 8).saturating_sub(usize::from(self.padding_bits))
    }
}

/// Which run-length algorithm produced a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RleAlgorithm {
    /// Runs and singles
    Basic,
    /// Long runs, short runs and non-repeating sequences
    Adaptive,
}

impl RleAlgorithm {
    /// Tag used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Adaptive => "adaptive",
        }
    }
}

impl fmt::Display for RleAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One encoded run-length item
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum RleItem {
    /// Repetition of one symbol (count > 1 basic, count >= 4 adaptive)
    Run {
        /// Repeated symbol
        symbol: Symbol,
        /// Repetition count
        count: usize,
    },
    /// A lone symbol (basic only)
    Single {
        /// The symbol
        symbol: Symbol,
    },
    /// Repetition of 2 or 3 (adaptive only)
    ShortRun {
        /// Repeated symbol
        symbol: Symbol,
        /// Repetition count
        count: usize,
    },
    /// Non-repeating symbols kept verbatim (adaptive only)
    Sequence {
        /// Symbols in order
        symbols: Vec<Symbol>,
    },
}

impl RleItem {
    /// Wire tag of this item
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Run { .. } => "run",
            Self::Single { .. } => "single",
            Self::ShortRun { .. } => "short_run",
            Self::Sequence { .. } => "sequence",
        }
    }

    /// Number of symbols this item expands to
    pub fn expanded_len(&self) -> usize {
        match self {
            Self::Run { count, .. } | Self::ShortRun { count, .. } => *count,
            Self::Single { .. } => 1,
            Self::Sequence { symbols } => symbols.len(),
        }
    }
}

/// Self-contained run-length compression result
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RlePayload {
    /// Encoded items in order
    pub items: Vec<RleItem>,
    /// Number of symbols in the original input
    pub original_length: usize,
    /// Domain of the original input
    pub domain: SymbolDomain,
    /// Algorithm that produced the items
    pub algorithm: RleAlgorithm,
}

/// A payload from either codec family, tagged by `codec` on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "codec", rename_all = "snake_case"))]
pub enum Payload {
    /// Huffman payload
    Huffman(HuffmanPayload),
    /// Run-length payload (basic or adaptive)
    Rle(RlePayload),
}

impl Payload {
    /// Domain of the original input
    pub fn domain(&self) -> SymbolDomain {
        match self {
            Self::Huffman(payload) => payload.domain,
            Self::Rle(payload) => payload.domain,
        }
    }

    /// Number of symbols in the original input
    pub fn original_length(&self) -> usize {
        match self {
            Self::Huffman(payload) => payload.original_length,
            Self::Rle(payload) => payload.original_length,
        }
    }

    /// Name of the codec that produced the payload
    pub fn codec_name(&self) -> &'static str {
        match self {
            Self::Huffman(_) => "huffman",
            Self::Rle(payload) => match payload.algorithm {
                RleAlgorithm::Basic => "rle",
                RleAlgorithm::Adaptive => "adaptive_rle",
            },
        }
    }
}

impl From<HuffmanPayload> for Payload {
    fn from(payload: HuffmanPayload) -> Self {
        Self::Huffman(payload)
    }
}

impl From<RlePayload> for Payload {
    fn from(payload: RlePayload) -> Self {
        Self::Rle(payload)
    }
}

//! Huffman codec: symbols → codes → packed bytes, and back by tree traversal

use symzip_types::{
    Error, HuffmanPayload, Result, Symbol, SymbolCodec, SymbolInput, SymbolOutput,
};
use tracing::{debug, warn};

use crate::bits::{BitReader, BitWriter};
use crate::code_table::CodeTable;
use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanNode, HuffmanTree};

/// Stateless Huffman codec; every call builds and discards its own tree
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec;

impl HuffmanCodec {
    /// Create a codec
    pub fn new() -> Self {
        Self
    }

    fn check_layout(payload: &HuffmanPayload) -> Result<usize> {
        if payload.padding_bits > 7 {
            return Err(Error::malformed(format!(
                "padding_bits must be between 0 and 7, got {}",
                payload.padding_bits
            )));
        }
        if payload.packed_bytes.is_empty() && payload.original_length > 0 {
            return Err(Error::malformed(format!(
                "packed_bytes is empty but original_length is {}",
                payload.original_length
            )));
        }
        let available = payload.packed_bytes.len() * 8;
        let padding = usize::from(payload.padding_bits);
        if padding > available {
            return Err(Error::malformed(format!(
                "{} padding bits exceed the {} available bits",
                padding, available
            )));
        }
        Ok(available - padding)
    }

    fn walk(root: &HuffmanNode, bits: BitReader<'_>, expected: usize) -> Vec<Symbol> {
        let mut symbols = Vec::with_capacity(expected.min(bits.len()));

        if let HuffmanNode::Leaf { symbol, .. } = root {
            // Single-symbol stream: one bit per occurrence.
            symbols.extend(bits.map(|_| *symbol));
            return symbols;
        }

        let mut node = root;
        let mut pending = 0usize;
        for bit in bits {
            if let HuffmanNode::Internal { left, right, .. } = node {
                node = if bit { right } else { left };
                pending += 1;
            }
            if let HuffmanNode::Leaf { symbol, .. } = node {
                symbols.push(*symbol);
                node = root;
                pending = 0;
            }
        }

        if pending > 0 {
            warn!("Huffman stream ended {} bits into an incomplete code", pending);
        }
        symbols
    }
}

impl SymbolCodec for HuffmanCodec {
    type Payload = HuffmanPayload;

    fn name(&self) -> &'static str {
        "huffman"
    }

    fn encode(&self, input: SymbolInput<'_>) -> Result<HuffmanPayload> {
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }

        let symbols = input.symbols();
        let frequencies = FrequencyTable::from_symbols(&symbols)?;
        let tree = HuffmanTree::from_frequencies(&frequencies)?;
        let codes = CodeTable::from_tree(&tree);

        let total_bits = codes.weighted_length(frequencies.iter());
        let mut writer = BitWriter::with_capacity(total_bits as usize);
        for &symbol in &symbols {
            let code = codes.get(symbol).ok_or_else(|| {
                Error::other(format!("symbol {} missing from code table", symbol))
            })?;
            writer.push_code(code);
        }
        let (packed_bytes, padding_bits) = writer.finish();

        debug!(
            "Huffman encoded {} {} symbols ({} distinct, depth {}) into {} bytes",
            symbols.len(),
            input.domain(),
            frequencies.distinct(),
            tree.depth(),
            packed_bytes.len()
        );

        Ok(HuffmanPayload {
            packed_bytes,
            tree: tree.serialize(),
            original_length: symbols.len(),
            padding_bits,
            domain: input.domain(),
        })
    }

    fn decode(&self, payload: &HuffmanPayload) -> Result<SymbolOutput> {
        let bit_count = Self::check_layout(payload)?;
        let tree = HuffmanTree::deserialize(&payload.tree)?;

        let bits = BitReader::new(&payload.packed_bytes, bit_count);
        let symbols = Self::walk(tree.root(), bits, payload.original_length);

        if symbols.len() != payload.original_length {
            return Err(Error::LengthMismatch {
                expected: payload.original_length,
                actual: symbols.len(),
            });
        }

        debug!(
            "Huffman decoded {} bits into {} {} symbols",
            bit_count,
            symbols.len(),
            payload.domain
        );
        SymbolOutput::from_symbols(payload.domain, &symbols)
    }
}

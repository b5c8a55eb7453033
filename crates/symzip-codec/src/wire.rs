//! Payload wire formats
//!
//! Payloads encode to JSON or MessagePack. Decoding first reads into mirror
//! structs whose fields are all optional, so that an absent field is reported
//! by name as a malformed payload and an unrecognized RLE item tag as an
//! unknown item type, rather than as an opaque parse error.

use serde::Deserialize;
use symzip_types::{
    Error, HuffmanPayload, Payload, Result, RleAlgorithm, RleItem, RlePayload, SerializedNode,
    Symbol, SymbolDomain, WireFormat,
};
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(tag = "codec", rename_all = "snake_case")]
enum RawPayload {
    Huffman(RawHuffmanPayload),
    Rle(RawRlePayload),
}

#[derive(Debug, Deserialize)]
struct RawHuffmanPayload {
    packed_bytes: Option<Vec<u8>>,
    tree: Option<SerializedNode>,
    original_length: Option<usize>,
    padding_bits: Option<u8>,
    domain: Option<SymbolDomain>,
}

#[derive(Debug, Deserialize)]
struct RawRlePayload {
    items: Option<Vec<RawRleItem>>,
    original_length: Option<usize>,
    domain: Option<SymbolDomain>,
    algorithm: Option<RleAlgorithm>,
}

#[derive(Debug, Deserialize)]
struct RawRleItem {
    #[serde(rename = "type")]
    kind: Option<String>,
    symbol: Option<Symbol>,
    count: Option<usize>,
    symbols: Option<Vec<Symbol>>,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| Error::missing_field(field))
}

impl TryFrom<RawRleItem> for RleItem {
    type Error = Error;

    fn try_from(raw: RawRleItem) -> Result<Self> {
        let kind = required(raw.kind, "items[].type")?;
        match kind.as_str() {
            "run" => Ok(Self::Run {
                symbol: required(raw.symbol, "items[].symbol")?,
                count: required(raw.count, "items[].count")?,
            }),
            "short_run" => Ok(Self::ShortRun {
                symbol: required(raw.symbol, "items[].symbol")?,
                count: required(raw.count, "items[].count")?,
            }),
            "single" => Ok(Self::Single {
                symbol: required(raw.symbol, "items[].symbol")?,
            }),
            "sequence" => Ok(Self::Sequence {
                symbols: required(raw.symbols, "items[].symbols")?,
            }),
            _ => Err(Error::unknown_item(kind)),
        }
    }
}

impl TryFrom<RawPayload> for Payload {
    type Error = Error;

    fn try_from(raw: RawPayload) -> Result<Self> {
        match raw {
            RawPayload::Huffman(raw) => Ok(Self::Huffman(HuffmanPayload {
                packed_bytes: required(raw.packed_bytes, "packed_bytes")?,
                tree: required(raw.tree, "tree")?,
                original_length: required(raw.original_length, "original_length")?,
                padding_bits: required(raw.padding_bits, "padding_bits")?,
                domain: required(raw.domain, "domain")?,
            })),
            RawPayload::Rle(raw) => {
                let items = required(raw.items, "items")?
                    .into_iter()
                    .map(RleItem::try_from)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::Rle(RlePayload {
                    items,
                    original_length: required(raw.original_length, "original_length")?,
                    domain: required(raw.domain, "domain")?,
                    algorithm: required(raw.algorithm, "algorithm")?,
                }))
            }
        }
    }
}

/// Encode a payload
pub fn encode_payload(payload: &Payload, format: WireFormat) -> Result<Vec<u8>> {
    let bytes = match format {
        WireFormat::Json => {
            serde_json::to_vec(payload).map_err(|e| Error::serialization(e.to_string()))?
        }
        WireFormat::MessagePack => {
            rmp_serde::to_vec_named(payload).map_err(|e| Error::serialization(e.to_string()))?
        }
    };
    debug!(
        "Encoded {} payload as {:?}: {} bytes",
        payload.codec_name(),
        format,
        bytes.len()
    );
    Ok(bytes)
}

/// Encode a payload as indented JSON
pub fn encode_payload_pretty(payload: &Payload) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(payload).map_err(|e| Error::serialization(e.to_string()))
}

/// Decode a payload
pub fn decode_payload(bytes: &[u8], format: WireFormat) -> Result<Payload> {
    let raw: RawPayload = match format {
        WireFormat::Json => serde_json::from_slice(bytes)
            .map_err(|e| Error::malformed(format!("invalid JSON payload: {}", e)))?,
        WireFormat::MessagePack => rmp_serde::from_slice(bytes)
            .map_err(|e| Error::malformed(format!("invalid MessagePack payload: {}", e)))?,
    };
    let payload = Payload::try_from(raw)?;
    debug!(
        "Decoded {} payload from {} bytes of {:?}",
        payload.codec_name(),
        bytes.len(),
        format
    );
    Ok(payload)
}

/// Guess the format of encoded bytes: JSON payloads open with `{`
pub fn detect_format(bytes: &[u8]) -> WireFormat {
    match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => WireFormat::Json,
        _ => WireFormat::MessagePack,
    }
}

/// Decode a payload in whichever format it was written
pub fn decode_payload_auto(bytes: &[u8]) -> Result<Payload> {
    decode_payload(bytes, detect_format(bytes))
}

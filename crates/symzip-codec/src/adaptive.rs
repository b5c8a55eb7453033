//! Adaptive run-length codec
//!
//! Long runs (four or more) become `Run`, short runs (two or three) become
//! `ShortRun`, and stretches of non-repeating symbols are grouped into
//! `Sequence` items of at most [`MAX_SEQUENCE_LEN`] symbols.

use symzip_types::{
    Error, Result, RleAlgorithm, RleItem, RlePayload, Symbol, SymbolCodec, SymbolInput,
    SymbolOutput,
};
use tracing::debug;

use crate::rle::{expand, foreign_item, run_length_at};

/// Longest literal stretch stored in one `Sequence` item
pub const MAX_SEQUENCE_LEN: usize = 255;

/// Shortest run stored as `Run` rather than `ShortRun`
pub const LONG_RUN_MIN: usize = 4;

/// Adaptive run-length codec
#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptiveRleCodec;

impl AdaptiveRleCodec {
    /// Create a codec
    pub fn new() -> Self {
        Self
    }

    /// Encode symbols into adaptive items in one pass
    pub fn encode_symbols(symbols: &[Symbol]) -> Vec<RleItem> {
        let len = symbols.len();
        let mut items = Vec::new();
        let mut index = 0;

        while index < len {
            let symbol = symbols[index];
            let count = run_length_at(symbols, index);

            if count >= LONG_RUN_MIN {
                items.push(RleItem::Run { symbol, count });
                index += count;
            } else if count >= 2 {
                items.push(RleItem::ShortRun { symbol, count });
                index += count;
            } else {
                let mut sequence = vec![symbol];
                index += 1;
                // Stop before any symbol that starts a run of its own.
                while index < len
                    && sequence.len() < MAX_SEQUENCE_LEN
                    && !(index + 1 < len && symbols[index] == symbols[index + 1])
                {
                    sequence.push(symbols[index]);
                    index += 1;
                }
                items.push(RleItem::Sequence { symbols: sequence });
            }
        }

        items
    }

    fn check_item(item: &RleItem) -> Result<()> {
        match item {
            RleItem::Run { count, .. } if *count < LONG_RUN_MIN => Err(Error::malformed(
                format!("run count {} is below {}", count, LONG_RUN_MIN),
            )),
            RleItem::ShortRun { count, .. } if !(2..LONG_RUN_MIN).contains(count) => {
                Err(Error::malformed(format!(
                    "short_run count {} is outside 2..{}",
                    count, LONG_RUN_MIN
                )))
            }
            RleItem::Sequence { symbols }
                if symbols.is_empty() || symbols.len() > MAX_SEQUENCE_LEN =>
            {
                Err(Error::malformed(format!(
                    "sequence of {} symbols is outside 1..={}",
                    symbols.len(),
                    MAX_SEQUENCE_LEN
                )))
            }
            RleItem::Single { .. } => Err(foreign_item(item, RleAlgorithm::Adaptive)),
            _ => Ok(()),
        }
    }
}

impl SymbolCodec for AdaptiveRleCodec {
    type Payload = RlePayload;

    fn name(&self) -> &'static str {
        "adaptive_rle"
    }

    fn encode(&self, input: SymbolInput<'_>) -> Result<RlePayload> {
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }

        let symbols = input.symbols();
        let items = Self::encode_symbols(&symbols);
        debug!(
            "Adaptive RLE encoded {} {} symbols into {} items",
            symbols.len(),
            input.domain(),
            items.len()
        );

        Ok(RlePayload {
            items,
            original_length: symbols.len(),
            domain: input.domain(),
            algorithm: RleAlgorithm::Adaptive,
        })
    }

    fn decode(&self, payload: &RlePayload) -> Result<SymbolOutput> {
        let output = expand(payload, Self::check_item)?;
        debug!(
            "Adaptive RLE decoded {} items into {} symbols",
            payload.items.len(),
            payload.original_length
        );
        Ok(output)
    }
}

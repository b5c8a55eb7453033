//! Basic run-length codec
//!
//! Each maximal run of one symbol becomes `Run { symbol, count }` when it repeats,
//! otherwise `Single { symbol }`.

use symzip_types::{
    Error, Result, RleAlgorithm, RleItem, RlePayload, Symbol, SymbolCodec, SymbolInput,
    SymbolOutput,
};
use tracing::debug;

/// Length of the maximal run starting at `start`
pub(crate) fn run_length_at(symbols: &[Symbol], start: usize) -> usize {
    let symbol = symbols[start];
    symbols[start..]
        .iter()
        .take_while(|&&candidate| candidate == symbol)
        .count()
}

/// Error for an item outside an algorithm's vocabulary
pub(crate) fn foreign_item(item: &RleItem, algorithm: RleAlgorithm) -> Error {
    Error::unknown_item(format!("{} (not valid for {} RLE)", item.tag(), algorithm))
}

/// Expand a payload's items after validating each with `check`.
///
/// The recorded length is compared before any symbol is materialized. The
/// output buffer is reserved fallibly since both numbers come from the payload.
pub(crate) fn expand(payload: &RlePayload, check: fn(&RleItem) -> Result<()>) -> Result<SymbolOutput> {
    let mut total = 0usize;
    for item in &payload.items {
        check(item)?;
        total = total.saturating_add(item.expanded_len());
    }

    if total != payload.original_length {
        return Err(Error::LengthMismatch {
            expected: payload.original_length,
            actual: total,
        });
    }

    let mut symbols: Vec<Symbol> = Vec::new();
    symbols.try_reserve_exact(total).map_err(|e| {
        Error::malformed(format!("cannot expand to {} symbols: {}", total, e))
    })?;
    for item in &payload.items {
        match item {
            RleItem::Run { symbol, count } | RleItem::ShortRun { symbol, count } => {
                symbols.extend(std::iter::repeat(*symbol).take(*count));
            }
            RleItem::Single { symbol } => symbols.push(*symbol),
            RleItem::Sequence { symbols: sequence } => symbols.extend_from_slice(sequence),
        }
    }

    SymbolOutput::from_symbols(payload.domain, &symbols)
}

/// Basic run-length codec
#[derive(Debug, Clone, Copy, Default)]
pub struct RleCodec;

impl RleCodec {
    /// Create a codec
    pub fn new() -> Self {
        Self
    }

    /// Encode symbols into basic items
    pub fn encode_symbols(symbols: &[Symbol]) -> Vec<RleItem> {
        let mut items = Vec::new();
        let mut index = 0;
        while index < symbols.len() {
            let symbol = symbols[index];
            let count = run_length_at(symbols, index);
            items.push(if count > 1 {
                RleItem::Run { symbol, count }
            } else {
                RleItem::Single { symbol }
            });
            index += count;
        }
        items
    }

    fn check_item(item: &RleItem) -> Result<()> {
        match item {
            RleItem::Run { count, .. } if *count < 2 => Err(Error::malformed(format!(
                "run count {} is below 2",
                count
            ))),
            RleItem::Run { .. } | RleItem::Single { .. } => Ok(()),
            other => Err(foreign_item(other, RleAlgorithm::Basic)),
        }
    }
}

impl SymbolCodec for RleCodec {
    type Payload = RlePayload;

    fn name(&self) -> &'static str {
        "rle"
    }

    fn encode(&self, input: SymbolInput<'_>) -> Result<RlePayload> {
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }

        let symbols = input.symbols();
        let items = Self::encode_symbols(&symbols);
        debug!(
            "RLE encoded {} {} symbols into {} items",
            symbols.len(),
            input.domain(),
            items.len()
        );

        Ok(RlePayload {
            items,
            original_length: symbols.len(),
            domain: input.domain(),
            algorithm: RleAlgorithm::Basic,
        })
    }

    fn decode(&self, payload: &RlePayload) -> Result<SymbolOutput> {
        let output = expand(payload, Self::check_item)?;
        debug!(
            "RLE decoded {} items into {} symbols",
            payload.items.len(),
            payload.original_length
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use symzip_types::SymbolDomain;

    fn sym(ch: char) -> Symbol {
        Symbol::from_char(ch)
    }

    #[test]
    fn test_runs_scenario() {
        let codec = RleCodec::new();
        let payload = codec.encode("aaaabbbcc".into()).unwrap();
        assert_eq!(
            payload.items,
            vec![
                RleItem::Run {
                    symbol: sym('a'),
                    count: 4
                },
                RleItem::Run {
                    symbol: sym('b'),
                    count: 3
                },
                RleItem::Run {
                    symbol: sym('c'),
                    count: 2
                },
            ]
        );
        assert_eq!(payload.original_length, 9);
        assert_eq!(payload.algorithm, RleAlgorithm::Basic);
        assert_eq!(
            codec.decode(&payload).unwrap(),
            SymbolOutput::Text("aaaabbbcc".to_string())
        );
    }

    #[test]
    fn test_singles_between_runs() {
        let items = RleCodec::encode_symbols(&SymbolInput::from("abbc").symbols());
        assert_eq!(
            items,
            vec![
                RleItem::Single { symbol: sym('a') },
                RleItem::Run {
                    symbol: sym('b'),
                    count: 2
                },
                RleItem::Single { symbol: sym('c') },
            ]
        );
    }

    #[test]
    fn test_byte_roundtrip() {
        let data = vec![0u8, 0, 0, 1, 2, 2, 255, 255, 255, 255];
        let codec = RleCodec::new();
        let payload = codec.encode((&data).into()).unwrap();
        assert_eq!(payload.domain, SymbolDomain::Bytes);
        assert_eq!(codec.decode(&payload).unwrap(), SymbolOutput::Bytes(data));
    }

    #[test]
    fn test_single_symbol_input() {
        let codec = RleCodec::new();
        let payload = codec.encode("xxxxxxxx".into()).unwrap();
        assert_eq!(payload.items.len(), 1);
        assert_eq!(codec.decode(&payload).unwrap().len(), 8);
    }

    #[test]
    fn test_length_mismatch() {
        let codec = RleCodec::new();
        let mut payload = codec.encode("aaab".into()).unwrap();
        payload.original_length = 3;
        assert_eq!(
            codec.decode(&payload),
            Err(Error::LengthMismatch {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn test_forged_run_count_fails_before_allocation() {
        let payload = RlePayload {
            items: vec![RleItem::Run {
                symbol: sym('a'),
                count: usize::MAX,
            }],
            original_length: 4,
            domain: SymbolDomain::Text,
            algorithm: RleAlgorithm::Basic,
        };
        assert!(matches!(
            RleCodec::new().decode(&payload),
            Err(Error::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_forged_length_and_count_is_malformed() {
        let huge = usize::MAX / 2;
        let payload = RlePayload {
            items: vec![RleItem::Run {
                symbol: sym('a'),
                count: huge,
            }],
            original_length: huge,
            domain: SymbolDomain::Text,
            algorithm: RleAlgorithm::Basic,
        };
        assert!(matches!(
            RleCodec::new().decode(&payload),
            Err(Error::MalformedPayload { .. })
        ));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn test_run_below_two_is_malformed(#[case] count: usize) {
        let payload = RlePayload {
            items: vec![RleItem::Run {
                symbol: sym('a'),
                count,
            }],
            original_length: count,
            domain: SymbolDomain::Text,
            algorithm: RleAlgorithm::Basic,
        };
        assert!(matches!(
            RleCodec::new().decode(&payload),
            Err(Error::MalformedPayload { .. })
        ));
    }

    #[test]
    fn test_adaptive_items_are_unknown_to_basic() {
        let payload = RlePayload {
            items: vec![RleItem::Sequence {
                symbols: vec![sym('a'), sym('b')],
            }],
            original_length: 2,
            domain: SymbolDomain::Text,
            algorithm: RleAlgorithm::Basic,
        };
        assert!(matches!(
            RleCodec::new().decode(&payload),
            Err(Error::UnknownItemType { .. })
        ));
    }
}

//! Symbol frequency analysis

use std::collections::HashMap;
use symzip_types::{Error, Result, Symbol};

/// Occurrence count per distinct symbol, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<Symbol, u64>,
    total: u64,
}

impl FrequencyTable {
    /// Count symbol occurrences in a single pass
    ///
    /// Fails with [`Error::EmptyInput`] on an empty slice.
    pub fn from_symbols(symbols: &[Symbol]) -> Result<Self> {
        if symbols.is_empty() {
            return Err(Error::EmptyInput);
        }

        let counts = symbols
            .iter()
            .copied()
            .fold(HashMap::new(), |mut acc, symbol| {
                *acc.entry(symbol).or_insert(0u64) += 1;
                acc
            });

        Ok(Self {
            counts,
            total: symbols.len() as u64,
        })
    }

    /// Count for a symbol, zero if it never occurred
    pub fn get(&self, symbol: Symbol) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of symbols counted
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Check if no symbols were counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(symbol, count)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

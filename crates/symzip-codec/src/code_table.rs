//! Prefix-free code assignment from a Huffman tree

use std::collections::HashMap;
use std::fmt;

use symzip_types::Symbol;

use crate::tree::{HuffmanNode, HuffmanTree};

/// Bit string assigned to one symbol, first bit first
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(Vec<bool>);

impl Code {
    /// Wrap a bit vector
    pub fn new(bits: Vec<bool>) -> Self {
        Self(bits)
    }

    /// Bits of the code
    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the code has no bits (never true for generated codes)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if `self` is a prefix of `other`
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Mapping from symbol to its code
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    codes: HashMap<Symbol, Code>,
}

impl CodeTable {
    /// Walk every root-to-leaf path, `0` for left edges and `1` for right edges
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = Self::default();
        match tree.root() {
            // A lone leaf has an empty path; give it a single bit.
            HuffmanNode::Leaf { symbol, .. } => {
                table.codes.insert(*symbol, Code::new(vec![false]));
            }
            root => {
                let mut path = Vec::new();
                table.assign(root, &mut path);
            }
        }
        table
    }

    fn assign(&mut self, node: &HuffmanNode, path: &mut Vec<bool>) {
        match node {
            HuffmanNode::Leaf { symbol, .. } => {
                self.codes.insert(*symbol, Code::new(path.clone()));
            }
            HuffmanNode::Internal { left, right, .. } => {
                path.push(false);
                self.assign(left, path);
                path.pop();

                path.push(true);
                self.assign(right, path);
                path.pop();
            }
        }
    }

    /// Code for a symbol
    pub fn get(&self, symbol: Symbol) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Number of coded symbols
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over `(symbol, code)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Code)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Check that no code is a prefix of another
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&Code> = self.codes.values().collect();
        codes.sort_unstable();
        // After a lexicographic sort, any prefix sits directly before one of its extensions.
        codes.windows(2).all(|pair| !pair[0].is_prefix_of(pair[1]))
    }

    /// Total encoded length in bits for the given frequencies
    pub fn weighted_length<I>(&self, frequencies: I) -> u64
    where
        I: IntoIterator<Item = (Symbol, u64)>,
    {
        frequencies
            .into_iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| code.len() as u64 * count))
            .sum()
    }
}

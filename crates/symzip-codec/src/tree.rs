//! Huffman prefix tree and its min-priority-queue construction

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use symzip_types::{Error, Result, SerializedNode, Symbol};
use tracing::trace;

use crate::frequency::FrequencyTable;
use crate::serializer;

/// Node of a Huffman tree; internal nodes exclusively own both children
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// Symbol with its frequency
    Leaf {
        /// The symbol
        symbol: Symbol,
        /// Occurrence count
        freq: u64,
    },
    /// Merge of two subtrees; `freq` is the sum of both children
    Internal {
        /// Summed frequency
        freq: u64,
        /// Subtree reached by a 0 bit
        left: Box<HuffmanNode>,
        /// Subtree reached by a 1 bit
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Create a leaf
    pub fn leaf(symbol: Symbol, freq: u64) -> Self {
        Self::Leaf { symbol, freq }
    }

    /// Frequency of this subtree
    pub fn freq(&self) -> u64 {
        match self {
            Self::Leaf { freq, .. } | Self::Internal { freq, .. } => *freq,
        }
    }

    /// Check if this node is a leaf
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Merge two subtrees; `a` becomes the left (0) child
    pub fn merge(a: Self, b: Self) -> Self {
        Self::Internal {
            freq: a.freq() + b.freq(),
            left: Box::new(a),
            right: Box::new(b),
        }
    }

    /// Length of the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Number of leaves in this subtree
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Queue entry ordered so that `BinaryHeap` pops the lowest frequency first.
/// Equal frequencies pop in insertion order.
#[derive(Debug)]
struct HeapEntry {
    node: HuffmanNode,
    order: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .freq()
            .cmp(&self.node.freq())
            .then_with(|| other.order.cmp(&self.order))
    }
}

/// A complete Huffman tree
///
/// With a single distinct symbol the root is that symbol's leaf. It is given
/// the one-bit code `0`, so every occurrence still costs a bit and decodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Build an optimal prefix tree from symbol frequencies
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self> {
        let mut leaves: Vec<(Symbol, u64)> = frequencies.iter().collect();
        // Fixed insertion order keeps tree shape stable across runs.
        leaves.sort_unstable_by_key(|&(symbol, freq)| (freq, symbol));

        let mut heap: BinaryHeap<HeapEntry> = leaves
            .into_iter()
            .enumerate()
            .map(|(order, (symbol, freq))| HeapEntry {
                node: HuffmanNode::leaf(symbol, freq),
                order,
            })
            .collect();
        let mut order = heap.len();

        loop {
            let first = heap.pop().ok_or(Error::EmptyInput)?;
            let Some(second) = heap.pop() else {
                trace!(
                    "Built Huffman tree: depth {}, {} leaves",
                    first.node.depth(),
                    first.node.leaf_count()
                );
                return Ok(Self { root: first.node });
            };

            heap.push(HeapEntry {
                node: HuffmanNode::merge(first.node, second.node),
                order,
            });
            order += 1;
        }
    }

    /// Wrap an existing root
    pub fn from_root(root: HuffmanNode) -> Self {
        Self { root }
    }

    /// Root node
    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Length of the longest code
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Number of distinct symbols
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Export to the portable tagged structure
    pub fn serialize(&self) -> SerializedNode {
        serializer::serialize(&self.root)
    }

    /// Rebuild from the portable tagged structure
    pub fn deserialize(node: &SerializedNode) -> Result<Self> {
        serializer::deserialize(node).map(Self::from_root)
    }
}

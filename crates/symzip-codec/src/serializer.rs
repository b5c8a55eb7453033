//! Conversion between [`HuffmanNode`] and the portable [`SerializedNode`]
//!
//! Deserialization re-checks what encoding guarantees: every internal node's
//! frequency is the sum of its children, and no symbol appears on two leaves.

use std::collections::HashSet;

use symzip_types::{Error, Result, SerializedNode, Symbol};

use crate::tree::HuffmanNode;

/// Depth-first export of a tree
pub fn serialize(node: &HuffmanNode) -> SerializedNode {
    match node {
        HuffmanNode::Leaf { symbol, freq } => SerializedNode::Leaf {
            leaf: *symbol,
            freq: *freq,
        },
        HuffmanNode::Internal { freq, left, right } => SerializedNode::Internal {
            internal: *freq,
            left: Box::new(serialize(left)),
            right: Box::new(serialize(right)),
        },
    }
}

/// Exact inverse of [`serialize`]
pub fn deserialize(node: &SerializedNode) -> Result<HuffmanNode> {
    let mut seen = HashSet::new();
    rebuild(node, &mut seen)
}

fn rebuild(node: &SerializedNode, seen: &mut HashSet<Symbol>) -> Result<HuffmanNode> {
    match node {
        SerializedNode::Leaf { leaf, freq } => {
            if !seen.insert(*leaf) {
                return Err(Error::malformed(format!(
                    "tree contains symbol {} more than once",
                    leaf.value()
                )));
            }
            Ok(HuffmanNode::leaf(*leaf, *freq))
        }
        SerializedNode::Internal {
            internal,
            left,
            right,
        } => {
            let left = rebuild(left, seen)?;
            let right = rebuild(right, seen)?;
            let sum = left.freq().checked_add(right.freq());
            if sum != Some(*internal) {
                return Err(Error::malformed(format!(
                    "internal node frequency {} does not equal the sum of its children",
                    internal
                )));
            }
            Ok(HuffmanNode::Internal {
                freq: *internal,
                left: Box::new(left),
                right: Box::new(right),
            })
        }
    }
}

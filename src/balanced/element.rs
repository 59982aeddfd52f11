use crate::common::Bytes32;

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

/// A node of the balanced Merkle tree. Every element exclusively owns its
/// substructure and is never mutated after construction; rebuilding is the
/// only form of update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MerkleElement<T> {
    Empty,
    Leaf {
        item: T,
        item_hash: Bytes32,
    },
    Node {
        hash: Bytes32,
        left: Box<MerkleElement<T>>,
        right: Box<MerkleElement<T>>,
    },
}

impl<T> MerkleElement<T> {
    pub fn leaf(item: T, item_hash: Bytes32) -> Self {
        Self::Leaf { item, item_hash }
    }

    /// Both children of a node built by this crate are non-empty; the
    /// builder never pairs a subtree with `Empty`.
    pub fn node(hash: Bytes32, left: MerkleElement<T>, right: MerkleElement<T>) -> Self {
        Self::Node {
            hash,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The element's hash bytes. The empty tree hashes to the zero-length
    /// byte sequence, not to a digest of anything.
    pub fn hash(&self) -> &[u8] {
        match self {
            MerkleElement::Empty => &[],
            MerkleElement::Leaf { item_hash, .. } => item_hash,
            MerkleElement::Node { hash, .. } => hash,
        }
    }

    /// The 32-byte digest of a non-empty element.
    pub fn digest(&self) -> Option<&Bytes32> {
        match self {
            MerkleElement::Empty => None,
            MerkleElement::Leaf { item_hash, .. } => Some(item_hash),
            MerkleElement::Node { hash, .. } => Some(hash),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, MerkleElement::Empty)
    }

    pub fn size(&self) -> u64 {
        match self {
            MerkleElement::Empty => 0,
            MerkleElement::Leaf { .. } => 1,
            MerkleElement::Node { left, right, .. } => left.size() + right.size(),
        }
    }

    /// In-order view of the leaf items, reproducing the exact order the
    /// items were supplied to the builder.
    pub fn to_list(&self) -> Vec<&T> {
        let mut items = Vec::new();
        self.collect_refs(&mut items);
        items
    }

    /// In-order traversal that consumes the tree and returns the original
    /// item sequence.
    pub fn into_list(self) -> Vec<T> {
        let mut items = Vec::new();
        self.collect_items(&mut items);
        items
    }

    fn collect_refs<'a>(&'a self, items: &mut Vec<&'a T>) {
        match self {
            MerkleElement::Empty => {}
            MerkleElement::Leaf { item, .. } => items.push(item),
            MerkleElement::Node { left, right, .. } => {
                left.collect_refs(items);
                right.collect_refs(items);
            }
        }
    }

    fn collect_items(self, items: &mut Vec<T>) {
        match self {
            MerkleElement::Empty => {}
            MerkleElement::Leaf { item, .. } => items.push(item),
            MerkleElement::Node { left, right, .. } => {
                left.collect_items(items);
                right.collect_items(items);
            }
        }
    }
}

impl<T> fmt::Display for MerkleElement<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MerkleElement::Empty => write!(f, "MerkleElement::Empty"),
            MerkleElement::Leaf { item_hash, .. } => {
                write!(f, "MerkleElement::Leaf(0x{})", hex::encode(item_hash))
            }
            MerkleElement::Node { hash, .. } => {
                write!(f, "MerkleElement::Node(0x{})", hex::encode(hash))
            }
        }
    }
}

use crate::balanced::element::MerkleElement;
use crate::balanced::proof::{Proof, ProofItem};
use crate::common::{combine, sum, Bytes32};

use alloc::vec::Vec;

impl<T> MerkleElement<T> {
    /// Builds a tree over `items` with a top-down balanced split: the left
    /// half always receives `floor(len / 2)` items, the right half the
    /// remainder. The split rule is a compatibility contract with external
    /// verifiers; bottom-up leaf pairing yields a different root for the
    /// same input and must not be substituted.
    pub fn from_list<F>(items: Vec<T>, serialize: &F) -> Self
    where
        F: Fn(&T) -> Vec<u8>,
    {
        let len = items.len();
        let mut items = items.into_iter();
        build_range(&mut items, len, serialize)
    }

    /// Searches for `item` and returns the sibling-hash path from the level
    /// nearest the leaf to the level nearest the root. If the item occurs
    /// more than once, the leftmost matching leaf's proof is returned.
    /// An empty tree or an absent item yields `None`.
    pub fn get_proof<F>(&self, item: &T, serialize: &F) -> Option<Proof>
    where
        F: Fn(&T) -> Vec<u8>,
    {
        let target = sum(serialize(item));
        let mut proof = Proof::new();
        find(self, &target, &mut proof).then_some(proof)
    }

    /// Appends `item` and rebuilds the tree from scratch. The cost scales
    /// with the total item count, not with the size of the change.
    pub fn add<F>(self, item: T, serialize: &F) -> Self
    where
        F: Fn(&T) -> Vec<u8>,
    {
        let mut items = self.into_list();
        items.push(item);
        Self::from_list(items, serialize)
    }

    /// Removes the first occurrence of `item` and rebuilds the tree from
    /// scratch. Removing an absent item is a no-op rebuild.
    pub fn remove<F>(self, item: &T, serialize: &F) -> Self
    where
        T: PartialEq,
        F: Fn(&T) -> Vec<u8>,
    {
        let mut items = self.into_list();
        if let Some(index) = items.iter().position(|candidate| candidate == item) {
            items.remove(index);
        }
        Self::from_list(items, serialize)
    }
}

// Recursion consumes `len` items from a shared iterator rather than copying
// sub-sequences, keeping construction O(n log n) time and O(n) space.
fn build_range<T, I, F>(items: &mut I, len: usize, serialize: &F) -> MerkleElement<T>
where
    I: Iterator<Item = T>,
    F: Fn(&T) -> Vec<u8>,
{
    match len {
        0 => MerkleElement::Empty,
        1 => {
            let item = items
                .next()
                .expect("the caller guarantees `len` items remain");
            let item_hash = sum(serialize(&item));
            MerkleElement::leaf(item, item_hash)
        }
        _ => {
            let cutoff = len / 2;
            let left = build_range(items, cutoff, serialize);
            let right = build_range(items, len - cutoff, serialize);
            let hash = combine(left.hash(), right.hash());
            MerkleElement::node(hash, left, right)
        }
    }
}

// Depth-first search, left branch first. Sibling digests are appended on the
// successful unwind, so the finished proof reads leaf-adjacent entry first.
fn find<T>(element: &MerkleElement<T>, target: &Bytes32, proof: &mut Proof) -> bool {
    match element {
        MerkleElement::Empty => false,
        MerkleElement::Leaf { item_hash, .. } => item_hash == target,
        MerkleElement::Node { left, right, .. } => {
            let checkpoint = proof.len();
            if find(left, target, proof) {
                if let Some(sibling) = right.digest() {
                    proof.push(ProofItem::Right(*sibling));
                    return true;
                }
                // A hand-built node with an `Empty` child has no 32-byte
                // sibling digest to encode; the branch is unprovable.
                proof.truncate(checkpoint);
                return false;
            }
            if find(right, target, proof) {
                if let Some(sibling) = left.digest() {
                    proof.push(ProofItem::Left(*sibling));
                    return true;
                }
                proof.truncate(checkpoint);
            }
            false
        }
    }
}

use crate::balanced::proof::ProofItem;
use crate::common::{combine, sum};

use alloc::vec::Vec;

/// Recomputes a candidate root from `item` and `proof`, then compares it to
/// `root` byte for byte. The proof is consumed leaf-adjacent entry first:
/// a `Left` sibling is concatenated before the candidate, a `Right` sibling
/// after it. An empty proof is valid exactly when the item's own hash
/// already equals the root, the single-leaf-tree case.
///
/// Returns `false` on any mismatch; a structurally valid but incorrect
/// proof is a negative result, not an error.
pub fn verify<T, F>(root: &[u8], item: &T, proof: &[ProofItem], serialize: &F) -> bool
where
    F: Fn(&T) -> Vec<u8>,
{
    let mut candidate = sum(serialize(item));
    for entry in proof {
        candidate = match entry {
            ProofItem::Left(hash) => combine(hash, candidate),
            ProofItem::Right(hash) => combine(candidate, hash),
        };
    }
    root == candidate.as_slice()
}

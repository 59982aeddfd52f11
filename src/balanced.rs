mod element;
mod merkle_tree;
mod proof;
mod verify;

pub use element::MerkleElement;
pub use proof::{Primitive, Proof, ProofItem};
pub use verify::verify;

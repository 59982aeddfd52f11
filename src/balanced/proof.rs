use crate::common::{Bytes32, DeserializeError, Side};

use alloc::vec::Vec;
use core::fmt;

/// An ordered sibling-hash path, leaf-adjacent entry first.
pub type Proof = Vec<ProofItem>;

/// Flat `(side tag, sibling digest)` rendering of a proof entry for callers
/// that serialize proofs themselves.
pub type Primitive = (u8, Bytes32);

/// A sibling digest tagged with which side of the path it occupies.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProofItem {
    Left(Bytes32),
    Right(Bytes32),
}

impl ProofItem {
    pub fn hash(&self) -> &Bytes32 {
        match self {
            ProofItem::Left(hash) => hash,
            ProofItem::Right(hash) => hash,
        }
    }

    pub fn side(&self) -> Side {
        match self {
            ProofItem::Left(_) => Side::Left,
            ProofItem::Right(_) => Side::Right,
        }
    }
}

impl From<ProofItem> for Primitive {
    fn from(item: ProofItem) -> Self {
        (item.side().into(), *item.hash())
    }
}

impl TryFrom<Primitive> for ProofItem {
    type Error = DeserializeError;

    fn try_from(primitive: Primitive) -> Result<Self, Self::Error> {
        let (side, hash) = primitive;
        let item = match Side::try_from(side)? {
            Side::Left => ProofItem::Left(hash),
            Side::Right => ProofItem::Right(hash),
        };
        Ok(item)
    }
}

impl fmt::Debug for ProofItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProofItem::Left(hash) => {
                f.debug_tuple("Left").field(&hex::encode(hash)).finish()
            }
            ProofItem::Right(hash) => {
                f.debug_tuple("Right").field(&hex::encode(hash)).finish()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::common::sum;

    #[test]
    fn hash_returns_the_sibling_digest_for_both_sides() {
        let digest = sum("dog");

        assert_eq!(ProofItem::Left(digest).hash(), &digest);
        assert_eq!(ProofItem::Right(digest).hash(), &digest);
    }

    #[test]
    fn side_tags_match_the_encoding_contract() {
        assert_eq!(ProofItem::Left([0u8; 32]).side(), Side::Left);
        assert_eq!(ProofItem::Right([0u8; 32]).side(), Side::Right);
        assert_eq!(u8::from(ProofItem::Left([0u8; 32]).side()), 0x00);
        assert_eq!(u8::from(ProofItem::Right([0u8; 32]).side()), 0x01);
    }

    #[test]
    fn primitive_round_trips_through_try_from() {
        let item = ProofItem::Right(sum("cat"));

        let primitive = Primitive::from(item.clone());
        assert_eq!(primitive, (0x01, sum("cat")));

        let decoded = ProofItem::try_from(primitive).unwrap();
        assert_eq!(decoded, item);
    }

    #[test]
    fn try_from_rejects_an_unknown_side_tag() {
        let primitive: Primitive = (0x02, [0u8; 32]);

        assert!(ProofItem::try_from(primitive).is_err());
    }

    #[test]
    fn debug_renders_the_digest_as_hex() {
        let item = ProofItem::Left(sum("dog"));

        let rendered = format!("{:?}", item);
        assert_eq!(
            rendered,
            "Left(\"cd6357efdd966de8c0cb2f876cc89ec74ce35f0968e11743987084bd42fb8944\")"
        );
    }
}

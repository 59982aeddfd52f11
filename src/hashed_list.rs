use crate::common::{combine, empty_sum_sha256, sum, Bytes32};

use alloc::vec::Vec;
use core::fmt;

/// An ordered item list committed to by a single running hash: starting
/// from the digest of the empty byte string, each item's digest is folded
/// in as `hash = SHA256(hash ++ SHA256(serialize(item)))`, in list order.
/// Unlike the tree, the commitment supports no membership proofs; it is a
/// cheap identity for a whole list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedList<T> {
    items: Vec<T>,
    hash: Bytes32,
}

impl<T> HashedList<T> {
    pub fn new<F>(items: Vec<T>, serialize: &F) -> Self
    where
        F: Fn(&T) -> Vec<u8>,
    {
        let hash = items.iter().fold(*empty_sum_sha256(), |acc, item| {
            combine(acc, sum(serialize(item)))
        });
        Self { items, hash }
    }

    pub fn hash(&self) -> &Bytes32 {
        &self.hash
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> fmt::Display for HashedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashedList(0x{})", hex::encode(self.hash))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn serialize(item: &&str) -> Vec<u8> {
        item.as_bytes().to_vec()
    }

    #[test]
    fn empty_list_hashes_to_the_empty_string_digest() {
        let list = HashedList::<&str>::new(vec![], &serialize);

        let hex = hex::encode(list.hash());
        let expected_hex = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
        assert_eq!(hex, expected_hex);
        assert!(list.is_empty());
    }

    #[test]
    fn one_item_list_returns_the_expected_hash() {
        let list = HashedList::new(vec!["dog"], &serialize);

        let hex = hex::encode(list.hash());
        let expected_hex = "778a58564343a3eb1b4f22abde3ee16a1846ed730365d32334c5b64338c35a2c";
        assert_eq!(hex, expected_hex);
    }

    #[test]
    fn two_item_list_returns_the_expected_hash() {
        let list = HashedList::new(vec!["dog", "cat"], &serialize);

        let hex = hex::encode(list.hash());
        let expected_hex = "abc48c555c2e7fb968c02bf0a6e6854b7239b3ede1d5745152cc656e430ae845";
        assert_eq!(hex, expected_hex);
    }

    #[test]
    fn four_item_list_returns_the_expected_hash() {
        let list = HashedList::new(vec!["dog", "cat", "horse", "mouse"], &serialize);

        let hex = hex::encode(list.hash());
        let expected_hex = "f3b80d721103a0a321bc3b88a946c9c9fc86f5721b61cf012d731b6a1d9efe3b";
        assert_eq!(hex, expected_hex);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn hash_depends_on_item_order() {
        let forward = HashedList::new(vec!["dog", "cat"], &serialize);
        let backward = HashedList::new(vec!["cat", "dog"], &serialize);

        assert_ne!(forward.hash(), backward.hash());
    }

    #[test]
    fn items_are_kept_in_insertion_order() {
        let list = HashedList::new(vec!["dog", "cat"], &serialize);

        assert_eq!(list.items(), &["dog", "cat"]);
        assert_eq!(list.into_items(), vec!["dog", "cat"]);
    }
}

use super::Bytes32;

pub fn sum<T: AsRef<[u8]>>(data: T) -> Bytes32 {
    use digest::Digest;
    let mut hash = sha2::Sha256::new();
    hash.update(data.as_ref());
    hash.finalize().into()
}

/// Digest of the raw concatenation `lhs ++ rhs`, left bytes first.
/// No length prefix and no separator; an external verifier recomputes
/// node hashes from exactly this rule.
pub fn combine<L: AsRef<[u8]>, R: AsRef<[u8]>>(lhs: L, rhs: R) -> Bytes32 {
    use digest::Digest;
    let mut hash = sha2::Sha256::new();
    hash.update(lhs.as_ref());
    hash.update(rhs.as_ref());
    hash.finalize().into()
}

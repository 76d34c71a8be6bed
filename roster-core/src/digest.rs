//! Order-independent content digest of the live record set
//!
//! Provides:
//! - 32-byte BLAKE3-based digest, XOR-folded so slot order is irrelevant
//! - O(1) equality between two tables' contents
//!
//! Relocation must preserve the live record set exactly; the digest is the
//! cheap witness tests and callers compare across a resize.

use blake3::Hasher;

/// 32-byte digest value.
pub type DigestBytes = [u8; 32];

/// Digest over a set of record names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableDigest {
    root: DigestBytes,
    count: usize,
}

impl TableDigest {
    /// Digest of the empty set.
    pub fn empty() -> Self {
        TableDigest {
            root: [0u8; 32],
            count: 0,
        }
    }

    /// Fold a set of names into a digest. XOR of the per-name hashes is
    /// commutative, so iteration order does not affect the result.
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut root = [0u8; 32];
        let mut count = 0;
        for name in names {
            let hash = Self::hash_name(name);
            for (byte, hashed) in root.iter_mut().zip(hash.iter()) {
                *byte ^= hashed;
            }
            count += 1;
        }
        TableDigest { root, count }
    }

    /// Hash a single name.
    pub fn hash_name(name: &str) -> DigestBytes {
        let mut hasher = Hasher::new();
        hasher.update(name.as_bytes());
        *hasher.finalize().as_bytes()
    }

    pub fn root(&self) -> &DigestBytes {
        &self.root
    }

    /// Number of names folded in.
    pub fn count(&self) -> usize {
        self.count
    }

    /// O(1) comparison of two digests.
    pub fn is_identical(&self, other: &Self) -> bool {
        self.root == other.root && self.count == other.count
    }
}

impl Default for TableDigest {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_digest() {
        let digest = TableDigest::empty();
        assert_eq!(digest.count(), 0);
        assert_eq!(digest.root(), &[0u8; 32]);
    }

    #[test]
    fn test_single_name() {
        let digest = TableDigest::from_names(["ann"]);
        assert_eq!(digest.count(), 1);
        assert_eq!(digest.root(), &TableDigest::hash_name("ann"));
    }

    #[test]
    fn test_order_independent() {
        let forward = TableDigest::from_names(["ann", "bob", "cid"]);
        let backward = TableDigest::from_names(["cid", "bob", "ann"]);
        assert!(forward.is_identical(&backward));
    }

    #[test]
    fn test_content_sensitive() {
        let with_bob = TableDigest::from_names(["ann", "bob"]);
        let with_cid = TableDigest::from_names(["ann", "cid"]);
        assert!(!with_bob.is_identical(&with_cid));
    }
}

//! Digest output tagged with the algorithm that produced it

use std::fmt;

use crate::HashAlgorithm;

/// Raw digest bytes plus their algorithm
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashResult {
    algorithm: HashAlgorithm,
    bytes: Vec<u8>,
}

impl HashResult {
    pub(crate) fn new(algorithm: HashAlgorithm, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), algorithm.output_len());
        Self { algorithm, bytes }
    }

    /// Algorithm that produced this digest
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Digest bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take the digest bytes
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Lowercase hex, the form every digest builtin returns
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Digest length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for a computed digest
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for HashResult {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for HashResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

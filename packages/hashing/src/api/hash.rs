//! Entry point for hash operations

use crate::{HashAlgorithm, HashResult};

/// Entry point for hash operations
///
/// ```
/// use rulecrypt_hashing::Hash;
///
/// let digest = Hash::sha1().compute("lorem ipsum");
/// assert_eq!(digest.to_hex(), "bfb7759a67daeb65410490b4d98bb9da7d1ea2ce");
/// ```
pub struct Hash;

impl Hash {
    /// Use MD5
    #[must_use]
    pub fn md5() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Md5)
    }

    /// Use SHA-1
    #[must_use]
    pub fn sha1() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Sha1)
    }

    /// Use SHA-256
    #[must_use]
    pub fn sha256() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Sha256)
    }
}

/// Hash builder bound to one algorithm
#[derive(Debug, Clone, Copy)]
pub struct HashBuilder {
    algorithm: HashAlgorithm,
}

impl HashBuilder {
    /// Create a builder for `algorithm`
    #[must_use]
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Algorithm this builder computes
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Digest `data`
    pub fn compute<T: AsRef<[u8]>>(&self, data: T) -> HashResult {
        let data = data.as_ref();
        tracing::trace!(algorithm = %self.algorithm, len = data.len(), "computing digest");
        self.algorithm.digest(data)
    }
}

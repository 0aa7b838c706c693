//! Digest functions
//!
//! Hashing is fast and bounded by input size, so everything here runs
//! synchronously on the caller's thread.

use digest::Digest;

use crate::{HashAlgorithm, HashResult};

fn digest_with<D: Digest>(algorithm: HashAlgorithm, data: &[u8]) -> HashResult {
    let mut hasher = D::new();
    hasher.update(data);
    HashResult::new(algorithm, hasher.finalize().to_vec())
}

/// MD5 digest of `data`
#[must_use]
pub fn md5_hash(data: &[u8]) -> HashResult {
    digest_with::<::md5::Md5>(HashAlgorithm::Md5, data)
}

/// SHA-1 digest of `data`
#[must_use]
pub fn sha1_hash(data: &[u8]) -> HashResult {
    digest_with::<::sha1::Sha1>(HashAlgorithm::Sha1, data)
}

/// SHA-256 digest of `data`
#[must_use]
pub fn sha256_hash(data: &[u8]) -> HashResult {
    digest_with::<::sha2::Sha256>(HashAlgorithm::Sha256, data)
}

/// `crypto.md5`: 32 lowercase hex characters
#[must_use]
pub fn md5(input: &str) -> String {
    md5_hash(input.as_bytes()).to_hex()
}

/// `crypto.sha1`: 40 lowercase hex characters
#[must_use]
pub fn sha1(input: &str) -> String {
    sha1_hash(input.as_bytes()).to_hex()
}

/// `crypto.sha256`: 64 lowercase hex characters
#[must_use]
pub fn sha256(input: &str) -> String {
    sha256_hash(input.as_bytes()).to_hex()
}

//! Supported digest algorithms

use std::fmt;
use std::str::FromStr;

use crate::api::hash_functions::{md5_hash, sha1_hash, sha256_hash};
use crate::{HashError, HashResult};

/// Fixed digest algorithms exposed to policy rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// MD5, 128-bit
    Md5,
    /// SHA-1, 160-bit
    Sha1,
    /// SHA-256, 256-bit
    Sha256,
}

impl HashAlgorithm {
    /// Every supported algorithm
    pub const ALL: [Self; 3] = [Self::Md5, Self::Sha1, Self::Sha256];

    /// Digest `data` with this algorithm
    #[must_use]
    pub fn digest(self, data: &[u8]) -> HashResult {
        match self {
            Self::Md5 => md5_hash(data),
            Self::Sha1 => sha1_hash(data),
            Self::Sha256 => sha256_hash(data),
        }
    }

    /// Digest length in bytes
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
        }
    }

    /// Lowercase algorithm name as used in builtin names
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            _ => Err(HashError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

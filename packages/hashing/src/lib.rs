//! Digest builtins: MD5, SHA-1 and SHA-256 over arbitrary strings
//!
//! Each function treats its argument as raw bytes and returns the digest as
//! lowercase hexadecimal. All of them are total: any input, including the
//! empty string, produces a digest.

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod api;
pub mod error;
pub mod hash_result;

pub use algorithm::HashAlgorithm;
pub use api::{md5, sha1, sha256, Hash, HashBuilder};
pub use error::{HashError, Result};
pub use hash_result::HashResult;

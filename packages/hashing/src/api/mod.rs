//! Hashing API
//!
//! Usage: `Hash::sha256().compute(data)` or the string helpers `md5`, `sha1`
//! and `sha256` used by the builtins.

pub mod hash;
pub mod hash_functions;

pub use hash::{Hash, HashBuilder};
pub use hash_functions::{md5, sha1, sha256};

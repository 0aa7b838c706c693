//! Digest builtins

use rulecrypt_common::BuiltinError;
use serde_json::Value;

use super::BuiltinFn;

/// `crypto.md5`
pub const MD5: &str = "crypto.md5";
/// `crypto.sha1`
pub const SHA1: &str = "crypto.sha1";
/// `crypto.sha256`
pub const SHA256: &str = "crypto.sha256";

pub(crate) const BUILTINS: [(&str, BuiltinFn); 3] = [(MD5, md5), (SHA1, sha1), (SHA256, sha256)];

/// Lowercase hex MD5 of the argument
pub fn md5(input: &str) -> Result<Value, BuiltinError> {
    Ok(Value::String(rulecrypt_hashing::md5(input)))
}

/// Lowercase hex SHA-1 of the argument
pub fn sha1(input: &str) -> Result<Value, BuiltinError> {
    Ok(Value::String(rulecrypt_hashing::sha1(input)))
}

/// Lowercase hex SHA-256 of the argument
pub fn sha256(input: &str) -> Result<Value, BuiltinError> {
    Ok(Value::String(rulecrypt_hashing::sha256(input)))
}

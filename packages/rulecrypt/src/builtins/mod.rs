//! Builtin implementations, one module per capability group

#[cfg(feature = "hashing")]
pub mod hash;
#[cfg(feature = "x509")]
pub mod x509;

use rulecrypt_common::BuiltinError;
use serde::Serialize;
use serde_json::Value;

/// Entry point of a builtin: one string argument, one value result
pub type BuiltinFn = fn(&str) -> Result<Value, BuiltinError>;

pub(crate) fn to_value<T: Serialize>(value: &T) -> Result<Value, BuiltinError> {
    serde_json::to_value(value).map_err(BuiltinError::from_source)
}

//! `crypto.x509.*` builtins

use rulecrypt_common::BuiltinError;
use serde_json::Value;

use super::{to_value, BuiltinFn};

/// `crypto.x509.parse_certificates`
pub const PARSE_CERTIFICATES: &str = "crypto.x509.parse_certificates";
/// `crypto.x509.parse_certificate_request`
pub const PARSE_CERTIFICATE_REQUEST: &str = "crypto.x509.parse_certificate_request";

pub(crate) const BUILTINS: [(&str, BuiltinFn); 2] = [
    (PARSE_CERTIFICATES, parse_certificates),
    (PARSE_CERTIFICATE_REQUEST, parse_certificate_request),
];

/// Array of certificate objects, in input order
pub fn parse_certificates(input: &str) -> Result<Value, BuiltinError> {
    let chain = rulecrypt_x509::parse_certificates(input).map_err(BuiltinError::from_source)?;
    to_value(&chain)
}

/// Single certificate request object
pub fn parse_certificate_request(input: &str) -> Result<Value, BuiltinError> {
    let csr =
        rulecrypt_x509::parse_certificate_request(input).map_err(BuiltinError::from_source)?;
    to_value(&csr)
}

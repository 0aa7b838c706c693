//! X.509 ingestion for policy builtins
//!
//! Accepts certificates, chains and certificate signing requests in any of
//! the shapes policy authors actually pass around: PEM text, base64 of DER,
//! or base64 of PEM. Input is unwrapped in three stages:
//!
//! 1. [`format`] classifies the string by its outermost encoding
//! 2. [`envelope`] peels PEM armour and transport base64 down to DER
//! 3. [`parser`] walks the DER and projects it into [`types`]
//!
//! ```no_run
//! let chain = rulecrypt_x509::parse_certificates("-----BEGIN CERTIFICATE-----\n...")?;
//! println!("{:?}", chain.leaf().subject.common_name());
//! # Ok::<(), rulecrypt_x509::X509Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod envelope;
pub mod error;
pub mod format;
pub mod parser;
pub mod types;

pub use error::{DecodeErrorKind, Result, X509Error};
pub use format::Encoding;
pub use types::{
    Attribute, Certificate, CertificateChain, CertificateRequest, DistinguishedName, Extension,
    ExtensionDetails, PublicKey, SubjectAltNames,
};

/// Decode every certificate in `input`, preserving input order.
///
/// # Errors
///
/// [`X509Error::IllegalBase64`] when the text cannot be unwrapped to binary,
/// [`X509Error::Structure`] when the binary is not a sequence of certificates.
pub fn parse_certificates(input: &str) -> Result<CertificateChain> {
    let blobs = envelope::unwrap_envelope(input)?;
    let chain = parser::walk_certificates(&blobs)?;
    tracing::debug!(count = chain.len(), "parsed certificates");
    Ok(chain)
}

/// Decode a single certificate signing request.
///
/// Only the first request is used; trailing data and further PEM blocks are
/// ignored.
///
/// # Errors
///
/// Same two kinds as [`parse_certificates`].
pub fn parse_certificate_request(input: &str) -> Result<CertificateRequest> {
    let blobs = envelope::unwrap_envelope(input)?;
    let first = blobs
        .first()
        .ok_or_else(|| X509Error::structure("no certificate request in input"))?;
    if blobs.len() > 1 {
        tracing::debug!(blocks = blobs.len(), "using first block as certificate request");
    }
    parser::walk_request(first)
}

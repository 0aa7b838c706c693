//! Input format classification
//!
//! An argument is either PEM text or a base64 transport encoding whose payload
//! is itself PEM text or raw DER. Classification never consumes the input, and
//! a decoded payload is reclassified exactly once: the result of
//! [`Encoding::reclassify`] is always resolved, so unwrapping terminates.

use std::borrow::Cow;

/// Opening marker shared by every PEM block (`-----BEGIN CERTIFICATE-----`,
/// `-----BEGIN CERTIFICATE REQUEST-----`, ...)
pub const PEM_BEGIN_MARKER: &[u8] = b"-----BEGIN ";

/// Number of base64 layers peeled before the payload must be resolved
pub const MAX_RECLASSIFY_HOPS: usize = 1;

/// Decoding state of one argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoding<'a> {
    /// PEM text, possibly several blocks
    PemText(Cow<'a, [u8]>),
    /// Expected to be base64; payload not yet inspected
    Base64Unresolved(&'a str),
    /// DER bytes of one or more concatenated structures
    RawStructure(Vec<u8>),
}

impl<'a> Encoding<'a> {
    /// Classify the raw argument string
    #[must_use]
    pub fn classify(input: &'a str) -> Self {
        if contains_pem_marker(input.as_bytes()) {
            Self::PemText(Cow::Borrowed(input.as_bytes()))
        } else {
            Self::Base64Unresolved(input)
        }
    }

    /// Classify the payload of a successful base64 decode
    #[must_use]
    pub fn reclassify(decoded: Vec<u8>) -> Encoding<'static> {
        if contains_pem_marker(&decoded) {
            Encoding::PemText(Cow::Owned(decoded))
        } else {
            Encoding::RawStructure(decoded)
        }
    }

    /// Short name for logging
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::PemText(_) => "pem",
            Self::Base64Unresolved(_) => "base64",
            Self::RawStructure(_) => "der",
        }
    }
}

/// Whether `bytes` contain a PEM opening marker anywhere
#[must_use]
pub fn contains_pem_marker(bytes: &[u8]) -> bool {
    count_pem_markers(bytes) > 0
}

/// Number of PEM opening markers in `bytes`
#[must_use]
pub fn count_pem_markers(bytes: &[u8]) -> usize {
    bytes
        .windows(PEM_BEGIN_MARKER.len())
        .filter(|window| *window == PEM_BEGIN_MARKER)
        .count()
}

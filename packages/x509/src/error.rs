//! Decoder error types
//!
//! The decoder reports exactly two kinds of failure. Their display text starts
//! with a fixed prefix that policy tests match on.

use std::fmt;

/// Which stage of the decoder rejected the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    /// Input is neither PEM text nor decodable base64
    Base64,
    /// Unwrapped bytes are not a valid certificate or request structure
    Structure,
}

/// Certificate and CSR decoding errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum X509Error {
    /// Envelope stage failure
    #[error("illegal base64 data: {reason}")]
    IllegalBase64 {
        /// Underlying decoder message
        reason: String,
    },

    /// Structural stage failure
    #[error("asn1: structure error: {reason}")]
    Structure {
        /// Underlying parser message
        reason: String,
    },
}

impl X509Error {
    /// Failure of the envelope stage
    #[must_use]
    pub fn illegal_base64(reason: impl fmt::Display) -> Self {
        Self::IllegalBase64 {
            reason: reason.to_string(),
        }
    }

    /// Failure of the structural stage
    #[must_use]
    pub fn structure(reason: impl fmt::Display) -> Self {
        Self::Structure {
            reason: reason.to_string(),
        }
    }

    /// Error category
    #[must_use]
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            Self::IllegalBase64 { .. } => DecodeErrorKind::Base64,
            Self::Structure { .. } => DecodeErrorKind::Structure,
        }
    }
}

impl From<base64::DecodeError> for X509Error {
    fn from(err: base64::DecodeError) -> Self {
        Self::illegal_base64(err)
    }
}

// Unterminated blocks and undecodable bodies both fail at the envelope stage.
impl From<pem::PemError> for X509Error {
    fn from(err: pem::PemError) -> Self {
        Self::illegal_base64(err)
    }
}

/// Result type for decoding operations
pub type Result<T> = std::result::Result<T, X509Error>;

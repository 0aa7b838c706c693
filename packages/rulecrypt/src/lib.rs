//! # Rulecrypt
//!
//! Crypto builtins for a policy rule evaluator. Each builtin takes one string
//! argument and returns a JSON value the evaluator can query.
//!
//! ## Features
//!
//! - `x509` - `crypto.x509.parse_certificates`, `crypto.x509.parse_certificate_request`
//! - `hashing` - `crypto.md5`, `crypto.sha1`, `crypto.sha256`
//! - `full` (default) - both groups
//!
//! ## Example
//!
//! ```rust
//! use rulecrypt::{Builtins, BuiltinsConfig};
//!
//! let builtins = Builtins::new(BuiltinsConfig::default());
//! let digest = builtins.call("crypto.md5", "lorem ipsum")?;
//! assert_eq!(digest, "80a751fde577028640c419000e33eba6");
//! # Ok::<(), rulecrypt::BuiltinError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod builtins;
pub mod config;
pub mod registry;

pub use builtins::BuiltinFn;
pub use config::BuiltinsConfig;
pub use registry::Builtins;

// === Core Re-exports ===

pub use rulecrypt_common::*;

// === X.509 Re-exports ===

#[cfg(feature = "x509")]
#[cfg_attr(docsrs, doc(cfg(feature = "x509")))]
pub use rulecrypt_x509::{
    parse_certificate_request, parse_certificates, Certificate, CertificateChain,
    CertificateRequest, DecodeErrorKind, X509Error,
};

// === Hashing Re-exports ===

#[cfg(feature = "hashing")]
#[cfg_attr(docsrs, doc(cfg(feature = "hashing")))]
pub use rulecrypt_hashing::{Hash, HashAlgorithm, HashError, HashResult};

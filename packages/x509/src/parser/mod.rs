//! Certificate and request parsing
//!
//! - `core`: structural walking and projection into the object model
//! - `name_extraction`: distinguished name attributes
//! - `details_extraction`: well-known extension values
//! - `key_extraction`: algorithm names and public key details

pub mod core;
pub mod details_extraction;
pub mod key_extraction;
pub mod name_extraction;

pub use core::{parse_x509_certificate, walk_certificates, walk_request};

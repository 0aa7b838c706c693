//! Common infrastructure shared by the rulecrypt crates
//!
//! This crate provides:
//! - The error value a builtin function hands back to the rule evaluator
//! - Logging initialisation for binaries and test harnesses

pub mod error;

pub use error::{BuiltinError, ErrorCode, Logging, Result};

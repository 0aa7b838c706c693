//! Builtin error handling
//!
//! Every builtin either produces a value or a [`BuiltinError`]. The error
//! carries a stable [`ErrorCode`] and the message of the failure that caused
//! it, so the evaluator can surface it to policy output unchanged.

pub mod constructors;
pub mod display;
pub mod logging;
pub mod types;

pub use logging::Logging;
pub use types::{BuiltinError, ErrorCode, Result};

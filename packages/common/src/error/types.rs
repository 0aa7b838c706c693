//! Core error types and definitions

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Error value returned to the rule evaluator by a builtin call
#[derive(Debug, Clone)]
pub struct BuiltinError {
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug)]
pub(super) struct ErrorInner {
    pub code: ErrorCode,
    pub message: String,
    /// Name of the builtin that failed, when known
    pub context: Option<String>,
    pub source: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

/// Stable error codes understood by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ErrorCode {
    /// The builtin ran and rejected its argument
    #[error("eval_builtin_error")]
    #[serde(rename = "eval_builtin_error")]
    BuiltinErr,

    /// No builtin is registered under the requested name
    #[error("unknown_builtin")]
    #[serde(rename = "unknown_builtin")]
    UnknownBuiltin,

    /// The builtin exists but the active capabilities do not allow it
    #[error("builtin_disabled")]
    #[serde(rename = "builtin_disabled")]
    BuiltinDisabled,
}

/// Result type alias using [`BuiltinError`]
pub type Result<T> = std::result::Result<T, BuiltinError>;

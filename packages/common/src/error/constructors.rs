//! Error constructors and accessors

use super::types::{BuiltinError, ErrorCode, ErrorInner};
use std::sync::Arc;

impl BuiltinError {
    /// Create a new error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(ErrorInner {
                code,
                message: message.into(),
                context: None,
                source: None,
            }),
        }
    }

    /// Wrap a function failure, keeping its display text as the message
    #[must_use]
    pub fn from_source<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(ErrorInner {
                code: ErrorCode::BuiltinErr,
                message: source.to_string(),
                context: None,
                source: Some(Arc::new(source)),
            }),
        }
    }

    /// Failure raised by a builtin while evaluating its argument
    #[must_use]
    pub fn builtin(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BuiltinErr, message)
    }

    /// No builtin registered under `name`
    #[must_use]
    pub fn unknown_builtin(name: &str) -> Self {
        Self::new(ErrorCode::UnknownBuiltin, format!("unknown builtin: {name}"))
            .with_builtin(name)
    }

    /// Builtin `name` is not part of the enabled capabilities
    #[must_use]
    pub fn disabled(name: &str) -> Self {
        Self::new(ErrorCode::BuiltinDisabled, format!("builtin disabled: {name}"))
            .with_builtin(name)
    }

    /// Attach the name of the builtin that produced this error
    #[must_use]
    pub fn with_builtin(self, name: &str) -> Self {
        let inner = match Arc::try_unwrap(self.inner) {
            Ok(mut inner) => {
                inner.context = Some(name.to_string());
                inner
            }
            Err(shared) => ErrorInner {
                code: shared.code,
                message: shared.message.clone(),
                context: Some(name.to_string()),
                source: shared.source.clone(),
            },
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Error code
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.inner.code
    }

    /// Message of the underlying failure
    #[must_use]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// Name of the builtin that failed, if attached
    #[must_use]
    pub fn builtin_name(&self) -> Option<&str> {
        self.inner.context.as_deref()
    }
}

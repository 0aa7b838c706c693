//! Display and trait implementations for `BuiltinError`

use super::types::BuiltinError;
use std::fmt;

impl fmt::Display for BuiltinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.code)?;

        if let Some(context) = &self.inner.context {
            write!(f, ": {context}")?;
        }

        write!(f, ": {}", self.inner.message)
    }
}

impl std::error::Error for BuiltinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl PartialEq for BuiltinError {
    fn eq(&self, other: &Self) -> bool {
        self.inner.code == other.inner.code
            && self.inner.message == other.inner.message
            && self.inner.context == other.inner.context
    }
}

impl Eq for BuiltinError {}

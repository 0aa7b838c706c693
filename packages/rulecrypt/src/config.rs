//! Builtin capability configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which builtins are callable and how failures are reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuiltinsConfig {
    /// Allow-list of builtin names; `None` enables all of them
    pub enabled: Option<BTreeSet<String>>,
    /// Emit a warning when a builtin call fails
    pub log_failures: bool,
}

impl Default for BuiltinsConfig {
    fn default() -> Self {
        Self {
            enabled: None,
            log_failures: true,
        }
    }
}

impl BuiltinsConfig {
    /// Parse from JSON; absent fields keep their defaults
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON or mistyped fields.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Restrict the registry to `names`
    #[must_use]
    pub fn with_enabled<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enabled = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Toggle failure warnings
    #[must_use]
    pub fn with_log_failures(mut self, log_failures: bool) -> Self {
        self.log_failures = log_failures;
        self
    }

    /// Whether `name` passes the allow-list
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled
            .as_ref()
            .map_or(true, |enabled| enabled.contains(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = BuiltinsConfig::from_json("{}").expect("valid config");
        assert_eq!(config, BuiltinsConfig::default());
        assert!(config.log_failures);
        assert!(config.is_enabled("crypto.md5"));
    }

    #[test]
    fn test_allow_list() {
        let config = BuiltinsConfig::from_json(r#"{"enabled": ["crypto.sha256"]}"#)
            .expect("valid config");
        assert!(config.is_enabled("crypto.sha256"));
        assert!(!config.is_enabled("crypto.md5"));
        assert!(config.log_failures);
    }

    #[test]
    fn test_mistyped_field_is_rejected() {
        assert!(BuiltinsConfig::from_json(r#"{"log_failures": "yes"}"#).is_err());
    }
}

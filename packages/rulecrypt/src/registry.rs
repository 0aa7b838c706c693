//! Name-to-function dispatch for the rule evaluator

use std::collections::BTreeMap;

use rulecrypt_common::{BuiltinError, Logging};
use serde_json::Value;
use tracing::{debug, warn};

use crate::builtins::BuiltinFn;
use crate::config::BuiltinsConfig;

/// Immutable builtin table
///
/// Holds only plain function pointers, so it is `Send + Sync` and can be
/// shared across evaluator threads without locking.
#[derive(Debug, Clone)]
pub struct Builtins {
    table: BTreeMap<&'static str, BuiltinFn>,
    config: BuiltinsConfig,
}

impl Builtins {
    /// Build the registry for the compiled-in builtin groups
    #[must_use]
    pub fn new(config: BuiltinsConfig) -> Self {
        let mut table: BTreeMap<&'static str, BuiltinFn> = BTreeMap::new();

        #[cfg(feature = "x509")]
        table.extend(crate::builtins::x509::BUILTINS);
        #[cfg(feature = "hashing")]
        table.extend(crate::builtins::hash::BUILTINS);

        if let Some(enabled) = &config.enabled {
            for name in enabled.iter().filter(|name| !table.contains_key(name.as_str())) {
                warn!("allow-list names unknown builtin {name}");
            }
        }
        debug!(builtins = table.len(), "builtin registry ready");

        Self { table, config }
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &BuiltinsConfig {
        &self.config
    }

    /// Enabled builtin names, sorted
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table
            .keys()
            .copied()
            .filter(|name| self.config.is_enabled(name))
    }

    /// Whether `name` is registered and enabled
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name) && self.config.is_enabled(name)
    }

    /// Invoke builtin `name` with `arg`
    ///
    /// # Errors
    ///
    /// `UnknownBuiltin` or `BuiltinDisabled` for lookups that fail, otherwise
    /// the builtin's own failure tagged with its name.
    pub fn call(&self, name: &str, arg: &str) -> Result<Value, BuiltinError> {
        let builtin = self
            .table
            .get(name)
            .ok_or_else(|| BuiltinError::unknown_builtin(name))?;
        if !self.config.is_enabled(name) {
            return Err(BuiltinError::disabled(name));
        }

        builtin(arg).map_err(|e| {
            let e = e.with_builtin(name);
            if self.config.log_failures {
                Logging::log_builtin_failure(name, arg.len(), &e);
            }
            e
        })
    }
}

impl Default for Builtins {
    fn default() -> Self {
        Self::new(BuiltinsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_registry_is_shareable() {
        assert_send_sync::<Builtins>();
    }

    #[test]
    fn test_names_follow_allow_list() {
        let builtins = Builtins::new(BuiltinsConfig::default().with_enabled(["crypto.sha1"]));
        assert_eq!(builtins.names().collect::<Vec<_>>(), ["crypto.sha1"]);
        assert!(builtins.contains("crypto.sha1"));
        assert!(!builtins.contains("crypto.md5"));
    }
}

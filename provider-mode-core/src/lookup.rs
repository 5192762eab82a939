//! Configuration stores the resolver reads from
//!
//! The host process owns the store and fills it before any query; the
//! resolver only ever reads through [`ConfigLookup`].

use std::collections::HashMap;
use std::env;
use std::sync::Arc;
use thiserror::Error;

/// Read-only "value for key, or absent" access to a configuration store.
pub trait ConfigLookup {
    /// Return the value stored under `key`, or `None` when it is not set.
    fn lookup(&self, key: &str) -> Option<String>;
}

impl<T: ConfigLookup + ?Sized> ConfigLookup for &T {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<T: ConfigLookup + ?Sized> ConfigLookup for Box<T> {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<T: ConfigLookup + ?Sized> ConfigLookup for Arc<T> {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

/// Error for a malformed `KEY=VALUE` property definition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyParseError {
    #[error("Property definition '{0}' is missing '='")]
    MissingSeparator(String),
    #[error("Property definition '{0}' has an empty key")]
    EmptyKey(String),
}

/// In-memory property store, the equivalent of a process's system properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    properties: HashMap<String, String>,
}

impl PropertyMap {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, returning the previous value if any
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.properties.insert(key.into(), value.into())
    }

    /// Remove `key`, returning its value if it was set
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.properties.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Parse and store one `KEY=VALUE` definition.
    ///
    /// Only the first `=` separates key from value, so values may contain `=`.
    /// The value may be empty; the key may not.
    pub fn define(&mut self, definition: &str) -> Result<(), PropertyParseError> {
        let (key, value) = definition
            .split_once('=')
            .ok_or_else(|| PropertyParseError::MissingSeparator(definition.to_string()))?;

        if key.is_empty() {
            return Err(PropertyParseError::EmptyKey(definition.to_string()));
        }

        if let Some(previous) = self.set(key, value) {
            tracing::debug!(key = key, previous = %previous, "Property redefined");
        }
        Ok(())
    }

    /// Build a store from a list of `KEY=VALUE` definitions; later ones win
    pub fn from_definitions<I, S>(definitions: I) -> Result<Self, PropertyParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for definition in definitions {
            map.define(definition.as_ref())?;
        }
        Ok(map)
    }
}

impl ConfigLookup for PropertyMap {
    fn lookup(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Store backed by the process environment
///
/// Property keys are mapped to variable names with [`EnvLookup::variable_name`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvLookup;

impl EnvLookup {
    pub fn new() -> Self {
        Self
    }

    /// Environment variable consulted for a property key.
    ///
    /// `org.gradle.kotlin.dsl.provider.mode` becomes
    /// `ORG_GRADLE_KOTLIN_DSL_PROVIDER_MODE`.
    pub fn variable_name(key: &str) -> String {
        key.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect()
    }
}

impl ConfigLookup for EnvLookup {
    fn lookup(&self, key: &str) -> Option<String> {
        let variable = Self::variable_name(key);
        match env::var(&variable) {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                tracing::warn!(
                    variable = %variable,
                    "Ignoring environment variable with non-unicode value"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_map_lookup() {
        let mut map = PropertyMap::new();
        assert_eq!(map.lookup("a"), None);

        map.set("a", "1");
        assert_eq!(map.lookup("a"), Some("1".to_string()));
        assert!(map.contains("a"));
        assert_eq!(map.len(), 1);

        assert_eq!(map.remove("a"), Some("1".to_string()));
        assert!(map.is_empty());
    }

    #[test]
    fn test_define_splits_on_first_equals() {
        let mut map = PropertyMap::new();
        map.define("key=a=b").unwrap();
        assert_eq!(map.lookup("key"), Some("a=b".to_string()));

        map.define("empty=").unwrap();
        assert_eq!(map.lookup("empty"), Some(String::new()));
    }

    #[test]
    fn test_define_rejects_malformed() {
        let mut map = PropertyMap::new();
        assert_eq!(
            map.define("novalue"),
            Err(PropertyParseError::MissingSeparator("novalue".to_string()))
        );
        assert_eq!(
            map.define("=value"),
            Err(PropertyParseError::EmptyKey("=value".to_string()))
        );
        assert!(map.is_empty());
    }

    #[test]
    fn test_from_definitions_later_wins() {
        let map = PropertyMap::from_definitions(["k=first", "k=second"]).unwrap();
        assert_eq!(map.lookup("k"), Some("second".to_string()));
    }

    #[test]
    fn test_from_iterator() {
        let map: PropertyMap = [("x", "1"), ("y", "2")].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.lookup("y"), Some("2".to_string()));
    }

    #[test]
    fn test_variable_name_mapping() {
        assert_eq!(
            EnvLookup::variable_name("org.gradle.kotlin.dsl.provider.mode"),
            "ORG_GRADLE_KOTLIN_DSL_PROVIDER_MODE"
        );
        assert_eq!(EnvLookup::variable_name("a-b.c1"), "A_B_C1");
    }

    #[test]
    fn test_env_lookup_absent() {
        let lookup = EnvLookup::new();
        assert_eq!(
            lookup.lookup("provider.mode.test.never.set.anywhere"),
            None
        );
    }

    fn read<L: ConfigLookup>(lookup: L, key: &str) -> Option<String> {
        lookup.lookup(key)
    }

    #[test]
    fn test_shared_lookups() {
        let map: PropertyMap = [("k", "v")].into_iter().collect();
        let shared = Arc::new(map.clone());
        let boxed: Box<dyn ConfigLookup> = Box::new(map.clone());

        assert_eq!(read(&map, "k"), Some("v".to_string()));
        assert_eq!(read(shared, "k"), Some("v".to_string()));
        assert_eq!(read(boxed, "k"), Some("v".to_string()));
    }
}

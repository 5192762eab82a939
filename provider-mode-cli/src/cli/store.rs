//! Property store populated by the CLI host
//!
//! `-D` definitions win; the environment is the only fallback.

use provider_mode_core::{ConfigLookup, EnvLookup, PropertyMap, ValueSource};

/// Store the CLI hands to the resolver
#[derive(Debug, Clone)]
pub struct HostStore {
    properties: PropertyMap,
    environment: Option<EnvLookup>,
}

impl HostStore {
    pub fn new(properties: PropertyMap, use_environment: bool) -> Self {
        Self {
            properties,
            environment: use_environment.then(EnvLookup::new),
        }
    }

    /// Value for `key` and the store it came from
    pub fn lookup_with_source(&self, key: &str) -> (Option<String>, ValueSource) {
        if let Some(value) = self.properties.lookup(key) {
            return (Some(value), ValueSource::Property);
        }

        match self.environment.as_ref().and_then(|env| env.lookup(key)) {
            Some(value) => {
                tracing::debug!(
                    variable = %EnvLookup::variable_name(key),
                    "Property taken from environment"
                );
                (Some(value), ValueSource::Environment)
            }
            None => (None, ValueSource::Default),
        }
    }
}

impl ConfigLookup for HostStore {
    fn lookup(&self, key: &str) -> Option<String> {
        self.lookup_with_source(key).0
    }
}

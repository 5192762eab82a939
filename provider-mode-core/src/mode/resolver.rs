//! Mode resolver
//!
//! Reads the provider mode property through an injected [`ConfigLookup`] and
//! answers the classpath/lenient queries. Every query reads the store again;
//! nothing is cached.

use super::{ProviderMode, PROVIDER_MODE_PROPERTY_NAME};
use crate::lookup::{ConfigLookup, EnvLookup};

/// Resolves the provider mode from a configuration store
#[derive(Debug, Clone)]
pub struct ModeResolver<L> {
    lookup: L,
}

impl ModeResolver<EnvLookup> {
    /// Resolver over the process environment
    pub fn from_env() -> Self {
        Self::new(EnvLookup::new())
    }
}

impl<L: ConfigLookup> ModeResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// The injected store
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Current value of the provider mode property, unclassified
    pub fn raw_value(&self) -> Option<String> {
        self.lookup.lookup(PROVIDER_MODE_PROPERTY_NAME)
    }

    /// Classify the current value
    pub fn mode(&self) -> ProviderMode {
        let value = self.raw_value();
        let mode = ProviderMode::from_value(value.as_deref());
        tracing::debug!(
            property = PROVIDER_MODE_PROPERTY_NAME,
            value = value.as_deref().unwrap_or("<unset>"),
            mode = %mode,
            "Provider mode resolved"
        );
        mode
    }

    /// True in strict or lenient classpath mode
    pub fn is_classpath_mode(&self) -> bool {
        self.mode().is_classpath()
    }

    /// True only in lenient classpath mode
    pub fn is_lenient_mode(&self) -> bool {
        self.mode().is_lenient()
    }
}

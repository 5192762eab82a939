//! # Provider Mode Core Library
//!
//! Resolves the build-tool provider mode (default, strict classpath or lenient
//! classpath) from an injected configuration store.

pub mod lookup;
pub mod mode;
pub mod models;
pub mod services;

pub use lookup::{ConfigLookup, EnvLookup, PropertyMap, PropertyParseError};
pub use mode::{
    ModeReport, ModeResolver, ProviderMode, Strictness, ValueSource,
    LENIENT_CLASSPATH_MODE_VALUE, PROVIDER_MODE_PROPERTY_NAME, STRICT_CLASSPATH_MODE_VALUE,
};

//! Data models for provider-mode

pub mod configuration;

pub use configuration::*;

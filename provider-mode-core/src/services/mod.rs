//! Services shared by provider-mode hosts

pub mod logging;

//! Provider mode resolution
//!
//! Classifies the value of the provider mode property into default, strict
//! classpath or lenient classpath mode.

mod provider_mode;
mod report;
mod resolver;

pub use provider_mode::{ProviderMode, Strictness};
pub use report::{ModeReport, ValueSource};
pub use resolver::ModeResolver;

/// Property holding the provider mode
pub const PROVIDER_MODE_PROPERTY_NAME: &str = "org.gradle.kotlin.dsl.provider.mode";

/// Classpath mode where resolution failures are fatal
pub const STRICT_CLASSPATH_MODE_VALUE: &str = "classpath";

/// Classpath mode where resolution failures are tolerated
pub const LENIENT_CLASSPATH_MODE_VALUE: &str = "lenient-classpath";

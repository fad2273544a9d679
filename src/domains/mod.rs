// Worked example domains that plug concrete actors and rule systems
// into the core contracts. Each domain is feature-gated so downstream
// users enable only what they use.

#[cfg(feature = "domain-friending")]
pub mod friending;

#[cfg(feature = "domain-friending")]
pub use friending::*;

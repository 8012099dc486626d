//! Injected lookup capability for readiness polling
//!
//! A poller that waits for named bindings to appear needs some way to ask
//! "does this name exist yet?". This crate provides that seam: the
//! [`BindingLookup`] trait, the explicit per-name [`Probe`] result, and a
//! concurrent [`BindingRegistry`] for hosts that want a ready-made name set.
//!
//! Keeping the lookup behind a trait decouples the poller from any specific
//! global-scope mechanism and makes it testable with a plain closure or
//! `HashSet`.
//!
//! # Quick Start
//!
//! ```rust
//! use binding_registry::{BindingLookup, BindingRegistry, Probe};
//!
//! let registry = BindingRegistry::new();
//! assert_eq!(registry.probe("ThreeJS"), Probe::Missing);
//!
//! // Some loader finishes and publishes the name.
//! registry.define("ThreeJS");
//! assert!(registry.probe("ThreeJS").is_found());
//! ```

pub mod lookup;
pub mod registry;

pub use lookup::{BindingLookup, Probe};
pub use registry::BindingRegistry;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::lookup::{BindingLookup, Probe};
    pub use crate::registry::BindingRegistry;
}

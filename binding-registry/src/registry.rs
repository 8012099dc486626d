//! Concurrent registry of defined binding names.

use std::sync::Arc;

use dashmap::DashSet;

use crate::lookup::{BindingLookup, Probe};

/// A shared, concurrent set of names that have become available.
///
/// Clones share the same underlying set: a loader can `define` a name through
/// one clone and every poller probing another clone observes it immediately.
/// Writers are the hosting code; pollers only read.
///
/// # Example
///
/// ```rust
/// use binding_registry::BindingRegistry;
///
/// let registry = BindingRegistry::new();
/// let loader_view = registry.clone();
///
/// loader_view.define("app");
/// assert!(registry.is_defined("app"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BindingRegistry {
    names: Arc<DashSet<String>>,
}

impl BindingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a name as available.
    ///
    /// Returns `false` if the name was already defined.
    pub fn define(&self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Remove a name. Returns `true` if it was present.
    pub fn undefine(&self, name: &str) -> bool {
        self.names.remove(name).is_some()
    }

    /// Whether a name is currently defined.
    pub fn is_defined(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Sorted listing of every defined name, for diagnostics.
    pub fn defined_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names.iter().map(|n| n.key().clone()).collect();
        names.sort();
        names
    }

    /// Number of defined names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no names are defined.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl BindingLookup for BindingRegistry {
    fn probe(&self, name: &str) -> Probe {
        Probe::from_exists(self.is_defined(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_undefine() {
        let registry = BindingRegistry::new();
        assert!(registry.is_empty());

        assert!(registry.define("Foo"));
        assert!(!registry.define("Foo"));
        assert!(registry.is_defined("Foo"));
        assert_eq!(registry.len(), 1);

        assert!(registry.undefine("Foo"));
        assert!(!registry.undefine("Foo"));
        assert!(!registry.is_defined("Foo"));
    }

    #[test]
    fn test_clones_share_state() {
        let registry = BindingRegistry::new();
        let view = registry.clone();

        registry.define("shared");
        assert!(view.is_defined("shared"));

        view.undefine("shared");
        assert!(!registry.is_defined("shared"));
    }

    #[test]
    fn test_defined_names_sorted() {
        let registry = BindingRegistry::new();
        registry.define("zeta");
        registry.define("alpha");
        registry.define("mid");

        assert_eq!(registry.defined_names(), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_probe() {
        let registry = BindingRegistry::new();
        assert_eq!(registry.probe("Foo"), Probe::Missing);

        registry.define("Foo");
        assert_eq!(registry.probe("Foo"), Probe::Found);
    }

    #[test]
    fn test_concurrent_defines() {
        let registry = BindingRegistry::new();
        let mut handles = Vec::new();

        for i in 0..8 {
            let view = registry.clone();
            handles.push(std::thread::spawn(move || {
                view.define(format!("binding-{i}"));
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.len(), 8);
    }
}

//! The lookup trait and per-name probe result.

use std::collections::HashSet;

/// Outcome of probing a single named binding.
///
/// `Failed` makes lookup errors explicit instead of letting them escape as
/// panics; pollers fold it into "not yet available" because a probe that
/// cannot resolve a name and a name that does not exist are operationally
/// identical while retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// The binding exists.
    Found,
    /// The binding does not exist yet.
    Missing,
    /// The lookup itself failed; the reason is kept for diagnostics.
    Failed(String),
}

impl Probe {
    /// True only for [`Probe::Found`]. A failed probe counts as unavailable.
    pub fn is_found(&self) -> bool {
        matches!(self, Probe::Found)
    }

    /// Build a probe from a plain membership test.
    pub fn from_exists(exists: bool) -> Self {
        if exists {
            Probe::Found
        } else {
            Probe::Missing
        }
    }
}

/// A read-only capability that answers "does this named binding exist?".
///
/// The name space behind a lookup is externally mutated; implementations are
/// only ever read by pollers. Closures of type `Fn(&str) -> Probe` implement
/// this trait directly, as does `HashSet<String>`.
pub trait BindingLookup {
    /// Probe a single name.
    fn probe(&self, name: &str) -> Probe;
}

impl<F> BindingLookup for F
where
    F: Fn(&str) -> Probe,
{
    fn probe(&self, name: &str) -> Probe {
        self(name)
    }
}

impl BindingLookup for HashSet<String> {
    fn probe(&self, name: &str) -> Probe {
        Probe::from_exists(self.contains(name))
    }
}

//! What a wait is waiting for.

use std::fmt;

use binding_registry::BindingLookup;

/// One or more named bindings that must all resolve before a wait succeeds.
///
/// A single request type replaces separate single-name and multi-name entry
/// points; `From` conversions keep the single-name call sites terse.
///
/// # Example
///
/// ```rust
/// use condition_poller::WaitRequest;
///
/// let single: WaitRequest = "WebGLTestUtils".into();
/// let all = WaitRequest::all_of(["WebGLTestUtils", "description", "debug"]);
/// assert_eq!(all.names().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitRequest {
    /// A single named binding.
    Binding(String),
    /// An ordered collection; every name must resolve (logical AND).
    AllOf(Vec<String>),
}

impl WaitRequest {
    /// Wait for one named binding.
    pub fn binding(name: impl Into<String>) -> Self {
        WaitRequest::Binding(name.into())
    }

    /// Wait for every name in the collection.
    pub fn all_of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WaitRequest::AllOf(names.into_iter().map(Into::into).collect())
    }

    /// The requested names, in request order.
    pub fn names(&self) -> &[String] {
        match self {
            WaitRequest::Binding(name) => std::slice::from_ref(name),
            WaitRequest::AllOf(names) => names,
        }
    }

    /// Names whose probe did not come back `Found`, in request order.
    ///
    /// Every name is probed even after the first miss so diagnostics can
    /// report the full missing set. A failed probe counts as missing. An
    /// empty request has nothing missing and is vacuously satisfied.
    pub fn missing<L>(&self, lookup: &L) -> Vec<String>
    where
        L: BindingLookup + ?Sized,
    {
        self.names()
            .iter()
            .filter(|name| !lookup.probe(name.as_str()).is_found())
            .cloned()
            .collect()
    }
}

impl fmt::Display for WaitRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join(", "))
    }
}

impl From<&str> for WaitRequest {
    fn from(name: &str) -> Self {
        WaitRequest::binding(name)
    }
}

impl From<String> for WaitRequest {
    fn from(name: String) -> Self {
        WaitRequest::Binding(name)
    }
}

impl From<Vec<String>> for WaitRequest {
    fn from(names: Vec<String>) -> Self {
        WaitRequest::AllOf(names)
    }
}

impl From<Vec<&str>> for WaitRequest {
    fn from(names: Vec<&str>) -> Self {
        WaitRequest::all_of(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binding_registry::Probe;
    use std::collections::HashSet;

    fn lookup_with(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_names_for_single_and_multi() {
        assert_eq!(WaitRequest::binding("Foo").names(), ["Foo"]);
        assert_eq!(WaitRequest::all_of(["A", "B"]).names(), ["A", "B"]);
    }

    #[test]
    fn test_missing_is_full_scan_in_request_order() {
        let lookup = lookup_with(&["B"]);
        let request = WaitRequest::all_of(["A", "B", "C"]);
        assert_eq!(request.missing(&lookup), vec!["A", "C"]);
    }

    #[test]
    fn test_missing_empty_when_all_found() {
        let lookup = lookup_with(&["A", "B"]);
        let request = WaitRequest::all_of(["A", "B"]);
        assert!(request.missing(&lookup).is_empty());
    }

    #[test]
    fn test_empty_request_is_vacuously_satisfied() {
        let lookup = lookup_with(&[]);
        let request = WaitRequest::all_of(Vec::<String>::new());
        assert!(request.missing(&lookup).is_empty());
    }

    #[test]
    fn test_failed_probe_counts_as_missing() {
        let lookup = |name: &str| {
            if name == "ok" {
                Probe::Found
            } else {
                Probe::Failed("scope forbids lookup".to_string())
            }
        };
        let request = WaitRequest::all_of(["ok", "broken"]);
        assert_eq!(request.missing(&lookup), vec!["broken"]);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(WaitRequest::from("Foo"), WaitRequest::binding("Foo"));
        assert_eq!(
            WaitRequest::from("Foo".to_string()),
            WaitRequest::binding("Foo")
        );
        assert_eq!(
            WaitRequest::from(vec!["A", "B"]),
            WaitRequest::all_of(["A", "B"])
        );
    }

    #[test]
    fn test_display_joins_names() {
        let request = WaitRequest::all_of(["A", "B"]);
        assert_eq!(request.to_string(), "A, B");
    }
}

//! Matching providers against a capability snapshot.

use std::fmt;
use std::sync::Arc;

use augmentor_core::CapabilitySet;
use tracing::{debug, trace};

use crate::provider::ProviderRef;
use crate::registry::Registry;

/// Providers whose predicate held for a snapshot.
///
/// Providers come out in registration order. A provider registered under
/// several satisfied predicates appears once per entry.
#[derive(Clone, Default)]
pub struct MatchedProviders {
    providers: Vec<ProviderRef>,
}

impl MatchedProviders {
    /// Number of matched entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Iterate over matched providers.
    pub fn iter(&self) -> impl Iterator<Item = &ProviderRef> {
        self.providers.iter()
    }

    /// Whether a provider named `name` matched.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.providers.iter().any(|p| p.name() == name)
    }

    /// Whether this exact provider instance matched.
    #[must_use]
    pub fn contains_provider(&self, provider: &ProviderRef) -> bool {
        self.providers.iter().any(|p| Arc::ptr_eq(p, provider))
    }

    /// Names of matched providers, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.iter().map(|p| p.name()).collect();
        names.sort_unstable();
        names
    }
}

impl<'a> IntoIterator for &'a MatchedProviders {
    type Item = &'a ProviderRef;
    type IntoIter = std::slice::Iter<'a, ProviderRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.providers.iter()
    }
}

impl fmt::Debug for MatchedProviders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Evaluate every predicate in `registry` against `caps`.
///
/// Returns the providers whose predicate returned `true`, in registration
/// order. Predicates are caller-supplied and expected to be pure; a
/// panicking predicate is not caught here.
#[must_use]
pub fn match_providers(registry: &Registry, caps: &CapabilitySet) -> MatchedProviders {
    let providers: Vec<ProviderRef> = registry
        .entries()
        .filter(|entry| {
            let applies = entry.predicate().test(caps);
            trace!(
                provider = entry.provider().name(),
                predicate = entry.predicate().description(),
                applies,
                "evaluated predicate"
            );
            applies
        })
        .map(|entry| Arc::clone(entry.provider()))
        .collect();

    debug!(
        role = %registry.role(),
        candidates = registry.len(),
        matched = providers.len(),
        "matched providers"
    );

    MatchedProviders { providers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::Predicate;
    use crate::provider::FnProvider;
    use augmentor_core::{CapabilityImplementation, Role};

    trait Nothing: Send + Sync {}
    struct Empty;
    impl Nothing for Empty {}

    fn provider(name: &str) -> ProviderRef {
        Arc::new(FnProvider::new(name, Predicate::new(|_| true), |_| {
            let nothing: Arc<dyn Nothing> = Arc::new(Empty);
            Ok(CapabilityImplementation::new("Nothing", nothing))
        }))
    }

    fn registry_in_order(order: &[usize]) -> Registry {
        let entries = [
            ("p1", Predicate::new(|_| true)),
            ("p2", Predicate::new(|_| false)),
            ("p3", Predicate::new(|_| true)),
        ];

        let mut registry = Registry::new(Role::Driver);
        for &i in order {
            let (name, predicate) = &entries[i];
            registry.register_by_predicate(predicate.clone(), provider(name));
        }
        registry
    }

    #[test]
    fn test_match_selects_satisfied_predicates() {
        let registry = registry_in_order(&[0, 1, 2]);
        let matched = match_providers(&registry, &CapabilitySet::new());

        assert_eq!(matched.names(), vec!["p1", "p3"]);
        assert!(!matched.contains("p2"));
    }

    #[test]
    fn test_match_independent_of_registration_order() {
        for order in [[0, 1, 2], [2, 1, 0], [1, 2, 0], [1, 0, 2]] {
            let registry = registry_in_order(&order);
            let matched = registry.matching(&CapabilitySet::new());
            assert_eq!(matched.names(), vec!["p1", "p3"], "order {order:?}");
        }
    }

    #[test]
    fn test_match_uses_snapshot() {
        let mut registry = Registry::new(Role::Driver);
        registry.register_by_name("rotatable", provider("rotation")).unwrap();
        registry
            .register_by_name("webStorageEnabled", provider("storage"))
            .unwrap();

        let caps = CapabilitySet::new()
            .with("rotatable", false)
            .with("webStorageEnabled", true);
        let matched = registry.matching(&caps);

        assert_eq!(matched.names(), vec!["storage"]);
    }

    #[test]
    fn test_matched_providers_keep_registration_order() {
        let registry = registry_in_order(&[2, 1, 0]);
        let matched = match_providers(&registry, &CapabilitySet::new());

        let order: Vec<&str> = matched.iter().map(|p| p.name()).collect();
        assert_eq!(order, vec!["p3", "p1"]);
    }

    #[test]
    #[should_panic(expected = "predicate boom")]
    fn test_predicate_panic_is_not_caught() {
        let mut registry = Registry::new(Role::Driver);
        let exploding = Predicate::new(|_| panic!("predicate boom"));
        registry.register_by_predicate(exploding, provider("x"));

        let _ = match_providers(&registry, &CapabilitySet::new());
    }

    #[test]
    fn test_empty_registry_matches_nothing() {
        let registry = Registry::new(Role::Element);
        let matched = registry.matching(&CapabilitySet::new().with("rotatable", true));
        assert!(matched.is_empty());
    }

    #[test]
    fn test_provider_under_two_predicates_matches_twice() {
        let shared = provider("shared");
        let mut registry = Registry::new(Role::Driver);
        registry.register_by_name("a", Arc::clone(&shared)).unwrap();
        registry.register_by_name("b", Arc::clone(&shared)).unwrap();

        let matched = registry.matching(&CapabilitySet::new().with("a", 1).with("b", "yes"));
        assert_eq!(matched.len(), 2);
        assert!(matched.contains_provider(&shared));
    }
}

//! Plugin discovery - providers supplied by the embedder at startup.
//!
//! Discovery is not performed here. The embedder hands over a finite,
//! already materialized list of providers, which is enumerated once when the
//! augmenter is built.

use std::sync::Arc;

use tracing::{debug, info};

use crate::provider::ProviderRef;
use crate::registry::Registry;

/// Source of pluggable providers.
pub trait PluginDiscovery {
    /// Enumerate all discoverable providers.
    ///
    /// Each call is a fresh enumeration.
    fn discover_all(&self) -> Vec<ProviderRef>;
}

impl PluginDiscovery for Vec<ProviderRef> {
    fn discover_all(&self) -> Vec<ProviderRef> {
        self.clone()
    }
}

impl PluginDiscovery for [ProviderRef] {
    fn discover_all(&self) -> Vec<ProviderRef> {
        self.to_vec()
    }
}

/// A fixed list of providers.
#[derive(Clone, Default)]
pub struct StaticDiscovery {
    providers: Vec<ProviderRef>,
}

impl StaticDiscovery {
    /// Create an empty discovery source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider.
    #[must_use]
    pub fn with_provider(mut self, provider: ProviderRef) -> Self {
        self.providers.push(provider);
        self
    }

    /// Number of providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether there are no providers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl PluginDiscovery for StaticDiscovery {
    fn discover_all(&self) -> Vec<ProviderRef> {
        self.providers.iter().map(Arc::clone).collect()
    }
}

impl FromIterator<ProviderRef> for StaticDiscovery {
    fn from_iter<I: IntoIterator<Item = ProviderRef>>(iter: I) -> Self {
        Self {
            providers: iter.into_iter().collect(),
        }
    }
}

/// Register every discovered provider under its own predicate.
///
/// Providers are registered unconditionally, keyed by
/// [`Provider::is_applicable`](crate::Provider::is_applicable). Returns the
/// number of providers registered.
pub fn register_discovered<D>(registry: &mut Registry, discovery: &D) -> usize
where
    D: PluginDiscovery + ?Sized,
{
    let providers = discovery.discover_all();
    let count = providers.len();

    for provider in providers {
        debug!(provider = provider.name(), "registering discovered provider");
        registry.register_by_predicate(provider.is_applicable(), provider);
    }

    info!(role = %registry.role(), count, "registered discovered providers");
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::Predicate;
    use crate::provider::FnProvider;
    use augmentor_core::{AugmentError, CapabilitySet, Role};

    fn plugin(name: &str, capability: &str) -> ProviderRef {
        let owned = name.to_string();
        Arc::new(FnProvider::new(
            name,
            Predicate::presence(capability).unwrap(),
            move |_| Err(AugmentError::provider(owned.clone(), "not built in tests")),
        ))
    }

    #[test]
    fn test_static_discovery() {
        let discovery = StaticDiscovery::new()
            .with_provider(plugin("one", "a"))
            .with_provider(plugin("two", "b"));

        assert_eq!(discovery.len(), 2);
        assert_eq!(discovery.discover_all().len(), 2);
        // Re-enumeration is a fresh call.
        assert_eq!(discovery.discover_all().len(), 2);
    }

    #[test]
    fn test_register_discovered_uses_provider_predicate() {
        let provider = plugin("one", "a");
        let predicate_id = provider.is_applicable().id();
        let discovery: Vec<ProviderRef> = vec![Arc::clone(&provider)];

        let mut registry = Registry::new(Role::Driver);
        let count = register_discovered(&mut registry, &discovery);

        assert_eq!(count, 1);
        assert!(registry.contains(&predicate_id));
        assert!(registry.contains_provider(&provider));
    }

    #[test]
    fn test_discovered_providers_match() {
        let discovery: StaticDiscovery = [plugin("one", "a"), plugin("two", "b")]
            .into_iter()
            .collect();

        let mut registry = Registry::new(Role::Driver);
        register_discovered(&mut registry, &discovery);

        let matched = registry.matching(&CapabilitySet::new().with("b", true));
        assert_eq!(matched.names(), vec!["two"]);
    }

    #[test]
    fn test_empty_discovery_registers_nothing() {
        let mut registry = Registry::new(Role::Driver);
        assert_eq!(register_discovered(&mut registry, &StaticDiscovery::new()), 0);
        assert!(registry.is_empty());
    }
}

//! The augmentation orchestrator.

use std::fmt;

use augmentor_builtins::{BUILTIN_KEYS, builtin_providers};
use augmentor_config::{AugmentorConfig, BuiltinsSection};
use augmentor_core::{AugmentError, AugmentResult, RemoteExtractor, Role};
use augmentor_registry::{
    PluginDiscovery, Predicate, PredicateId, Provider, ProviderRef, Registry, match_providers,
    register_discovered,
};
use tracing::{debug, debug_span, info};

use crate::composer::Composer;

/// Result of [`Augmenter::augment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Augmentation<T, O> {
    /// The object is not remotely controlled; this is the very value that
    /// was passed in.
    Unchanged(T),
    /// The composed view.
    Augmented(O),
}

impl<T, O> Augmentation<T, O> {
    /// Whether the object was composed.
    #[must_use]
    pub fn is_augmented(&self) -> bool {
        matches!(self, Self::Augmented(_))
    }

    /// The composed view, if any.
    #[must_use]
    pub fn as_augmented(&self) -> Option<&O> {
        match self {
            Self::Augmented(output) => Some(output),
            Self::Unchanged(_) => None,
        }
    }

    /// Take the composed view, if any.
    #[must_use]
    pub fn into_augmented(self) -> Option<O> {
        match self {
            Self::Augmented(output) => Some(output),
            Self::Unchanged(_) => None,
        }
    }

    /// Take back the untouched object, if it was not composed.
    #[must_use]
    pub fn into_unchanged(self) -> Option<T> {
        match self {
            Self::Unchanged(object) => Some(object),
            Self::Augmented(_) => None,
        }
    }
}

/// Holds the driver and element registries and augments objects against
/// them.
///
/// Registration takes `&mut self` and happens during setup. After that,
/// [`augment`](Self::augment) only reads, so an `Augmenter` can be shared
/// across threads behind an `Arc` when `E` and `C` allow it.
pub struct Augmenter<E, C> {
    extractor: E,
    composer: C,
    driver: Registry,
    element: Registry,
}

impl<E, C> Augmenter<E, C> {
    /// Start building an augmenter.
    #[must_use]
    pub fn builder(extractor: E, composer: C) -> AugmenterBuilder<E, C> {
        AugmenterBuilder::new(extractor, composer)
    }

    /// An augmenter with every built-in seeded and no plugins.
    ///
    /// # Errors
    ///
    /// Never fails with the default configuration; the signature matches
    /// [`AugmenterBuilder::build`].
    pub fn new(extractor: E, composer: C) -> AugmentResult<Self> {
        Self::builder(extractor, composer).build()
    }

    /// The registry for `role`.
    #[must_use]
    pub fn registry(&self, role: Role) -> &Registry {
        match role {
            Role::Driver => &self.driver,
            Role::Element => &self.element,
        }
    }

    fn registry_mut(&mut self, role: Role) -> &mut Registry {
        match role {
            Role::Driver => &mut self.driver,
            Role::Element => &mut self.element,
        }
    }

    /// Register `provider` in the `role` registry under a presence predicate
    /// for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::InvalidArgument`] if `name` is blank.
    pub fn register_by_name(
        &mut self,
        role: Role,
        name: &str,
        provider: ProviderRef,
    ) -> AugmentResult<PredicateId> {
        self.registry_mut(role).register_by_name(name, provider)
    }

    /// Register `provider` in the `role` registry under `predicate`,
    /// returning the provider it replaced, if any.
    pub fn register_by_predicate(
        &mut self,
        role: Role,
        predicate: Predicate,
        provider: ProviderRef,
    ) -> Option<ProviderRef> {
        self.registry_mut(role)
            .register_by_predicate(predicate, provider)
    }

    /// Register a driver provider under a presence predicate for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::InvalidArgument`] if `name` is blank.
    pub fn register_driver_by_name(
        &mut self,
        name: &str,
        provider: ProviderRef,
    ) -> AugmentResult<PredicateId> {
        self.register_by_name(Role::Driver, name, provider)
    }

    /// Register a driver provider under `predicate`.
    pub fn register_driver_by_predicate(
        &mut self,
        predicate: Predicate,
        provider: ProviderRef,
    ) -> Option<ProviderRef> {
        self.register_by_predicate(Role::Driver, predicate, provider)
    }

    /// Register an element provider under a presence predicate for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::InvalidArgument`] if `name` is blank.
    pub fn register_element_by_name(
        &mut self,
        name: &str,
        provider: ProviderRef,
    ) -> AugmentResult<PredicateId> {
        self.register_by_name(Role::Element, name, provider)
    }

    /// Register an element provider under `predicate`.
    pub fn register_element_by_predicate(
        &mut self,
        predicate: Predicate,
        provider: ProviderRef,
    ) -> Option<ProviderRef> {
        self.register_by_predicate(Role::Element, predicate, provider)
    }

    /// Augment `object` with every provider in the `role` registry whose
    /// predicate holds for the capabilities its remote session declares.
    ///
    /// If the extractor finds no remote session, `object` comes back as
    /// [`Augmentation::Unchanged`]. Otherwise the capabilities are read once,
    /// matched, and handed to the composer together with `object`.
    ///
    /// # Errors
    ///
    /// Returns whatever the composer returns, unchanged. Typically that is a
    /// provider failing to build its implementation.
    pub fn augment<T>(
        &self,
        object: T,
        role: Role,
    ) -> AugmentResult<Augmentation<T, <C as Composer<T>>::Output>>
    where
        E: RemoteExtractor<T>,
        C: Composer<T>,
    {
        let span = debug_span!("augment", %role, matched = tracing::field::Empty);
        let _guard = span.enter();

        let Some(remote) = self.extractor.extract(&object) else {
            debug!("object is not remotely controlled, returning it unchanged");
            return Ok(Augmentation::Unchanged(object));
        };

        let capabilities = remote.declared_capabilities();
        let matched = match_providers(self.registry(role), &capabilities);
        span.record("matched", matched.len());

        let output = self.composer.compose(remote, &matched, object)?;
        debug!(providers = ?matched.names(), "object augmented");
        Ok(Augmentation::Augmented(output))
    }
}

impl<E, C> fmt::Debug for Augmenter<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Augmenter")
            .field("driver", &self.driver)
            .field("element", &self.element)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Augmenter`].
pub struct AugmenterBuilder<E, C> {
    extractor: E,
    composer: C,
    builtins: BuiltinsSection,
    discovery_enabled: bool,
    discovery: Option<Box<dyn PluginDiscovery>>,
}

impl<E, C> AugmenterBuilder<E, C> {
    fn new(extractor: E, composer: C) -> Self {
        Self {
            extractor,
            composer,
            builtins: BuiltinsSection::default(),
            discovery_enabled: true,
            discovery: None,
        }
    }

    /// Register the providers returned by `discovery` into the driver
    /// registry at build time.
    #[must_use]
    pub fn with_discovery(mut self, discovery: impl PluginDiscovery + 'static) -> Self {
        self.discovery = Some(Box::new(discovery));
        self
    }

    /// Apply the built-in and discovery settings from `config`.
    #[must_use]
    pub fn with_config(mut self, config: &AugmentorConfig) -> Self {
        self.builtins = config.builtins.clone();
        self.discovery_enabled = config.discovery.enabled;
        self
    }

    /// Replace the built-in settings.
    #[must_use]
    pub fn with_builtins(mut self, builtins: BuiltinsSection) -> Self {
        self.builtins = builtins;
        self
    }

    /// Build the augmenter: seed the built-ins, then register discovered
    /// plugins. The element registry starts empty.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::InvalidArgument`] if the configuration
    /// disables a built-in that does not exist.
    pub fn build(self) -> AugmentResult<Augmenter<E, C>> {
        let mut driver = Registry::new(Role::Driver);
        let element = Registry::new(Role::Element);

        seed_defaults(&mut driver, &self.builtins)?;

        match &self.discovery {
            Some(discovery) if self.discovery_enabled => {
                register_discovered(&mut driver, discovery.as_ref());
            },
            Some(_) => info!("plugin discovery disabled by configuration"),
            None => debug!("no plugin discovery source"),
        }

        Ok(Augmenter {
            extractor: self.extractor,
            composer: self.composer,
            driver,
            element,
        })
    }
}

impl<E, C> fmt::Debug for AugmenterBuilder<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AugmenterBuilder")
            .field("builtins", &self.builtins)
            .field("discovery_enabled", &self.discovery_enabled)
            .field("has_discovery", &self.discovery.is_some())
            .finish_non_exhaustive()
    }
}

/// Register the enabled built-ins into `registry` under their presence
/// predicates. Returns how many were registered.
fn seed_defaults(registry: &mut Registry, builtins: &BuiltinsSection) -> AugmentResult<usize> {
    if let Some(unknown) = builtins
        .disabled
        .iter()
        .find(|key| !BUILTIN_KEYS.contains(&key.as_str()))
    {
        return Err(AugmentError::invalid_argument(
            "builtins.disabled",
            format!(
                "unknown built-in '{unknown}'; expected one of: {}",
                BUILTIN_KEYS.join(", ")
            ),
        ));
    }

    if !builtins.enabled {
        info!("built-in providers disabled by configuration");
        return Ok(0);
    }

    let mut seeded: usize = 0;
    for provider in builtin_providers() {
        if !builtins.is_enabled(provider.key()) {
            debug!(provider = provider.key(), "built-in disabled by configuration");
            continue;
        }
        registry.register_by_predicate(provider.is_applicable(), provider);
        seeded = seeded.saturating_add(1);
    }

    info!(count = seeded, "seeded built-in providers");
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::DelegatingComposer;
    use augmentor_builtins::{ConnectionType, NetworkConnection};
    use augmentor_core::{CapabilityImplementation, names};
    use augmentor_registry::{FnProvider, StaticDiscovery};
    use augmentor_test::{
        MockDriver, MockElement, MockExtractor, StubProvider, test_driver, test_driver_capabilities,
        test_element, test_element_capabilities,
    };

    fn augmenter() -> Augmenter<MockExtractor, DelegatingComposer> {
        Augmenter::new(MockExtractor::new(), DelegatingComposer).unwrap()
    }

    #[test]
    fn test_new_seeds_builtins_into_driver_only() {
        let augmenter = augmenter();

        assert_eq!(augmenter.registry(Role::Driver).len(), BUILTIN_KEYS.len());
        assert!(augmenter.registry(Role::Element).is_empty());
        assert_eq!(
            augmenter.registry(Role::Driver).provider_names(),
            vec![
                "application_cache",
                "location_context",
                "network_connection",
                "rotation",
                "web_storage",
            ]
        );
    }

    #[test]
    fn test_unchanged_when_not_remote() {
        let augmenter = augmenter();
        let driver = Box::new(MockDriver::detached("local"));
        let address: *const MockDriver = &*driver;

        let result = augmenter.augment(driver, Role::Driver).unwrap();

        assert!(!result.is_augmented());
        let returned = result.into_unchanged().unwrap();
        assert!(std::ptr::eq(address, &*returned));
        assert_eq!(returned.name, "local");
    }

    #[test]
    #[should_panic(expected = "predicate boom")]
    fn test_predicate_panic_reaches_caller() {
        let mut augmenter = augmenter();
        augmenter.register_driver_by_predicate(
            Predicate::new(|_| panic!("predicate boom")),
            Arc::new(StubProvider::always("exploding")),
        );

        let (driver, _remote) = test_driver(test_driver_capabilities());
        let _ = augmenter.augment(driver, Role::Driver);
    }

    #[test]
    fn test_discovered_plugin_overrides_builtin_interface() {
        struct Offline;

        impl NetworkConnection for Offline {
            fn network_connection(&self) -> AugmentResult<ConnectionType> {
                Ok(ConnectionType::AIRPLANE_MODE)
            }

            fn set_network_connection(&self, _: ConnectionType) -> AugmentResult<ConnectionType> {
                Ok(ConnectionType::AIRPLANE_MODE)
            }
        }

        let plugin: ProviderRef = Arc::new(FnProvider::new(
            "offline",
            Predicate::presence(names::BROWSER_CONNECTION_ENABLED).unwrap(),
            |_| {
                let network: Arc<dyn NetworkConnection> = Arc::new(Offline);
                Ok(CapabilityImplementation::new("NetworkConnection", network))
            },
        ));

        for _ in 0..16 {
            let augmenter = Augmenter::builder(MockExtractor::new(), DelegatingComposer)
                .with_discovery(StaticDiscovery::new().with_provider(Arc::clone(&plugin)))
                .build()
                .unwrap();
            let (driver, _remote) = test_driver(test_driver_capabilities());

            let composite = augmenter
                .augment(driver, Role::Driver)
                .unwrap()
                .into_augmented()
                .unwrap();

            let network = composite.capability::<dyn NetworkConnection>().unwrap();
            assert!(network.network_connection().unwrap().is_airplane_mode());
        }
    }

    #[test]
    fn test_driver_fields_are_mutable_through_composite() {
        let augmenter = augmenter();
        let (driver, remote) = test_driver(test_driver_capabilities());

        let mut composite = augmenter
            .augment(driver, Role::Driver)
            .unwrap()
            .into_augmented()
            .unwrap();

        composite.name = "renamed".to_owned();
        composite.inner_mut().name.push_str("-again");

        assert_eq!(composite.name, "renamed-again");
        assert!(Arc::ptr_eq(composite.inner().remote().unwrap(), &remote));
        assert!(composite.capability::<dyn NetworkConnection>().is_some());
    }

    #[test]
    fn test_augment_matches_declared_capabilities() {
        let augmenter = augmenter();
        let (driver, remote) = test_driver(test_driver_capabilities());

        let composite = augmenter
            .augment(driver, Role::Driver)
            .unwrap()
            .into_augmented()
            .unwrap();

        assert_eq!(composite.interfaces(), vec!["NetworkConnection"]);
        assert!(composite.has_capability::<dyn NetworkConnection>());
        assert_eq!(composite.name, "test-driver");
        assert_eq!(remote.capability_fetches(), 1);
    }

    #[test]
    fn test_element_role_uses_element_registry() {
        let mut augmenter = augmenter();
        let stub = Arc::new(StubProvider::for_capability("screenshot", "elementScreenshotEnabled"));
        augmenter
            .register_element_by_name("elementScreenshotEnabled", stub.clone())
            .unwrap();

        let (element, _remote) = test_element(
            test_element_capabilities().with(names::BROWSER_CONNECTION_ENABLED, true),
        );
        let composite = augmenter
            .augment(element, Role::Element)
            .unwrap()
            .into_augmented()
            .unwrap();

        assert_eq!(composite.interfaces(), vec!["StubCapability"]);
        assert!(!composite.has_capability::<dyn NetworkConnection>());
        assert_eq!(stub.build_count(), 1);
    }

    #[test]
    fn test_element_unchanged_when_not_remote() {
        let augmenter = augmenter();
        let result = augmenter
            .augment(MockElement::detached("e1"), Role::Element)
            .unwrap();
        assert_eq!(result.into_unchanged().unwrap().id, "e1");
    }

    #[test]
    fn test_register_blank_name_rejected() {
        let mut augmenter = augmenter();
        let before = augmenter.registry(Role::Driver).len();

        let err = augmenter
            .register_driver_by_name("  ", Arc::new(StubProvider::always("stub")))
            .unwrap_err();

        assert!(matches!(err, AugmentError::InvalidArgument { .. }));
        assert_eq!(augmenter.registry(Role::Driver).len(), before);
    }

    #[test]
    fn test_register_by_predicate_replaces_same_identity() {
        let mut augmenter = augmenter();
        let predicate = Predicate::described("always", |_| true);

        let first = augmenter
            .register_element_by_predicate(predicate.clone(), Arc::new(StubProvider::always("a")));
        let second = augmenter
            .register_element_by_predicate(predicate, Arc::new(StubProvider::always("b")));

        assert!(first.is_none());
        assert_eq!(second.map(|p| p.name().to_owned()), Some("a".to_owned()));
        assert_eq!(augmenter.registry(Role::Element).provider_names(), vec!["b"]);
    }

    #[test]
    fn test_disabled_builtin_is_absent() {
        let mut config = AugmentorConfig::default();
        config.builtins.disabled = vec!["rotation".to_owned()];

        let augmenter = Augmenter::builder(MockExtractor::new(), DelegatingComposer)
            .with_config(&config)
            .build()
            .unwrap();

        let names = augmenter.registry(Role::Driver).provider_names();
        assert!(!names.contains(&"rotation"));
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_builtins_can_be_switched_off() {
        let mut config = AugmentorConfig::default();
        config.builtins.enabled = false;

        let augmenter = Augmenter::builder(MockExtractor::new(), DelegatingComposer)
            .with_config(&config)
            .build()
            .unwrap();

        assert!(augmenter.registry(Role::Driver).is_empty());
    }

    #[test]
    fn test_unknown_disabled_builtin_rejected() {
        let builtins = BuiltinsSection {
            enabled: true,
            disabled: vec!["teleport".to_owned()],
        };

        let err = Augmenter::builder(MockExtractor::new(), DelegatingComposer)
            .with_builtins(builtins)
            .build()
            .unwrap_err();

        assert!(matches!(err, AugmentError::InvalidArgument { .. }));
    }

    #[test]
    fn test_discovered_plugins_join_driver_registry() {
        let plugin: ProviderRef = Arc::new(StubProvider::always("plugin"));
        let augmenter = Augmenter::builder(MockExtractor::new(), DelegatingComposer)
            .with_discovery(StaticDiscovery::new().with_provider(plugin))
            .build()
            .unwrap();

        let names = augmenter.registry(Role::Driver).provider_names();
        assert!(names.contains(&"plugin"));
        assert!(augmenter.registry(Role::Element).is_empty());
    }

    #[test]
    fn test_discovery_can_be_switched_off() {
        let mut config = AugmentorConfig::default();
        config.discovery.enabled = false;
        let plugin: ProviderRef = Arc::new(StubProvider::always("plugin"));

        let augmenter = Augmenter::builder(MockExtractor::new(), DelegatingComposer)
            .with_discovery(StaticDiscovery::new().with_provider(plugin))
            .with_config(&config)
            .build()
            .unwrap();

        assert!(
            !augmenter
                .registry(Role::Driver)
                .provider_names()
                .contains(&"plugin")
        );
    }

    #[test]
    fn test_augmentation_accessors() {
        let unchanged: Augmentation<u8, String> = Augmentation::Unchanged(7);
        assert!(unchanged.as_augmented().is_none());
        assert_eq!(unchanged.clone().into_unchanged(), Some(7));
        assert_eq!(unchanged.into_augmented(), None);

        let augmented: Augmentation<u8, String> = Augmentation::Augmented("x".to_owned());
        assert_eq!(augmented.as_augmented().map(String::as_str), Some("x"));
        assert!(augmented.is_augmented());
    }
}

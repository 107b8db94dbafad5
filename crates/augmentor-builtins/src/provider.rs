//! The provider shared by all built-ins.

use std::fmt;
use std::sync::Arc;

use augmentor_core::{AugmentResult, CapabilityImplementation, RemoteHandle};
use augmentor_registry::{Predicate, Provider, is_capability_present};

use crate::{app_cache, location, network, rotation, storage};

/// Configuration keys of all built-in providers, in seeding order.
pub const BUILTIN_KEYS: [&str; 5] = [
    storage::KEY,
    network::KEY,
    rotation::KEY,
    app_cache::KEY,
    location::KEY,
];

type BuildFn = fn(Arc<dyn RemoteHandle>) -> CapabilityImplementation;

/// A built-in provider keyed on the presence of one capability.
pub struct BuiltinProvider {
    key: &'static str,
    capability: &'static str,
    predicate: Predicate,
    build: BuildFn,
}

impl BuiltinProvider {
    pub(crate) fn new(key: &'static str, capability: &'static str, build: BuildFn) -> Self {
        Self {
            key,
            capability,
            predicate: Predicate::described(format!("presence of '{capability}'"), move |caps| {
                is_capability_present(caps, capability)
            }),
            build,
        }
    }

    /// Configuration key, e.g. `rotation`.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Capability name whose presence enables this provider.
    #[must_use]
    pub fn capability(&self) -> &'static str {
        self.capability
    }
}

impl Provider for BuiltinProvider {
    fn name(&self) -> &str {
        self.key
    }

    fn is_applicable(&self) -> Predicate {
        self.predicate.clone()
    }

    fn build(&self, remote: &Arc<dyn RemoteHandle>) -> AugmentResult<CapabilityImplementation> {
        Ok((self.build)(Arc::clone(remote)))
    }
}

impl fmt::Debug for BuiltinProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinProvider")
            .field("key", &self.key)
            .field("capability", &self.capability)
            .finish_non_exhaustive()
    }
}

/// Fresh instances of every built-in provider, in [`BUILTIN_KEYS`] order.
#[must_use]
pub fn builtin_providers() -> Vec<Arc<BuiltinProvider>> {
    vec![
        Arc::new(storage::web_storage()),
        Arc::new(network::network_connection()),
        Arc::new(rotation::rotation()),
        Arc::new(app_cache::application_cache()),
        Arc::new(location::location_context()),
    ]
}

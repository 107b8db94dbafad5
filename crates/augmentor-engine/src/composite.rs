//! Delegating composition: the original object plus a bag of interfaces.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use augmentor_core::{AugmentResult, CapabilityImplementation, RemoteHandle};
use augmentor_registry::MatchedProviders;
use tracing::debug;

use crate::composer::Composer;

/// Composer producing a [`Composite`].
///
/// Builds every matched provider against the remote handle, in registration
/// order, and keeps the last implementation built for each interface. A
/// plugin discovered after the built-ins therefore overrides a built-in
/// exposing the same interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelegatingComposer;

impl DelegatingComposer {
    /// Create a new composer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T> Composer<T> for DelegatingComposer {
    type Output = Composite<T>;

    fn compose(
        &self,
        remote: Arc<dyn RemoteHandle>,
        matched: &MatchedProviders,
        object: T,
    ) -> AugmentResult<Composite<T>> {
        let mut implementations: Vec<CapabilityImplementation> =
            Vec::with_capacity(matched.len());

        for provider in matched {
            let implementation = provider.build(&remote)?;
            debug!(
                provider = provider.name(),
                interface = %implementation.interface(),
                "built capability implementation"
            );

            let type_id = implementation.interface().type_id();
            implementations.retain(|existing| existing.interface().type_id() != type_id);
            implementations.push(implementation);
        }

        Ok(Composite {
            inner: object,
            remote,
            implementations,
        })
    }
}

/// An object augmented with capability interfaces.
///
/// Dereferences to the original object, so everything it already did still
/// works. Extra interfaces are looked up by trait object type:
///
/// ```ignore
/// let network = composite.capability::<dyn NetworkConnection>();
/// ```
pub struct Composite<T> {
    inner: T,
    remote: Arc<dyn RemoteHandle>,
    implementations: Vec<CapabilityImplementation>,
}

impl<T> Composite<T> {
    /// The original object.
    #[must_use]
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// The original object, mutably.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Unwrap the original object, dropping the extra interfaces.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// The remote handle the interfaces were built against.
    #[must_use]
    pub fn remote(&self) -> &Arc<dyn RemoteHandle> {
        &self.remote
    }

    /// The implementation of interface `I`, if one was composed in.
    #[must_use]
    pub fn capability<I>(&self) -> Option<Arc<I>>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        self.implementations
            .iter()
            .find_map(CapabilityImplementation::downcast::<I>)
    }

    /// Whether interface `I` was composed in.
    #[must_use]
    pub fn has_capability<I>(&self) -> bool
    where
        I: ?Sized + Send + Sync + 'static,
    {
        self.implementations
            .iter()
            .any(|implementation| implementation.interface().is::<I>())
    }

    /// Names of the composed interfaces, in build order.
    #[must_use]
    pub fn interfaces(&self) -> Vec<&'static str> {
        self.implementations
            .iter()
            .map(|implementation| implementation.interface().name())
            .collect()
    }
}

impl<T> Deref for Composite<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> DerefMut for Composite<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: fmt::Debug> fmt::Debug for Composite<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composite")
            .field("inner", &self.inner)
            .field("interfaces", &self.interfaces())
            .finish_non_exhaustive()
    }
}

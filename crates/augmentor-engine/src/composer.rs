//! The composition seam.

use std::sync::Arc;

use augmentor_core::{AugmentResult, RemoteHandle};
use augmentor_registry::MatchedProviders;

/// Builds the augmented view of an object from its matched providers.
///
/// The output must behave as `object` for everything the matched providers
/// do not cover, and expose the interface each matched provider builds from
/// `remote`. `object` is taken by value and never mutated; the output is a
/// new view over it.
pub trait Composer<T>: Send + Sync {
    /// The augmented object.
    type Output;

    /// Compose `object` with the implementations built by `matched`.
    ///
    /// # Errors
    ///
    /// Returns an error if any matched provider fails to build. The error is
    /// handed to the caller of `augment` unchanged.
    fn compose(
        &self,
        remote: Arc<dyn RemoteHandle>,
        matched: &MatchedProviders,
        object: T,
    ) -> AugmentResult<Self::Output>;
}

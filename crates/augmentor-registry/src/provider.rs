//! Capability providers.

use std::fmt;
use std::sync::Arc;

use augmentor_core::{AugmentResult, CapabilityImplementation, RemoteHandle};

use crate::predicate::Predicate;

/// Pairs a predicate with a factory for one optional capability interface.
///
/// Providers must be independent of each other: matching evaluates every
/// registered predicate, whatever else is registered alongside it.
pub trait Provider: Send + Sync {
    /// Name used in logs and diagnostics.
    fn name(&self) -> &str;

    /// The predicate deciding whether this provider applies.
    ///
    /// Discovered plugins are registered under exactly this predicate.
    fn is_applicable(&self) -> Predicate;

    /// Build the capability implementation for a remote instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the implementation cannot be built; the error
    /// propagates to the caller of the augmentation unchanged.
    fn build(&self, remote: &Arc<dyn RemoteHandle>) -> AugmentResult<CapabilityImplementation>;
}

/// Shared handle to a provider.
pub type ProviderRef = Arc<dyn Provider>;

type BuildFn =
    dyn Fn(&Arc<dyn RemoteHandle>) -> AugmentResult<CapabilityImplementation> + Send + Sync;

/// A provider assembled from a predicate and a build closure.
#[derive(Clone)]
pub struct FnProvider {
    name: String,
    predicate: Predicate,
    build: Arc<BuildFn>,
}

impl FnProvider {
    /// Create a provider from its parts.
    pub fn new<F>(name: impl Into<String>, predicate: Predicate, build: F) -> Self
    where
        F: Fn(&Arc<dyn RemoteHandle>) -> AugmentResult<CapabilityImplementation>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            predicate,
            build: Arc::new(build),
        }
    }
}

impl Provider for FnProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_applicable(&self) -> Predicate {
        self.predicate.clone()
    }

    fn build(&self, remote: &Arc<dyn RemoteHandle>) -> AugmentResult<CapabilityImplementation> {
        (self.build)(remote)
    }
}

impl fmt::Debug for FnProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProvider")
            .field("name", &self.name)
            .field("predicate", &self.predicate)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use augmentor_core::{AugmentError, CapabilitySet, CommandParams};
    use serde_json::Value;

    #[derive(Debug)]
    struct NullRemote;

    impl RemoteHandle for NullRemote {
        fn declared_capabilities(&self) -> CapabilitySet {
            CapabilitySet::new()
        }

        fn execute(&self, _command: &str, _params: CommandParams) -> AugmentResult<Value> {
            Ok(Value::Null)
        }
    }

    trait Answer: Send + Sync {
        fn answer(&self) -> u8;
    }

    struct FortyTwo;

    impl Answer for FortyTwo {
        fn answer(&self) -> u8 {
            42
        }
    }

    #[test]
    fn test_fn_provider_keeps_predicate_identity() {
        let predicate = Predicate::presence("answer").unwrap();
        let provider = FnProvider::new("answer", predicate.clone(), |_| {
            Err(AugmentError::provider("answer", "unused"))
        });

        assert_eq!(provider.name(), "answer");
        assert!(provider.is_applicable().same_as(&predicate));
        assert!(provider.is_applicable().same_as(&provider.is_applicable()));
    }

    #[test]
    fn test_fn_provider_builds() {
        let provider = FnProvider::new("answer", Predicate::new(|_| true), |_| {
            let answer: Arc<dyn Answer> = Arc::new(FortyTwo);
            Ok(CapabilityImplementation::new("Answer", answer))
        });

        let remote: Arc<dyn RemoteHandle> = Arc::new(NullRemote);
        let built = provider.build(&remote).unwrap();
        assert_eq!(built.downcast::<dyn Answer>().unwrap().answer(), 42);
    }

    #[test]
    fn test_fn_provider_build_error_propagates() {
        let provider = FnProvider::new("broken", Predicate::new(|_| true), |_| {
            Err(AugmentError::provider("broken", "no backend"))
        });

        let remote: Arc<dyn RemoteHandle> = Arc::new(NullRemote);
        let err = provider.build(&remote).unwrap_err();
        assert_eq!(err.to_string(), "provider 'broken' failed: no backend");
    }
}

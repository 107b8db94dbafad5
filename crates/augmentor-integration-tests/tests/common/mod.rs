//! Shared helpers for integration tests.

use std::sync::Arc;

use augmentor_core::{RemoteExtractor, RemoteHandle};
use augmentor_engine::{Augmenter, Composite, DelegatingComposer};
use augmentor_test::{MockDriver, MockExtractor, RemoteControlled};

/// Extractor that also sees through composites, so an augmented driver can
/// be augmented again.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct LayeredExtractor {
    plain: MockExtractor,
}

#[allow(dead_code)]
impl LayeredExtractor {
    /// Number of plain extractions so far.
    pub fn calls(&self) -> usize {
        self.plain.calls()
    }
}

impl RemoteExtractor<MockDriver> for LayeredExtractor {
    fn extract(&self, object: &MockDriver) -> Option<Arc<dyn RemoteHandle>> {
        self.plain.extract(object)
    }
}

impl<T> RemoteExtractor<Composite<T>> for LayeredExtractor {
    fn extract(&self, object: &Composite<T>) -> Option<Arc<dyn RemoteHandle>> {
        Some(Arc::clone(object.remote()))
    }
}

/// An augmenter with the default built-ins and a counting extractor.
#[allow(dead_code)]
pub fn default_augmenter() -> Augmenter<MockExtractor, DelegatingComposer> {
    Augmenter::new(MockExtractor::new(), DelegatingComposer).expect("default augmenter builds")
}

/// An augmenter that can augment composites again.
#[allow(dead_code)]
pub fn layered_augmenter() -> Augmenter<LayeredExtractor, DelegatingComposer> {
    Augmenter::new(LayeredExtractor::default(), DelegatingComposer)
        .expect("default augmenter builds")
}

/// Whether `object` is backed by a remote session.
#[allow(dead_code)]
pub fn is_remote<T: RemoteControlled>(object: &T) -> bool {
    object.remote_handle().is_some()
}

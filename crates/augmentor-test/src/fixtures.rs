//! Test fixtures for common types.

use std::sync::Arc;

use augmentor_core::{CapabilitySet, names};
use serde_json::Value;

use crate::mocks::{MockDriver, MockElement, MockRemote};

/// Build a capability set from name/value pairs.
#[must_use]
pub fn test_capabilities<const N: usize>(pairs: [(&str, Value); N]) -> CapabilitySet {
    pairs.into_iter().collect()
}

/// Capabilities of a typical mobile driver session: network control on,
/// rotation explicitly off.
#[must_use]
pub fn test_driver_capabilities() -> CapabilitySet {
    CapabilitySet::new()
        .with(names::BROWSER_CONNECTION_ENABLED, true)
        .with(names::ROTATABLE, false)
}

/// Capabilities declaring every built-in capability as enabled.
#[must_use]
pub fn test_all_builtin_capabilities() -> CapabilitySet {
    CapabilitySet::new()
        .with(names::WEB_STORAGE_ENABLED, true)
        .with(names::BROWSER_CONNECTION_ENABLED, true)
        .with(names::ROTATABLE, true)
        .with(names::APPLICATION_CACHE_ENABLED, true)
        .with(names::LOCATION_CONTEXT_ENABLED, true)
}

/// Capabilities an element session typically declares.
#[must_use]
pub fn test_element_capabilities() -> CapabilitySet {
    CapabilitySet::new().with("elementScreenshotEnabled", true)
}

/// A driver backed by a fresh mock session declaring `capabilities`.
#[must_use]
pub fn test_driver(capabilities: CapabilitySet) -> (MockDriver, Arc<MockRemote>) {
    let remote = Arc::new(MockRemote::new().with_capabilities(capabilities));
    (MockDriver::new("test-driver", Arc::clone(&remote)), remote)
}

/// An element backed by a fresh mock session declaring `capabilities`.
#[must_use]
pub fn test_element(capabilities: CapabilitySet) -> (MockElement, Arc<MockRemote>) {
    let remote = Arc::new(MockRemote::new().with_capabilities(capabilities));
    (MockElement::new("test-element", Arc::clone(&remote)), remote)
}

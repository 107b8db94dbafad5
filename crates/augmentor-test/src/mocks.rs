//! Mock implementations for testing.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use augmentor_core::{
    AugmentError, AugmentResult, CapabilityImplementation, CapabilitySet, CapabilityValue,
    CommandParams, RemoteExtractor, RemoteHandle,
};
use augmentor_registry::{Predicate, Provider, is_capability_present};
use serde_json::Value;
use uuid::Uuid;

/// Mock remote session.
///
/// Declares a canned capability set, answers commands from a script and
/// records every command it executes. Clones share state, so a test can keep
/// one clone for assertions while the engine holds another.
#[derive(Debug, Clone)]
pub struct MockRemote {
    session_id: Uuid,
    /// Capabilities returned by `declared_capabilities`.
    capabilities: Arc<Mutex<CapabilitySet>>,
    /// Scripted responses keyed by command name.
    responses: Arc<Mutex<HashMap<String, Result<Value, String>>>>,
    /// Commands executed so far, in order.
    executed: Arc<Mutex<Vec<(String, CommandParams)>>>,
    capability_fetches: Arc<AtomicUsize>,
}

impl MockRemote {
    /// Create a mock session that declares nothing and answers `null`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            capabilities: Arc::new(Mutex::new(CapabilitySet::new())),
            responses: Arc::new(Mutex::new(HashMap::new())),
            executed: Arc::new(Mutex::new(Vec::new())),
            capability_fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Replace the declared capabilities.
    #[must_use]
    pub fn with_capabilities(self, capabilities: CapabilitySet) -> Self {
        if let Ok(mut guard) = self.capabilities.lock() {
            *guard = capabilities;
        }
        self
    }

    /// Declare one more capability.
    #[must_use]
    pub fn with_capability(
        self,
        name: impl Into<String>,
        value: impl Into<CapabilityValue>,
    ) -> Self {
        if let Ok(mut guard) = self.capabilities.lock() {
            let current = std::mem::take(&mut *guard);
            *guard = current.with(name, value);
        }
        self
    }

    /// Answer `command` with `response`.
    #[must_use]
    pub fn with_response(self, command: impl Into<String>, response: Value) -> Self {
        if let Ok(mut guard) = self.responses.lock() {
            guard.insert(command.into(), Ok(response));
        }
        self
    }

    /// Fail `command` with [`AugmentError::Remote`].
    #[must_use]
    pub fn with_failure(self, command: impl Into<String>, message: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.responses.lock() {
            guard.insert(command.into(), Err(message.into()));
        }
        self
    }

    /// Unique identifier of this session.
    #[must_use]
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Snapshot of the declared capabilities without counting a fetch.
    #[must_use]
    pub fn capabilities(&self) -> CapabilitySet {
        self.capabilities
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Every executed command with its parameters.
    #[must_use]
    pub fn executed(&self) -> Vec<(String, CommandParams)> {
        self.executed
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Names of executed commands, in order.
    #[must_use]
    pub fn executed_commands(&self) -> Vec<String> {
        self.executed()
            .into_iter()
            .map(|(command, _)| command)
            .collect()
    }

    /// How many times the capabilities were requested through
    /// [`RemoteHandle::declared_capabilities`].
    #[must_use]
    pub fn capability_fetches(&self) -> usize {
        self.capability_fetches.load(Ordering::SeqCst)
    }
}

impl Default for MockRemote {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteHandle for MockRemote {
    fn declared_capabilities(&self) -> CapabilitySet {
        self.capability_fetches.fetch_add(1, Ordering::SeqCst);
        self.capabilities()
    }

    fn execute(&self, command: &str, params: CommandParams) -> AugmentResult<Value> {
        if let Ok(mut guard) = self.executed.lock() {
            guard.push((command.to_string(), params));
        }

        let scripted = self
            .responses
            .lock()
            .ok()
            .and_then(|guard| guard.get(command).cloned());

        match scripted {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(AugmentError::Remote(format!("{command}: {message}"))),
            None => Ok(Value::Null),
        }
    }
}

/// An object that may be backed by a remote session.
pub trait RemoteControlled {
    /// The backing session, if any.
    fn remote_handle(&self) -> Option<Arc<dyn RemoteHandle>>;
}

impl<T: RemoteControlled + ?Sized> RemoteControlled for Box<T> {
    fn remote_handle(&self) -> Option<Arc<dyn RemoteHandle>> {
        (**self).remote_handle()
    }
}

/// Mock top-level automation object.
#[derive(Debug, Clone)]
pub struct MockDriver {
    /// Label used in assertions.
    pub name: String,
    remote: Option<Arc<MockRemote>>,
}

impl MockDriver {
    /// A driver backed by `remote`.
    #[must_use]
    pub fn new(name: impl Into<String>, remote: Arc<MockRemote>) -> Self {
        Self {
            name: name.into(),
            remote: Some(remote),
        }
    }

    /// A driver with no remote session behind it.
    #[must_use]
    pub fn detached(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            remote: None,
        }
    }

    /// The backing mock session, if any.
    #[must_use]
    pub fn remote(&self) -> Option<&Arc<MockRemote>> {
        self.remote.as_ref()
    }
}

impl RemoteControlled for MockDriver {
    fn remote_handle(&self) -> Option<Arc<dyn RemoteHandle>> {
        self.remote
            .as_ref()
            .map(|remote| -> Arc<dyn RemoteHandle> { remote.clone() })
    }
}

/// Mock element within a driver's session.
#[derive(Debug, Clone)]
pub struct MockElement {
    /// Element identifier.
    pub id: String,
    remote: Option<Arc<MockRemote>>,
}

impl MockElement {
    /// An element backed by `remote`.
    #[must_use]
    pub fn new(id: impl Into<String>, remote: Arc<MockRemote>) -> Self {
        Self {
            id: id.into(),
            remote: Some(remote),
        }
    }

    /// An element with no remote session behind it.
    #[must_use]
    pub fn detached(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            remote: None,
        }
    }
}

impl RemoteControlled for MockElement {
    fn remote_handle(&self) -> Option<Arc<dyn RemoteHandle>> {
        self.remote
            .as_ref()
            .map(|remote| -> Arc<dyn RemoteHandle> { remote.clone() })
    }
}

/// Extractor for any [`RemoteControlled`] object, counting its calls.
#[derive(Debug, Clone, Default)]
pub struct MockExtractor {
    calls: Arc<AtomicUsize>,
}

impl MockExtractor {
    /// Create a new extractor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of extraction attempts so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<T: RemoteControlled> RemoteExtractor<T> for MockExtractor {
    fn extract(&self, object: &T) -> Option<Arc<dyn RemoteHandle>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        object.remote_handle()
    }
}

/// Interface exposed by every [`StubProvider`].
pub trait StubCapability: Send + Sync {
    /// Name of the provider that built this implementation.
    fn provider_name(&self) -> &str;
}

struct StubImplementation {
    provider: String,
}

impl StubCapability for StubImplementation {
    fn provider_name(&self) -> &str {
        &self.provider
    }
}

/// Configurable provider for registry and engine tests.
///
/// Builds a [`StubCapability`] implementation, counts builds and can be told
/// to fail.
#[derive(Clone)]
pub struct StubProvider {
    name: String,
    predicate: Predicate,
    builds: Arc<AtomicUsize>,
    failure: Option<String>,
}

impl StubProvider {
    /// A provider applicable whenever `predicate` holds.
    #[must_use]
    pub fn new(name: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            name: name.into(),
            predicate,
            builds: Arc::new(AtomicUsize::new(0)),
            failure: None,
        }
    }

    /// A provider applicable when `capability` is present.
    #[must_use]
    pub fn for_capability(name: impl Into<String>, capability: impl Into<String>) -> Self {
        let capability = capability.into();
        let predicate = Predicate::described(format!("presence of '{capability}'"), move |caps| {
            is_capability_present(caps, &capability)
        });
        Self::new(name, predicate)
    }

    /// A provider that always applies.
    #[must_use]
    pub fn always(name: impl Into<String>) -> Self {
        Self::new(name, Predicate::described("always", |_| true))
    }

    /// Make every build fail with [`AugmentError::Provider`].
    #[must_use]
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// The predicate this provider is registered under.
    #[must_use]
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Number of builds attempted so far.
    #[must_use]
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}

impl Provider for StubProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_applicable(&self) -> Predicate {
        self.predicate.clone()
    }

    fn build(&self, _remote: &Arc<dyn RemoteHandle>) -> AugmentResult<CapabilityImplementation> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.failure {
            return Err(AugmentError::provider(&self.name, message.as_str()));
        }
        let implementation: Arc<dyn StubCapability> = Arc::new(StubImplementation {
            provider: self.name.clone(),
        });
        Ok(CapabilityImplementation::new("StubCapability", implementation))
    }
}

impl fmt::Debug for StubProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StubProvider")
            .field("name", &self.name)
            .field("predicate", &self.predicate)
            .field("builds", &self.build_count())
            .field("failing", &self.failure.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mock_remote_scripted_response() {
        let remote = MockRemote::new().with_response("ping", json!("pong"));

        assert_eq!(remote.execute("ping", CommandParams::new()).unwrap(), json!("pong"));
        assert_eq!(remote.execute("other", CommandParams::new()).unwrap(), Value::Null);
        assert_eq!(remote.executed_commands(), vec!["ping", "other"]);
    }

    #[test]
    fn test_mock_remote_failure() {
        let remote = MockRemote::new().with_failure("ping", "gone");

        let err = remote.execute("ping", CommandParams::new()).unwrap_err();
        assert!(matches!(err, AugmentError::Remote(message) if message == "ping: gone"));
    }

    #[test]
    fn test_mock_remote_counts_capability_fetches() {
        let remote = MockRemote::new().with_capability("rotatable", true);
        assert_eq!(remote.capability_fetches(), 0);

        let caps = remote.declared_capabilities();
        assert_eq!(caps.get("rotatable"), Some(&json!(true)));
        assert_eq!(remote.capability_fetches(), 1);
    }

    #[test]
    fn test_mock_extractor() {
        let remote = Arc::new(MockRemote::new());
        let extractor = MockExtractor::new();

        assert!(extractor.extract(&MockDriver::new("d", remote)).is_some());
        assert!(extractor.extract(&MockElement::detached("e")).is_none());
        assert_eq!(extractor.calls(), 2);
    }

    #[test]
    fn test_stub_provider_builds_and_counts() {
        let provider = StubProvider::always("stub");
        let remote: Arc<dyn RemoteHandle> = Arc::new(MockRemote::new());

        let implementation = provider.build(&remote).unwrap();
        let stub = implementation.downcast::<dyn StubCapability>().unwrap();
        assert_eq!(stub.provider_name(), "stub");
        assert_eq!(provider.build_count(), 1);
    }

    #[test]
    fn test_stub_provider_failure() {
        let provider = StubProvider::always("stub").failing("boom");
        let remote: Arc<dyn RemoteHandle> = Arc::new(MockRemote::new());

        let err = provider.build(&remote).unwrap_err();
        assert!(matches!(err, AugmentError::Provider { .. }));
        assert_eq!(provider.build_count(), 1);
    }
}

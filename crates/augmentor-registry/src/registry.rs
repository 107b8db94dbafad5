//! Role-scoped provider registries.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use augmentor_core::{AugmentResult, CapabilitySet, Role};
use tracing::debug;

use crate::matcher::{MatchedProviders, match_providers};
use crate::predicate::{Predicate, PredicateId};
use crate::provider::ProviderRef;

/// A single `(predicate, provider)` pair.
#[derive(Clone)]
pub struct RegistryEntry {
    predicate: Predicate,
    provider: ProviderRef,
    sequence: u64,
}

impl RegistryEntry {
    /// The predicate guarding this entry.
    #[must_use]
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// The provider applied when the predicate holds.
    #[must_use]
    pub fn provider(&self) -> &ProviderRef {
        &self.provider
    }

    /// Position of this entry in registration order.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("predicate", &self.predicate)
            .field("provider", &self.provider.name())
            .field("sequence", &self.sequence)
            .finish()
    }
}

/// Collection of `(predicate, provider)` entries for one role.
///
/// Entries are keyed by predicate identity and remember the order in which
/// they were first registered. Registration happens during setup through
/// `&mut self`; afterwards the registry is only read, so a fully built
/// registry can be shared across threads.
pub struct Registry {
    role: Role,
    entries: HashMap<PredicateId, RegistryEntry>,
    next_sequence: u64,
}

impl Registry {
    /// Create an empty registry for `role`.
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self {
            role,
            entries: HashMap::new(),
            next_sequence: 0,
        }
    }

    /// The role this registry serves.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Register `provider` under a fresh presence predicate for `name`.
    ///
    /// Every call creates a new predicate, so registering twice under the
    /// same name keeps both entries.
    ///
    /// # Errors
    ///
    /// Returns [`augmentor_core::AugmentError::InvalidArgument`] if `name` is
    /// empty or only whitespace. Nothing is registered in that case.
    pub fn register_by_name(
        &mut self,
        name: &str,
        provider: ProviderRef,
    ) -> AugmentResult<PredicateId> {
        let predicate = Predicate::presence(name)?;
        let id = predicate.id();
        self.register_by_predicate(predicate, provider);
        Ok(id)
    }

    /// Register `provider` under `predicate`.
    ///
    /// If an entry with the same predicate identity exists, its provider is
    /// replaced in place, keeping the entry's position, and the previous
    /// provider is returned.
    pub fn register_by_predicate(
        &mut self,
        predicate: Predicate,
        provider: ProviderRef,
    ) -> Option<ProviderRef> {
        debug!(
            role = %self.role,
            provider = provider.name(),
            predicate = predicate.description(),
            id = %predicate.id(),
            "registering provider"
        );

        if let Some(entry) = self.entries.get_mut(&predicate.id()) {
            return Some(std::mem::replace(&mut entry.provider, provider));
        }

        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        self.entries.insert(
            predicate.id(),
            RegistryEntry {
                predicate,
                provider,
                sequence,
            },
        );
        None
    }

    /// Providers whose predicate holds for `caps`.
    #[must_use]
    pub fn matching(&self, caps: &CapabilitySet) -> MatchedProviders {
        match_providers(self, caps)
    }

    /// Whether an entry exists for the predicate identity `id`.
    #[must_use]
    pub fn contains(&self, id: &PredicateId) -> bool {
        self.entries.contains_key(id)
    }

    /// Provider registered under the predicate identity `id`.
    #[must_use]
    pub fn get(&self, id: &PredicateId) -> Option<&ProviderRef> {
        self.entries.get(id).map(RegistryEntry::provider)
    }

    /// All entries, in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        let mut entries: Vec<&RegistryEntry> = self.entries.values().collect();
        entries.sort_unstable_by_key(|entry| entry.sequence);
        entries.into_iter()
    }

    /// Names of all registered providers, sorted.
    #[must_use]
    pub fn provider_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.values().map(|e| e.provider.name()).collect();
        names.sort_unstable();
        names
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `provider` is registered under any predicate.
    #[must_use]
    pub fn contains_provider(&self, provider: &ProviderRef) -> bool {
        self.entries
            .values()
            .any(|entry| Arc::ptr_eq(&entry.provider, provider))
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("role", &self.role)
            .field("providers", &self.provider_names())
            .finish()
    }
}

//! Prelude module - commonly used types for convenient import.
//!
//! Use `use augmentor_registry::prelude::*;` to import all essential types.

// Predicates
pub use crate::{Predicate, PredicateId, is_capability_present};

// Providers
pub use crate::{FnProvider, Provider, ProviderRef};

// Registry and matching
pub use crate::{MatchedProviders, Registry, RegistryEntry, match_providers};

// Discovery
pub use crate::{PluginDiscovery, StaticDiscovery, register_discovered};

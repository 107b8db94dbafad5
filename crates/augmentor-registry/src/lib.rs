//! Augmentor Registry - Capability predicates, providers and matching.
//!
//! This crate provides:
//! - Predicates over capability snapshots, identified by `PredicateId`
//! - The presence predicate (the only built-in predicate kind)
//! - The `Provider` trait pairing a predicate with an implementation factory
//! - Role-scoped registries of `(predicate, provider)` entries
//! - The matcher that selects providers for a snapshot
//! - Plugin discovery from an already materialized provider list
//!
//! # Identity
//!
//! Registry entries are keyed by predicate *identity*, not by the capability
//! name a predicate happens to test. Two independently constructed presence
//! predicates for the same name are two entries; re-registering a clone of
//! an existing predicate replaces that entry's provider.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use augmentor_core::{CapabilityImplementation, CapabilitySet, Role};
//! use augmentor_registry::{FnProvider, Predicate, Registry};
//!
//! trait Marker: Send + Sync {}
//! struct Present;
//! impl Marker for Present {}
//!
//! let provider = Arc::new(FnProvider::new(
//!     "marker",
//!     Predicate::presence("marker").unwrap(),
//!     |_remote| {
//!         let marker: Arc<dyn Marker> = Arc::new(Present);
//!         Ok(CapabilityImplementation::new("Marker", marker))
//!     },
//! ));
//!
//! let mut registry = Registry::new(Role::Driver);
//! registry.register_by_name("marker", provider).unwrap();
//!
//! let caps = CapabilitySet::new().with("marker", true);
//! assert_eq!(registry.matching(&caps).names(), vec!["marker"]);
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod discovery;
mod matcher;
mod predicate;
mod provider;
mod registry;

pub use discovery::{PluginDiscovery, StaticDiscovery, register_discovered};
pub use matcher::{MatchedProviders, match_providers};
pub use predicate::{Predicate, PredicateId, is_capability_present, validate_capability_name};
pub use provider::{FnProvider, Provider, ProviderRef};
pub use registry::{Registry, RegistryEntry};

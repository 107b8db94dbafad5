//! Augmentor Engine - Capability-driven augmentation of remotely controlled
//! objects.
//!
//! An [`Augmenter`] owns two registries, one per [`Role`]. Given an object,
//! it asks a [`RemoteExtractor`] for the remote session behind it, reads the
//! capabilities that session declares, matches them against the registry for
//! the requested role, and hands the matched providers to a [`Composer`].
//!
//! The driver registry is seeded with the built-in providers at
//! construction, followed by any plugins from a
//! [`PluginDiscovery`](augmentor_registry::PluginDiscovery) source. The
//! element registry starts empty.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use augmentor_builtins::NetworkConnection;
//! use augmentor_core::{CapabilitySet, CommandParams, RemoteHandle, Role, names};
//! use augmentor_engine::{Augmenter, DelegatingComposer};
//! use serde_json::Value;
//!
//! #[derive(Debug)]
//! struct Session(CapabilitySet);
//!
//! impl RemoteHandle for Session {
//!     fn declared_capabilities(&self) -> CapabilitySet {
//!         self.0.clone()
//!     }
//!
//!     fn execute(
//!         &self,
//!         _command: &str,
//!         _params: CommandParams,
//!     ) -> augmentor_core::AugmentResult<Value> {
//!         Ok(Value::from(2))
//!     }
//! }
//!
//! struct Driver {
//!     session: Arc<Session>,
//! }
//!
//! let extractor = |driver: &Driver| -> Option<Arc<dyn RemoteHandle>> {
//!     Some(driver.session.clone())
//! };
//! let augmenter = Augmenter::new(extractor, DelegatingComposer).unwrap();
//!
//! let caps = CapabilitySet::new().with(names::BROWSER_CONNECTION_ENABLED, true);
//! let driver = Driver { session: Arc::new(Session(caps)) };
//!
//! let composite = augmenter
//!     .augment(driver, Role::Driver)
//!     .unwrap()
//!     .into_augmented()
//!     .unwrap();
//!
//! let network = composite.capability::<dyn NetworkConnection>().unwrap();
//! assert!(network.network_connection().unwrap().is_wifi_enabled());
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod augmenter;
mod composer;
mod composite;

pub use augmenter::{Augmentation, Augmenter, AugmenterBuilder};
pub use augmentor_core::{RemoteExtractor, Role};
pub use composer::Composer;
pub use composite::{Composite, DelegatingComposer};

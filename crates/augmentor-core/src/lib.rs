//! Augmentor Core - Foundation types for capability-driven augmentation.
//!
//! This crate provides:
//! - Capability snapshots declared by a remote session
//! - Well-known capability names
//! - The `RemoteHandle` trait for remotely controlled instances
//! - Type-erased capability implementations keyed by interface
//! - Error types shared across the workspace
//!
//! # Example
//!
//! ```
//! use augmentor_core::{CapabilitySet, names};
//!
//! let caps = CapabilitySet::new()
//!     .with(names::WEB_STORAGE_ENABLED, true)
//!     .with(names::ROTATABLE, false);
//!
//! assert_eq!(caps.len(), 2);
//! assert_eq!(caps.get(names::ROTATABLE), Some(&serde_json::Value::Bool(false)));
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

pub mod names;

mod capability;
mod error;
mod implementation;
mod remote;
mod role;

pub use capability::{CapabilitySet, CapabilityValue};
pub use error::{AugmentError, AugmentResult};
pub use implementation::{CapabilityImplementation, InterfaceTag};
pub use remote::{CommandParams, RemoteExtractor, RemoteHandle};
pub use role::Role;

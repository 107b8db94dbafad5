//! Augmentor Builtins - Capability providers seeded into every driver registry.
//!
//! Each built-in pairs a well-known capability name with a thin
//! implementation that forwards calls to the remote session through
//! [`RemoteHandle::execute`](augmentor_core::RemoteHandle::execute):
//!
//! | Key | Capability | Interface |
//! | --- | --- | --- |
//! | `web_storage` | `webStorageEnabled` | [`WebStorage`] |
//! | `network_connection` | `browserConnectionEnabled` | [`NetworkConnection`] |
//! | `rotation` | `rotatable` | [`Rotatable`] |
//! | `application_cache` | `applicationCacheEnabled` | [`ApplicationCache`] |
//! | `location_context` | `locationContextEnabled` | [`LocationContext`] |
//!
//! Built-ins are only ever registered in the driver-role registry.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod app_cache;
mod command;
mod location;
mod network;
mod provider;
mod rotation;
mod storage;

pub use app_cache::{AppCacheStatus, ApplicationCache, application_cache};
pub use location::{Location, LocationContext, location_context};
pub use network::{ConnectionType, NetworkConnection, network_connection};
pub use provider::{BUILTIN_KEYS, BuiltinProvider, builtin_providers};
pub use rotation::{Rotatable, ScreenOrientation, rotation};
pub use storage::{RemoteStorage, StorageArea, WebStorage, web_storage};

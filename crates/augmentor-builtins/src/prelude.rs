//! Prelude module - commonly used types for convenient import.
//!
//! Use `use augmentor_builtins::prelude::*;` to import all essential types.

// Providers
pub use crate::{BUILTIN_KEYS, BuiltinProvider, builtin_providers};

// Interfaces
pub use crate::{ApplicationCache, LocationContext, NetworkConnection, Rotatable, WebStorage};

// Values exchanged through the interfaces
pub use crate::{
    AppCacheStatus, ConnectionType, Location, RemoteStorage, ScreenOrientation, StorageArea,
};

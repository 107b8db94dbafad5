//! Prelude module - commonly used types for convenient import.
//!
//! Use `use augmentor_core::prelude::*;` to import all essential types.

// Errors
pub use crate::{AugmentError, AugmentResult};

// Capability snapshots
pub use crate::{CapabilitySet, CapabilityValue, names};

// Remote instances and their implementations
pub use crate::{
    CapabilityImplementation, CommandParams, InterfaceTag, RemoteExtractor, RemoteHandle, Role,
};

//! Unified prelude for Augmentor.
//!
//! This crate provides a single import to bring in all commonly used types
//! from across the workspace.
//!
//! # Usage
//!
//! ```rust,ignore
//! use augmentor_prelude::*;
//!
//! // Now you have access to types from:
//! // - augmentor-core (capabilities, remote handles, errors)
//! // - augmentor-registry (predicates, providers, registries)
//! // - augmentor-builtins (built-in capability interfaces)
//! // - augmentor-engine (Augmenter, composers)
//! // - augmentor-config (AugmentorConfig)
//! // - augmentor-telemetry (logging setup)
//! ```
//!
//! # Per-Crate Preludes
//!
//! If you only need types from specific crates, use their individual preludes:
//!
//! ```rust,ignore
//! use augmentor_core::prelude::*;
//! use augmentor_engine::prelude::*;
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use augmentor_prelude::*;
//!
//! let config = AugmentorConfig::load(None)?;
//! setup_logging(&LogConfig::try_from(&config.logging)?)?;
//!
//! let augmenter = Augmenter::builder(extractor, DelegatingComposer)
//!     .with_config(&config)
//!     .build()?;
//!
//! if let Augmentation::Augmented(driver) = augmenter.augment(driver, Role::Driver)? {
//!     if let Some(storage) = driver.capability::<dyn WebStorage>() {
//!         storage.local_storage().set("theme", "dark")?;
//!     }
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

// Re-export all crate preludes
pub use augmentor_builtins::prelude::*;
pub use augmentor_core::prelude::*;
pub use augmentor_engine::prelude::*;
pub use augmentor_registry::prelude::*;
pub use augmentor_telemetry::prelude::*;

// Configuration has no prelude of its own
pub use augmentor_config::{AugmentorConfig, ConfigError, ConfigResult};

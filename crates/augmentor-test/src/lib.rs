//! Augmentor Test - Shared test utilities for the Augmentor workspace.
//!
//! This crate provides mock remote sessions, stub providers and fixtures that
//! can be used across multiple Augmentor crates as a dev-dependency.
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! augmentor-test.workspace = true
//! ```
//!
//! Then use in your tests:
//!
//! ```rust,ignore
//! #[cfg(test)]
//! mod tests {
//!     use augmentor_test::{MockRemote, StubProvider};
//!     use augmentor_core::names;
//!
//!     #[test]
//!     fn test_rotation_matches() {
//!         let remote = MockRemote::new().with_capability(names::ROTATABLE, true);
//!         let provider = StubProvider::for_capability("rotation", names::ROTATABLE);
//!
//!         assert!(provider.predicate().test(&remote.capabilities()));
//!     }
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

pub mod fixtures;
pub mod harness;
pub mod mocks;

pub use fixtures::*;
pub use harness::*;
pub use mocks::*;

//! Augmentor Telemetry - Logging setup for the augmentation engine.
//!
//! The engine crates only emit through `tracing` macros. This crate installs
//! the global subscriber that decides where those events go:
//! - Level filter plus per-crate directives
//! - Pretty, compact, JSON or full formatting
//! - stdout, stderr or a rolling file
//!
//! With the `config` feature, a [`LogConfig`] can be built from the
//! `[logging]` section of an `AugmentorConfig`.
//!
//! # Example
//!
//! ```rust,no_run
//! use augmentor_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), augmentor_telemetry::TelemetryError> {
//! let config = LogConfig::new("info")
//!     .with_format(LogFormat::Compact)
//!     .with_directive("augmentor_registry=trace");
//!
//! setup_logging(&config)?;
//! tracing::info!("logging ready");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{
    FileLogConfig, FileRotation, LogConfig, LogFormat, LogTarget, setup_default_logging,
    setup_logging,
};

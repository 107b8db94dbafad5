//! Prelude module - commonly used types for convenient import.
//!
//! Use `use augmentor_engine::prelude::*;` to import all essential types.

// Orchestration
pub use crate::{Augmentation, Augmenter, AugmenterBuilder};

// Composition
pub use crate::{Composer, Composite, DelegatingComposer};

// Extraction
pub use crate::{RemoteExtractor, Role};

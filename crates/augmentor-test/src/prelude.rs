//! Prelude module - commonly used test utilities.
//!
//! Use `use augmentor_test::prelude::*;` in test modules.

pub use crate::fixtures::{
    test_all_builtin_capabilities, test_capabilities, test_driver, test_driver_capabilities,
    test_element, test_element_capabilities,
};
pub use crate::harness::{
    setup_test_logging, setup_test_logging_default, test_config_file, test_file,
};
pub use crate::mocks::{
    MockDriver, MockElement, MockExtractor, MockRemote, RemoteControlled, StubCapability,
    StubProvider,
};

//! Augmentation roles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which registry governs an augmentation.
///
/// Drivers and elements are augmented independently, each from its own
/// registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The object is (or wraps) a remote driver.
    Driver,
    /// The object is (or wraps) an element owned by a remote driver.
    Element,
}

impl Role {
    /// Both roles, driver first.
    pub const ALL: [Role; 2] = [Role::Driver, Role::Element];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Driver => write!(f, "driver"),
            Self::Element => write!(f, "element"),
        }
    }
}

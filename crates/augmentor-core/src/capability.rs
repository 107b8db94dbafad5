//! Capability snapshots.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AugmentError, AugmentResult};

/// Value of a single declared capability.
///
/// Capabilities are arbitrarily typed. Only booleans get special treatment
/// during matching, and `null` is treated the same as an absent capability.
pub type CapabilityValue = Value;

/// Read-only snapshot of the capabilities a remote session declares.
///
/// A snapshot is taken once per augmentation and never mutated by the
/// engine. It serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet {
    values: Map<String, CapabilityValue>,
}

impl CapabilitySet {
    /// Create an empty capability set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a capability set from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::InvalidArgument`] if `value` is not a JSON object.
    pub fn from_json(value: Value) -> AugmentResult<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(AugmentError::InvalidArgument {
                argument: "capabilities".to_string(),
                reason: format!("expected a JSON object, got {}", json_kind(&other)),
            }),
        }
    }

    /// Add a capability, replacing any previous value under the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<CapabilityValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Get the raw value declared for `name`.
    ///
    /// An explicit `null` is returned as `Some(&Value::Null)`; callers that
    /// care about presence should treat it as absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CapabilityValue> {
        self.values.get(name)
    }

    /// Declared capability names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over all declared capabilities.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CapabilityValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of declared capabilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no capabilities are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for CapabilitySet
where
    K: Into<String>,
    V: Into<CapabilityValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

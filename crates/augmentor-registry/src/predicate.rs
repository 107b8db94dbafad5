//! Predicates over capability snapshots.

use std::fmt;
use std::sync::Arc;

use augmentor_core::{AugmentError, AugmentResult, CapabilitySet, CapabilityValue};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a predicate.
///
/// Assigned once when a [`Predicate`] is constructed and shared by all of its
/// clones. Registries key their entries on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PredicateId(pub Uuid);

impl PredicateId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PredicateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "predicate:{}", &self.0.to_string()[..8])
    }
}

type CheckFn = dyn Fn(&CapabilitySet) -> bool + Send + Sync;

/// A pure function from a capability snapshot to a boolean.
///
/// Cloning a predicate keeps its identity. Constructing a new one always
/// yields a fresh identity, even if it tests exactly the same thing.
#[derive(Clone)]
pub struct Predicate {
    id: PredicateId,
    description: Arc<str>,
    check: Arc<CheckFn>,
}

impl Predicate {
    /// Create a predicate from a closure.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&CapabilitySet) -> bool + Send + Sync + 'static,
    {
        Self::described("custom", check)
    }

    /// Create a predicate with a description used in logs.
    pub fn described<F>(description: impl Into<String>, check: F) -> Self
    where
        F: Fn(&CapabilitySet) -> bool + Send + Sync + 'static,
    {
        Self {
            id: PredicateId::generate(),
            description: Arc::from(description.into()),
            check: Arc::new(check),
        }
    }

    /// Presence predicate for the capability `name`.
    ///
    /// Satisfied when the snapshot declares `name` with a non-null value that
    /// is not the boolean `false`. See [`is_capability_present`].
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::InvalidArgument`] if `name` is empty or only
    /// whitespace. The name is checked here rather than at evaluation time.
    pub fn presence(name: impl Into<String>) -> AugmentResult<Self> {
        let name = name.into();
        validate_capability_name(&name)?;

        let description = format!("presence of '{name}'");
        Ok(Self::described(description, move |caps| {
            is_capability_present(caps, &name)
        }))
    }

    /// Identity of this predicate.
    #[must_use]
    pub fn id(&self) -> PredicateId {
        self.id
    }

    /// Description used in logs.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Evaluate the predicate against a snapshot.
    #[must_use]
    pub fn test(&self, caps: &CapabilitySet) -> bool {
        (self.check)(caps)
    }

    /// Whether `other` is this very predicate (or a clone of it).
    #[must_use]
    pub fn same_as(&self, other: &Predicate) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("id", &self.id)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Presence semantics for a single capability.
///
/// A capability is present when the snapshot holds a value for `name` that
/// is not `null`, and, if that value is a boolean, it is `true`. Any other
/// value (string, number, array, object) counts as present regardless of
/// content.
#[must_use]
pub fn is_capability_present(caps: &CapabilitySet, name: &str) -> bool {
    match caps.get(name) {
        None | Some(CapabilityValue::Null) => false,
        Some(CapabilityValue::Bool(enabled)) => *enabled,
        Some(_) => true,
    }
}

/// Check that `name` can be used as a capability name.
///
/// # Errors
///
/// Returns [`AugmentError::InvalidArgument`] if `name` is empty or only
/// whitespace.
pub fn validate_capability_name(name: &str) -> AugmentResult<()> {
    if name.trim().is_empty() {
        return Err(AugmentError::invalid_argument(
            "capability name",
            "capability name to check must be set",
        ));
    }
    Ok(())
}

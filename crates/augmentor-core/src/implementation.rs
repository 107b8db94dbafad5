//! Type-erased capability implementations.
//!
//! A provider hands the composer a [`CapabilityImplementation`]: an interface
//! tag plus an `Arc<dyn Trait>` for that interface. The engine never looks
//! inside; a composer recovers the typed handle with
//! [`CapabilityImplementation::downcast`].

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Identifies the interface a capability implementation exposes.
///
/// The tag is keyed by the `TypeId` of the interface type (typically a
/// `dyn Trait`); the name is for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterfaceTag {
    name: &'static str,
    type_id: TypeId,
}

impl InterfaceTag {
    /// Tag for the interface type `I`.
    #[must_use]
    pub fn of<I: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            name,
            type_id: TypeId::of::<I>(),
        }
    }

    /// Human-readable interface name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type identity of the interface.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Whether this tag describes the interface type `I`.
    #[must_use]
    pub fn is<I: ?Sized + 'static>(&self) -> bool {
        self.type_id == TypeId::of::<I>()
    }
}

impl fmt::Display for InterfaceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// An interface tag bundled with its implementation.
#[derive(Clone)]
pub struct CapabilityImplementation {
    interface: InterfaceTag,
    // Always holds an `Arc<I>` where `I` is the tagged interface type.
    implementation: Arc<dyn Any + Send + Sync>,
}

impl CapabilityImplementation {
    /// Bundle `implementation` as the implementation of interface `I`.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use augmentor_core::CapabilityImplementation;
    ///
    /// trait Greeter: Send + Sync {
    ///     fn greet(&self) -> String;
    /// }
    ///
    /// struct English;
    /// impl Greeter for English {
    ///     fn greet(&self) -> String {
    ///         "hello".to_string()
    ///     }
    /// }
    ///
    /// let greeter: Arc<dyn Greeter> = Arc::new(English);
    /// let bundle = CapabilityImplementation::new("Greeter", greeter);
    ///
    /// let typed = bundle.downcast::<dyn Greeter>().unwrap();
    /// assert_eq!(typed.greet(), "hello");
    /// ```
    #[must_use]
    pub fn new<I>(name: &'static str, implementation: Arc<I>) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
    {
        Self {
            interface: InterfaceTag::of::<I>(name),
            implementation: Arc::new(implementation),
        }
    }

    /// The interface this implementation exposes.
    #[must_use]
    pub fn interface(&self) -> InterfaceTag {
        self.interface
    }

    /// Recover the typed implementation, if it implements interface `I`.
    #[must_use]
    pub fn downcast<I>(&self) -> Option<Arc<I>>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        if !self.interface.is::<I>() {
            return None;
        }
        self.implementation.downcast_ref::<Arc<I>>().cloned()
    }
}

impl fmt::Debug for CapabilityImplementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityImplementation")
            .field("interface", &self.interface.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Counter: Send + Sync {
        fn count(&self) -> u32;
    }

    trait Other: Send + Sync {}

    struct Fixed(u32);

    impl Counter for Fixed {
        fn count(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_downcast_to_tagged_interface() {
        let counter: Arc<dyn Counter> = Arc::new(Fixed(7));
        let bundle = CapabilityImplementation::new("Counter", counter);

        assert_eq!(bundle.interface().name(), "Counter");
        assert!(bundle.interface().is::<dyn Counter>());
        assert_eq!(bundle.downcast::<dyn Counter>().unwrap().count(), 7);
    }

    #[test]
    fn test_downcast_to_other_interface_fails() {
        let counter: Arc<dyn Counter> = Arc::new(Fixed(1));
        let bundle = CapabilityImplementation::new("Counter", counter);

        assert!(bundle.downcast::<dyn Other>().is_none());
        assert!(bundle.downcast::<Fixed>().is_none());
    }

    #[test]
    fn test_clones_share_implementation() {
        let counter: Arc<dyn Counter> = Arc::new(Fixed(3));
        let bundle = CapabilityImplementation::new("Counter", Arc::clone(&counter));
        let copy = bundle.clone();

        let a = bundle.downcast::<dyn Counter>().unwrap();
        let b = copy.downcast::<dyn Counter>().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(&a, &counter));
    }

    #[test]
    fn test_debug_shows_interface_name() {
        let counter: Arc<dyn Counter> = Arc::new(Fixed(0));
        let bundle = CapabilityImplementation::new("Counter", counter);
        assert!(format!("{bundle:?}").contains("Counter"));
    }
}

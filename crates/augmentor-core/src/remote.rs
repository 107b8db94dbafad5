//! Remotely controlled instances.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::capability::CapabilitySet;
use crate::error::AugmentResult;

/// Named parameters sent along with a remote command.
pub type CommandParams = Map<String, Value>;

/// The underlying session object that talks to the automation backend.
///
/// This is what a [`RemoteExtractor`] digs out of whatever object the caller
/// hands to the augmenter. Implementations must be cheap to share; the engine
/// holds them behind `Arc<dyn RemoteHandle>`.
pub trait RemoteHandle: Send + Sync + fmt::Debug {
    /// Snapshot of the capabilities the session declared.
    fn declared_capabilities(&self) -> CapabilitySet;

    /// Execute a named command against the remote session.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the command or the transport
    /// fails.
    fn execute(&self, command: &str, params: CommandParams) -> AugmentResult<Value>;
}

/// Digs the [`RemoteHandle`] out of an object handed to the augmenter.
///
/// Returning `None` means the object is not remotely controlled, in which case
/// the augmenter hands the object back untouched.
pub trait RemoteExtractor<T>: Send + Sync {
    /// The remote handle behind `object`, if there is one.
    fn extract(&self, object: &T) -> Option<Arc<dyn RemoteHandle>>;
}

impl<T, F> RemoteExtractor<T> for F
where
    F: Fn(&T) -> Option<Arc<dyn RemoteHandle>> + Send + Sync,
{
    fn extract(&self, object: &T) -> Option<Arc<dyn RemoteHandle>> {
        self(object)
    }
}

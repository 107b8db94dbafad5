//! Screen rotation over the remote session.

use std::fmt;
use std::sync::Arc;

use augmentor_core::{AugmentResult, CapabilityImplementation, RemoteHandle, names};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::command::{call, params, send};
use crate::provider::BuiltinProvider;

pub(crate) const KEY: &str = "rotation";

/// Screen orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScreenOrientation {
    /// Wider than tall.
    Landscape,
    /// Taller than wide.
    Portrait,
}

impl fmt::Display for ScreenOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Landscape => write!(f, "LANDSCAPE"),
            Self::Portrait => write!(f, "PORTRAIT"),
        }
    }
}

/// Read and change the screen orientation.
pub trait Rotatable: Send + Sync {
    /// Current orientation.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails or reports an unknown
    /// orientation.
    fn orientation(&self) -> AugmentResult<ScreenOrientation>;

    /// Rotate the screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails.
    fn rotate(&self, orientation: ScreenOrientation) -> AugmentResult<()>;
}

struct RemoteRotatable {
    remote: Arc<dyn RemoteHandle>,
}

impl Rotatable for RemoteRotatable {
    fn orientation(&self) -> AugmentResult<ScreenOrientation> {
        call(self.remote.as_ref(), "getScreenOrientation", params([]))
    }

    fn rotate(&self, orientation: ScreenOrientation) -> AugmentResult<()> {
        send(
            self.remote.as_ref(),
            "setScreenOrientation",
            params([("orientation", json!(orientation))]),
        )
    }
}

fn build(remote: Arc<dyn RemoteHandle>) -> CapabilityImplementation {
    let rotatable: Arc<dyn Rotatable> = Arc::new(RemoteRotatable { remote });
    CapabilityImplementation::new("Rotatable", rotatable)
}

/// Provider for [`Rotatable`], enabled by `rotatable`.
#[must_use]
pub fn rotation() -> BuiltinProvider {
    BuiltinProvider::new(KEY, names::ROTATABLE, build)
}

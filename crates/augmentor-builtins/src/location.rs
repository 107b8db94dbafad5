//! Physical location reporting and override.

use std::fmt;
use std::sync::Arc;

use augmentor_core::{AugmentResult, CapabilityImplementation, RemoteHandle, names};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::command::{call, params, send};
use crate::provider::BuiltinProvider;

pub(crate) const KEY: &str = "location_context";

/// A physical location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Altitude in meters.
    #[serde(default)]
    pub altitude: f64,
}

impl Location {
    /// Create a location.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "latitude: {}, longitude: {}, altitude: {}",
            self.latitude, self.longitude, self.altitude
        )
    }
}

/// Read and override the session's physical location.
pub trait LocationContext: Send + Sync {
    /// Current location, if the session has one.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails or the response is not a
    /// location or `null`.
    fn location(&self) -> AugmentResult<Option<Location>>;

    /// Override the location.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails.
    fn set_location(&self, location: Location) -> AugmentResult<()>;
}

struct RemoteLocationContext {
    remote: Arc<dyn RemoteHandle>,
}

impl LocationContext for RemoteLocationContext {
    fn location(&self) -> AugmentResult<Option<Location>> {
        call(self.remote.as_ref(), "getLocation", params([]))
    }

    fn set_location(&self, location: Location) -> AugmentResult<()> {
        send(
            self.remote.as_ref(),
            "setLocation",
            params([("location", json!(location))]),
        )
    }
}

fn build(remote: Arc<dyn RemoteHandle>) -> CapabilityImplementation {
    let context: Arc<dyn LocationContext> = Arc::new(RemoteLocationContext { remote });
    CapabilityImplementation::new("LocationContext", context)
}

/// Provider for [`LocationContext`], enabled by `locationContextEnabled`.
#[must_use]
pub fn location_context() -> BuiltinProvider {
    BuiltinProvider::new(KEY, names::LOCATION_CONTEXT_ENABLED, build)
}

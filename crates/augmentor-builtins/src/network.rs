//! Network connection control over the remote session.

use std::fmt;
use std::ops::BitOr;
use std::sync::Arc;

use augmentor_core::{AugmentResult, CapabilityImplementation, RemoteHandle, names};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::command::{call, params};
use crate::provider::BuiltinProvider;

pub(crate) const KEY: &str = "network_connection";

/// Bitmask describing which connections are active.
///
/// Bit 0 is airplane mode, bit 1 wifi, bit 2 mobile data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionType(u8);

impl ConnectionType {
    /// No connection.
    pub const NONE: Self = Self(0);
    /// Airplane mode.
    pub const AIRPLANE_MODE: Self = Self(1);
    /// Wifi only.
    pub const WIFI: Self = Self(2);
    /// Mobile data only.
    pub const DATA: Self = Self(4);
    /// Wifi and mobile data.
    pub const ALL: Self = Self(6);

    /// Wrap a raw bitmask.
    #[must_use]
    pub fn from_mask(mask: u8) -> Self {
        Self(mask)
    }

    /// The raw bitmask.
    #[must_use]
    pub fn mask(self) -> u8 {
        self.0
    }

    /// Whether airplane mode is on.
    #[must_use]
    pub fn is_airplane_mode(self) -> bool {
        self.0 & Self::AIRPLANE_MODE.0 != 0
    }

    /// Whether wifi is on.
    #[must_use]
    pub fn is_wifi_enabled(self) -> bool {
        self.0 & Self::WIFI.0 != 0
    }

    /// Whether mobile data is on.
    #[must_use]
    pub fn is_data_enabled(self) -> bool {
        self.0 & Self::DATA.0 != 0
    }
}

impl BitOr for ConnectionType {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "airplane: {}, wifi: {}, data: {}",
            self.is_airplane_mode(),
            self.is_wifi_enabled(),
            self.is_data_enabled()
        )
    }
}

/// Query and toggle the session's network connection.
pub trait NetworkConnection: Send + Sync {
    /// Current connection state.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails or the response is not a
    /// bitmask.
    fn network_connection(&self) -> AugmentResult<ConnectionType>;

    /// Request a connection state, returning the state actually applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails or the response is not a
    /// bitmask.
    fn set_network_connection(&self, connection: ConnectionType) -> AugmentResult<ConnectionType>;
}

struct RemoteNetworkConnection {
    remote: Arc<dyn RemoteHandle>,
}

impl NetworkConnection for RemoteNetworkConnection {
    fn network_connection(&self) -> AugmentResult<ConnectionType> {
        call(self.remote.as_ref(), "getNetworkConnection", params([]))
    }

    fn set_network_connection(&self, connection: ConnectionType) -> AugmentResult<ConnectionType> {
        call(
            self.remote.as_ref(),
            "setNetworkConnection",
            params([("parameters", json!({ "type": connection.mask() }))]),
        )
    }
}

fn build(remote: Arc<dyn RemoteHandle>) -> CapabilityImplementation {
    let network: Arc<dyn NetworkConnection> = Arc::new(RemoteNetworkConnection { remote });
    CapabilityImplementation::new("NetworkConnection", network)
}

/// Provider for [`NetworkConnection`], enabled by `browserConnectionEnabled`.
#[must_use]
pub fn network_connection() -> BuiltinProvider {
    BuiltinProvider::new(KEY, names::BROWSER_CONNECTION_ENABLED, build)
}

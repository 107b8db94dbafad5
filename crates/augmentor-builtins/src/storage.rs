//! Web storage (local and session) over the remote session.

use std::fmt;
use std::sync::Arc;

use augmentor_core::{AugmentResult, CapabilityImplementation, RemoteHandle, names};
use serde_json::json;

use crate::command::{call, params, send};
use crate::provider::BuiltinProvider;

pub(crate) const KEY: &str = "web_storage";

/// Which browser storage area a [`RemoteStorage`] addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageArea {
    /// `window.localStorage`.
    Local,
    /// `window.sessionStorage`.
    Session,
}

struct StorageCommands {
    keys: &'static str,
    get_item: &'static str,
    set_item: &'static str,
    remove_item: &'static str,
    clear: &'static str,
    size: &'static str,
}

const LOCAL_COMMANDS: StorageCommands = StorageCommands {
    keys: "getLocalStorageKeys",
    get_item: "getLocalStorageItem",
    set_item: "setLocalStorageItem",
    remove_item: "removeLocalStorageItem",
    clear: "clearLocalStorage",
    size: "getLocalStorageSize",
};

const SESSION_COMMANDS: StorageCommands = StorageCommands {
    keys: "getSessionStorageKeys",
    get_item: "getSessionStorageItem",
    set_item: "setSessionStorageItem",
    remove_item: "removeSessionStorageItem",
    clear: "clearSessionStorage",
    size: "getSessionStorageSize",
};

impl StorageArea {
    fn commands(self) -> &'static StorageCommands {
        match self {
            Self::Local => &LOCAL_COMMANDS,
            Self::Session => &SESSION_COMMANDS,
        }
    }
}

impl fmt::Display for StorageArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Session => write!(f, "session"),
        }
    }
}

/// Access to the session's web storage areas.
pub trait WebStorage: Send + Sync {
    /// The local storage area.
    fn local_storage(&self) -> RemoteStorage;

    /// The session storage area.
    fn session_storage(&self) -> RemoteStorage;
}

/// One storage area of a remote session.
#[derive(Debug, Clone)]
pub struct RemoteStorage {
    area: StorageArea,
    remote: Arc<dyn RemoteHandle>,
}

impl RemoteStorage {
    /// The area this handle addresses.
    #[must_use]
    pub fn area(&self) -> StorageArea {
        self.area
    }

    /// All keys currently stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails or returns something
    /// other than a list of strings.
    pub fn keys(&self) -> AugmentResult<Vec<String>> {
        call(self.remote.as_ref(), self.area.commands().keys, params([]))
    }

    /// Value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails or the response is not a
    /// string or `null`.
    pub fn get(&self, key: &str) -> AugmentResult<Option<String>> {
        call(
            self.remote.as_ref(),
            self.area.commands().get_item,
            params([("key", json!(key))]),
        )
    }

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails.
    pub fn set(&self, key: &str, value: &str) -> AugmentResult<()> {
        send(
            self.remote.as_ref(),
            self.area.commands().set_item,
            params([("key", json!(key)), ("value", json!(value))]),
        )
    }

    /// Remove `key`, returning the value it held.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails or the response is not a
    /// string or `null`.
    pub fn remove(&self, key: &str) -> AugmentResult<Option<String>> {
        call(
            self.remote.as_ref(),
            self.area.commands().remove_item,
            params([("key", json!(key))]),
        )
    }

    /// Remove every key.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails.
    pub fn clear(&self) -> AugmentResult<()> {
        send(self.remote.as_ref(), self.area.commands().clear, params([]))
    }

    /// Number of stored keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails or the response is not a
    /// non-negative integer.
    pub fn size(&self) -> AugmentResult<usize> {
        call(self.remote.as_ref(), self.area.commands().size, params([]))
    }
}

struct RemoteWebStorage {
    remote: Arc<dyn RemoteHandle>,
}

impl WebStorage for RemoteWebStorage {
    fn local_storage(&self) -> RemoteStorage {
        RemoteStorage {
            area: StorageArea::Local,
            remote: Arc::clone(&self.remote),
        }
    }

    fn session_storage(&self) -> RemoteStorage {
        RemoteStorage {
            area: StorageArea::Session,
            remote: Arc::clone(&self.remote),
        }
    }
}

fn build(remote: Arc<dyn RemoteHandle>) -> CapabilityImplementation {
    let storage: Arc<dyn WebStorage> = Arc::new(RemoteWebStorage { remote });
    CapabilityImplementation::new("WebStorage", storage)
}

/// Provider for [`WebStorage`], enabled by `webStorageEnabled`.
#[must_use]
pub fn web_storage() -> BuiltinProvider {
    BuiltinProvider::new(KEY, names::WEB_STORAGE_ENABLED, build)
}

//! HTML5 application cache status.

use std::fmt;
use std::sync::Arc;

use augmentor_core::{AugmentError, AugmentResult, CapabilityImplementation, RemoteHandle, names};

use crate::command::{call, params};
use crate::provider::BuiltinProvider;

pub(crate) const KEY: &str = "application_cache";

/// Status of the application cache, as reported by the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppCacheStatus {
    /// No cache attached.
    Uncached,
    /// Cache is up to date.
    Idle,
    /// Checking for an update.
    Checking,
    /// Downloading an update.
    Downloading,
    /// An update is ready to be swapped in.
    UpdateReady,
    /// The cache manifest is gone.
    Obsolete,
}

impl TryFrom<u64> for AppCacheStatus {
    type Error = AugmentError;

    fn try_from(code: u64) -> AugmentResult<Self> {
        match code {
            0 => Ok(Self::Uncached),
            1 => Ok(Self::Idle),
            2 => Ok(Self::Checking),
            3 => Ok(Self::Downloading),
            4 => Ok(Self::UpdateReady),
            5 => Ok(Self::Obsolete),
            other => Err(AugmentError::Serialization(format!(
                "unknown application cache status {other}"
            ))),
        }
    }
}

impl fmt::Display for AppCacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Uncached => "UNCACHED",
            Self::Idle => "IDLE",
            Self::Checking => "CHECKING",
            Self::Downloading => "DOWNLOADING",
            Self::UpdateReady => "UPDATE_READY",
            Self::Obsolete => "OBSOLETE",
        };
        f.write_str(label)
    }
}

/// Read the application cache status.
pub trait ApplicationCache: Send + Sync {
    /// Current status.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails or reports an unknown
    /// status code.
    fn status(&self) -> AugmentResult<AppCacheStatus>;
}

struct RemoteApplicationCache {
    remote: Arc<dyn RemoteHandle>,
}

impl ApplicationCache for RemoteApplicationCache {
    fn status(&self) -> AugmentResult<AppCacheStatus> {
        let code: u64 = call(self.remote.as_ref(), "getAppCacheStatus", params([]))?;
        AppCacheStatus::try_from(code)
    }
}

fn build(remote: Arc<dyn RemoteHandle>) -> CapabilityImplementation {
    let cache: Arc<dyn ApplicationCache> = Arc::new(RemoteApplicationCache { remote });
    CapabilityImplementation::new("ApplicationCache", cache)
}

/// Provider for [`ApplicationCache`], enabled by `applicationCacheEnabled`.
#[must_use]
pub fn application_cache() -> BuiltinProvider {
    BuiltinProvider::new(KEY, names::APPLICATION_CACHE_ENABLED, build)
}

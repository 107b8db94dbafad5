//! Forwarding helpers shared by the built-in implementations.

use augmentor_core::{AugmentError, AugmentResult, CommandParams, RemoteHandle};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::trace;

/// Build command parameters from name/value pairs.
pub(crate) fn params<const N: usize>(pairs: [(&str, Value); N]) -> CommandParams {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// Execute `command` and decode its response.
pub(crate) fn call<T: DeserializeOwned>(
    remote: &dyn RemoteHandle,
    command: &str,
    params: CommandParams,
) -> AugmentResult<T> {
    trace!(command, "forwarding command");
    let response = remote.execute(command, params)?;
    serde_json::from_value(response).map_err(|e| {
        AugmentError::Serialization(format!("unexpected response to {command}: {e}"))
    })
}

/// Execute `command`, ignoring its response.
pub(crate) fn send(
    remote: &dyn RemoteHandle,
    command: &str,
    params: CommandParams,
) -> AugmentResult<()> {
    trace!(command, "forwarding command");
    remote.execute(command, params).map(|_| ())
}

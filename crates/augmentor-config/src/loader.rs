//! Config loading.
//!
//! `load` runs these steps:
//! 1. Parse the embedded `defaults.toml` into the base tree
//! 2. Deep-merge the optional config file over it
//! 3. Apply `AUGMENTOR_*` env var fallbacks to fields the file left unset
//! 4. Deserialize the merged tree into [`AugmentorConfig`]
//! 5. Validate

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::path::Path;

use tracing::{debug, info};

use crate::env::{apply_env_fallbacks, collect_env_vars};
use crate::error::{ConfigError, ConfigResult};
use crate::merge::{ConfigLayer, FieldSources, deep_merge_tracking, record_leaves};
use crate::types::AugmentorConfig;
use crate::validate;

/// Embedded default configuration.
const DEFAULTS_TOML: &str = include_str!("defaults.toml");

/// Maximum allowed config file size (1 MiB).
const MAX_CONFIG_FILE_SIZE: usize = 1_048_576;

/// Load configuration from defaults, an optional file and the process
/// environment.
///
/// A `path` that does not exist is skipped, not an error.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file is unreadable, oversized or
/// malformed, if an env var cannot be coerced, or if the merged configuration
/// fails validation.
pub fn load(path: Option<&Path>) -> ConfigResult<AugmentorConfig> {
    load_with_env(path, &collect_env_vars())
}

/// Like [`load`], reading env vars from `env_vars` instead of the process.
///
/// # Errors
///
/// See [`load`].
pub fn load_with_env<S: BuildHasher>(
    path: Option<&Path>,
    env_vars: &HashMap<String, String, S>,
) -> ConfigResult<AugmentorConfig> {
    let overlay = match path {
        Some(path) => try_load_file(path)?.map(|value| (value, path.display().to_string())),
        None => None,
    };
    resolve(overlay, env_vars)
}

/// Load a config from a file, layered over the defaults but ignoring the
/// environment.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file is missing, unreadable, oversized,
/// malformed or fails validation.
pub fn load_file(path: &Path) -> ConfigResult<AugmentorConfig> {
    let content = read_bounded(path)?;
    let overlay = parse(&content, &path.display().to_string())?;
    resolve(Some((overlay, path.display().to_string())), &HashMap::new())
}

/// Parse configuration from a TOML string layered over the defaults,
/// ignoring the environment.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the string is malformed or the result fails
/// validation.
pub fn from_toml_str(content: &str) -> ConfigResult<AugmentorConfig> {
    let overlay = parse(content, "<inline config>")?;
    resolve(Some((overlay, "<inline config>".to_owned())), &HashMap::new())
}

fn resolve<S: BuildHasher>(
    overlay: Option<(toml::Value, String)>,
    env_vars: &HashMap<String, String, S>,
) -> ConfigResult<AugmentorConfig> {
    let mut merged = parse(DEFAULTS_TOML, "<embedded defaults>")?;
    let mut sources = FieldSources::new();
    record_leaves(&merged, "", ConfigLayer::Defaults, &mut sources);

    if let Some((overlay, origin)) = overlay {
        deep_merge_tracking(&mut merged, &overlay, "", ConfigLayer::File, &mut sources);
        info!(path = %origin, "loaded config file");
    }

    let env_count = apply_env_fallbacks(&mut merged, &mut sources, env_vars)?;
    if env_count > 0 {
        debug!(count = env_count, "applied environment variable fallbacks");
    }

    let config: AugmentorConfig =
        merged
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::ParseError {
                path: "<merged config>".to_owned(),
                source: e,
            })?;

    validate::validate(&config)?;
    Ok(config)
}

fn parse(content: &str, origin: &str) -> ConfigResult<toml::Value> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError {
        path: origin.to_owned(),
        source: e,
    })
}

/// Try to load a file, returning `None` if it doesn't exist.
fn try_load_file(path: &Path) -> ConfigResult<Option<toml::Value>> {
    match read_bounded(path) {
        Ok(content) => parse(&content, &path.display().to_string()).map(Some),
        Err(ConfigError::ReadError { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            debug!(path = %path.display(), "config file not found, skipping");
            Ok(None)
        },
        Err(e) => Err(e),
    }
}

/// Read a file in one go, then enforce the size limit.
fn read_bounded(path: &Path) -> ConfigResult<String> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    if content.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::ValidationError {
            field: path.display().to_string(),
            message: format!(
                "config file is {} bytes, exceeding the {MAX_CONFIG_FILE_SIZE} byte limit",
                content.len()
            ),
        });
    }

    Ok(content)
}

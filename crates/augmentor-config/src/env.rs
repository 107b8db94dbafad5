//! Environment variable fallbacks.
//!
//! Environment variables never override a config file. They only fill in
//! fields that still hold their embedded default.

use std::collections::HashMap;
use std::hash::BuildHasher;

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::merge::{ConfigLayer, FieldSources};

/// Environment variable for `logging.level`.
pub const LOG_LEVEL_VAR: &str = "AUGMENTOR_LOG_LEVEL";
/// Environment variable for `logging.format`.
pub const LOG_FORMAT_VAR: &str = "AUGMENTOR_LOG_FORMAT";
/// Environment variable for `builtins.disabled`, comma-separated.
pub const DISABLED_BUILTINS_VAR: &str = "AUGMENTOR_DISABLED_BUILTINS";
/// Environment variable for `discovery.enabled`.
pub const DISCOVERY_VAR: &str = "AUGMENTOR_DISCOVERY";

enum FieldKind {
    Text,
    Bool,
    List,
}

struct EnvMapping {
    var_name: &'static str,
    field_path: &'static str,
    kind: FieldKind,
}

const ENV_MAPPINGS: &[EnvMapping] = &[
    EnvMapping {
        var_name: LOG_LEVEL_VAR,
        field_path: "logging.level",
        kind: FieldKind::Text,
    },
    EnvMapping {
        var_name: LOG_FORMAT_VAR,
        field_path: "logging.format",
        kind: FieldKind::Text,
    },
    EnvMapping {
        var_name: DISABLED_BUILTINS_VAR,
        field_path: "builtins.disabled",
        kind: FieldKind::List,
    },
    EnvMapping {
        var_name: DISCOVERY_VAR,
        field_path: "discovery.enabled",
        kind: FieldKind::Bool,
    },
];

/// Apply environment variable fallbacks to fields no config file set.
///
/// Returns the number of variables applied.
///
/// # Errors
///
/// Returns [`ConfigError::EnvError`] if a boolean variable does not parse.
pub fn apply_env_fallbacks<S: BuildHasher>(
    merged: &mut toml::Value,
    sources: &mut FieldSources,
    env_vars: &HashMap<String, String, S>,
) -> ConfigResult<usize> {
    let mut count: usize = 0;

    for mapping in ENV_MAPPINGS {
        if sources
            .get(mapping.field_path)
            .is_some_and(|layer| *layer != ConfigLayer::Defaults)
        {
            continue;
        }

        let Some(raw) = env_vars.get(mapping.var_name) else {
            continue;
        };

        debug!(
            var = mapping.var_name,
            field = mapping.field_path,
            "applying env var fallback"
        );

        let value = coerce(mapping, raw)?;
        set_field(merged, mapping.field_path, value);
        sources.insert(mapping.field_path.to_owned(), ConfigLayer::Environment);
        count = count.saturating_add(1);
    }

    Ok(count)
}

fn coerce(mapping: &EnvMapping, raw: &str) -> ConfigResult<toml::Value> {
    match mapping.kind {
        FieldKind::Text => Ok(toml::Value::String(raw.trim().to_owned())),
        FieldKind::Bool => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(toml::Value::Boolean(true)),
            "0" | "false" | "no" | "off" => Ok(toml::Value::Boolean(false)),
            _ => Err(ConfigError::EnvError {
                var_name: mapping.var_name.to_owned(),
                message: format!("expected a boolean, got '{raw}'"),
            }),
        },
        FieldKind::List => Ok(toml::Value::Array(
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| toml::Value::String(item.to_owned()))
                .collect(),
        )),
    }
}

/// Set a dotted `path` in the tree, creating intermediate tables.
fn set_field(root: &mut toml::Value, path: &str, value: toml::Value) {
    let mut segments = path.split('.').peekable();
    let mut current = root;

    while let Some(segment) = segments.next() {
        let Some(table) = current.as_table_mut() else {
            return;
        };
        if segments.peek().is_none() {
            table.insert(segment.to_owned(), value);
            return;
        }
        current = table
            .entry(segment.to_owned())
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }
}

/// Collect all current environment variables into a map.
#[must_use]
pub fn collect_env_vars() -> HashMap<String, String> {
    std::env::vars().collect()
}

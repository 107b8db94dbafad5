//! Post-merge configuration validation.

use std::collections::HashSet;

use crate::error::{ConfigError, ConfigResult};
use crate::types::AugmentorConfig;

/// Accepted values for `logging.level`.
pub const VALID_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Accepted values for `logging.format`.
pub const VALID_FORMATS: [&str; 4] = ["pretty", "compact", "json", "full"];

/// Validate a fully merged and deserialized configuration.
///
/// Built-in keys are only checked for shape here. Whether a key names a real
/// built-in is checked by the engine, which owns the list.
///
/// # Errors
///
/// Returns the first validation error found.
pub fn validate(config: &AugmentorConfig) -> ConfigResult<()> {
    validate_builtins(config)?;
    validate_logging(config)?;
    Ok(())
}

fn validate_builtins(config: &AugmentorConfig) -> ConfigResult<()> {
    let mut seen = HashSet::new();
    for key in &config.builtins.disabled {
        if key.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: "builtins.disabled".to_owned(),
                message: "built-in keys must not be empty".to_owned(),
            });
        }
        if !seen.insert(key.as_str()) {
            return Err(ConfigError::ValidationError {
                field: "builtins.disabled".to_owned(),
                message: format!("built-in '{key}' is listed more than once"),
            });
        }
    }
    Ok(())
}

fn validate_logging(config: &AugmentorConfig) -> ConfigResult<()> {
    let logging = &config.logging;

    if !VALID_LEVELS.contains(&logging.level.as_str()) {
        return Err(ConfigError::ValidationError {
            field: "logging.level".to_owned(),
            message: format!(
                "unsupported log level '{}'; expected one of: {}",
                logging.level,
                VALID_LEVELS.join(", ")
            ),
        });
    }

    if !VALID_FORMATS.contains(&logging.format.as_str()) {
        return Err(ConfigError::ValidationError {
            field: "logging.format".to_owned(),
            message: format!(
                "unsupported log format '{}'; expected one of: {}",
                logging.format,
                VALID_FORMATS.join(", ")
            ),
        });
    }

    if logging.directives.iter().any(|d| d.trim().is_empty()) {
        return Err(ConfigError::ValidationError {
            field: "logging.directives".to_owned(),
            message: "directives must not be empty".to_owned(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(config: &AugmentorConfig, field: &str) {
        match validate(config) {
            Err(ConfigError::ValidationError { field: f, .. }) => assert_eq!(f, field),
            other => panic!("expected validation error on {field}, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate(&AugmentorConfig::default()).is_ok());
    }

    #[test]
    fn test_unknown_level() {
        let mut config = AugmentorConfig::default();
        config.logging.level = "verbose".to_owned();
        assert_invalid(&config, "logging.level");
    }

    #[test]
    fn test_unknown_format() {
        let mut config = AugmentorConfig::default();
        config.logging.format = "xml".to_owned();
        assert_invalid(&config, "logging.format");
    }

    #[test]
    fn test_blank_directive() {
        let mut config = AugmentorConfig::default();
        config.logging.directives = vec!["augmentor_engine=debug".to_owned(), " ".to_owned()];
        assert_invalid(&config, "logging.directives");
    }

    #[test]
    fn test_duplicate_disabled_builtin() {
        let mut config = AugmentorConfig::default();
        config.builtins.disabled = vec!["rotation".to_owned(), "rotation".to_owned()];
        assert_invalid(&config, "builtins.disabled");
    }

    #[test]
    fn test_empty_disabled_builtin() {
        let mut config = AugmentorConfig::default();
        config.builtins.disabled = vec![String::new()];
        assert_invalid(&config, "builtins.disabled");
    }
}

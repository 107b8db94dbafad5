//! Configuration types for the augmentation engine.
//!
//! Every struct implements [`Default`] with the same values as the embedded
//! `defaults.toml`, so a bare `[section]` header produces a working
//! configuration.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentorConfig {
    /// Which built-in providers seed the driver registry.
    pub builtins: BuiltinsSection,
    /// Plugin discovery at construction time.
    pub discovery: DiscoverySection,
    /// Logging level, format, and per-crate directives.
    pub logging: LoggingSection,
}

// ---------------------------------------------------------------------------
// BuiltinsSection
// ---------------------------------------------------------------------------

/// Built-in provider seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuiltinsSection {
    /// Seed built-ins at all.
    pub enabled: bool,
    /// Built-in keys to skip (e.g. `"rotation"`).
    pub disabled: Vec<String>,
}

impl BuiltinsSection {
    /// Whether the built-in with `key` should be seeded.
    #[must_use]
    pub fn is_enabled(&self, key: &str) -> bool {
        self.enabled && !self.disabled.iter().any(|d| d == key)
    }
}

impl Default for BuiltinsSection {
    fn default() -> Self {
        Self {
            enabled: true,
            disabled: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// DiscoverySection
// ---------------------------------------------------------------------------

/// Plugin discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoverySection {
    /// Register discovered providers into the driver registry.
    pub enabled: bool,
}

impl Default for DiscoverySection {
    fn default() -> Self {
        Self { enabled: true }
    }
}

// ---------------------------------------------------------------------------
// LoggingSection
// ---------------------------------------------------------------------------

/// Logging and tracing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Global log level filter (`"trace"`, `"debug"`, `"info"`, `"warn"`,
    /// `"error"`, `"off"`).
    pub level: String,
    /// Output format: `"pretty"`, `"compact"`, `"json"`, or `"full"`.
    pub format: String,
    /// Per-crate tracing directives (e.g. `["augmentor_registry=trace"]`).
    pub directives: Vec<String>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: "pretty".to_owned(),
            directives: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_sections_use_defaults() {
        let config: AugmentorConfig = toml::from_str("[builtins]\n[logging]\n").unwrap();
        assert_eq!(config, AugmentorConfig::default());
    }

    #[test]
    fn test_builtin_enabled() {
        let section = BuiltinsSection {
            enabled: true,
            disabled: vec!["rotation".to_owned()],
        };
        assert!(section.is_enabled("web_storage"));
        assert!(!section.is_enabled("rotation"));

        let off = BuiltinsSection {
            enabled: false,
            disabled: Vec::new(),
        };
        assert!(!off.is_enabled("web_storage"));
    }
}

//! Configuration for the Shepherd moderation engine.
//!
//! Maps directly to `shepherd.toml`. Every section is optional; omitted
//! sections take the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::policy::PolicyTables;
use crate::types::ModerationLevel;

/// Top-level Shepherd configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShepherdConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Moderation behaviour.
    #[serde(default)]
    pub moderation: ModerationConfig,
    /// Policy tables.
    #[serde(default)]
    pub policy: PolicyTables,
}

impl ShepherdConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `ShepherdError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::ShepherdError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General system settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level for the embedding application's subscriber: trace, debug,
    /// info, warn, error. The library only emits `tracing` events and never
    /// installs a subscriber, so this value is read by the host, not here.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Moderation behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationConfig {
    /// Level used by [`crate::ContentContext::from_defaults`].
    #[serde(default)]
    pub default_moderation_level: ModerationLevel,
    /// Emit an `info` event for every rejected piece of content.
    #[serde(default = "default_true")]
    pub log_moderation_events: bool,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            default_moderation_level: ModerationLevel::default(),
            log_moderation_events: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_true() -> bool { true }
fn default_log_level() -> String { "info".to_string() }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AgeRating;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = ShepherdConfig::from_toml("").unwrap();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.moderation.default_moderation_level, ModerationLevel::Moderate);
        assert!(config.moderation.log_moderation_events);
        assert_eq!(config.policy, PolicyTables::default());
    }

    #[test]
    fn partial_policy_override() {
        let config = ShepherdConfig::from_toml(
            r#"
            [moderation]
            default_moderation_level = "relaxed"
            log_moderation_events = false

            [policy.blocklist]
            scary = ["dragon", "giant"]

            [policy.violence_gates.children]
            max_violence_level = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.moderation.default_moderation_level, ModerationLevel::Relaxed);
        assert!(!config.moderation.log_moderation_events);
        assert_eq!(config.policy.blocklist.scary, vec!["dragon", "giant"]);
        // Untouched lists keep their defaults.
        assert!(config.policy.blocklist.profanity.contains(&"damn".to_string()));
        // A replaced table replaces the whole map.
        assert_eq!(config.policy.violence_gates.len(), 1);
        assert_eq!(
            config.policy.violence_gate(AgeRating::Children).unwrap().max_violence_level,
            2
        );
        assert!(config.policy.guideline(AgeRating::All).is_ok());
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = ShepherdConfig::from_toml("[moderation\n").unwrap_err();
        assert!(matches!(err, crate::ShepherdError::Config(_)));
    }
}

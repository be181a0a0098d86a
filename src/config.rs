//! Widget configuration
//!
//! Stored in `~/.config/incrementable/config.yaml`:
//!
//! ```yaml
//! step: 0.5
//! units: "px|em|rem|%|deg|s|ms"
//! colors: true
//! selection: anchor
//! multipliers:
//!   - keys: shift
//!     factor: 10
//!   - keys: ctrl
//!     factor: 0.1
//! default_multiplier: 1
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::increment::{GrammarError, TokenGrammar};
use crate::keymap::{parse_modifiers, KeyParseError};
use crate::widget::{MultiplierPolicy, MultiplierRule, Options, SelectionMode};

/// Errors raised while loading or applying a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error("invalid multiplier keys: {0}")]
    Keys(#[from] KeyParseError),
}

/// A `keys -> factor` multiplier entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplierConfig {
    /// Modifier combination, e.g. `"shift"` or `"ctrl+alt"`
    pub keys: String,
    pub factor: f64,
}

impl MultiplierConfig {
    fn new(keys: &str, factor: f64) -> Self {
        Self {
            keys: keys.to_string(),
            factor,
        }
    }
}

/// Widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncrementConfig {
    /// Overrides the field's `step` / `data-step` attributes
    pub step: Option<f64>,
    /// Unit alternation; enables unit-aware matching when set
    pub units: Option<String>,
    /// Step `#rgb` / `#rrggbb` colors
    pub colors: bool,
    pub selection: SelectionMode,
    /// Checked in order, first match wins
    pub multipliers: Vec<MultiplierConfig>,
    pub default_multiplier: f64,
}

impl Default for IncrementConfig {
    fn default() -> Self {
        Self {
            step: None,
            units: None,
            colors: true,
            selection: SelectionMode::default(),
            multipliers: vec![
                MultiplierConfig::new("shift", 10.0),
                MultiplierConfig::new("ctrl", 0.1),
            ],
            default_multiplier: 1.0,
        }
    }
}

impl IncrementConfig {
    /// Load config from the user config directory, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Build widget options, validating the unit grammar and modifier names
    pub fn options(&self) -> Result<Options, ConfigError> {
        let grammar = TokenGrammar::from_parts(self.units.as_deref(), self.colors)?;

        let rules = self
            .multipliers
            .iter()
            .map(|entry| Ok(MultiplierRule::new(parse_modifiers(&entry.keys)?, entry.factor)))
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Options {
            step: self.step,
            multiplier: MultiplierPolicy::rules(rules, self.default_multiplier),
            grammar,
            selection: self.selection,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::Modifiers;

    #[test]
    fn test_default_config() {
        let config = IncrementConfig::default();
        assert_eq!(config.step, None);
        assert!(config.colors);
        assert_eq!(config.multipliers.len(), 2);
        assert_eq!(config.default_multiplier, 1.0);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = IncrementConfig::from_yaml("step: 0.5\n").unwrap();
        assert_eq!(config.step, Some(0.5));
        assert!(config.colors);
        assert_eq!(config.multipliers, IncrementConfig::default().multipliers);
    }

    #[test]
    fn test_options_from_config() {
        let config = IncrementConfig::from_yaml(
            "units: px|em\nselection: token\nmultipliers:\n  - keys: alt\n    factor: 100\n",
        )
        .unwrap();
        let options = config.options().unwrap();

        assert_eq!(options.grammar.units(), Some("px|em"));
        assert_eq!(options.selection, SelectionMode::Token);
        assert_eq!(options.multiplier.factor(Modifiers::ALT), 100.0);
        assert_eq!(options.multiplier.factor(Modifiers::SHIFT), 1.0);
    }

    #[test]
    fn test_bad_units_is_error() {
        let config = IncrementConfig {
            units: Some("px|(".to_string()),
            ..IncrementConfig::default()
        };
        assert!(matches!(config.options(), Err(ConfigError::Grammar(_))));
    }

    #[test]
    fn test_bad_modifier_is_error() {
        let config = IncrementConfig {
            multipliers: vec![MultiplierConfig::new("hyper", 2.0)],
            ..IncrementConfig::default()
        };
        assert!(matches!(config.options(), Err(ConfigError::Keys(_))));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = IncrementConfig {
            step: Some(2.0),
            units: Some("px".to_string()),
            ..IncrementConfig::default()
        };
        let yaml = config.to_yaml().unwrap();
        assert_eq!(IncrementConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            IncrementConfig::from_yaml("step: [1, 2"),
            Err(ConfigError::Parse(_))
        ));
    }
}

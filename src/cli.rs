//! Command-line argument parsing for the headless field host
//!
//! Supports:
//! - Field text as an argument or on stdin
//! - Caret offset or `START:END` selection
//! - A sequence of key presses (`up`, `shift+down`, ...)
//! - Overriding step, units, and color stepping from the config file

use clap::Parser;
use std::path::PathBuf;

use crate::config::IncrementConfig;
use crate::field::Selection;
use crate::keymap::{parse_key_string, Keystroke};

/// Step the number or hex color under the caret
#[derive(Parser, Debug)]
#[command(
    name = "incrementable",
    version,
    about = "Step the number or hex color under the caret"
)]
pub struct CliArgs {
    /// Field text (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Caret char offset, or a selection as ANCHOR:HEAD
    #[arg(short, long, value_name = "OFFSET", default_value = "0")]
    pub caret: String,

    /// Key press to apply; repeat for a sequence (e.g. -k up -k shift+down)
    #[arg(short, long = "key", value_name = "KEY", default_value = "up")]
    pub keys: Vec<String>,

    /// Base step (overrides config)
    #[arg(long, value_name = "N")]
    pub step: Option<f64>,

    /// Unit alternation such as "px|em|%" (overrides config)
    #[arg(long, value_name = "UNITS")]
    pub units: Option<String>,

    /// Do not step hex colors
    #[arg(long)]
    pub no_colors: bool,

    /// Treat the text as multi-line content instead of an input value
    #[arg(short, long)]
    pub multiline: bool,

    /// Config file (default: ~/.config/incrementable/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print a JSON report instead of the resulting text
    #[arg(long)]
    pub json: bool,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    pub print_config: bool,
}

/// What a run should do, derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub text: Option<String>,
    pub selection: Selection,
    pub keys: Vec<Keystroke>,
    pub multiline: bool,
    pub json: bool,
    pub print_config: bool,
    pub config_path: Option<PathBuf>,
    overrides: Overrides,
}

#[derive(Debug, Clone, Default)]
struct Overrides {
    step: Option<f64>,
    units: Option<String>,
    no_colors: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        let selection = parse_caret(&self.caret)?;
        let keys = self
            .keys
            .iter()
            .map(|key| parse_key_string(key).map_err(|e| format!("Invalid key `{}`: {}", key, e)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RunConfig {
            text: self.text,
            selection,
            keys,
            multiline: self.multiline,
            json: self.json,
            print_config: self.print_config,
            config_path: self.config,
            overrides: Overrides {
                step: self.step,
                units: self.units,
                no_colors: self.no_colors,
            },
        })
    }
}

impl RunConfig {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply_overrides(&self, config: &mut IncrementConfig) {
        if let Some(step) = self.overrides.step {
            config.step = Some(step);
        }
        if let Some(units) = &self.overrides.units {
            config.units = Some(units.clone());
        }
        if self.overrides.no_colors {
            config.colors = false;
        }
    }
}

/// `8` is a caret, `4:6` an anchor/head selection
fn parse_caret(caret: &str) -> Result<Selection, String> {
    let offset = |s: &str| {
        s.trim()
            .parse::<usize>()
            .map_err(|_| format!("Invalid caret offset: {}", s))
    };

    match caret.split_once(':') {
        Some((anchor, head)) => Ok(Selection::new(offset(anchor)?, offset(head)?)),
        None => Ok(Selection::collapsed(offset(caret)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::Modifiers;

    fn args(caret: &str, keys: &[&str]) -> CliArgs {
        CliArgs {
            text: Some("width: 10px;".to_string()),
            caret: caret.to_string(),
            keys: keys.iter().map(|k| k.to_string()).collect(),
            step: None,
            units: None,
            no_colors: false,
            multiline: false,
            config: None,
            json: false,
            print_config: false,
        }
    }

    #[test]
    fn test_collapsed_caret() {
        let config = args("8", &["up"]).into_config().unwrap();
        assert_eq!(config.selection, Selection::collapsed(8));
        assert_eq!(config.keys, vec![Keystroke::up(Modifiers::NONE)]);
    }

    #[test]
    fn test_selection_caret() {
        let config = args("11:7", &["shift+down"]).into_config().unwrap();
        assert_eq!(config.selection, Selection::new(11, 7));
        assert_eq!(config.keys, vec![Keystroke::down(Modifiers::SHIFT)]);
    }

    #[test]
    fn test_invalid_caret() {
        assert!(args("x", &["up"]).into_config().is_err());
        assert!(args("1:", &["up"]).into_config().is_err());
    }

    #[test]
    fn test_invalid_key() {
        let err = args("0", &["shift+warp"]).into_config().unwrap_err();
        assert!(err.contains("shift+warp"));
    }

    #[test]
    fn test_overrides() {
        let mut cli = args("0", &["up"]);
        cli.step = Some(0.25);
        cli.units = Some("px".to_string());
        cli.no_colors = true;

        let run = cli.into_config().unwrap();
        let mut config = IncrementConfig::default();
        run.apply_overrides(&mut config);

        assert_eq!(config.step, Some(0.25));
        assert_eq!(config.units.as_deref(), Some("px"));
        assert!(!config.colors);
    }
}

//! Headless host for incrementable fields.
//!
//! ```text
//! $ incrementable "width: 10px;" --caret 8 -k up -k shift+up
//! width: 21px;
//! ```

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use incrementable::cli::{CliArgs, RunConfig};
use incrementable::field::{FieldBuffer, TextField};
use incrementable::host::{replay, Report};
use incrementable::{IncrementConfig, Incrementable};

fn main() -> Result<()> {
    incrementable::tracing::init();

    let run = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    let mut config = match &run.config_path {
        Some(path) => IncrementConfig::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => IncrementConfig::load(),
    };
    run.apply_overrides(&mut config);

    if run.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    let text = match &run.text {
        Some(text) => text.clone(),
        None => read_stdin()?,
    };

    let report = if run.multiline {
        session(TextField::content(&text), &config, &run)?
    } else {
        session(TextField::input(&text), &config, &run)?
    };

    if run.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.text);
    }

    Ok(())
}

fn session<B: FieldBuffer>(
    mut field: TextField<B>,
    config: &IncrementConfig,
    run: &RunConfig,
) -> Result<Report> {
    field.set_selection(run.selection);
    let mut widget = Incrementable::with_config(field, config).context("invalid configuration")?;
    Ok(replay(&mut widget, &run.keys))
}

/// Read the field text from stdin, dropping one trailing newline
fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("reading field text from stdin")?;

    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

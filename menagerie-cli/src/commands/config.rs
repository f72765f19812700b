//! `menagerie config`: print the effective configuration.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use menagerie_core::config::{self, API_KEY_FALLBACK_VAR, API_KEY_VAR};

use super::load_settings;
use crate::commands::generate::DEFAULT_OUTPUT;

/// Arguments for `menagerie config`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct EffectiveConfig {
    settings_file: String,
    settings_file_exists: bool,
    endpoint: String,
    timeout_secs: u64,
    template: String,
    output: String,
    api_key: Option<String>,
}

impl ConfigArgs {
    pub fn run(self) -> Result<()> {
        let path = config::settings_path().context("failed to locate settings file")?;
        let settings = load_settings()?;

        let effective = EffectiveConfig {
            settings_file_exists: path.exists(),
            settings_file: path.display().to_string(),
            endpoint: settings.endpoint().to_owned(),
            timeout_secs: settings.timeout().as_secs(),
            template: settings
                .template
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(bundled)".to_owned()),
            output: settings
                .output
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| DEFAULT_OUTPUT.to_owned()),
            api_key: config::resolve_api_key().ok().map(|k| k.redacted()),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&effective).context("failed to serialize config")?
            );
            return Ok(());
        }

        let file_note = if effective.settings_file_exists {
            String::new()
        } else {
            " (not present, using defaults)".bright_black().to_string()
        };
        println!("{:<10} {}{}", "settings".bold(), effective.settings_file, file_note);
        println!("{:<10} {}", "endpoint".bold(), effective.endpoint);
        println!("{:<10} {}s", "timeout".bold(), effective.timeout_secs);
        println!("{:<10} {}", "template".bold(), effective.template);
        println!("{:<10} {}", "output".bold(), effective.output);
        match &effective.api_key {
            Some(hint) => println!("{:<10} {}", "api key".bold(), hint),
            None => println!(
                "{:<10} {} (set {API_KEY_VAR} or {API_KEY_FALLBACK_VAR})",
                "api key".bold(),
                "missing".red()
            ),
        }
        Ok(())
    }
}

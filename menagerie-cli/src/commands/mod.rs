//! Subcommands plus the pieces they share: settings, API flags, the query prompt.

pub mod config;
pub mod generate;
pub mod skin_types;

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;

use menagerie_core::{config as core_config, ApiConfig, QueryResult, QueryTerm, Settings};
use menagerie_fetch::Fetcher;

/// Flags that override the settings file for the API request.
#[derive(Args, Debug)]
pub struct ApiArgs {
    /// Animals lookup endpoint URL.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl ApiArgs {
    /// Resolve the API key and merge flags over `settings`.
    pub fn resolve(&self, settings: &Settings) -> Result<ApiConfig> {
        let key = core_config::resolve_api_key()?;
        let mut api = settings.api_config(key);
        if let Some(endpoint) = &self.endpoint {
            api = api.with_endpoint(endpoint.clone());
        }
        if let Some(secs) = self.timeout {
            api = api.with_timeout(Duration::from_secs(secs));
        }
        Ok(api)
    }
}

pub(crate) fn load_settings() -> Result<Settings> {
    core_config::load_settings().context("failed to load settings")
}

/// Use `name` if given, otherwise ask on stdin.
pub(crate) fn query_or_prompt(name: Option<String>) -> Result<QueryTerm> {
    let raw = match name {
        Some(name) => name,
        None => {
            print!("Enter a name of an animal: ");
            io::stdout().flush().context("failed to flush stdout")?;
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("failed to read animal name from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_owned()
        }
    };
    let query = QueryTerm::from(raw);
    if query.is_blank() {
        bail!("animal name must not be empty");
    }
    Ok(query)
}

/// Fetch with the context every command reports on failure.
pub(crate) fn fetch_records(api: ApiConfig, query: &QueryTerm) -> Result<QueryResult> {
    Fetcher::new(api)
        .fetch(query)
        .with_context(|| format!("failed to fetch animals for '{query}'"))
}

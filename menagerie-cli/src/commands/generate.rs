//! `menagerie generate`: fetch animals and write the HTML page.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use menagerie_core::{filter_by_skin, skin_type_counts, QueryResult, SkinFilter};
use menagerie_renderer::{card_count, RenderOptions, Renderer, Template};

use super::{fetch_records, load_settings, query_or_prompt, ApiArgs};
use crate::output;

/// Output file used when neither the flag nor the settings name one.
pub const DEFAULT_OUTPUT: &str = "animals.html";

/// Arguments for `menagerie generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Animal name to search for; prompted for when omitted.
    pub name: Option<String>,

    /// Page template containing `__REPLACE_ANIMALS_INFO__` (defaults to the bundled page).
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Where to write the page.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Only show one skin type: a name, its number in `skin-types`, or `all`.
    #[arg(long, value_name = "CHOICE")]
    pub skin_type: Option<String>,

    /// Insert record text without HTML escaping.
    #[arg(long)]
    pub no_escape: bool,

    #[command(flatten)]
    pub api: ApiArgs,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let settings = load_settings()?;
        let query = query_or_prompt(self.name)?;
        let api = self.api.resolve(&settings)?;

        // Reject a bad template before spending a request on it.
        let template = match self.template.or_else(|| settings.template.clone()) {
            Some(path) => Template::load(&path)
                .with_context(|| format!("failed to load template {}", path.display()))?,
            None => Template::embedded(),
        };
        template.validate().context("unusable page template")?;

        let records = fetch_records(api, &query)?;
        let records = match self.skin_type.as_deref() {
            Some(choice) => apply_skin_choice(records, choice),
            None => records,
        };

        let renderer = Renderer::with_options(RenderOptions {
            escape_html: !self.no_escape,
        })
        .context("failed to initialise renderer")?;
        let html = renderer
            .render(&records, &template, &query)
            .context("failed to render page")?;

        let out = self
            .output
            .or(settings.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        output::write_atomic(&out, &html)?;

        if records.is_empty() {
            println!(
                "{} No animals found for '{query}'; wrote the empty page to {}.",
                "!".yellow(),
                out.display()
            );
        } else {
            println!(
                "{} Website was successfully generated to the file {} ({} animals).",
                "✓".green(),
                out.display(),
                card_count(&records)
            );
        }
        Ok(())
    }
}

/// Narrow `records` by a skin-type choice; unknown choices keep everything.
fn apply_skin_choice(records: QueryResult, choice: &str) -> QueryResult {
    let counts = skin_type_counts(&records);
    match SkinFilter::resolve(choice, &counts) {
        Some(filter) => filter_by_skin(records, &filter),
        None => {
            tracing::warn!(choice, "unknown skin type choice");
            eprintln!(
                "{} No skin type matches '{choice}'. Showing all animals.",
                "!".yellow()
            );
            records
        }
    }
}

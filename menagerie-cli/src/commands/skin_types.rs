//! `menagerie skin-types`: list the skin types present in a lookup.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use menagerie_core::skin_type_counts;

use super::{fetch_records, load_settings, query_or_prompt, ApiArgs};

/// Arguments for `menagerie skin-types`.
#[derive(Args, Debug)]
pub struct SkinTypesArgs {
    /// Animal name to search for; prompted for when omitted.
    pub name: Option<String>,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub api: ApiArgs,
}

#[derive(Tabled)]
struct SkinRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "skin type")]
    skin_type: String,
    #[tabled(rename = "animals")]
    count: usize,
}

impl SkinTypesArgs {
    pub fn run(self) -> Result<()> {
        let settings = load_settings()?;
        let query = query_or_prompt(self.name)?;
        let api = self.api.resolve(&settings)?;
        let records = fetch_records(api, &query)?;
        let counts = skin_type_counts(&records);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&counts).context("failed to serialize skin types")?
            );
            return Ok(());
        }

        if counts.is_empty() {
            println!("No animals found for '{query}'.");
            return Ok(());
        }

        println!("{}", format!("Skin types for '{query}'").bold());
        let rows: Vec<SkinRow> = counts
            .into_iter()
            .enumerate()
            .map(|(i, c)| SkinRow {
                index: i + 1,
                skin_type: c.skin_type,
                count: c.count,
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        println!("Pass a name or number to `menagerie generate --skin-type`.");
        Ok(())
    }
}

//! Menagerie: build a static animal page from an online lookup API.
//!
//! # Usage
//!
//! ```text
//! menagerie generate [NAME] [--template PATH] [--output PATH] [--skin-type CHOICE] [--no-escape]
//! menagerie skin-types [NAME] [--json]
//! menagerie config
//! ```
//!
//! The API key is read from `API_NINJAS_KEY` (fallback `API_KEY`), either in
//! the environment or a `.env` file.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{config::ConfigArgs, generate::GenerateArgs, skin_types::SkinTypesArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "menagerie",
    version,
    about = "Generate a static HTML page of animals fetched from an online API",
    long_about = None,
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch animals by name and write the HTML page.
    Generate(GenerateArgs),

    /// Fetch animals by name and list their skin types.
    SkinTypes(SkinTypesArgs),

    /// Show the effective configuration.
    Config(ConfigArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    // A missing .env is normal; real variables still apply.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate(args) => args.run(),
        Commands::SkinTypes(args) => args.run(),
        Commands::Config(args) => args.run(),
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

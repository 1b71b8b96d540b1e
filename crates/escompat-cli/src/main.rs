//! escompat CLI - ECMAScript feature compat checker
//!
//! Usage:
//!   escompat check --config escompat.yaml            # Report unsupported features
//!   escompat check --config escompat.yaml -f json    # Machine-readable verdict
//!   escompat targets --config escompat.yaml          # Show resolved targets
//!   escompat features                                # List the built-in catalog

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use escompat_catalog::Catalog;
use escompat_cli::{check, render_text};
use escompat_config::EscompatConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "escompat")]
#[command(about = "Find language features unsupported by your target runtimes")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the catalog against the configured targets
    Check {
        /// Project config file
        #[arg(short, long, default_value = "escompat.yaml")]
        config: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Show the targets the config resolves to
    Targets {
        #[arg(short, long, default_value = "escompat.yaml")]
        config: PathBuf,
    },

    /// List catalog features
    Features {
        /// Catalog YAML (built-in catalog if omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Check { config, format } => {
            let config = EscompatConfig::load(&config)?;
            let verdict = check(&config)?;

            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&verdict)?),
                Format::Text => print!("{}", render_text(&verdict)),
            }

            if verdict.is_blocked() {
                return Ok(ExitCode::from(1));
            }
        }

        Commands::Targets { config } => {
            let config = EscompatConfig::load(&config)?;
            for target in config.targets()? {
                println!("{}", target);
            }
        }

        Commands::Features { catalog } => {
            let catalog = match catalog {
                Some(path) => Catalog::from_path(path)?,
                None => Catalog::builtin()?,
            };
            for entry in catalog.entries() {
                let edition = entry.edition.map(|e| e.to_string()).unwrap_or_default();
                println!(
                    "{:<6} {:<40} {}",
                    edition,
                    entry.id,
                    entry.description.as_deref().unwrap_or("")
                );
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

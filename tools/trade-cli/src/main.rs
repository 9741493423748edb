//! Dynasty Trade CLI
//!
//! Loads the trade value table and lets a user build both sides of a trade,
//! either interactively or in a single `evaluate` call.

mod commands;
mod interactive;
mod logging;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use trade_evaluator::{EvaluatorConfig, Team, TradeEvaluator, TradeSession, ValuationMode};

use interactive::InteractiveCli;

#[derive(Parser)]
#[command(name = "trade-cli")]
#[command(about = "Dynasty trade analyzer - compare the value each side gives up")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the trade value CSV (overrides configuration)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// League format: 1qb or sf (overrides configuration)
    #[arg(short, long)]
    mode: Option<ValuationMode>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print summaries as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a trade interactively (default)
    Interactive,

    /// Evaluate a trade given on the command line
    Evaluate {
        /// Asset label for Team A (repeatable)
        #[arg(short = 'a', long = "team-a")]
        team_a: Vec<String>,

        /// Asset label for Team B (repeatable)
        #[arg(short = 'b', long = "team-b")]
        team_b: Vec<String>,
    },

    /// Search the catalog by partial label
    Search {
        /// Text to look for
        query: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        EvaluatorConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(catalog) = cli.catalog {
        config.data.catalog_path = catalog;
    }
    if let Some(mode) = cli.mode {
        config.valuation.default_mode = mode;
    }

    logging::initialize_logging(&config.logging.level, &config.logging.format)?;
    info!("Starting trade-cli v{}", env!("CARGO_PKG_VERSION"));

    let evaluator = Arc::new(TradeEvaluator::from_config(&config).with_context(|| {
        format!("Failed to load trade values from {:?}", config.data.catalog_path)
    })?);
    let mut session = TradeSession::new(evaluator, config.valuation.default_mode);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => InteractiveCli::new(session, cli.json).run()?,
        Commands::Evaluate { team_a, team_b } => {
            add_all(&mut session, Team::A, &team_a);
            add_all(&mut session, Team::B, &team_b);
            interactive::print_summary(&session.summary(), cli.json)?;
        }
        Commands::Search { query } => {
            render::print_assets(&session.evaluator().catalog().search(&query));
        }
    }

    Ok(())
}

fn add_all(session: &mut TradeSession, team: Team, labels: &[String]) {
    for label in labels {
        if !session.add(team, label) {
            eprintln!("⚠️ Ignoring unknown or repeated asset for {team}: {label}");
        }
    }
}

//! Fixture CLI
//!
//! Generates season fixtures from a JSON request file and inspects the
//! built-in finals formats.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use fixture_core::finals::PRESETS;
use fixture_core::{generate_season, GenerateRequest, Violation};

#[derive(Parser)]
#[command(name = "fixture_cli")]
#[command(about = "Generate and validate season fixtures", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a season from a JSON request file
    Generate {
        /// Input request JSON path
        #[arg(long)]
        r#in: PathBuf,

        /// Output season JSON path; prints a summary when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List the built-in finals formats
    Formats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Generate { r#in, out } => generate(&r#in, out.as_deref()),
        Commands::Formats => {
            for format in PRESETS.iter() {
                println!(
                    "{:<18} {:>2} teams, {} weeks{}",
                    format.id,
                    format.qualifying_teams,
                    format.weeks.len(),
                    if format.round_robin { " (round robin)" } else { "" }
                );
            }
            Ok(())
        }
    }
}

fn generate(input: &std::path::Path, output: Option<&std::path::Path>) -> Result<()> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("reading request from {}", input.display()))?;
    let request: GenerateRequest =
        serde_json::from_str(&raw).context("parsing generation request")?;

    let (season, violations) = generate_season(&request)?;
    report_violations(&violations);

    match output {
        Some(path) => {
            let json = serde_json::to_string_pretty(&season)?;
            std::fs::write(path, json)
                .with_context(|| format!("writing season to {}", path.display()))?;
            println!("Season {} written to {}", season.year, path.display());
        }
        None => {
            for round in &season.rounds {
                let byes = if round.byes.is_empty() {
                    String::new()
                } else {
                    format!("  (byes: {:?})", round.byes)
                };
                println!("{} - {} fixtures{}", round.name, round.fixtures.len(), byes);
                for fixture in &round.fixtures {
                    let slot = fixture
                        .slot
                        .as_ref()
                        .map(|s| s.label.clone())
                        .unwrap_or_else(|| "unscheduled".to_string());
                    let tag = fixture
                        .blockbuster
                        .as_deref()
                        .map(|n| format!("  [{n}]"))
                        .unwrap_or_default();
                    println!(
                        "  {:>3} v {:<3} at {:<20} {}{}",
                        fixture.home, fixture.away, fixture.venue, slot, tag
                    );
                }
            }
        }
    }
    Ok(())
}

fn report_violations(violations: &[Violation]) {
    if violations.is_empty() {
        log::info!("fixture validated clean");
        return;
    }
    for violation in violations {
        match violation.round {
            Some(round) => log::warn!("round {}: {}", round, violation.message),
            None => log::warn!("{}", violation.message),
        }
    }
}

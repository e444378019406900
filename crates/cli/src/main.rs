//! CS Balancer CLI - Finds the agent that would serve the most customers

mod logging;
mod roster_file;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use cs_balancer_core::domain::{AgentId, MatchCount, Score};
use cs_balancer_core::{AssignmentReport, AssignmentService, Capacity, Outcome};
use logging::LogFormat;
use roster_file::JsonFileRoster;
use std::path::PathBuf;
use std::sync::Arc;
use tabled::{Table, Tabled};
use tracing::info;

#[derive(Parser)]
#[command(name = "cs-balancer")]
#[command(about = "Assign customers to customer-service agents by experience score", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log output format
    #[arg(long, env = "BALANCER_LOG_FORMAT", value_enum, default_value = "pretty", global = true)]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the balancer and print the winning agent
    Assign {
        /// Roster JSON file (agents, customers, away_agent_ids)
        #[arg(short, long, env = "BALANCER_INPUT")]
        input: PathBuf,

        /// Result format
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Validate the away list against the roster size
    Check {
        /// Roster JSON file (agents, customers, away_agent_ids)
        #[arg(short, long, env = "BALANCER_INPUT")]
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "agent")]
    agent_id: AgentId,
    score: Score,
    customers: usize,
}

fn match_rows(matches: &MatchCount) -> Vec<MatchRow> {
    matches
        .iter()
        .map(|m| MatchRow {
            agent_id: m.agent_id,
            score: m.score,
            customers: m.customers,
        })
        .collect()
}

fn print_report(report: &AssignmentReport) {
    match report.outcome {
        Outcome::Winner {
            agent_id,
            customers,
        } => println!(
            "{} agent {} serves {} customers",
            "✓".green().bold(),
            agent_id.to_string().bold(),
            customers
        ),
        Outcome::Tie { customers, agents } => println!(
            "{} tie: {} agents serve {} customers each (result {})",
            "=".yellow().bold(),
            agents,
            customers,
            report.winner_id
        ),
    }
    println!();

    println!("{}", Table::new(match_rows(&report.matches)));
    println!();

    println!(
        "  {} {}/{} (max away {})",
        "Available:".bold(),
        report.available_agents,
        report.total_agents,
        report.max_away
    );
    println!(
        "  {} {} of {}",
        "Unmatched:".bold(),
        report.unmatched_customers,
        report.customers
    );
}

fn print_capacity(capacity: &Capacity) {
    println!("{}", "✓ Roster is valid".green().bold());
    println!();
    println!("  {} {}", "Agents:".bold(), capacity.total_agents);
    println!(
        "  {} {} (max {})",
        "Away:".bold(),
        capacity.away_agents,
        capacity.max_away
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_format)?;

    info!("CS Balancer v{} starting...", cs_balancer_core::VERSION);

    match cli.command {
        Commands::Assign { input, output } => {
            let service = AssignmentService::new(Arc::new(JsonFileRoster::new(&input)));
            let report = service
                .assign()
                .with_context(|| format!("Failed to balance roster {}", input.display()))?;

            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Table => print_report(&report),
            }
        }

        Commands::Check { input } => {
            let service = AssignmentService::new(Arc::new(JsonFileRoster::new(&input)));
            let capacity = service
                .check()
                .with_context(|| format!("Invalid roster {}", input.display()))?;

            print_capacity(&capacity);
        }
    }

    Ok(())
}

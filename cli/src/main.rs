mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use crate::commands::{cmd_activities, cmd_energy, cmd_foods, cmd_ration};
use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "kibble",
    version,
    about = "A daily ration calculator for dogs",
    long_about = "\n\n  ██╗  ██╗██╗██████╗ ██████╗ ██╗     ███████╗
  ██║ ██╔╝██║██╔══██╗██╔══██╗██║     ██╔════╝
  █████╔╝ ██║██████╔╝██████╔╝██║     █████╗
  ██╔═██╗ ██║██╔══██╗██╔══██╗██║     ██╔══╝
  ██║  ██╗██║██████╔╝██████╔╝███████╗███████╗
  ╚═╝  ╚═╝╚═╝╚═════╝ ╚═════╝ ╚══════╝╚══════╝
        feed them right.
"
)]
struct Cli {
    /// Directory holding the reference data files (default: per-user data
    /// directory, falling back to the built-in tables)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the daily energy requirement from weight and activity level
    Energy {
        /// Body weight in kilograms
        weight_kg: f64,
        /// Activity level (id or name, e.g. "neutered adult")
        #[arg(short, long)]
        activity: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare a dry food against the daily requirement
    Ration {
        /// Body weight in kilograms
        weight_kg: f64,
        /// Activity level (id or name)
        #[arg(short, long)]
        activity: String,
        /// Dry food (id or name)
        #[arg(short, long)]
        food: Option<String>,
        /// Feeding weight in grams per day
        #[arg(short, long, default_value = "0")]
        grams: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the dry-food table
    Foods {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the activity-level table
    Activities {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.data_dir)?;
    let data = config.reference_data()?;

    match cli.command {
        Commands::Energy {
            weight_kg,
            activity,
            json,
        } => cmd_energy(&data, weight_kg, &activity, json),
        Commands::Ration {
            weight_kg,
            activity,
            food,
            grams,
            json,
        } => cmd_ration(&data, weight_kg, &activity, food.as_deref(), grams, json),
        Commands::Foods { json } => cmd_foods(&data, json),
        Commands::Activities { json } => cmd_activities(&data, json),
    }
}

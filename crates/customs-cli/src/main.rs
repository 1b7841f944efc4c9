mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::alcohol::AlcoholArgs;
use commands::batch::BatchArgs;
use commands::rates::RatesArgs;
use commands::vehicle::VehicleArgs;

/// Customs duty calculations for alcohol and motor vehicle imports
#[derive(Parser)]
#[command(
    name = "customs",
    version,
    about = "Customs duty calculations for alcohol and motor vehicle imports",
    long_about = "A CLI for calculating fully itemized landed costs under the \
                  customs tariff schedule with decimal precision. Supports \
                  alcohol and vehicle declarations, batch files, concession \
                  handling, and compliance warnings."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate duties, excise, VAT, and fees for an alcohol shipment
    Alcohol(AlcoholArgs),
    /// Calculate duties, levies, VAT, and fees for a vehicle import
    Vehicle(VehicleArgs),
    /// Calculate a batch of declarations from a JSON file or stdin
    Batch(BatchArgs),
    /// Print the rate schedule currently in force
    Rates(RatesArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Alcohol(args) => commands::alcohol::run_alcohol(args),
        Commands::Vehicle(args) => commands::vehicle::run_vehicle(args),
        Commands::Batch(args) => commands::batch::run_batch(args),
        Commands::Rates(args) => commands::rates::run_rates(args),
        Commands::Version => {
            println!("customs {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

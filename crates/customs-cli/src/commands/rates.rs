use clap::Args;
use serde_json::Value;

use crate::commands::load_engine;

/// Arguments for the rates query
#[derive(Args)]
pub struct RatesArgs {
    /// Path to an alternative rate schedule JSON file
    #[arg(long)]
    pub schedule: Option<String>,
}

/// Present the rate schedule currently in force: tier tables, VAT rate,
/// fee parameters, concession rules, and warning thresholds.
pub fn run_rates(args: RatesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let engine = load_engine(&args.schedule)?;
    Ok(serde_json::to_value(engine.schedule())?)
}

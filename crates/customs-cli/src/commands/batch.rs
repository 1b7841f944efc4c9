use clap::Args;
use serde_json::Value;

use customs_core::Declaration;

use crate::commands::load_engine;
use crate::input;

/// Arguments for a batch calculation over a JSON array of declarations
#[derive(Args)]
pub struct BatchArgs {
    /// Path to a JSON file holding an array of declarations
    #[arg(long)]
    pub input: Option<String>,

    /// Path to an alternative rate schedule JSON file
    #[arg(long)]
    pub schedule: Option<String>,
}

pub fn run_batch(args: BatchArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let declarations: Vec<Declaration> = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin_json()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input is required (or pipe a JSON array to stdin)".into());
    };

    let engine = load_engine(&args.schedule)?;
    let result = engine.calculate_batch(&declarations)?;
    Ok(serde_json::to_value(result)?)
}

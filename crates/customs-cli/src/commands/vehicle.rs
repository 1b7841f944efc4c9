use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use customs_core::{CommodityCategory, Declaration, VehicleType};

use crate::commands::load_engine;
use crate::input;

/// Arguments for a vehicle duty calculation
#[derive(Args)]
pub struct VehicleArgs {
    /// Vehicle description, e.g. "Toyota Corolla"
    #[arg(long)]
    pub product: Option<String>,

    /// Vehicle powertrain / use classification
    #[arg(long, value_enum)]
    pub kind: Option<VehicleKind>,

    /// Cost, insurance, and freight value in USD
    #[arg(long)]
    pub cif_value: Option<Decimal>,

    /// Engine displacement in cubic centimetres (combustion vehicles)
    #[arg(long)]
    pub engine_cc: Option<u32>,

    /// Model year
    #[arg(long)]
    pub year: Option<i32>,

    /// Country of origin
    #[arg(long, default_value = "Unknown")]
    pub origin: String,

    /// Claim the first-time owner duty reduction
    #[arg(long)]
    pub first_time_owner: bool,

    /// Claim the returning resident rate
    #[arg(long)]
    pub returning_resident: bool,

    /// Claim the disability exemption
    #[arg(long)]
    pub disability_exemption: bool,

    /// Declare the vehicle as a certified antique
    #[arg(long)]
    pub antique: bool,

    /// Number of used tires shipped with the vehicle
    #[arg(long, default_value = "0")]
    pub used_tires: u32,

    /// Path to a JSON declaration file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Path to an alternative rate schedule JSON file
    #[arg(long)]
    pub schedule: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum VehicleKind {
    Electric,
    Hybrid,
    Gasoline,
    Diesel,
    Commercial,
}

impl From<VehicleKind> for VehicleType {
    fn from(kind: VehicleKind) -> Self {
        match kind {
            VehicleKind::Electric => VehicleType::Electric,
            VehicleKind::Hybrid => VehicleType::Hybrid,
            VehicleKind::Gasoline => VehicleType::Gasoline,
            VehicleKind::Diesel => VehicleType::Diesel,
            VehicleKind::Commercial => VehicleType::Commercial,
        }
    }
}

pub fn run_vehicle(args: VehicleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let declaration: Declaration = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin_json()? {
        serde_json::from_value(data)?
    } else {
        Declaration {
            product: args
                .product
                .clone()
                .ok_or("--product is required (or provide --input)")?,
            category: CommodityCategory::Vehicle(
                args.kind.ok_or("--kind is required (or provide --input)")?.into(),
            ),
            cif_value: args
                .cif_value
                .ok_or("--cif-value is required (or provide --input)")?,
            country_of_origin: args.origin.clone(),
            volume_ml_per_unit: None,
            strength_pct: None,
            quantity: None,
            engine_size_cc: args.engine_cc,
            model_year: Some(args.year.ok_or("--year is required (or provide --input)")?),
            has_liquor_license: false,
            is_first_time_owner: args.first_time_owner,
            is_returning_resident: args.returning_resident,
            has_disability_exemption: args.disability_exemption,
            is_antique: args.antique,
            used_tire_count: args.used_tires,
        }
    };

    let engine = load_engine(&args.schedule)?;
    let result = engine.calculate(&declaration)?;
    Ok(serde_json::to_value(result)?)
}

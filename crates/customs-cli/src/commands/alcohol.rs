use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use customs_core::{AlcoholType, CommodityCategory, Declaration};

use crate::commands::load_engine;
use crate::input;

/// Arguments for an alcohol duty calculation
#[derive(Args)]
pub struct AlcoholArgs {
    /// Product description, e.g. "Bacardi Superior Rum"
    #[arg(long)]
    pub product: Option<String>,

    /// Alcohol sub-type
    #[arg(long, value_enum)]
    pub kind: Option<AlcoholKind>,

    /// Volume per container in millilitres
    #[arg(long)]
    pub volume_ml: Option<Decimal>,

    /// Alcohol by volume, percent (e.g. 40 for 40% ABV)
    #[arg(long)]
    pub strength: Option<Decimal>,

    /// Number of containers
    #[arg(long)]
    pub quantity: Option<u32>,

    /// Cost, insurance, and freight value in USD
    #[arg(long)]
    pub cif_value: Option<Decimal>,

    /// Country of origin
    #[arg(long, default_value = "Unknown")]
    pub origin: String,

    /// Importer holds a liquor license
    #[arg(long)]
    pub liquor_license: bool,

    /// Path to a JSON declaration file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Path to an alternative rate schedule JSON file
    #[arg(long)]
    pub schedule: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AlcoholKind {
    Wine,
    Beer,
    Ale,
    Stout,
    Spirits,
    Liqueur,
    Other,
}

impl From<AlcoholKind> for AlcoholType {
    fn from(kind: AlcoholKind) -> Self {
        match kind {
            AlcoholKind::Wine => AlcoholType::Wine,
            AlcoholKind::Beer => AlcoholType::Beer,
            AlcoholKind::Ale => AlcoholType::Ale,
            AlcoholKind::Stout => AlcoholType::Stout,
            AlcoholKind::Spirits => AlcoholType::Spirits,
            AlcoholKind::Liqueur => AlcoholType::Liqueur,
            AlcoholKind::Other => AlcoholType::Other,
        }
    }
}

pub fn run_alcohol(args: AlcoholArgs) -> Result<Value, Box<dyn std::error::Error>> {
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
            category: CommodityCategory::Alcohol(
                args.kind.ok_or("--kind is required (or provide --input)")?.into(),
            ),
            cif_value: args
                .cif_value
                .ok_or("--cif-value is required (or provide --input)")?,
            country_of_origin: args.origin.clone(),
            volume_ml_per_unit: Some(
                args.volume_ml
                    .ok_or("--volume-ml is required (or provide --input)")?,
            ),
            strength_pct: Some(
                args.strength
                    .ok_or("--strength is required (or provide --input)")?,
            ),
            quantity: Some(
                args.quantity
                    .ok_or("--quantity is required (or provide --input)")?,
            ),
            engine_size_cc: None,
            model_year: None,
            has_liquor_license: args.liquor_license,
            is_first_time_owner: false,
            is_returning_resident: false,
            has_disability_exemption: false,
            is_antique: false,
            used_tire_count: 0,
        }
    };

    let engine = load_engine(&args.schedule)?;
    let result = engine.calculate(&declaration)?;
    Ok(serde_json::to_value(result)?)
}

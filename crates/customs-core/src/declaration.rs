use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CustomsError;
use crate::types::Money;
use crate::CustomsResult;

/// Alcohol sub-type, matching the tariff's commodity breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlcoholType {
    Wine,
    Beer,
    Ale,
    Stout,
    Spirits,
    Liqueur,
    Other,
}

/// Vehicle powertrain / use classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Electric,
    Hybrid,
    Gasoline,
    Diesel,
    Commercial,
}

/// Closed set of commodity categories the engine prices. Adding a category
/// is a compile-time-checked change: every resolver match is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommodityCategory {
    Alcohol(AlcoholType),
    Vehicle(VehicleType),
}

impl CommodityCategory {
    pub fn label(&self) -> &'static str {
        match self {
            CommodityCategory::Alcohol(AlcoholType::Wine) => "wine",
            CommodityCategory::Alcohol(AlcoholType::Beer) => "beer",
            CommodityCategory::Alcohol(AlcoholType::Ale) => "ale",
            CommodityCategory::Alcohol(AlcoholType::Stout) => "stout",
            CommodityCategory::Alcohol(AlcoholType::Spirits) => "spirits",
            CommodityCategory::Alcohol(AlcoholType::Liqueur) => "liqueur",
            CommodityCategory::Alcohol(AlcoholType::Other) => "other spirituous beverages",
            CommodityCategory::Vehicle(VehicleType::Electric) => "electric vehicle",
            CommodityCategory::Vehicle(VehicleType::Hybrid) => "hybrid vehicle",
            CommodityCategory::Vehicle(VehicleType::Gasoline) => "gasoline vehicle",
            CommodityCategory::Vehicle(VehicleType::Diesel) => "diesel vehicle",
            CommodityCategory::Vehicle(VehicleType::Commercial) => "commercial vehicle",
        }
    }
}

/// A validated import declaration. Immutable once constructed; the engine
/// re-validates defensively before any calculation begins.
///
/// Physical fields that only apply to one commodity family are modeled as
/// explicit `Option`s so every consumer handles the absent case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Declaration {
    pub product: String,
    pub category: CommodityCategory,
    pub cif_value: Money,
    pub country_of_origin: String,

    /// Volume per container in millilitres (alcohol).
    #[serde(default)]
    pub volume_ml_per_unit: Option<Decimal>,
    /// Alcohol by volume, percent (alcohol).
    #[serde(default)]
    pub strength_pct: Option<Decimal>,
    /// Number of containers (alcohol).
    #[serde(default)]
    pub quantity: Option<u32>,
    /// Engine displacement in cubic centimetres (combustion vehicles).
    #[serde(default)]
    pub engine_size_cc: Option<u32>,
    /// Model year (vehicles); age is measured against the schedule's
    /// reference year.
    #[serde(default)]
    pub model_year: Option<i32>,

    #[serde(default)]
    pub has_liquor_license: bool,
    #[serde(default)]
    pub is_first_time_owner: bool,
    #[serde(default)]
    pub is_returning_resident: bool,
    #[serde(default)]
    pub has_disability_exemption: bool,
    #[serde(default)]
    pub is_antique: bool,
    /// Used tires included with a vehicle shipment, levied per tire.
    #[serde(default)]
    pub used_tire_count: u32,
}

impl Declaration {
    /// Defensive re-validation of field ranges and category-required fields.
    /// Surfaces a single structured error naming the offending field; no
    /// partial computation is attempted on invalid input.
    pub fn validate(&self) -> CustomsResult<()> {
        if self.cif_value < Decimal::ZERO {
            return Err(CustomsError::invalid(
                "cif_value",
                "CIF value must be non-negative",
            ));
        }

        match self.category {
            CommodityCategory::Alcohol(_) => {
                let volume = self.volume_ml_per_unit.ok_or_else(|| {
                    CustomsError::invalid(
                        "volume_ml_per_unit",
                        "Volume per unit is required for alcohol declarations",
                    )
                })?;
                if volume < Decimal::ZERO {
                    return Err(CustomsError::invalid(
                        "volume_ml_per_unit",
                        "Volume must be non-negative",
                    ));
                }

                let strength = self.strength_pct.ok_or_else(|| {
                    CustomsError::invalid(
                        "strength_pct",
                        "Alcohol strength is required for alcohol declarations",
                    )
                })?;
                if strength < Decimal::ZERO || strength > Decimal::ONE_HUNDRED {
                    return Err(CustomsError::invalid(
                        "strength_pct",
                        "Alcohol strength must be between 0 and 100",
                    ));
                }

                match self.quantity {
                    None => {
                        return Err(CustomsError::invalid(
                            "quantity",
                            "Quantity is required for alcohol declarations",
                        ))
                    }
                    Some(0) => {
                        return Err(CustomsError::invalid(
                            "quantity",
                            "Quantity must be a positive integer",
                        ))
                    }
                    Some(_) => {}
                }
            }
            CommodityCategory::Vehicle(kind) => {
                if self.model_year.is_none() {
                    return Err(CustomsError::invalid(
                        "model_year",
                        "Model year is required for vehicle declarations",
                    ));
                }
                let needs_engine = matches!(kind, VehicleType::Gasoline | VehicleType::Diesel);
                if needs_engine && self.engine_size_cc.is_none() {
                    return Err(CustomsError::invalid(
                        "engine_size_cc",
                        "Engine displacement is required for combustion vehicles",
                    ));
                }
            }
        }

        Ok(())
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::declaration::CommodityCategory;
use crate::types::{Money, Rate};

/// Recorded when a concession rule overrode the standard import-duty rate:
/// the pre-override baseline and the duty saved against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcessionOutcome {
    pub rule: String,
    pub baseline_rate: Rate,
    pub baseline_import_duty: Money,
    pub savings: Money,
}

/// A fully itemized landed-cost breakdown. Constructed once per calculation
/// and never mutated; persistence and rendering belong to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DutyBreakdown {
    pub product: String,
    pub category: CommodityCategory,
    pub hs_code: String,
    pub hs_description: String,
    pub country_of_origin: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_volume_litres: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imperial_gallons: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_gallons: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pure_alcohol_litres: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_size_cc: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_age: Option<i32>,

    /// Resolved tier / rate card description.
    pub tier: String,
    pub import_duty_rate: Rate,
    pub import_duty_rate_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concession: Option<ConcessionOutcome>,

    pub cif_value: Money,
    pub import_duty: Money,
    pub excise_levy: Money,
    /// Human-readable derivation of the excise/levy line, e.g.
    /// "1.386 PG x $15.00/proof gallon".
    pub excise_calculation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stamp_duty: Option<Money>,
    pub fees: Money,
    pub vat: Money,
    pub vat_rate_display: String,
    pub total_landed_cost: Money,

    pub requires_permit: bool,
    pub warnings: Vec<String>,
}

/// One rejected line of a batch request, with the validation error that
/// excluded it. Valid lines still compute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRejection {
    pub index: usize,
    pub product: String,
    pub error: String,
}

/// Roll-up of a batch calculation: per-line breakdowns plus totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub line_count: usize,
    pub rejected: Vec<BatchRejection>,
    pub total_cif_value: Money,
    pub total_import_duty: Money,
    pub total_excise_levy: Money,
    pub total_stamp_duty: Money,
    pub total_fees: Money,
    pub total_vat: Money,
    pub total_landed_cost: Money,
    pub lines: Vec<DutyBreakdown>,
}

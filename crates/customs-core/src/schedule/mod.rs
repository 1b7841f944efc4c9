//! The versioned rate schedule: static configuration loaded once at process
//! start and treated as immutable thereafter. A new tariff year is taken on
//! by atomic replacement of the whole schedule, never by in-place mutation,
//! so a mid-calculation caller can never observe a partially updated tier
//! set.

pub mod alcohol;
pub mod concession;
pub mod vehicle;

pub use alcohol::{AlcoholFees, AlcoholRateCard, AlcoholSchedule, DutyBasis};
pub use concession::{ConcessionRule, Eligibility, Relief};
pub use vehicle::{
    AgeBandLevy, EnvironmentalLevy, ProcessingFee, RateTier, VehicleRateCard, VehicleSchedule,
};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Rate};

/// Fixed unit-conversion factors used by the schedule's billing bases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversions {
    /// Imperial gallons per litre of beverage.
    pub imperial_gallons_per_litre: Decimal,
    /// Degrees proof per percentage point of alcohol by volume.
    pub proof_degrees_per_abv: Decimal,
}

/// Thresholds the warning generator reads. Advisory only; none of these
/// affect the numeric result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningThresholds {
    pub high_abv_pct: Decimal,
    pub personal_volume_litres: Decimal,
    pub high_value_cif: Money,
    pub ministry_approval_age: i32,
    pub max_plausible_engine_cc: u32,
}

/// The complete, immutable rate configuration injected into the engine at
/// construction time. Serde round-trippable so alternative schedules can be
/// provisioned from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSchedule {
    pub version: String,
    pub effective_date: NaiveDate,
    /// Model-year ages are measured against this year.
    pub reference_year: i32,
    pub vat_rate: Rate,
    pub conversions: Conversions,
    pub alcohol: AlcoholSchedule,
    pub alcohol_fees: AlcoholFees,
    pub vehicle: VehicleSchedule,
    pub concessions: Vec<ConcessionRule>,
    pub thresholds: WarningThresholds,
}

impl RateSchedule {
    /// The rate set in force under the Customs Management Act for the 2026
    /// schedule year.
    pub fn bahamas_2026() -> Self {
        RateSchedule {
            version: "bahamas-2026".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2026, 1, 1)
                .expect("static schedule date is valid"),
            reference_year: 2026,
            vat_rate: dec!(0.10),
            conversions: Conversions {
                imperial_gallons_per_litre: dec!(0.22),
                proof_degrees_per_abv: dec!(1.75),
            },
            alcohol: AlcoholSchedule::bahamas_2026(),
            alcohol_fees: AlcoholFees {
                license_fee_base: dec!(50.00),
                bulk_quantity_threshold: 24,
                bulk_unit_surcharge: dec!(0.50),
            },
            vehicle: VehicleSchedule::bahamas_2026(),
            concessions: concession::bahamas_2026_concessions(),
            thresholds: WarningThresholds {
                high_abv_pct: dec!(40),
                personal_volume_litres: dec!(10),
                high_value_cif: dec!(5000),
                ministry_approval_age: 10,
                max_plausible_engine_cc: 20_000,
            },
        }
    }
}

impl Default for RateSchedule {
    fn default() -> Self {
        RateSchedule::bahamas_2026()
    }
}

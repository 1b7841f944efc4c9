use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::declaration::VehicleType;
use crate::types::{Money, Rate};

/// One rate row of a vehicle schedule: a set of boundary predicates plus
/// the ad valorem rate that applies when they all hold. All bounds are
/// inclusive; an absent bound is unconstrained. Tier lists are hand-ordered
/// so that more specific rows come first and the first match wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTier {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_engine_cc: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_engine_cc: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i32>,
    pub rate: Rate,
    #[serde(default)]
    pub requires_permit: bool,
}

impl RateTier {
    fn value_only(label: &str, max_value: Option<Money>, rate: Rate) -> Self {
        RateTier {
            label: label.to_string(),
            min_value: None,
            max_value,
            min_engine_cc: None,
            max_engine_cc: None,
            min_age: None,
            max_age: None,
            rate,
            requires_permit: false,
        }
    }

    fn engine_and_value(
        label: &str,
        min_engine_cc: Option<u32>,
        max_engine_cc: Option<u32>,
        max_value: Option<Money>,
        rate: Rate,
    ) -> Self {
        RateTier {
            label: label.to_string(),
            min_value: None,
            max_value,
            min_engine_cc,
            max_engine_cc,
            min_age: None,
            max_age: None,
            rate,
            requires_permit: false,
        }
    }
}

/// The duty rows for one vehicle type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRateCard {
    pub hs_code: String,
    pub description: String,
    pub tiers: Vec<RateTier>,
}

/// A flat environmental levy amount for vehicles up to `max_age` years old.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBandLevy {
    pub max_age: i32,
    pub amount: Money,
}

/// Environmental levy parameters. Standard vehicles pay a flat amount by
/// age band; vehicles past the age threshold pay a percentage of CIF plus
/// import duty; antiques pay a single flat amount regardless of age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalLevy {
    pub age_bands: Vec<AgeBandLevy>,
    pub over_age_threshold: i32,
    pub over_age_rate: Rate,
    pub antique_amount: Money,
    pub used_tire_levy: Money,
}

/// Processing fee: a percentage of CIF clamped to a declared band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingFee {
    pub rate: Rate,
    pub min: Money,
    pub max: Money,
}

/// The complete vehicle rate table plus the vehicle-only charges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSchedule {
    pub electric: VehicleRateCard,
    pub hybrid: VehicleRateCard,
    pub gasoline: VehicleRateCard,
    pub diesel: VehicleRateCard,
    pub commercial: VehicleRateCard,
    pub environmental_levy: EnvironmentalLevy,
    pub stamp_duty_rate: Rate,
    pub processing_fee: ProcessingFee,
}

impl VehicleSchedule {
    pub fn card(&self, kind: VehicleType) -> &VehicleRateCard {
        match kind {
            VehicleType::Electric => &self.electric,
            VehicleType::Hybrid => &self.hybrid,
            VehicleType::Gasoline => &self.gasoline,
            VehicleType::Diesel => &self.diesel,
            VehicleType::Commercial => &self.commercial,
        }
    }

    /// The published rate set in force for the 2026 schedule year.
    ///
    /// The $50,000 value boundary is inclusive of the lower tier: a vehicle
    /// valued at exactly $50,000 takes the concessionary rate.
    pub fn bahamas_2026() -> Self {
        let ev_tiers = vec![
            RateTier::value_only("Value up to $50,000", Some(dec!(50000)), dec!(0.10)),
            RateTier::value_only("Value over $50,000", None, dec!(0.25)),
        ];

        let combustion_tiers = |large_hint: &str| {
            vec![
                RateTier::engine_and_value(
                    "Small engine (under 1,500 cc)",
                    None,
                    Some(1499),
                    None,
                    dec!(0.45),
                ),
                RateTier::engine_and_value(
                    "Medium engine (1,500-2,000 cc), value up to $50,000",
                    Some(1500),
                    Some(2000),
                    Some(dec!(50000)),
                    dec!(0.45),
                ),
                RateTier::engine_and_value(
                    "Medium engine (1,500-2,000 cc), value over $50,000",
                    Some(1500),
                    Some(2000),
                    None,
                    dec!(0.65),
                ),
                RateTier::engine_and_value(large_hint, Some(2001), None, None, dec!(0.65)),
            ]
        };

        VehicleSchedule {
            electric: VehicleRateCard {
                hs_code: "8703.80".to_string(),
                description: "Motor vehicles with only electric motor for propulsion".to_string(),
                tiers: ev_tiers.clone(),
            },
            hybrid: VehicleRateCard {
                hs_code: "8703.40".to_string(),
                description: "Hybrid motor vehicles with both spark-ignition engine and electric motor"
                    .to_string(),
                tiers: ev_tiers,
            },
            gasoline: VehicleRateCard {
                hs_code: "8703.23".to_string(),
                description: "Motor cars with spark-ignition internal combustion engine".to_string(),
                tiers: combustion_tiers("Large engine (over 2,000 cc)"),
            },
            diesel: VehicleRateCard {
                hs_code: "8703.32".to_string(),
                description: "Motor cars with compression-ignition internal combustion engine"
                    .to_string(),
                tiers: combustion_tiers("Large engine (over 2,000 cc)"),
            },
            commercial: VehicleRateCard {
                hs_code: "8704.21".to_string(),
                description: "Motor vehicles for the transport of goods".to_string(),
                tiers: vec![RateTier::value_only("Commercial vehicle", None, dec!(0.65))],
            },
            environmental_levy: EnvironmentalLevy {
                age_bands: vec![
                    AgeBandLevy {
                        max_age: 5,
                        amount: dec!(250.00),
                    },
                    AgeBandLevy {
                        max_age: 10,
                        amount: dec!(500.00),
                    },
                ],
                over_age_threshold: 10,
                over_age_rate: dec!(0.20),
                antique_amount: dec!(150.00),
                used_tire_levy: dec!(5.00),
            },
            stamp_duty_rate: dec!(0.07),
            processing_fee: ProcessingFee {
                rate: dec!(0.01),
                min: dec!(100.00),
                max: dec!(1000.00),
            },
        }
    }
}

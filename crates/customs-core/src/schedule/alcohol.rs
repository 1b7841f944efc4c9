use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::declaration::AlcoholType;
use crate::types::{Money, Rate};

/// The billing basis for an alcohol excise line. Spirits bill per proof
/// gallon and carry no ad valorem import duty; liqueurs bill per imperial
/// gallon of beverage; the residual category bills per litre of pure
/// alcohol; malt beverages combine a gallonage charge with an ad valorem
/// component; wine is purely ad valorem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyBasis {
    AdValorem { rate: Rate },
    SpecificPlusAdValorem { per_imperial_gallon: Money, rate: Rate },
    PerProofGallon { per_proof_gallon: Money },
    PerImperialGallon { per_imperial_gallon: Money },
    PerLitreOfPureAlcohol { per_litre: Money },
}

impl DutyBasis {
    /// Short description of the billing basis for breakdown reporting.
    pub fn label(&self) -> &'static str {
        match self {
            DutyBasis::AdValorem { .. } => "Ad valorem excise",
            DutyBasis::SpecificPlusAdValorem { .. } => "Specific plus ad valorem excise",
            DutyBasis::PerProofGallon { .. } => "Proof gallon excise",
            DutyBasis::PerImperialGallon { .. } => "Imperial gallon excise",
            DutyBasis::PerLitreOfPureAlcohol { .. } => "Pure alcohol excise",
        }
    }
}

/// One row of the alcohol schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlcoholRateCard {
    pub hs_code: String,
    pub description: String,
    pub import_duty_rate: Rate,
    pub excise: DutyBasis,
    pub requires_permit: bool,
}

/// License/processing fee parameters for alcohol shipments. The fee only
/// applies to declared liquor-license holders; bulk shipments pay a
/// per-unit surcharge above the quantity threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlcoholFees {
    pub license_fee_base: Money,
    pub bulk_quantity_threshold: u32,
    pub bulk_unit_surcharge: Money,
}

/// The complete alcohol rate table. One named card per commodity sub-type
/// keeps lookup exhaustive at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlcoholSchedule {
    pub wine: AlcoholRateCard,
    pub beer: AlcoholRateCard,
    pub ale: AlcoholRateCard,
    pub stout: AlcoholRateCard,
    pub spirits: AlcoholRateCard,
    pub liqueur: AlcoholRateCard,
    pub other: AlcoholRateCard,
}

impl AlcoholSchedule {
    pub fn card(&self, kind: AlcoholType) -> &AlcoholRateCard {
        match kind {
            AlcoholType::Wine => &self.wine,
            AlcoholType::Beer => &self.beer,
            AlcoholType::Ale => &self.ale,
            AlcoholType::Stout => &self.stout,
            AlcoholType::Spirits => &self.spirits,
            AlcoholType::Liqueur => &self.liqueur,
            AlcoholType::Other => &self.other,
        }
    }

    /// The published rate set in force for the 2026 schedule year.
    pub fn bahamas_2026() -> Self {
        AlcoholSchedule {
            wine: AlcoholRateCard {
                hs_code: "2204.21".to_string(),
                description: "Wine of fresh grapes, in containers holding 2L or less"
                    .to_string(),
                import_duty_rate: dec!(0.35),
                excise: DutyBasis::AdValorem { rate: dec!(0.15) },
                requires_permit: false,
            },
            beer: AlcoholRateCard {
                hs_code: "2203.00".to_string(),
                description: "Beer made from malt".to_string(),
                import_duty_rate: dec!(0.35),
                excise: DutyBasis::SpecificPlusAdValorem {
                    per_imperial_gallon: dec!(4.00),
                    rate: dec!(0.10),
                },
                requires_permit: false,
            },
            ale: AlcoholRateCard {
                hs_code: "2203.00".to_string(),
                description: "Ale made from malt".to_string(),
                import_duty_rate: dec!(0.35),
                excise: DutyBasis::SpecificPlusAdValorem {
                    per_imperial_gallon: dec!(4.00),
                    rate: dec!(0.10),
                },
                requires_permit: false,
            },
            stout: AlcoholRateCard {
                hs_code: "2203.00".to_string(),
                description: "Stout made from malt".to_string(),
                import_duty_rate: dec!(0.35),
                excise: DutyBasis::SpecificPlusAdValorem {
                    per_imperial_gallon: dec!(4.50),
                    rate: dec!(0.10),
                },
                requires_permit: false,
            },
            spirits: AlcoholRateCard {
                hs_code: "2208.40".to_string(),
                description: "Rum and other spirits obtained by distilling fermented cane products"
                    .to_string(),
                import_duty_rate: dec!(0),
                excise: DutyBasis::PerProofGallon {
                    per_proof_gallon: dec!(15.00),
                },
                requires_permit: true,
            },
            liqueur: AlcoholRateCard {
                hs_code: "2208.70".to_string(),
                description: "Liqueurs and cordials".to_string(),
                import_duty_rate: dec!(0.45),
                excise: DutyBasis::PerImperialGallon {
                    per_imperial_gallon: dec!(12.00),
                },
                requires_permit: true,
            },
            other: AlcoholRateCard {
                hs_code: "2208.90".to_string(),
                description: "Other spirituous beverages".to_string(),
                import_duty_rate: dec!(0.40),
                excise: DutyBasis::PerLitreOfPureAlcohol {
                    per_litre: dec!(15.00),
                },
                requires_permit: true,
            },
        }
    }
}

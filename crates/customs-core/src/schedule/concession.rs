use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Rate;

/// The declaration flag a concession rule is gated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Eligibility {
    DisabilityExemption,
    ReturningResident,
    FirstTimeOwner,
    Antique,
}

/// How an applicable concession transforms the import-duty rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relief {
    /// Replace the standard rate outright.
    Replace(Rate),
    /// Subtract percentage points from the standard rate.
    ReduceBy(Rate),
    /// Reduce the standard rate to at most this value.
    CapAt(Rate),
}

/// An eligibility-gated override of the import-duty rate. Rules are
/// evaluated in declaration order and at most one applies per shipment.
/// The effective rate never falls below `floor` and never below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcessionRule {
    pub label: String,
    pub eligibility: Eligibility,
    pub relief: Relief,
    pub floor: Rate,
}

/// The concession rules in force for the 2026 schedule year, in the order
/// they are evaluated.
pub fn bahamas_2026_concessions() -> Vec<ConcessionRule> {
    vec![
        ConcessionRule {
            label: "Disability exemption".to_string(),
            eligibility: Eligibility::DisabilityExemption,
            relief: Relief::Replace(dec!(0)),
            floor: dec!(0),
        },
        ConcessionRule {
            label: "Returning resident rate".to_string(),
            eligibility: Eligibility::ReturningResident,
            relief: Relief::Replace(dec!(0.10)),
            floor: dec!(0.10),
        },
        ConcessionRule {
            label: "First-time owner reduction".to_string(),
            eligibility: Eligibility::FirstTimeOwner,
            relief: Relief::ReduceBy(dec!(0.15)),
            floor: dec!(0.10),
        },
        ConcessionRule {
            label: "Antique vehicle rate cap".to_string(),
            eligibility: Eligibility::Antique,
            relief: Relief::CapAt(dec!(0.20)),
            floor: dec!(0),
        },
    ]
}

//! The alcohol duty stack. Stages run in a fixed order because each later
//! stage's tax base includes the charges before it; reordering changes
//! every downstream number.

use crate::declaration::Declaration;
use crate::schedule::{AlcoholRateCard, DutyBasis, RateSchedule};
use crate::types::{rate_display, to_cents, Money, Rate};
use crate::units::AlcoholMagnitudes;

/// Every charge assessed on an alcohol shipment, rounded to cents at the
/// point of assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct AlcoholCharges {
    pub import_duty: Money,
    pub excise_duty: Money,
    pub excise_calculation: String,
    pub license_fee: Money,
    pub vat: Money,
}

pub fn stack_alcohol(
    schedule: &RateSchedule,
    card: &AlcoholRateCard,
    declaration: &Declaration,
    magnitudes: &AlcoholMagnitudes,
    effective_duty_rate: Rate,
) -> AlcoholCharges {
    let cif = to_cents(declaration.cif_value);

    // Stage 1: ad valorem import duty. Zero for proof-gallon cards, whose
    // rate card already carries a 0% rate.
    let import_duty = to_cents(cif * effective_duty_rate);

    // Stage 2: excise by the card's billing basis.
    let (excise_duty, excise_calculation) = match &card.excise {
        DutyBasis::AdValorem { rate } => (
            to_cents(cif * *rate),
            format!("{} x CIF ${:.2}", rate_display(*rate), cif),
        ),
        DutyBasis::SpecificPlusAdValorem {
            per_imperial_gallon,
            rate,
        } => (
            to_cents(magnitudes.imperial_gallons * *per_imperial_gallon + cif * *rate),
            format!(
                "{:.3} IG x ${:.2}/IG + {} x CIF ${:.2}",
                magnitudes.imperial_gallons,
                per_imperial_gallon,
                rate_display(*rate),
                cif
            ),
        ),
        DutyBasis::PerProofGallon { per_proof_gallon } => (
            to_cents(magnitudes.proof_gallons * *per_proof_gallon),
            format!(
                "{:.3} PG x ${:.2}/proof gallon",
                magnitudes.proof_gallons, per_proof_gallon
            ),
        ),
        DutyBasis::PerImperialGallon {
            per_imperial_gallon,
        } => (
            to_cents(magnitudes.imperial_gallons * *per_imperial_gallon),
            format!(
                "{:.3} IG x ${:.2}/IG",
                magnitudes.imperial_gallons, per_imperial_gallon
            ),
        ),
        DutyBasis::PerLitreOfPureAlcohol { per_litre } => (
            to_cents(magnitudes.pure_alcohol_litres * *per_litre),
            format!(
                "{:.3} LPA x ${:.2}/LPA",
                magnitudes.pure_alcohol_litres, per_litre
            ),
        ),
    };

    // Stage 3: license/processing fee, license holders only. Bulk
    // shipments pay a per-unit surcharge above the quantity threshold.
    let fees = &schedule.alcohol_fees;
    let license_fee = if declaration.has_liquor_license {
        let quantity = declaration.quantity.unwrap_or(0);
        let bulk_units = quantity.saturating_sub(fees.bulk_quantity_threshold);
        to_cents(fees.license_fee_base + fees.bulk_unit_surcharge * Money::from(bulk_units))
    } else {
        Money::ZERO
    };

    // Stage 4: VAT on the duty-inclusive base, never on CIF alone.
    let vat = to_cents(schedule.vat_rate * (cif + import_duty + excise_duty + license_fee));

    AlcoholCharges {
        import_duty,
        excise_duty,
        excise_calculation,
        license_fee,
        vat,
    }
}

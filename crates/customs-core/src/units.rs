//! Pure unit conversions for declared quantities.
//!
//! Alcohol excise may be levied per imperial gallon of beverage, per proof
//! gallon, or per litre of pure alcohol depending on the rate card, so all
//! three derived magnitudes are computed up front and the duty stack picks
//! the one its card requires.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::CustomsError;
use crate::schedule::Conversions;
use crate::CustomsResult;

const ML_PER_LITRE: Decimal = dec!(1000);

/// Every magnitude derived from an alcohol declaration's physical fields.
#[derive(Debug, Clone, PartialEq)]
pub struct AlcoholMagnitudes {
    pub total_litres: Decimal,
    pub imperial_gallons: Decimal,
    /// Degrees proof, e.g. 40% ABV at a 1.75 factor is 70 proof.
    pub proof_strength: Decimal,
    pub proof_gallons: Decimal,
    pub pure_alcohol_litres: Decimal,
}

/// Total declared volume in litres across all units.
pub fn total_litres(volume_ml_per_unit: Decimal, quantity: u32) -> CustomsResult<Decimal> {
    if volume_ml_per_unit < Decimal::ZERO {
        return Err(CustomsError::invalid(
            "volume_ml_per_unit",
            "Volume must be non-negative",
        ));
    }
    Ok(volume_ml_per_unit / ML_PER_LITRE * Decimal::from(quantity))
}

/// Litres to imperial gallons using the schedule's conversion factor.
pub fn imperial_gallons(litres: Decimal, ig_per_litre: Decimal) -> CustomsResult<Decimal> {
    if litres < Decimal::ZERO {
        return Err(CustomsError::invalid("litres", "Volume must be non-negative"));
    }
    Ok(litres * ig_per_litre)
}

/// Alcohol-by-volume percentage to degrees proof.
pub fn proof_strength(abv_pct: Decimal, proof_degrees_per_abv: Decimal) -> CustomsResult<Decimal> {
    if abv_pct < Decimal::ZERO || abv_pct > Decimal::ONE_HUNDRED {
        return Err(CustomsError::invalid(
            "strength_pct",
            "Alcohol strength must be between 0 and 100",
        ));
    }
    Ok(abv_pct * proof_degrees_per_abv)
}

/// Imperial gallons of beverage to proof gallons at the given proof strength.
pub fn proof_gallons(imperial_gallons: Decimal, proof_strength: Decimal) -> Decimal {
    imperial_gallons * proof_strength / Decimal::ONE_HUNDRED
}

/// Beverage volume re-expressed as an equivalent volume of pure alcohol.
pub fn pure_alcohol_litres(litres: Decimal, abv_pct: Decimal) -> Decimal {
    litres * abv_pct / Decimal::ONE_HUNDRED
}

/// Derive all alcohol magnitudes in one pass.
pub fn derive_alcohol_magnitudes(
    volume_ml_per_unit: Decimal,
    quantity: u32,
    abv_pct: Decimal,
    conversions: &Conversions,
) -> CustomsResult<AlcoholMagnitudes> {
    let litres = total_litres(volume_ml_per_unit, quantity)?;
    let ig = imperial_gallons(litres, conversions.imperial_gallons_per_litre)?;
    let proof = proof_strength(abv_pct, conversions.proof_degrees_per_abv)?;
    Ok(AlcoholMagnitudes {
        total_litres: litres,
        imperial_gallons: ig,
        proof_strength: proof,
        proof_gallons: proof_gallons(ig, proof),
        pure_alcohol_litres: pure_alcohol_litres(litres, abv_pct),
    })
}

/// Engine displacement is already in the unit the vehicle schedule uses.
/// Anything above the schedule's plausibility bound is treated as a likely
/// data-entry mistake and surfaced as a warning, never a hard failure.
pub fn displacement_is_plausible(engine_size_cc: u32, max_plausible_cc: u32) -> bool {
    engine_size_cc <= max_plausible_cc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn factors() -> Conversions {
        Conversions {
            imperial_gallons_per_litre: dec!(0.22),
            proof_degrees_per_abv: dec!(1.75),
        }
    }

    #[test]
    fn test_twelve_fifths_of_spirits() {
        // 12 x 750 mL at 40% ABV: the documented worked example.
        let m = derive_alcohol_magnitudes(dec!(750), 12, dec!(40), &factors()).unwrap();
        assert_eq!(m.total_litres, dec!(9.00));
        assert_eq!(m.imperial_gallons, dec!(1.9800));
        assert_eq!(m.proof_strength, dec!(70.00));
        assert_eq!(m.proof_gallons, dec!(1.386000));
        assert_eq!(m.pure_alcohol_litres, dec!(3.600));
    }

    #[test]
    fn test_zero_strength_is_valid() {
        let m = derive_alcohol_magnitudes(dec!(330), 24, dec!(0), &factors()).unwrap();
        assert_eq!(m.proof_gallons, Decimal::ZERO);
        assert_eq!(m.pure_alcohol_litres, Decimal::ZERO);
    }

    #[test]
    fn test_negative_volume_rejected() {
        let err = total_litres(dec!(-1), 6).unwrap_err();
        match err {
            CustomsError::InvalidInput { field, .. } => {
                assert_eq!(field, "volume_ml_per_unit")
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_strength_above_100_rejected() {
        assert!(proof_strength(dec!(100.1), dec!(1.75)).is_err());
        assert!(proof_strength(dec!(100), dec!(1.75)).is_ok());
    }

    #[test]
    fn test_displacement_plausibility_bound() {
        assert!(displacement_is_plausible(1200, 20_000));
        assert!(displacement_is_plausible(20_000, 20_000));
        assert!(!displacement_is_plausible(20_001, 20_000));
    }
}

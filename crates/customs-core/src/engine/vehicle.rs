//! The vehicle duty stack: ad valorem import duty from the resolved tier,
//! environmental levy by age rule, stamp duty, clamped processing fee, and
//! VAT on the duty-inclusive base. Stage order is load-bearing.

use crate::declaration::Declaration;
use crate::error::CustomsError;
use crate::schedule::RateSchedule;
use crate::types::{rate_display, to_cents, Money, Rate};
use crate::CustomsResult;

/// Every charge assessed on a vehicle import, rounded to cents at the
/// point of assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleCharges {
    pub import_duty: Money,
    pub environmental_levy: Money,
    pub levy_calculation: String,
    pub stamp_duty: Money,
    pub processing_fee: Money,
    pub vat: Money,
}

pub fn stack_vehicle(
    schedule: &RateSchedule,
    declaration: &Declaration,
    effective_duty_rate: Rate,
    age: i32,
) -> CustomsResult<VehicleCharges> {
    let cif = to_cents(declaration.cif_value);

    // Stage 1: ad valorem import duty at the resolved (post-concession) rate.
    let import_duty = to_cents(cif * effective_duty_rate);

    // Stage 2: environmental levy. Antique status bypasses the age rules
    // entirely; otherwise vehicles past the age threshold pay a percentage
    // of CIF plus the duty assessed so far, and standard vehicles pay the
    // flat amount for their age band.
    let levy = &schedule.vehicle.environmental_levy;
    let (mut environmental_levy, mut levy_calculation) = if declaration.is_antique {
        (
            to_cents(levy.antique_amount),
            "Flat antique vehicle levy".to_string(),
        )
    } else if age > levy.over_age_threshold {
        (
            to_cents(levy.over_age_rate * (cif + import_duty)),
            format!(
                "{} x (CIF + import duty), vehicle over {} years",
                rate_display(levy.over_age_rate),
                levy.over_age_threshold
            ),
        )
    } else {
        let band = levy
            .age_bands
            .iter()
            .find(|band| age <= band.max_age)
            .ok_or_else(|| {
                CustomsError::ScheduleGap(format!(
                    "no environmental levy band covers vehicle age {}",
                    age
                ))
            })?;
        (
            to_cents(band.amount),
            format!("Flat levy, vehicle age up to {} years", band.max_age),
        )
    };

    if declaration.used_tire_count > 0 {
        let tire_levy =
            to_cents(levy.used_tire_levy * Money::from(declaration.used_tire_count));
        environmental_levy += tire_levy;
        levy_calculation.push_str(&format!(
            " + {} used tires x ${:.2}",
            declaration.used_tire_count, levy.used_tire_levy
        ));
    }

    // Stage 3: stamp duty on the CIF value.
    let stamp_duty = to_cents(schedule.vehicle.stamp_duty_rate * cif);

    // Stage 4: processing fee, a percentage of CIF clamped to the
    // schedule's band.
    let fee = &schedule.vehicle.processing_fee;
    let processing_fee = to_cents(fee.rate * cif).clamp(fee.min, fee.max);

    // Stage 5: VAT on the duty-inclusive base, never on CIF alone.
    let vat = to_cents(
        schedule.vat_rate
            * (cif + import_duty + environmental_levy + stamp_duty + processing_fee),
    );

    Ok(VehicleCharges {
        import_duty,
        environmental_levy,
        levy_calculation,
        stamp_duty,
        processing_fee,
        vat,
    })
}

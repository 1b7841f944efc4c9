//! The calculation engine: a pure, synchronous, single-pass pipeline from
//! a validated `Declaration` to an immutable `DutyBreakdown`. The engine
//! holds no state between invocations beyond the injected rate schedule,
//! so it is safe to call concurrently without locks.

pub mod alcohol;
pub mod concession;
pub mod resolve;
pub mod vehicle;
pub mod warnings;

use std::sync::Arc;
use std::time::Instant;

use crate::breakdown::{BatchRejection, BatchSummary, ConcessionOutcome, DutyBreakdown};
use crate::declaration::{CommodityCategory, Declaration};
use crate::error::CustomsError;
use crate::schedule::RateSchedule;
use crate::types::{rate_display, to_cents, to_magnitude, with_metadata, ComputationOutput, Money};
use crate::units::derive_alcohol_magnitudes;
use crate::CustomsResult;

use concession::AppliedConcession;
use warnings::WarningContext;

pub struct CustomsEngine {
    schedule: Arc<RateSchedule>,
}

impl CustomsEngine {
    pub fn new(schedule: Arc<RateSchedule>) -> Self {
        CustomsEngine { schedule }
    }

    pub fn with_default_schedule() -> Self {
        CustomsEngine::new(Arc::new(RateSchedule::default()))
    }

    /// The rate configuration currently in force, for presenting rates and
    /// thresholds to end users.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }

    /// Take a new tariff year on by replacing the whole schedule reference.
    /// In-flight calculations keep the `Arc` they started with, so none of
    /// them can observe a partially updated tier set.
    pub fn replace_schedule(&mut self, schedule: Arc<RateSchedule>) {
        self.schedule = schedule;
    }

    /// Calculate the fully itemized landed cost for one declaration.
    pub fn calculate(
        &self,
        declaration: &Declaration,
    ) -> CustomsResult<ComputationOutput<DutyBreakdown>> {
        let start = Instant::now();
        declaration.validate()?;

        let breakdown = match declaration.category {
            CommodityCategory::Alcohol(kind) => self.calculate_alcohol(declaration, kind)?,
            CommodityCategory::Vehicle(kind) => self.calculate_vehicle(declaration, kind)?,
        };

        let assumptions = serde_json::json!({
            "schedule_version": self.schedule.version,
            "reference_year": self.schedule.reference_year,
            "category": declaration.category,
        });
        let envelope_warnings = breakdown.warnings.clone();
        let elapsed = start.elapsed().as_micros() as u64;
        Ok(with_metadata(
            "Layered duty stack: import duty, excise/levy, fees, then VAT on the duty-inclusive base",
            &assumptions,
            envelope_warnings,
            elapsed,
            breakdown,
        ))
    }

    /// Calculate a batch of declarations and roll the results up. Lines
    /// that fail validation are reported with their field error while the
    /// remaining lines still compute; a schedule gap aborts the whole
    /// batch because every line priced against that schedule is suspect.
    pub fn calculate_batch(
        &self,
        declarations: &[Declaration],
    ) -> CustomsResult<ComputationOutput<BatchSummary>> {
        let start = Instant::now();

        if declarations.is_empty() {
            return Err(CustomsError::InsufficientData(
                "Batch must contain at least one declaration".to_string(),
            ));
        }

        let mut warnings: Vec<String> = Vec::new();
        let mut lines: Vec<DutyBreakdown> = Vec::new();
        let mut rejected: Vec<BatchRejection> = Vec::new();
        let mut total_cif = Money::ZERO;
        let mut total_duty = Money::ZERO;
        let mut total_excise = Money::ZERO;
        let mut total_stamp = Money::ZERO;
        let mut total_fees = Money::ZERO;
        let mut total_vat = Money::ZERO;
        let mut total_landed = Money::ZERO;

        for (index, declaration) in declarations.iter().enumerate() {
            match self.calculate(declaration) {
                Ok(output) => {
                    for w in &output.warnings {
                        warnings.push(format!("Line {}: {}", index + 1, w));
                    }
                    let b = output.result;
                    total_cif += b.cif_value;
                    total_duty += b.import_duty;
                    total_excise += b.excise_levy;
                    total_stamp += b.stamp_duty.unwrap_or(Money::ZERO);
                    total_fees += b.fees;
                    total_vat += b.vat;
                    total_landed += b.total_landed_cost;
                    lines.push(b);
                }
                Err(e @ CustomsError::InvalidInput { .. }) => {
                    rejected.push(BatchRejection {
                        index,
                        product: declaration.product.clone(),
                        error: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        let result = BatchSummary {
            line_count: lines.len(),
            rejected,
            total_cif_value: total_cif,
            total_import_duty: total_duty,
            total_excise_levy: total_excise,
            total_stamp_duty: total_stamp,
            total_fees,
            total_vat,
            total_landed_cost: total_landed,
            lines,
        };

        let assumptions = serde_json::json!({
            "schedule_version": self.schedule.version,
            "declaration_count": declarations.len(),
        });
        let elapsed = start.elapsed().as_micros() as u64;
        Ok(with_metadata(
            "Per-line duty calculation with batch roll-up",
            &assumptions,
            warnings,
            elapsed,
            result,
        ))
    }

    fn calculate_alcohol(
        &self,
        declaration: &Declaration,
        kind: crate::declaration::AlcoholType,
    ) -> CustomsResult<DutyBreakdown> {
        let schedule = &self.schedule;
        let card = schedule.alcohol.card(kind);

        // Validation has already established these are present; re-check
        // rather than panic so a caller bypassing `calculate` still gets a
        // structured error.
        let volume = declaration.volume_ml_per_unit.ok_or_else(|| {
            CustomsError::invalid("volume_ml_per_unit", "Volume per unit is required")
        })?;
        let quantity = declaration
            .quantity
            .ok_or_else(|| CustomsError::invalid("quantity", "Quantity is required"))?;
        let strength = declaration
            .strength_pct
            .ok_or_else(|| CustomsError::invalid("strength_pct", "Alcohol strength is required"))?;
        let magnitudes =
            derive_alcohol_magnitudes(volume, quantity, strength, &schedule.conversions)?;

        let (effective_rate, applied) = concession::apply_concession(
            declaration,
            &schedule.concessions,
            card.import_duty_rate,
        );
        let charges =
            alcohol::stack_alcohol(schedule, card, declaration, &magnitudes, effective_rate);

        let cif = to_cents(declaration.cif_value);
        let total = cif + charges.import_duty + charges.excise_duty + charges.license_fee
            + charges.vat;

        let warning_list = warnings::generate_warnings(
            schedule,
            declaration,
            &WarningContext {
                requires_permit: card.requires_permit,
                total_litres: Some(magnitudes.total_litres),
                vehicle_age: None,
            },
        );

        Ok(DutyBreakdown {
            product: declaration.product.clone(),
            category: declaration.category,
            hs_code: card.hs_code.clone(),
            hs_description: card.description.clone(),
            country_of_origin: declaration.country_of_origin.clone(),
            quantity: declaration.quantity,
            total_volume_litres: Some(to_magnitude(magnitudes.total_litres)),
            imperial_gallons: Some(to_magnitude(magnitudes.imperial_gallons)),
            proof_gallons: Some(to_magnitude(magnitudes.proof_gallons)),
            pure_alcohol_litres: Some(to_magnitude(magnitudes.pure_alcohol_litres)),
            engine_size_cc: None,
            vehicle_age: None,
            tier: card.excise.label().to_string(),
            import_duty_rate: effective_rate,
            import_duty_rate_display: rate_display(effective_rate),
            concession: concession_outcome(applied, cif, charges.import_duty),
            cif_value: cif,
            import_duty: charges.import_duty,
            excise_levy: charges.excise_duty,
            excise_calculation: charges.excise_calculation,
            stamp_duty: None,
            fees: charges.license_fee,
            vat: charges.vat,
            vat_rate_display: rate_display(schedule.vat_rate),
            total_landed_cost: total,
            requires_permit: card.requires_permit,
            warnings: warning_list,
        })
    }

    fn calculate_vehicle(
        &self,
        declaration: &Declaration,
        kind: crate::declaration::VehicleType,
    ) -> CustomsResult<DutyBreakdown> {
        let schedule = &self.schedule;
        let card = schedule.vehicle.card(kind);
        let model_year = declaration
            .model_year
            .ok_or_else(|| CustomsError::invalid("model_year", "Model year is required"))?;
        // A next-model-year vehicle is simply age zero.
        let age = (schedule.reference_year - model_year).max(0);

        let cif = to_cents(declaration.cif_value);
        let tier = resolve::resolve_vehicle_tier(card, cif, declaration.engine_size_cc, age)?;

        let (effective_rate, applied) =
            concession::apply_concession(declaration, &schedule.concessions, tier.rate);
        let charges = vehicle::stack_vehicle(schedule, declaration, effective_rate, age)?;

        let total = cif
            + charges.import_duty
            + charges.environmental_levy
            + charges.stamp_duty
            + charges.processing_fee
            + charges.vat;

        let warning_list = warnings::generate_warnings(
            schedule,
            declaration,
            &WarningContext {
                requires_permit: tier.requires_permit,
                total_litres: None,
                vehicle_age: Some(age),
            },
        );

        Ok(DutyBreakdown {
            product: declaration.product.clone(),
            category: declaration.category,
            hs_code: card.hs_code.clone(),
            hs_description: card.description.clone(),
            country_of_origin: declaration.country_of_origin.clone(),
            quantity: None,
            total_volume_litres: None,
            imperial_gallons: None,
            proof_gallons: None,
            pure_alcohol_litres: None,
            engine_size_cc: declaration.engine_size_cc,
            vehicle_age: Some(age),
            tier: tier.label.clone(),
            import_duty_rate: effective_rate,
            import_duty_rate_display: rate_display(effective_rate),
            concession: concession_outcome(applied, cif, charges.import_duty),
            cif_value: cif,
            import_duty: charges.import_duty,
            excise_levy: charges.environmental_levy,
            excise_calculation: charges.levy_calculation,
            stamp_duty: Some(charges.stamp_duty),
            fees: charges.processing_fee,
            vat: charges.vat,
            vat_rate_display: rate_display(schedule.vat_rate),
            total_landed_cost: total,
            requires_permit: tier.requires_permit,
            warnings: warning_list,
        })
    }
}

/// Savings are measured between the duty at the pre-override rate and the
/// duty actually assessed, both at cent precision.
fn concession_outcome(
    applied: Option<AppliedConcession>,
    cif: Money,
    assessed_duty: Money,
) -> Option<ConcessionOutcome> {
    applied.map(|a| {
        let baseline_duty = to_cents(cif * a.baseline_rate);
        ConcessionOutcome {
            rule: a.rule,
            baseline_rate: a.baseline_rate,
            baseline_import_duty: baseline_duty,
            savings: baseline_duty - assessed_duty,
        }
    })
}

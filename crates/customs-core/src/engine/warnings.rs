//! Advisory and compliance warnings. Rules are independent predicate
//! checks over the declaration and the computed values; they are evaluated
//! in a fixed order, never fail, and never affect the numeric result.

use rust_decimal::Decimal;

use crate::declaration::{CommodityCategory, Declaration, VehicleType};
use crate::schedule::RateSchedule;
use crate::units::displacement_is_plausible;

/// Computed values the warning rules read alongside the declaration.
#[derive(Debug, Clone, Default)]
pub struct WarningContext {
    pub requires_permit: bool,
    pub total_litres: Option<Decimal>,
    pub vehicle_age: Option<i32>,
}

pub fn generate_warnings(
    schedule: &RateSchedule,
    declaration: &Declaration,
    ctx: &WarningContext,
) -> Vec<String> {
    let thresholds = &schedule.thresholds;
    let mut warnings = Vec::new();

    if let Some(strength) = declaration.strength_pct {
        if strength > thresholds.high_abv_pct {
            warnings.push(format!(
                "High ABV product (>{}%) - may require additional inspection",
                thresholds.high_abv_pct
            ));
        }
    }

    if let Some(litres) = ctx.total_litres {
        if litres > thresholds.personal_volume_litres && !declaration.has_liquor_license {
            warnings.push(
                "Volume exceeds personal use allowance - liquor license recommended".to_string(),
            );
        }
    }

    if ctx.requires_permit {
        warnings.push(format!(
            "Import permit required for {}",
            declaration.category.label()
        ));
    }

    if declaration.cif_value > thresholds.high_value_cif {
        warnings.push(
            "High value shipment - may be subject to additional documentation".to_string(),
        );
    }

    if declaration.category == CommodityCategory::Vehicle(VehicleType::Commercial) {
        warnings.push(
            "Commercial vehicle - business license and commercial registration required"
                .to_string(),
        );
    }

    if let Some(age) = ctx.vehicle_age {
        if age > thresholds.ministry_approval_age && !declaration.is_antique {
            warnings.push(format!(
                "Vehicle is {} years old - Ministry of Finance approval required for vehicles over {} years",
                age, thresholds.ministry_approval_age
            ));
        }
    }

    if declaration.is_antique {
        warnings.push(
            "Antique vehicle - certified appraisal and historical documentation required"
                .to_string(),
        );
    }

    if declaration.used_tire_count > 0 {
        warnings.push(format!(
            "{} used tires declared - per-tire environmental levy applies",
            declaration.used_tire_count
        ));
    }

    if let Some(cc) = declaration.engine_size_cc {
        if !displacement_is_plausible(cc, thresholds.max_plausible_engine_cc) {
            warnings.push(format!(
                "Engine displacement {} cc exceeds the plausible range - check data entry",
                cc
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::AlcoholType;
    use rust_decimal_macros::dec;

    fn spirits_declaration() -> Declaration {
        Declaration {
            product: "Overproof Rum".to_string(),
            category: CommodityCategory::Alcohol(AlcoholType::Spirits),
            cif_value: dec!(540),
            country_of_origin: "Jamaica".to_string(),
            volume_ml_per_unit: Some(dec!(750)),
            strength_pct: Some(dec!(63)),
            quantity: Some(12),
            engine_size_cc: None,
            model_year: None,
            has_liquor_license: false,
            is_first_time_owner: false,
            is_returning_resident: false,
            has_disability_exemption: false,
            is_antique: false,
            used_tire_count: 0,
        }
    }

    #[test]
    fn test_warning_order_is_rule_declaration_order() {
        let schedule = RateSchedule::bahamas_2026();
        let decl = spirits_declaration();
        let ctx = WarningContext {
            requires_permit: true,
            total_litres: Some(dec!(11)),
            vehicle_age: None,
        };
        let warnings = generate_warnings(&schedule, &decl, &ctx);
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("High ABV"));
        assert!(warnings[1].contains("personal use allowance"));
        assert!(warnings[2].contains("Import permit required for spirits"));
    }

    #[test]
    fn test_rules_are_independent() {
        // Removing the permit condition must not change the other warnings.
        let schedule = RateSchedule::bahamas_2026();
        let decl = spirits_declaration();
        let with_permit = generate_warnings(
            &schedule,
            &decl,
            &WarningContext {
                requires_permit: true,
                total_litres: Some(dec!(11)),
                vehicle_age: None,
            },
        );
        let without_permit = generate_warnings(
            &schedule,
            &decl,
            &WarningContext {
                requires_permit: false,
                total_litres: Some(dec!(11)),
                vehicle_age: None,
            },
        );
        assert_eq!(with_permit.len(), without_permit.len() + 1);
        assert!(with_permit
            .iter()
            .filter(|w| !w.contains("permit"))
            .eq(without_permit.iter()));
    }

    #[test]
    fn test_licensed_importer_skips_volume_warning() {
        let schedule = RateSchedule::bahamas_2026();
        let mut decl = spirits_declaration();
        decl.has_liquor_license = true;
        let warnings = generate_warnings(
            &schedule,
            &decl,
            &WarningContext {
                requires_permit: false,
                total_litres: Some(dec!(11)),
                vehicle_age: None,
            },
        );
        assert!(warnings.iter().all(|w| !w.contains("personal use")));
    }

    #[test]
    fn test_high_value_shipment_flagged() {
        let schedule = RateSchedule::bahamas_2026();
        let mut decl = spirits_declaration();
        decl.cif_value = dec!(5000.01);
        decl.strength_pct = Some(dec!(40));
        let warnings = generate_warnings(&schedule, &decl, &WarningContext::default());
        assert!(warnings.iter().any(|w| w.contains("High value shipment")));
    }

    #[test]
    fn test_old_vehicle_needs_ministry_approval_unless_antique() {
        let schedule = RateSchedule::bahamas_2026();
        let mut decl = spirits_declaration();
        decl.category = CommodityCategory::Vehicle(VehicleType::Gasoline);
        decl.strength_pct = None;
        decl.volume_ml_per_unit = None;
        decl.quantity = None;
        decl.engine_size_cc = Some(2400);
        decl.model_year = Some(2014);

        let ctx = WarningContext {
            requires_permit: false,
            total_litres: None,
            vehicle_age: Some(12),
        };
        let warnings = generate_warnings(&schedule, &decl, &ctx);
        assert!(warnings.iter().any(|w| w.contains("Ministry of Finance")));

        decl.is_antique = true;
        let warnings = generate_warnings(&schedule, &decl, &ctx);
        assert!(warnings.iter().all(|w| !w.contains("Ministry of Finance")));
        assert!(warnings.iter().any(|w| w.contains("Antique vehicle")));
    }

    #[test]
    fn test_implausible_displacement_is_a_warning_not_an_error() {
        let schedule = RateSchedule::bahamas_2026();
        let mut decl = spirits_declaration();
        decl.category = CommodityCategory::Vehicle(VehicleType::Gasoline);
        decl.strength_pct = None;
        decl.volume_ml_per_unit = None;
        decl.quantity = None;
        decl.engine_size_cc = Some(25_000);
        decl.model_year = Some(2024);
        let warnings = generate_warnings(
            &schedule,
            &decl,
            &WarningContext {
                requires_permit: false,
                total_litres: None,
                vehicle_age: Some(2),
            },
        );
        assert!(warnings.iter().any(|w| w.contains("check data entry")));
    }
}

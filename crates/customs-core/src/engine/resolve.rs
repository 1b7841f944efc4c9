//! Tier resolution: first tier whose declared predicates all hold, in
//! schedule-declaration order. Tier lists are hand-ordered so that more
//! specific rows come first; that ordering is authoritative and must not
//! be re-sorted.

use crate::error::CustomsError;
use crate::schedule::{RateTier, VehicleRateCard};
use crate::types::Money;
use crate::CustomsResult;

/// Select the single applicable tier for a vehicle. A well-formed schedule
/// covers the whole input domain; a gap is a configuration defect and the
/// resolver fails closed rather than defaulting to an arbitrary row, which
/// would misstate a legal duty obligation.
pub fn resolve_vehicle_tier<'a>(
    card: &'a VehicleRateCard,
    cif_value: Money,
    engine_size_cc: Option<u32>,
    age: i32,
) -> CustomsResult<&'a RateTier> {
    card.tiers
        .iter()
        .find(|tier| tier_matches(tier, cif_value, engine_size_cc, age))
        .ok_or_else(|| {
            CustomsError::ScheduleGap(format!(
                "no tier in '{}' matches value {}, engine {:?}, age {}",
                card.description, cif_value, engine_size_cc, age
            ))
        })
}

/// All declared predicates must hold (logical AND). Bounds are inclusive.
/// A tier that predicates on engine size cannot match a declaration with
/// no engine.
fn tier_matches(tier: &RateTier, cif_value: Money, engine_size_cc: Option<u32>, age: i32) -> bool {
    if let Some(min) = tier.min_value {
        if cif_value < min {
            return false;
        }
    }
    if let Some(max) = tier.max_value {
        if cif_value > max {
            return false;
        }
    }

    if tier.min_engine_cc.is_some() || tier.max_engine_cc.is_some() {
        let Some(cc) = engine_size_cc else {
            return false;
        };
        if let Some(min) = tier.min_engine_cc {
            if cc < min {
                return false;
            }
        }
        if let Some(max) = tier.max_engine_cc {
            if cc > max {
                return false;
            }
        }
    }

    if let Some(min) = tier.min_age {
        if age < min {
            return false;
        }
    }
    if let Some(max) = tier.max_age {
        if age > max {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::VehicleSchedule;
    use rust_decimal_macros::dec;

    #[test]
    fn test_small_engine_resolves_to_45_percent() {
        let schedule = VehicleSchedule::bahamas_2026();
        let tier = resolve_vehicle_tier(&schedule.gasoline, dec!(25000), Some(1200), 2).unwrap();
        assert_eq!(tier.rate, dec!(0.45));
        assert!(tier.label.contains("Small"));
    }

    #[test]
    fn test_medium_engine_splits_on_value() {
        let schedule = VehicleSchedule::bahamas_2026();
        let cheap = resolve_vehicle_tier(&schedule.gasoline, dec!(35000), Some(1800), 3).unwrap();
        assert_eq!(cheap.rate, dec!(0.45));
        let dear = resolve_vehicle_tier(&schedule.gasoline, dec!(60000), Some(1998), 2).unwrap();
        assert_eq!(dear.rate, dec!(0.65));
    }

    #[test]
    fn test_engine_boundaries_are_inclusive() {
        let schedule = VehicleSchedule::bahamas_2026();
        // 1,499 cc is still small; 1,500 cc and 2,000 cc are medium;
        // 2,001 cc is large.
        let t = resolve_vehicle_tier(&schedule.gasoline, dec!(20000), Some(1499), 0).unwrap();
        assert!(t.label.contains("Small"));
        let t = resolve_vehicle_tier(&schedule.gasoline, dec!(20000), Some(1500), 0).unwrap();
        assert!(t.label.contains("Medium"));
        let t = resolve_vehicle_tier(&schedule.gasoline, dec!(20000), Some(2000), 0).unwrap();
        assert!(t.label.contains("Medium"));
        let t = resolve_vehicle_tier(&schedule.gasoline, dec!(20000), Some(2001), 0).unwrap();
        assert!(t.label.contains("Large"));
    }

    #[test]
    fn test_electric_value_boundary_belongs_to_low_tier() {
        let schedule = VehicleSchedule::bahamas_2026();
        let at = resolve_vehicle_tier(&schedule.electric, dec!(50000), None, 0).unwrap();
        assert_eq!(at.rate, dec!(0.10));
        let above = resolve_vehicle_tier(&schedule.electric, dec!(50000.01), None, 0).unwrap();
        assert_eq!(above.rate, dec!(0.25));
    }

    #[test]
    fn test_first_matching_tier_wins_on_overlap() {
        use crate::schedule::{RateTier, VehicleRateCard};
        // Both rows cover the whole domain; declaration order breaks the tie.
        let card = VehicleRateCard {
            hs_code: "8703.23".to_string(),
            description: "overlap fixture".to_string(),
            tiers: vec![
                RateTier {
                    label: "first".to_string(),
                    min_value: None,
                    max_value: None,
                    min_engine_cc: None,
                    max_engine_cc: None,
                    min_age: None,
                    max_age: None,
                    rate: dec!(0.30),
                    requires_permit: false,
                },
                RateTier {
                    label: "second".to_string(),
                    min_value: None,
                    max_value: None,
                    min_engine_cc: None,
                    max_engine_cc: None,
                    min_age: None,
                    max_age: None,
                    rate: dec!(0.99),
                    requires_permit: false,
                },
            ],
        };
        let tier = resolve_vehicle_tier(&card, dec!(10000), Some(1600), 1).unwrap();
        assert_eq!(tier.label, "first");
    }

    #[test]
    fn test_age_zero_resolves_to_standard_tier() {
        use crate::schedule::{RateTier, VehicleRateCard};
        // A schedule that splits rows on age: the current model year (age 0)
        // must land in the standard row, not the over-age row.
        let card = VehicleRateCard {
            hs_code: "8703.23".to_string(),
            description: "age fixture".to_string(),
            tiers: vec![
                RateTier {
                    label: "standard".to_string(),
                    min_value: None,
                    max_value: None,
                    min_engine_cc: None,
                    max_engine_cc: None,
                    min_age: Some(0),
                    max_age: Some(10),
                    rate: dec!(0.45),
                    requires_permit: false,
                },
                RateTier {
                    label: "over-age".to_string(),
                    min_value: None,
                    max_value: None,
                    min_engine_cc: None,
                    max_engine_cc: None,
                    min_age: Some(11),
                    max_age: None,
                    rate: dec!(0.65),
                    requires_permit: false,
                },
            ],
        };
        let tier = resolve_vehicle_tier(&card, dec!(30000), Some(1800), 0).unwrap();
        assert_eq!(tier.label, "standard");
    }

    #[test]
    fn test_schedule_gap_fails_closed() {
        use crate::schedule::{RateTier, VehicleRateCard};
        let card = VehicleRateCard {
            hs_code: "8703.23".to_string(),
            description: "gap fixture".to_string(),
            tiers: vec![RateTier {
                label: "only cheap".to_string(),
                min_value: None,
                max_value: Some(dec!(10000)),
                min_engine_cc: None,
                max_engine_cc: None,
                min_age: None,
                max_age: None,
                rate: dec!(0.45),
                requires_permit: false,
            }],
        };
        let err = resolve_vehicle_tier(&card, dec!(10000.01), Some(1200), 0).unwrap_err();
        assert!(matches!(err, CustomsError::ScheduleGap(_)));
    }

    #[test]
    fn test_engine_predicate_never_matches_engineless_declaration() {
        let schedule = VehicleSchedule::bahamas_2026();
        let err = resolve_vehicle_tier(&schedule.gasoline, dec!(20000), None, 0).unwrap_err();
        assert!(matches!(err, CustomsError::ScheduleGap(_)));
    }
}

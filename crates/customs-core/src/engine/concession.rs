//! Concession application. Runs before the duty stack and only adjusts the
//! import-duty rate; levy, stamp duty, fee, and VAT formulas are untouched.

use rust_decimal::Decimal;

use crate::declaration::Declaration;
use crate::schedule::{ConcessionRule, Eligibility, Relief};
use crate::types::Rate;

/// The record of a concession that applied: the rule, the pre-override
/// baseline, and the effective rate after relief, floor, and clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedConcession {
    pub rule: String,
    pub baseline_rate: Rate,
    pub effective_rate: Rate,
}

/// Apply at most one concession rule to the standard import-duty rate.
/// Rules are evaluated in schedule-declaration order and the first match
/// wins; reductions never stack. The effective rate is bounded below by
/// the rule's floor and by zero, and never exceeds the baseline.
pub fn apply_concession(
    declaration: &Declaration,
    rules: &[ConcessionRule],
    base_rate: Rate,
) -> (Rate, Option<AppliedConcession>) {
    let Some(rule) = rules.iter().find(|r| is_eligible(declaration, r.eligibility)) else {
        return (base_rate, None);
    };

    let relieved = match &rule.relief {
        Relief::Replace(rate) => *rate,
        Relief::ReduceBy(points) => base_rate - *points,
        Relief::CapAt(cap) => base_rate.min(*cap),
    };
    let effective = relieved.max(rule.floor).max(Decimal::ZERO).min(base_rate);

    (
        effective,
        Some(AppliedConcession {
            rule: rule.label.clone(),
            baseline_rate: base_rate,
            effective_rate: effective,
        }),
    )
}

fn is_eligible(declaration: &Declaration, eligibility: Eligibility) -> bool {
    match eligibility {
        Eligibility::DisabilityExemption => declaration.has_disability_exemption,
        Eligibility::ReturningResident => declaration.is_returning_resident,
        Eligibility::FirstTimeOwner => declaration.is_first_time_owner,
        Eligibility::Antique => declaration.is_antique,
    }
}

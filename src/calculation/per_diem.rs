//! Per diem calculation functionality.
//!
//! This module sums the tax-free daily meal per diem over a week's
//! meal-plan choices. The per diem is added unconditionally, regardless of
//! hours or days worked, and is never taxed.

use rust_decimal::Decimal;

use crate::config::PayConfig;
use crate::error::EngineResult;
use crate::models::AuditStep;

/// The result of summing a week's per diem, including the audit step.
#[derive(Debug, Clone)]
pub struct PerDiemResult {
    /// The total per diem for the week.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Sums the per diem table lookups for the supplied meal-plan choices.
///
/// The function sums whatever sequence it receives: it does not check that
/// the number of choices matches the days worked. That invariant is the
/// caller's responsibility.
///
/// # Arguments
///
/// * `choices` - One meal-plan label per day worked, in day order
/// * `config` - The engine configuration holding the per diem table
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns `MealPlanNotFound` on the first label that is not in the table;
/// nothing is summed past that point.
///
/// # Examples
///
/// ```no_run
/// use paycheck_engine::calculation::calculate_per_diem;
/// use paycheck_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/hotwork")?;
/// let choices = vec!["Breakfast Only".to_string(), "Dinner Only".to_string()];
/// let result = calculate_per_diem(&choices, loader.config(), 1)?;
///
/// assert_eq!(result.amount, Decimal::from_str("38").unwrap());
/// # Ok::<(), paycheck_engine::error::EngineError>(())
/// ```
pub fn calculate_per_diem(
    choices: &[String],
    config: &PayConfig,
    step_number: u32,
) -> EngineResult<PerDiemResult> {
    let mut amount = Decimal::ZERO;
    for choice in choices {
        amount += config.get_meal_plan(choice)?.total();
    }

    let reasoning = if choices.is_empty() {
        "No per diem choices supplied, per diem is $0".to_string()
    } else {
        format!(
            "{} daily choices totalling ${}, added tax-free",
            choices.len(),
            amount.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "per_diem".to_string(),
        rule_name: "Meal Per Diem".to_string(),
        input: serde_json::json!({
            "choices": choices
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    Ok(PerDiemResult { amount, audit_step })
}

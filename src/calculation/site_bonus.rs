//! Site bonus calculation functionality.
//!
//! This module provides the per-day site bonus calculation: a fixed dollar
//! amount for each day the technician spends on site.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of calculating the weekly site bonus, including the audit step.
#[derive(Debug, Clone)]
pub struct SiteBonusResult {
    /// The total site bonus for the week.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the weekly site bonus from the per-day rate and days worked.
///
/// # Arguments
///
/// * `site_bonus_per_day` - The bonus paid for each day on site
/// * `days` - The number of days worked in the week
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use paycheck_engine::calculation::calculate_site_bonus;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_site_bonus(Decimal::from_str("45").unwrap(), 7, 1);
/// assert_eq!(result.amount, Decimal::from_str("315").unwrap());
/// ```
pub fn calculate_site_bonus(
    site_bonus_per_day: Decimal,
    days: u32,
    step_number: u32,
) -> SiteBonusResult {
    let units = Decimal::from(days);
    let amount = site_bonus_per_day * units;

    let audit_step = AuditStep {
        step_number,
        rule_id: "site_bonus".to_string(),
        rule_name: "Site Bonus".to_string(),
        input: serde_json::json!({
            "site_bonus_per_day": site_bonus_per_day.normalize().to_string(),
            "days": days
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} days × ${} = ${}",
            days,
            site_bonus_per_day.normalize(),
            amount.normalize()
        ),
    };

    SiteBonusResult { amount, audit_step }
}

//! Fluctuating-workweek overtime calculation functionality.
//!
//! Overtime is paid for hours beyond 40 in a week. Under the fluctuating
//! hours method the "regular rate" is the total weekly straight pay divided
//! by all hours worked (not just the first 40), and each overtime hour is
//! paid at half that rate. This divisor is the domain's business rule and is
//! preserved as-is.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Weekly overtime threshold in hours.
///
/// Hours strictly beyond this threshold are paid overtime; a week of
/// exactly 40 hours earns none.
pub const WEEKLY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// The overtime premium multiplier applied to the regular rate.
pub const FLUCTUATING_OVERTIME_PREMIUM: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// The result of the fluctuating-workweek overtime calculation.
///
/// # Example
///
/// ```
/// use paycheck_engine::calculation::calculate_fluctuating_overtime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let result = calculate_fluctuating_overtime(dec("50"), dec("1000"), 1);
///
/// // Regular rate $1000 / 50 h = $20/h; 10 OT hours at half rate.
/// assert_eq!(result.overtime_hours, dec("10"));
/// assert_eq!(result.overtime_pay, dec("100"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FluctuatingOvertimeResult {
    /// Hours beyond the weekly threshold (zero at or below it).
    pub overtime_hours: Decimal,
    /// The computed regular rate, present only when overtime applies.
    pub regular_rate: Option<Decimal>,
    /// The overtime pay for the week.
    pub overtime_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates fluctuating-workweek overtime for a week.
///
/// If `hours` is strictly greater than 40, the regular rate is
/// `straight_weekly_pay / hours` — dividing by ALL hours worked, including
/// the overtime hours — and overtime pay is `(hours - 40) * 0.5 * rate`.
/// At or below 40 hours, overtime pay is zero.
///
/// # Arguments
///
/// * `hours` - Total hours worked in the week
/// * `straight_weekly_pay` - Base weekly salary plus site bonus
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ## Exactly at the threshold (no overtime)
///
/// ```
/// use paycheck_engine::calculation::calculate_fluctuating_overtime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let result = calculate_fluctuating_overtime(dec("40"), dec("1015"), 1);
///
/// assert_eq!(result.overtime_hours, Decimal::ZERO);
/// assert_eq!(result.overtime_pay, Decimal::ZERO);
/// assert!(result.regular_rate.is_none());
/// ```
pub fn calculate_fluctuating_overtime(
    hours: Decimal,
    straight_weekly_pay: Decimal,
    step_number: u32,
) -> FluctuatingOvertimeResult {
    if hours <= WEEKLY_OVERTIME_THRESHOLD {
        let reasoning = if hours == WEEKLY_OVERTIME_THRESHOLD {
            format!(
                "{} hours worked equals the {} hour threshold, no overtime",
                hours.normalize(),
                WEEKLY_OVERTIME_THRESHOLD.normalize()
            )
        } else {
            format!(
                "{} hours worked is under the {} hour threshold, no overtime",
                hours.normalize(),
                WEEKLY_OVERTIME_THRESHOLD.normalize()
            )
        };

        let audit_step = AuditStep {
            step_number,
            rule_id: "fluctuating_overtime".to_string(),
            rule_name: "Fluctuating Workweek Overtime".to_string(),
            input: serde_json::json!({
                "hours": hours.normalize().to_string(),
                "straight_weekly_pay": straight_weekly_pay.normalize().to_string(),
                "threshold": WEEKLY_OVERTIME_THRESHOLD.normalize().to_string()
            }),
            output: serde_json::json!({
                "overtime_hours": "0",
                "overtime_pay": "0"
            }),
            reasoning,
        };

        return FluctuatingOvertimeResult {
            overtime_hours: Decimal::ZERO,
            regular_rate: None,
            overtime_pay: Decimal::ZERO,
            audit_step,
        };
    }

    // Regular rate divides by all hours worked, overtime hours included.
    let regular_rate = straight_weekly_pay / hours;
    let overtime_hours = hours - WEEKLY_OVERTIME_THRESHOLD;
    let overtime_pay = overtime_hours * FLUCTUATING_OVERTIME_PREMIUM * regular_rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "fluctuating_overtime".to_string(),
        rule_name: "Fluctuating Workweek Overtime".to_string(),
        input: serde_json::json!({
            "hours": hours.normalize().to_string(),
            "straight_weekly_pay": straight_weekly_pay.normalize().to_string(),
            "threshold": WEEKLY_OVERTIME_THRESHOLD.normalize().to_string()
        }),
        output: serde_json::json!({
            "regular_rate": regular_rate.round_dp(4).normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string(),
            "overtime_pay": overtime_pay.round_dp(2).normalize().to_string()
        }),
        reasoning: format!(
            "{} hours exceeds the {} hour threshold: regular rate ${}/h over all hours, {} overtime hours at half rate = ${}",
            hours.normalize(),
            WEEKLY_OVERTIME_THRESHOLD.normalize(),
            regular_rate.round_dp(4).normalize(),
            overtime_hours.normalize(),
            overtime_pay.round_dp(2).normalize()
        ),
    };

    FluctuatingOvertimeResult {
        overtime_hours,
        regular_rate: Some(regular_rate),
        overtime_pay,
        audit_step,
    }
}

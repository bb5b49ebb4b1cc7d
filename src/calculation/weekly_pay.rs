//! Weekly pay composition.
//!
//! This module composes the per-rule calculations (site bonus, fluctuating
//! overtime, per diem, flat tax) into the pay for a single week. The
//! composition is a pure function: identical inputs always produce an
//! identical [`WeekPay`].

use crate::calculation::{
    calculate_flat_tax, calculate_fluctuating_overtime, calculate_per_diem, calculate_site_bonus,
};
use crate::config::PayConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, PaySettings, WeekInput, WeekPay};

/// The calculated pay for a week together with its audit steps.
#[derive(Debug, Clone)]
pub struct WeeklyPayOutcome {
    /// The calculated week pay.
    pub pay: WeekPay,
    /// The audit steps emitted by each rule, in application order.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the pay for a single week.
///
/// Applies the rules in order:
/// 1. Site bonus: per-day bonus times days worked.
/// 2. Fluctuating-workweek overtime on base pay plus site bonus.
/// 3. Per diem: summed table lookups over the meal-plan choices, added
///    unconditionally and tax-free.
/// 4. Flat tax on the taxable gross; take-home is the net plus per diem.
///
/// The function performs no range validation: negative or out-of-range
/// inputs are the caller's concern, and the number of per diem choices is
/// summed as supplied.
///
/// # Errors
///
/// Returns `MealPlanNotFound` if any per diem choice is not in the table.
///
/// # Examples
///
/// ```no_run
/// use paycheck_engine::calculation::calculate_weekly_pay;
/// use paycheck_engine::config::ConfigLoader;
/// use paycheck_engine::models::{PaySettings, WeekInput};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let loader = ConfigLoader::load("./config/hotwork")?;
/// let settings = PaySettings {
///     base_weekly: dec("700"),
///     site_bonus_per_day: dec("45"),
///     tax_rate: dec("0.15"),
/// };
/// let week = WeekInput {
///     hours: dec("84"),
///     days: 7,
///     per_diem_choices: vec!["Breakfast + Lunch + Dinner".to_string(); 7],
/// };
///
/// let outcome = calculate_weekly_pay(&week, &settings, loader.config(), 1)?;
/// assert_eq!(outcome.pay.per_diem, dec("378"));
/// # Ok::<(), paycheck_engine::error::EngineError>(())
/// ```
pub fn calculate_weekly_pay(
    week: &WeekInput,
    settings: &PaySettings,
    config: &PayConfig,
    step_number: u32,
) -> EngineResult<WeeklyPayOutcome> {
    let mut audit_steps = Vec::with_capacity(4);
    let mut step = step_number;

    let base_pay = settings.base_weekly;

    let bonus = calculate_site_bonus(settings.site_bonus_per_day, week.days, step);
    audit_steps.push(bonus.audit_step);
    step += 1;

    let overtime = calculate_fluctuating_overtime(week.hours, base_pay + bonus.amount, step);
    audit_steps.push(overtime.audit_step);
    step += 1;

    let taxable_gross = base_pay + bonus.amount + overtime.overtime_pay;

    let per_diem = calculate_per_diem(&week.per_diem_choices, config, step)?;
    audit_steps.push(per_diem.audit_step);
    step += 1;

    let tax = calculate_flat_tax(taxable_gross, settings.tax_rate, step);
    audit_steps.push(tax.audit_step);

    let pay = WeekPay {
        base_pay,
        site_bonus: bonus.amount,
        overtime_hours: overtime.overtime_hours,
        overtime_pay: overtime.overtime_pay,
        taxable_gross,
        per_diem: per_diem.amount,
        tax_withheld: tax.tax_withheld,
        after_tax: tax.net_pay + per_diem.amount,
    };

    Ok(WeeklyPayOutcome { pay, audit_steps })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EngineMeta, MealPlanRate};
    use crate::error::EngineError;
    use rust_decimal::Decimal;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_config() -> PayConfig {
        let mut meal_plans = HashMap::new();
        for (label, meals, incendiary) in [
            ("None", "0", "0"),
            ("Breakfast Only", "11", "4"),
            ("Breakfast + Lunch", "12", "8"),
            ("Breakfast + Lunch + Dinner", "41", "13"),
            ("Lunch + Dinner", "30", "9"),
            ("Dinner Only", "18", "5"),
        ] {
            meal_plans.insert(
                label.to_string(),
                MealPlanRate {
                    meals: dec(meals),
                    incendiary: dec(incendiary),
                },
            );
        }

        PayConfig::new(
            EngineMeta {
                name: "Test".to_string(),
                version: "2025-08-01".to_string(),
            },
            default_settings(),
            meal_plans,
            vec![],
        )
    }

    fn default_settings() -> PaySettings {
        PaySettings {
            base_weekly: dec("700"),
            site_bonus_per_day: dec("45"),
            tax_rate: dec("0.15"),
        }
    }

    fn full_week() -> WeekInput {
        WeekInput {
            hours: dec("84"),
            days: 7,
            per_diem_choices: vec!["Breakfast + Lunch + Dinner".to_string(); 7],
        }
    }

    #[test]
    fn test_reference_84_hour_week() {
        let config = create_test_config();
        let outcome = calculate_weekly_pay(&full_week(), &default_settings(), &config, 1).unwrap();
        let pay = outcome.pay;

        assert_eq!(pay.base_pay, dec("700"));
        assert_eq!(pay.site_bonus, dec("315"));
        assert_eq!(pay.overtime_hours, dec("44"));
        assert_eq!(pay.overtime_pay.round_dp(2), dec("265.83"));
        assert_eq!(pay.taxable_gross.round_dp(2), dec("1280.83"));
        assert_eq!(pay.per_diem, dec("378"));
        assert_eq!(pay.after_tax.round_dp(2), dec("1466.71"));
    }

    #[test]
    fn test_idle_week_earns_base_only() {
        let config = create_test_config();
        let settings = default_settings();
        let week = WeekInput::idle();

        let outcome = calculate_weekly_pay(&week, &settings, &config, 1).unwrap();
        let pay = outcome.pay;

        assert_eq!(pay.taxable_gross, dec("700"));
        assert_eq!(pay.per_diem, dec("0"));
        // 700 * (1 - 0.15)
        assert_eq!(pay.after_tax, dec("595.00"));
    }

    #[test]
    fn test_no_overtime_at_or_below_40_hours() {
        let config = create_test_config();
        let settings = default_settings();

        for hours in ["0", "25", "40"] {
            let week = WeekInput {
                hours: dec(hours),
                days: 5,
                per_diem_choices: vec!["None".to_string(); 5],
            };
            let outcome = calculate_weekly_pay(&week, &settings, &config, 1).unwrap();

            assert_eq!(outcome.pay.overtime_pay, dec("0"), "hours = {}", hours);
            assert_eq!(
                outcome.pay.taxable_gross,
                dec("700") + dec("45") * dec("5"),
                "hours = {}",
                hours
            );
        }
    }

    #[test]
    fn test_after_tax_identity() {
        let config = create_test_config();
        let settings = default_settings();
        let outcome = calculate_weekly_pay(&full_week(), &settings, &config, 1).unwrap();
        let pay = outcome.pay;

        assert_eq!(pay.tax_withheld, pay.taxable_gross * settings.tax_rate);
        assert_eq!(
            pay.after_tax,
            pay.taxable_gross - pay.tax_withheld + pay.per_diem
        );
        // The (1 - rate) form is algebraically identical; compare past the
        // 28-digit precision edge.
        assert_eq!(
            pay.after_tax.round_dp(10),
            (pay.taxable_gross * (Decimal::ONE - settings.tax_rate) + pay.per_diem).round_dp(10)
        );
    }

    #[test]
    fn test_per_diem_added_even_with_zero_hours() {
        // Per diem follows the choices, not the hours.
        let config = create_test_config();
        let week = WeekInput {
            hours: dec("0"),
            days: 2,
            per_diem_choices: vec!["Dinner Only".to_string(); 2],
        };

        let outcome = calculate_weekly_pay(&week, &default_settings(), &config, 1).unwrap();

        assert_eq!(outcome.pay.per_diem, dec("46"));
        assert_eq!(outcome.pay.taxable_gross, dec("790"));
    }

    #[test]
    fn test_identical_inputs_yield_identical_results() {
        let config = create_test_config();
        let settings = default_settings();
        let week = full_week();

        let first = calculate_weekly_pay(&week, &settings, &config, 1).unwrap();
        let second = calculate_weekly_pay(&week, &settings, &config, 1).unwrap();

        assert_eq!(first.pay, second.pay);
    }

    #[test]
    fn test_unknown_meal_plan_propagates() {
        let config = create_test_config();
        let week = WeekInput {
            hours: dec("40"),
            days: 1,
            per_diem_choices: vec!["Elevenses".to_string()],
        };

        let result = calculate_weekly_pay(&week, &default_settings(), &config, 1);

        match result {
            Err(EngineError::MealPlanNotFound { label }) => assert_eq!(label, "Elevenses"),
            other => panic!("Expected MealPlanNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_emits_four_audit_steps_in_sequence() {
        let config = create_test_config();
        let outcome = calculate_weekly_pay(&full_week(), &default_settings(), &config, 3).unwrap();

        let ids: Vec<&str> = outcome
            .audit_steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec!["site_bonus", "fluctuating_overtime", "per_diem", "flat_tax"]
        );

        let numbers: Vec<u32> = outcome.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_outputs_non_negative_for_non_negative_inputs() {
        let config = create_test_config();
        let settings = default_settings();
        let week = WeekInput {
            hours: dec("55.25"),
            days: 6,
            per_diem_choices: vec!["Breakfast + Lunch".to_string(); 6],
        };

        let outcome = calculate_weekly_pay(&week, &settings, &config, 1).unwrap();
        let pay = outcome.pay;

        assert!(pay.taxable_gross >= Decimal::ZERO);
        assert!(pay.per_diem >= Decimal::ZERO);
        assert!(pay.after_tax >= Decimal::ZERO);
    }
}

//! Monthly scenario projection.
//!
//! Projects a configured month scenario by running the weekly calculation
//! for each of its four week shapes and summing the after-tax take-home.
//! Scenario weeks apply one meal plan uniformly across every worked day.

use rust_decimal::Decimal;

use crate::calculation::calculate_weekly_pay;
use crate::config::{PayConfig, Scenario};
use crate::error::EngineResult;
use crate::models::{AuditStep, PaySettings, ScenarioProjection, WeekInput};

/// A projected scenario together with its audit steps.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    /// The projection entry for this scenario.
    pub projection: ScenarioProjection,
    /// The audit steps from the four weekly calculations plus a summary step.
    pub audit_steps: Vec<AuditStep>,
}

/// Projects a single month scenario.
///
/// For each week shape in the scenario, the week's per diem sequence is the
/// scenario meal plan repeated once per day worked. The four weekly
/// after-tax figures are summed into the scenario total.
///
/// # Errors
///
/// Returns `MealPlanNotFound` if the scenario references a meal plan that
/// is not in the table. The shipped scenarios are valid by construction.
pub fn project_scenario(
    scenario: &Scenario,
    settings: &PaySettings,
    config: &PayConfig,
    step_number: u32,
) -> EngineResult<ScenarioOutcome> {
    let mut audit_steps = Vec::new();
    let mut step = step_number;
    let mut after_tax_total = Decimal::ZERO;

    for shape in &scenario.weeks {
        let week = WeekInput {
            hours: shape.hours,
            days: shape.days,
            per_diem_choices: vec![shape.per_diem.clone(); shape.days as usize],
        };

        let outcome = calculate_weekly_pay(&week, settings, config, step)?;
        step += outcome.audit_steps.len() as u32;
        audit_steps.extend(outcome.audit_steps);
        after_tax_total += outcome.pay.after_tax;
    }

    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "monthly_projection".to_string(),
        rule_name: "Monthly Projection".to_string(),
        input: serde_json::json!({
            "label": scenario.label,
            "weeks": scenario.weeks.len()
        }),
        output: serde_json::json!({
            "after_tax_total": after_tax_total.round_dp(2).normalize().to_string()
        }),
        reasoning: format!(
            "Summed after-tax take-home over {} weeks of '{}': ${}",
            scenario.weeks.len(),
            scenario.label,
            after_tax_total.round_dp(2).normalize()
        ),
    });

    Ok(ScenarioOutcome {
        projection: ScenarioProjection {
            label: scenario.label.clone(),
            after_tax_total,
        },
        audit_steps,
    })
}

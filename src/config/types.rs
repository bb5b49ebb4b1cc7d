//! Configuration types for the Paycheck Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::PaySettings;

/// Metadata about the engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMeta {
    /// The human-readable name of the calculator.
    pub name: String,
    /// The version or effective date of this configuration.
    pub version: String,
}

/// Engine configuration file structure (engine.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfigFile {
    /// Engine metadata.
    pub meta: EngineMeta,
    /// Default pay settings applied when a request omits them.
    pub defaults: PaySettings,
}

/// The daily per diem rate for one meal-plan label.
///
/// The daily amount is the sum of a meals component and an incendiary
/// component.
#[derive(Debug, Clone, Deserialize)]
pub struct MealPlanRate {
    /// The meals component of the daily rate.
    pub meals: Decimal,
    /// The incendiary component of the daily rate.
    pub incendiary: Decimal,
}

impl MealPlanRate {
    /// Returns the total daily per diem amount for this meal plan.
    pub fn total(&self) -> Decimal {
        self.meals + self.incendiary
    }
}

/// Per diem configuration file structure (per_diem.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct PerDiemConfig {
    /// Map of meal-plan label to its daily rate.
    pub meal_plans: HashMap<String, MealPlanRate>,
}

/// One week's shape within a monthly projection scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioWeek {
    /// Hours worked in the scenario week.
    pub hours: Decimal,
    /// Days worked in the scenario week.
    pub days: u32,
    /// The meal-plan label applied uniformly to every worked day.
    pub per_diem: String,
}

/// A monthly projection scenario: four week shapes under one label.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// The scenario label, e.g. "Heavy Month (28 Days)".
    pub label: String,
    /// The four weeks making up the scenario month.
    pub weeks: Vec<ScenarioWeek>,
}

/// Scenarios configuration file structure (scenarios.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct ScenariosConfig {
    /// The configured scenarios, in display order.
    pub scenarios: Vec<Scenario>,
}

/// The complete engine configuration.
///
/// Aggregates metadata, default settings, the per diem table, and the
/// monthly scenarios. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct PayConfig {
    meta: EngineMeta,
    defaults: PaySettings,
    meal_plans: HashMap<String, MealPlanRate>,
    scenarios: Vec<Scenario>,
}

impl PayConfig {
    /// Creates a new configuration from its parts.
    pub fn new(
        meta: EngineMeta,
        defaults: PaySettings,
        meal_plans: HashMap<String, MealPlanRate>,
        scenarios: Vec<Scenario>,
    ) -> Self {
        Self {
            meta,
            defaults,
            meal_plans,
            scenarios,
        }
    }

    /// Returns the engine metadata.
    pub fn meta(&self) -> &EngineMeta {
        &self.meta
    }

    /// Returns the default pay settings.
    pub fn defaults(&self) -> &PaySettings {
        &self.defaults
    }

    /// Returns the per diem meal-plan table.
    pub fn meal_plans(&self) -> &HashMap<String, MealPlanRate> {
        &self.meal_plans
    }

    /// Returns the configured monthly scenarios, in display order.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Looks up a meal plan by its label.
    ///
    /// # Errors
    ///
    /// Returns `MealPlanNotFound` if the label is not in the table.
    pub fn get_meal_plan(&self, label: &str) -> EngineResult<&MealPlanRate> {
        self.meal_plans
            .get(label)
            .ok_or_else(|| EngineError::MealPlanNotFound {
                label: label.to_string(),
            })
    }
}

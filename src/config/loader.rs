//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::PaySettings;

use super::types::{EngineConfigFile, EngineMeta, MealPlanRate, PayConfig, PerDiemConfig, Scenario, ScenariosConfig};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query the per diem table, default settings,
/// and monthly scenarios.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/hotwork/
/// ├── engine.yaml     # Metadata and default pay settings
/// ├── per_diem.yaml   # Meal-plan per diem table
/// └── scenarios.yaml  # Monthly projection scenarios
/// ```
///
/// # Example
///
/// ```no_run
/// use paycheck_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/hotwork").unwrap();
///
/// // Look up a per diem rate
/// let amount = loader.per_diem_amount("Breakfast Only").unwrap();
/// println!("Daily per diem: ${}", amount);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/hotwork")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use paycheck_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/hotwork")?;
    /// # Ok::<(), paycheck_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load engine.yaml
        let engine_path = path.join("engine.yaml");
        let engine_file = Self::load_yaml::<EngineConfigFile>(&engine_path)?;

        // Load per_diem.yaml
        let per_diem_path = path.join("per_diem.yaml");
        let per_diem = Self::load_yaml::<PerDiemConfig>(&per_diem_path)?;

        // Load scenarios.yaml
        let scenarios_path = path.join("scenarios.yaml");
        let scenarios = Self::load_yaml::<ScenariosConfig>(&scenarios_path)?;

        let config = PayConfig::new(
            engine_file.meta,
            engine_file.defaults,
            per_diem.meal_plans,
            scenarios.scenarios,
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &PayConfig {
        &self.config
    }

    /// Returns the engine metadata.
    pub fn meta(&self) -> &EngineMeta {
        self.config.meta()
    }

    /// Returns the default pay settings.
    pub fn defaults(&self) -> &PaySettings {
        self.config.defaults()
    }

    /// Returns the configured monthly scenarios, in display order.
    pub fn scenarios(&self) -> &[Scenario] {
        self.config.scenarios()
    }

    /// Looks up a meal plan by its label.
    ///
    /// # Arguments
    ///
    /// * `label` - The meal-plan label (e.g., "Breakfast Only")
    ///
    /// # Returns
    ///
    /// Returns the meal plan if found, or `MealPlanNotFound` error.
    pub fn get_meal_plan(&self, label: &str) -> EngineResult<&MealPlanRate> {
        self.config.get_meal_plan(label)
    }

    /// Returns the total daily per diem amount for a meal-plan label.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use paycheck_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/hotwork")?;
    /// let amount = loader.per_diem_amount("Lunch + Dinner")?;
    /// println!("Daily per diem: ${}", amount);
    /// # Ok::<(), paycheck_engine::error::EngineError>(())
    /// ```
    pub fn per_diem_amount(&self, label: &str) -> EngineResult<Decimal> {
        self.get_meal_plan(label).map(MealPlanRate::total)
    }
}

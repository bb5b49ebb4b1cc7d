//! Configuration loading and management for the Paycheck Engine.
//!
//! This module provides functionality to load engine configuration from YAML
//! files, including engine metadata, default pay settings, the per diem
//! meal-plan table, and the monthly projection scenarios.
//!
//! # Example
//!
//! ```no_run
//! use paycheck_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/hotwork").unwrap();
//! println!("Loaded engine config: {}", config.meta().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineMeta, MealPlanRate, PayConfig, Scenario, ScenarioWeek};

//! Core data models for the Paycheck Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod calculation_result;
mod pay;
mod settings;
mod week;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use calculation_result::CalculationResult;
pub use pay::{PeriodTotals, ScenarioProjection, WeekPay};
pub use settings::PaySettings;
pub use week::WeekInput;

//! Calculation logic for the Paycheck Engine.
//!
//! This module contains all the calculation functions for determining pay,
//! including site bonus calculation, fluctuating-workweek overtime, per diem
//! summation, flat-rate tax, the weekly pay composition, and the monthly
//! scenario projection.

mod monthly;
mod overtime;
mod per_diem;
mod site_bonus;
mod tax;
mod weekly_pay;

pub use monthly::{ScenarioOutcome, project_scenario};
pub use overtime::{
    FLUCTUATING_OVERTIME_PREMIUM, FluctuatingOvertimeResult, WEEKLY_OVERTIME_THRESHOLD,
    calculate_fluctuating_overtime,
};
pub use per_diem::{PerDiemResult, calculate_per_diem};
pub use site_bonus::{SiteBonusResult, calculate_site_bonus};
pub use tax::{FlatTaxResult, calculate_flat_tax};
pub use weekly_pay::{WeeklyPayOutcome, calculate_weekly_pay};

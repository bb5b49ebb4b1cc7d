//! Weekly input model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The inputs describing a single worked week.
///
/// `per_diem_choices` holds one meal-plan label per day worked, in day
/// order. Keeping its length equal to `days` is the caller's
/// responsibility: the calculation sums whatever sequence it receives.
///
/// # Example
///
/// ```
/// use paycheck_engine::models::WeekInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let week = WeekInput {
///     hours: Decimal::from_str("84").unwrap(),
///     days: 7,
///     per_diem_choices: vec!["Breakfast + Lunch + Dinner".to_string(); 7],
/// };
/// assert_eq!(week.per_diem_choices.len() as u32, week.days);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekInput {
    /// Total hours worked in the week. May be fractional.
    pub hours: Decimal,
    /// Number of days worked, 0 through 7.
    pub days: u32,
    /// One meal-plan label per day worked, in day order.
    #[serde(default)]
    pub per_diem_choices: Vec<String>,
}

impl WeekInput {
    /// Creates a week with no hours, no days, and no per diem.
    pub fn idle() -> Self {
        Self {
            hours: Decimal::ZERO,
            days: 0,
            per_diem_choices: Vec::new(),
        }
    }
}

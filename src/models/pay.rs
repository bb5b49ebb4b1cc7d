//! Calculated pay models.
//!
//! This module contains the per-week pay breakdown, the combined pay-period
//! totals, and the monthly scenario projection entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The calculated pay for a single week.
///
/// Captures the three headline figures (taxable gross, per diem, after-tax
/// take-home) along with the intermediate components that produced them.
///
/// # Example
///
/// ```
/// use paycheck_engine::models::WeekPay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let pay = WeekPay {
///     base_pay: dec("700"),
///     site_bonus: dec("315"),
///     overtime_hours: dec("0"),
///     overtime_pay: dec("0"),
///     taxable_gross: dec("1015"),
///     per_diem: dec("378"),
///     tax_withheld: dec("152.25"),
///     after_tax: dec("1240.75"),
/// };
/// assert_eq!(pay.taxable_gross, pay.base_pay + pay.site_bonus + pay.overtime_pay);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPay {
    /// The fixed weekly base salary.
    pub base_pay: Decimal,
    /// Total site bonus for the week (per-day bonus times days worked).
    pub site_bonus: Decimal,
    /// Hours beyond the weekly overtime threshold (zero at or below it).
    pub overtime_hours: Decimal,
    /// Overtime pay under the fluctuating-workweek method.
    pub overtime_pay: Decimal,
    /// Base pay plus site bonus plus overtime pay, before tax.
    pub taxable_gross: Decimal,
    /// Tax-free per diem total for the week.
    pub per_diem: Decimal,
    /// Flat-rate tax withheld from the taxable gross.
    pub tax_withheld: Decimal,
    /// Take-home: taxable gross minus tax, plus untaxed per diem.
    pub after_tax: Decimal,
}

/// Combined totals for the two-week pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Sum of taxable gross across the period's weeks.
    pub taxable_gross: Decimal,
    /// Sum of per diem across the period's weeks.
    pub per_diem: Decimal,
    /// Sum of after-tax take-home across the period's weeks.
    pub after_tax: Decimal,
}

/// A single entry in the monthly projection table.
///
/// One entry per configured scenario, carrying the scenario label and the
/// summed after-tax take-home for its four weeks. The entries are emitted
/// in configuration order, ready to feed a bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioProjection {
    /// The scenario label, e.g. "Heavy Month (28 Days)".
    pub label: String,
    /// After-tax take-home summed over the scenario's four weeks.
    pub after_tax_total: Decimal,
}

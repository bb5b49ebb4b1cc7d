//! Pay settings shared by every weekly calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The operator-supplied pay settings applied to every week.
///
/// All three fields are plain scalars; the engine treats them as opaque
/// inputs and performs no range validation here. The API layer constrains
/// ranges before invoking the calculation.
///
/// # Example
///
/// ```
/// use paycheck_engine::models::PaySettings;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let settings = PaySettings {
///     base_weekly: Decimal::from_str("700").unwrap(),
///     site_bonus_per_day: Decimal::from_str("45").unwrap(),
///     tax_rate: Decimal::from_str("0.15").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaySettings {
    /// The fixed base salary paid per week, before bonuses.
    pub base_weekly: Decimal,
    /// The site bonus paid for each day worked.
    pub site_bonus_per_day: Decimal,
    /// The flat tax rate as a fraction in [0, 1].
    pub tax_rate: Decimal,
}

//! Flat-rate tax calculation functionality.
//!
//! The engine approximates withholding with a single flat rate applied to
//! the taxable gross. The per diem is never taxed and is added back after
//! withholding.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of applying the flat tax, including the audit step.
#[derive(Debug, Clone)]
pub struct FlatTaxResult {
    /// The amount withheld from the taxable gross.
    pub tax_withheld: Decimal,
    /// The taxable gross after withholding, before per diem.
    pub net_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies the flat tax rate to a taxable gross.
///
/// # Arguments
///
/// * `taxable_gross` - Base pay plus site bonus plus overtime pay
/// * `tax_rate` - The flat rate as a fraction in [0, 1]
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use paycheck_engine::calculation::calculate_flat_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let result = calculate_flat_tax(dec("1000"), dec("0.15"), 1);
///
/// assert_eq!(result.tax_withheld, dec("150"));
/// assert_eq!(result.net_pay, dec("850"));
/// ```
pub fn calculate_flat_tax(
    taxable_gross: Decimal,
    tax_rate: Decimal,
    step_number: u32,
) -> FlatTaxResult {
    let tax_withheld = taxable_gross * tax_rate;
    let net_pay = taxable_gross - tax_withheld;

    let audit_step = AuditStep {
        step_number,
        rule_id: "flat_tax".to_string(),
        rule_name: "Flat Tax".to_string(),
        input: serde_json::json!({
            "taxable_gross": taxable_gross.round_dp(2).normalize().to_string(),
            "tax_rate": tax_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "tax_withheld": tax_withheld.round_dp(2).normalize().to_string(),
            "net_pay": net_pay.round_dp(2).normalize().to_string()
        }),
        reasoning: format!(
            "${} taxable gross at flat rate {} withholds ${}",
            taxable_gross.round_dp(2).normalize(),
            tax_rate.normalize(),
            tax_withheld.round_dp(2).normalize()
        ),
    };

    FlatTaxResult {
        tax_withheld,
        net_pay,
        audit_step,
    }
}

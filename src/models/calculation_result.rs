//! Calculation result model for the Paycheck Engine.
//!
//! This module contains the [`CalculationResult`] type that captures all
//! outputs of a pay-period calculation: the per-week breakdowns, the
//! combined period totals, the monthly scenario projection, and the audit
//! trace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditTrace, PeriodTotals, ScenarioProjection, WeekPay};

/// The complete result of a pay-period calculation.
///
/// # Example
///
/// ```
/// use paycheck_engine::models::{AuditTrace, CalculationResult, PeriodTotals};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = CalculationResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     weeks: vec![],
///     totals: PeriodTotals {
///         taxable_gross: Decimal::ZERO,
///         per_diem: Decimal::ZERO,
///         after_tax: Decimal::ZERO,
///     },
///     monthly_projection: vec![],
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Per-week pay breakdowns, in the order the weeks were submitted.
    pub weeks: Vec<WeekPay>,
    /// Combined totals for the pay period.
    pub totals: PeriodTotals,
    /// After-tax projection for each configured monthly scenario.
    pub monthly_projection: Vec<ScenarioProjection>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

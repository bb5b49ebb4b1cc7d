//! Request types for the Paycheck Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PaySettings, WeekInput};

/// Request body for the `/calculate` endpoint.
///
/// Contains the pay settings and the two pay-period weeks. Any settings
/// field left out falls back to the configured default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The pay settings, field-by-field optional.
    #[serde(default)]
    pub settings: SettingsRequest,
    /// The weeks making up the pay period.
    pub weeks: Vec<WeekRequest>,
}

/// Pay settings in a calculation request.
///
/// Every field is optional; missing fields resolve to the configured
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsRequest {
    /// The fixed base salary paid per week.
    #[serde(default)]
    pub base_weekly: Option<Decimal>,
    /// The site bonus paid for each day worked.
    #[serde(default)]
    pub site_bonus_per_day: Option<Decimal>,
    /// The flat tax rate as a fraction in [0, 1].
    #[serde(default)]
    pub tax_rate: Option<Decimal>,
}

impl SettingsRequest {
    /// Resolves the request against the configured defaults.
    pub fn resolve(&self, defaults: &PaySettings) -> PaySettings {
        PaySettings {
            base_weekly: self.base_weekly.unwrap_or(defaults.base_weekly),
            site_bonus_per_day: self
                .site_bonus_per_day
                .unwrap_or(defaults.site_bonus_per_day),
            tax_rate: self.tax_rate.unwrap_or(defaults.tax_rate),
        }
    }
}

/// One week's inputs in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekRequest {
    /// Total hours worked in the week.
    pub hours: Decimal,
    /// Number of days worked, 0 through 7.
    pub days: u32,
    /// One meal-plan label per day worked, in day order.
    #[serde(default)]
    pub per_diem_choices: Vec<String>,
}

impl From<WeekRequest> for WeekInput {
    fn from(req: WeekRequest) -> Self {
        WeekInput {
            hours: req.hours,
            days: req.days,
            per_diem_choices: req.per_diem_choices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "settings": {
                "base_weekly": "700",
                "site_bonus_per_day": "45",
                "tax_rate": "0.15"
            },
            "weeks": [
                {
                    "hours": "84",
                    "days": 7,
                    "per_diem_choices": [
                        "Breakfast + Lunch + Dinner",
                        "Breakfast + Lunch + Dinner",
                        "Breakfast + Lunch + Dinner",
                        "Breakfast + Lunch + Dinner",
                        "Breakfast + Lunch + Dinner",
                        "Breakfast + Lunch + Dinner",
                        "Breakfast + Lunch + Dinner"
                    ]
                },
                { "hours": "0", "days": 0, "per_diem_choices": [] }
            ]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.settings.base_weekly, Some(dec("700")));
        assert_eq!(request.weeks.len(), 2);
        assert_eq!(request.weeks[0].days, 7);
        assert!(request.weeks[1].per_diem_choices.is_empty());
    }

    #[test]
    fn test_settings_default_to_none_when_omitted() {
        let json = r#"{
            "weeks": [
                { "hours": "40", "days": 5 },
                { "hours": "0", "days": 0 }
            ]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert!(request.settings.base_weekly.is_none());
        assert!(request.settings.site_bonus_per_day.is_none());
        assert!(request.settings.tax_rate.is_none());
    }

    #[test]
    fn test_resolve_fills_missing_fields_from_defaults() {
        let defaults = PaySettings {
            base_weekly: dec("700"),
            site_bonus_per_day: dec("45"),
            tax_rate: dec("0.15"),
        };

        let request = SettingsRequest {
            base_weekly: Some(dec("850")),
            site_bonus_per_day: None,
            tax_rate: None,
        };

        let resolved = request.resolve(&defaults);
        assert_eq!(resolved.base_weekly, dec("850"));
        assert_eq!(resolved.site_bonus_per_day, dec("45"));
        assert_eq!(resolved.tax_rate, dec("0.15"));
    }

    #[test]
    fn test_week_request_conversion() {
        let req = WeekRequest {
            hours: dec("60"),
            days: 5,
            per_diem_choices: vec!["Lunch + Dinner".to_string(); 5],
        };

        let week: WeekInput = req.into();
        assert_eq!(week.hours, dec("60"));
        assert_eq!(week.days, 5);
        assert_eq!(week.per_diem_choices.len(), 5);
    }
}

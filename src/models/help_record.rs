//! Help (inter-location staff loan) records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ForecastPeriod;
use crate::error::{EngineError, EngineResult};

/// An arrangement lending an employee from their home location to another
/// location for a month.
///
/// The deduction and addition percentages are independent: the first is
/// removed from the home location's credited revenue, the second is credited
/// to the receiving location. An employee may carry several records in the
/// same month, each to a different receiving location.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use salon_forecast::models::HelpRecord;
///
/// let help = HelpRecord {
///     id: "help_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     year: 2026,
///     month: 1,
///     from_location_id: "shibuya".to_string(),
///     to_location_id: "ginza".to_string(),
///     deduction_percent: Decimal::new(10, 0),
///     addition_percent: Decimal::new(125, 1),
/// };
/// assert!(help.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The lent employee.
    pub employee_id: String,
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// The employee's home location when the record was made.
    pub from_location_id: String,
    /// The receiving location.
    pub to_location_id: String,
    /// Percentage of baseline revenue removed from the home location (0-100).
    pub deduction_percent: Decimal,
    /// Percentage of baseline revenue credited to the receiving location (0-100).
    pub addition_percent: Decimal,
}

impl HelpRecord {
    /// Returns true if this record belongs to the employee in the period.
    pub fn applies_to(&self, employee_id: &str, period: ForecastPeriod) -> bool {
        self.employee_id == employee_id && period.matches(self.year, self.month)
    }

    /// Checks that both percentages are within 0..=100.
    pub fn validate(&self) -> EngineResult<()> {
        check_percent(&self.id, "deduction_percent", self.deduction_percent)?;
        check_percent(&self.id, "addition_percent", self.addition_percent)
    }
}

fn check_percent(help_id: &str, field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(EngineError::InvalidPercentage {
            help_id: help_id.to_string(),
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

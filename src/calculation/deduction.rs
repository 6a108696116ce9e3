//! Help deduction against the home location.
//!
//! An employee's deduction percentages are summed across all of their help
//! records in the period. Sums above 100% are handled according to the
//! configured [`DeductionOverflowPolicy`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::rounding::scale_sales;
use crate::error::{EngineError, EngineResult};
use crate::models::SalesBreakdown;

/// What to do when an employee's combined deductions exceed 100%.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionOverflowPolicy {
    /// Apply the deduction as is; adjusted sales go negative.
    #[default]
    Allow,
    /// Floor the remaining share at zero.
    Clamp,
    /// Fail the forecast.
    Reject,
}

/// Applies a combined deduction percentage to an employee's baseline sales.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use salon_forecast::calculation::{apply_deduction, DeductionOverflowPolicy};
/// use salon_forecast::models::SalesBreakdown;
///
/// let adjusted = apply_deduction(
///     SalesBreakdown::new(500_000, 30_000),
///     Decimal::new(25, 0),
///     DeductionOverflowPolicy::Allow,
///     "emp_001",
/// )
/// .unwrap();
/// assert_eq!(adjusted, SalesBreakdown::new(375_000, 22_500));
/// ```
pub fn apply_deduction(
    base: SalesBreakdown,
    total_percent: Decimal,
    policy: DeductionOverflowPolicy,
    employee_id: &str,
) -> EngineResult<SalesBreakdown> {
    let mut remaining = Decimal::ONE - total_percent / Decimal::ONE_HUNDRED;

    if total_percent > Decimal::ONE_HUNDRED {
        match policy {
            DeductionOverflowPolicy::Allow => {
                warn!(
                    employee_id,
                    total_percent = %total_percent,
                    "Help deductions exceed 100%, adjusted sales will be negative"
                );
            }
            DeductionOverflowPolicy::Clamp => {
                remaining = remaining.max(Decimal::ZERO);
            }
            DeductionOverflowPolicy::Reject => {
                return Err(EngineError::DeductionExceedsLimit {
                    employee_id: employee_id.to_string(),
                    total_percent,
                });
            }
        }
    }

    scale_sales(base, remaining)
}

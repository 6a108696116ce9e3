//! Rounding of scaled revenue into whole currency units.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::SalesBreakdown;

/// Rounds a scaled amount to the nearest whole unit, halves away from zero.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use salon_forecast::calculation::round_amount;
///
/// assert_eq!(round_amount(Decimal::new(25, 1)).unwrap(), 3);
/// assert_eq!(round_amount(Decimal::new(-25, 1)).unwrap(), -3);
/// assert_eq!(round_amount(Decimal::new(249, 2)).unwrap(), 2);
/// ```
pub fn round_amount(value: Decimal) -> EngineResult<i64> {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("amount {} does not fit in a whole currency amount", value),
        })
}

/// Multiplies both streams by `factor`, rounding each independently.
pub fn scale_sales(sales: SalesBreakdown, factor: Decimal) -> EngineResult<SalesBreakdown> {
    let treatment = round_amount(scale_amount(sales.treatment, factor)?)?;
    let retail = round_amount(scale_amount(sales.retail, factor)?)?;
    SalesBreakdown::try_new(treatment, retail)
}

fn scale_amount(amount: i64, factor: Decimal) -> EngineResult<Decimal> {
    Decimal::from(amount)
        .checked_mul(factor)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("amount {} scaled by {} overflows", amount, factor),
        })
}

/// Takes `percent`% of both streams, rounding each independently.
pub fn percent_of(sales: SalesBreakdown, percent: Decimal) -> EngineResult<SalesBreakdown> {
    scale_sales(sales, percent / Decimal::ONE_HUNDRED)
}

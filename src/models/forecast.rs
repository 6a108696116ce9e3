//! Forecast result models.
//!
//! This module contains the [`ForecastReport`] type and its associated
//! structures that capture every output of a forecast run: per-employee
//! detail, per-location totals before and after help transfers, and
//! diagnostics about inputs the engine had to skip.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ForecastPeriod, Rank, Role};
use crate::calculation::SeasonCategory;
use crate::error::{EngineError, EngineResult};

/// Treatment and retail revenue with their sum.
///
/// Amounts can come from caller-supplied standards, so combining
/// breakdowns is checked: overflow surfaces as
/// [`EngineError::CalculationError`] instead of wrapping.
///
/// # Example
///
/// ```
/// use salon_forecast::models::SalesBreakdown;
///
/// let sales = SalesBreakdown::new(450_000, 27_000)
///     .checked_add(SalesBreakdown::new(50_000, 3_000))
///     .unwrap();
/// assert_eq!(sales.total, 530_000);
///
/// assert!(SalesBreakdown::try_new(i64::MAX, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesBreakdown {
    /// Treatment revenue.
    pub treatment: i64,
    /// Retail revenue.
    pub retail: i64,
    /// Treatment plus retail revenue.
    pub total: i64,
}

fn amount_overflow(operation: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("sales amount overflow while {}", operation),
    }
}

impl SalesBreakdown {
    /// A breakdown with every figure at zero.
    pub const ZERO: SalesBreakdown = SalesBreakdown {
        treatment: 0,
        retail: 0,
        total: 0,
    };

    /// Creates a breakdown from known-small amounts.
    ///
    /// # Panics
    ///
    /// Panics if the total does not fit in an `i64`. Use [`Self::try_new`]
    /// for amounts that come from input.
    pub fn new(treatment: i64, retail: i64) -> Self {
        Self {
            treatment,
            retail,
            total: treatment + retail,
        }
    }

    /// Creates a breakdown, deriving the total from the two streams.
    pub fn try_new(treatment: i64, retail: i64) -> EngineResult<Self> {
        let total = treatment
            .checked_add(retail)
            .ok_or_else(|| amount_overflow("totalling treatment and retail"))?;
        Ok(Self {
            treatment,
            retail,
            total,
        })
    }

    /// Adds two breakdowns stream by stream.
    pub fn checked_add(self, rhs: SalesBreakdown) -> EngineResult<SalesBreakdown> {
        let treatment = self
            .treatment
            .checked_add(rhs.treatment)
            .ok_or_else(|| amount_overflow("adding treatment"))?;
        let retail = self
            .retail
            .checked_add(rhs.retail)
            .ok_or_else(|| amount_overflow("adding retail"))?;
        SalesBreakdown::try_new(treatment, retail)
    }

    /// Sums breakdowns, zero for an empty iterator.
    pub fn checked_sum<I>(iter: I) -> EngineResult<SalesBreakdown>
    where
        I: IntoIterator<Item = SalesBreakdown>,
    {
        iter.into_iter()
            .try_fold(SalesBreakdown::ZERO, SalesBreakdown::checked_add)
    }
}

/// Revenue credited to a receiving location by one help record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpTransfer {
    /// The help record that produced this transfer.
    pub help_id: String,
    /// The receiving location.
    pub to_location_id: String,
    /// Percentage removed from the home location by this record.
    pub deduction_percent: Decimal,
    /// Percentage of baseline credited to the receiving location.
    pub addition_percent: Decimal,
    /// The amounts credited to the receiving location.
    pub addition: SalesBreakdown,
}

/// The forecast for one employee at their home location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeForecast {
    /// The employee's ID.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The employee's role.
    pub role: Role,
    /// The employee's rank.
    pub rank: Rank,
    /// The activity ratio applied to the baseline standard.
    pub activity_ratio: Decimal,
    /// Baseline revenue after activity scaling and promotion, before help deductions.
    pub base_sales: SalesBreakdown,
    /// Revenue credited to the home location after help deductions.
    pub adjusted_sales: SalesBreakdown,
    /// Combined deduction percentage across the employee's help records.
    pub help_deduction_percent: Decimal,
    /// Additions credited to receiving locations, one per help record.
    pub help_transfers: Vec<HelpTransfer>,
    /// True if the employee is fully excluded for the month.
    pub on_leave: bool,
}

/// The forecast for one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationForecast {
    /// The location's ID.
    pub location_id: String,
    /// The location's display name.
    pub location_name: String,
    /// Per-employee detail, in roster order.
    pub employee_forecasts: Vec<EmployeeForecast>,
    /// Sum of the home employees' adjusted sales.
    pub pre_help_sales: SalesBreakdown,
    /// Additions received from employees of any location helping here.
    pub help_received: SalesBreakdown,
    /// Pre-help sales plus help received.
    pub final_sales: SalesBreakdown,
}

/// An employee dropped from the forecast because no baseline standard matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingStandard {
    /// The dropped employee.
    pub employee_id: String,
    /// The employee's role.
    pub role: Role,
    /// The employee's rank.
    pub rank: Rank,
    /// The season that was looked up.
    pub season: SeasonCategory,
}

/// Inputs the engine skipped without failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDiagnostics {
    /// Employees excluded for lack of a baseline standard.
    pub missing_standards: Vec<MissingStandard>,
    /// Receiving-location IDs credited by help records but absent from the location list.
    pub unmatched_receivers: Vec<String>,
}

impl ForecastDiagnostics {
    /// Returns true if nothing was skipped.
    pub fn is_clean(&self) -> bool {
        self.missing_standards.is_empty() && self.unmatched_receivers.is_empty()
    }
}

/// The complete result of a forecast run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastReport {
    /// The target period.
    pub period: ForecastPeriod,
    /// The season the period's month falls in.
    pub season: SeasonCategory,
    /// Whether the promotional-period retail doubling was applied.
    pub promo_period: bool,
    /// One forecast per input location, in input order.
    pub locations: Vec<LocationForecast>,
    /// Final sales summed across all locations.
    pub grand_total: SalesBreakdown,
    /// Inputs skipped during the run.
    pub diagnostics: ForecastDiagnostics,
}

impl ForecastReport {
    /// Returns the forecast for a location, if it was part of the run.
    pub fn location(&self, location_id: &str) -> Option<&LocationForecast> {
        self.locations.iter().find(|l| l.location_id == location_id)
    }
}

//! The forecast engine.
//!
//! [`compute_forecast`] turns a roster, baseline standards, leave and help
//! records into a [`ForecastReport`]. It runs in two phases:
//!
//! 1. every location's employees are forecast at home, and each help record
//!    credits the [`HelpLedger`] for its receiving location;
//! 2. once the ledger is closed, each location's received help is added to
//!    its pre-help sales.
//!
//! The engine is pure: identical inputs always produce an identical report.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::activity::{
    ActivityPolicy, ActivityPolicyKind, BinaryLeavePolicy, DEFAULT_STANDARD_WORKING_DAYS,
    FractionalLeavePolicy, WorkingDaysPolicy,
};
use super::deduction::{DeductionOverflowPolicy, apply_deduction};
use super::help_transfer::{HelpLedger, total_deduction};
use super::standards::{StandardsTable, baseline_sales};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, BaselineRevenueStandard, Employee, EmployeeForecast, ForecastDiagnostics,
    ForecastPeriod, ForecastReport, HelpRecord, LeaveRecord, Location, LocationForecast,
    MissingStandard, SalesBreakdown,
};

/// The collections a forecast is computed from.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastInput<'a> {
    /// Locations to forecast, in output order.
    pub locations: &'a [Location],
    /// The full roster; employees are matched to locations by ID.
    pub employees: &'a [Employee],
    /// Baseline standards keyed by (role, rank, season).
    pub standards: &'a [BaselineRevenueStandard],
    /// Help records; only those in the target period are used.
    pub help_records: &'a [HelpRecord],
    /// Leave records for the leave policies.
    pub leave_records: &'a [LeaveRecord],
    /// Attendance records for the working-days policy.
    pub attendance: &'a [AttendanceRecord],
}

/// Parameters of a forecast run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastOptions {
    /// The target month.
    pub period: ForecastPeriod,
    /// Double retail baselines for a promotional month.
    #[serde(default)]
    pub promo_period: bool,
    /// Which built-in activity policy to use.
    #[serde(default)]
    pub activity_policy: ActivityPolicyKind,
    /// How to treat combined deductions above 100%.
    #[serde(default)]
    pub deduction_overflow: DeductionOverflowPolicy,
    /// Working days in a standard month, for the working-days policy.
    #[serde(default = "default_standard_working_days")]
    pub standard_working_days: Decimal,
}

fn default_standard_working_days() -> Decimal {
    DEFAULT_STANDARD_WORKING_DAYS
}

impl ForecastOptions {
    /// Options for a period with every policy at its default.
    pub fn for_period(period: ForecastPeriod) -> Self {
        Self {
            period,
            promo_period: false,
            activity_policy: ActivityPolicyKind::default(),
            deduction_overflow: DeductionOverflowPolicy::default(),
            standard_working_days: DEFAULT_STANDARD_WORKING_DAYS,
        }
    }

    /// Checks the options for out-of-range or conflicting values.
    pub fn validate(&self) -> EngineResult<()> {
        self.period.validate()?;

        if self.standard_working_days <= Decimal::ZERO {
            return Err(EngineError::IncompatibleOptions {
                message: format!(
                    "standard working days must be positive, got {}",
                    self.standard_working_days
                ),
            });
        }

        if self.promo_period && self.activity_policy == ActivityPolicyKind::FractionalLeave {
            return Err(EngineError::IncompatibleOptions {
                message: "the promotional period cannot be combined with fractional leave"
                    .to_string(),
            });
        }

        Ok(())
    }
}

/// Computes a forecast using the activity policy named in `options`.
///
/// # Example
///
/// ```
/// use salon_forecast::calculation::{compute_forecast, ForecastInput, ForecastOptions, SeasonCategory};
/// use salon_forecast::models::{BaselineRevenueStandard, Employee, ForecastPeriod, Location, Rank, Role};
///
/// let locations = vec![Location::new("a", "Shibuya")];
/// let employees = vec![Employee {
///     id: "e1".to_string(),
///     name: "Aoi".to_string(),
///     location_id: "a".to_string(),
///     role: Role::Eyelist,
///     rank: Rank::J1,
/// }];
/// let standards = vec![BaselineRevenueStandard {
///     role: Role::Eyelist,
///     rank: Rank::J1,
///     season: SeasonCategory::Normal,
///     treatment: 500_000,
///     retail: 30_000,
/// }];
/// let input = ForecastInput {
///     locations: &locations,
///     employees: &employees,
///     standards: &standards,
///     ..Default::default()
/// };
/// let options = ForecastOptions::for_period(ForecastPeriod::new(2026, 1).unwrap());
///
/// let report = compute_forecast(&input, &options).unwrap();
/// assert_eq!(report.locations[0].final_sales.total, 530_000);
/// ```
pub fn compute_forecast(
    input: &ForecastInput<'_>,
    options: &ForecastOptions,
) -> EngineResult<ForecastReport> {
    match options.activity_policy {
        ActivityPolicyKind::BinaryLeave => {
            let policy = BinaryLeavePolicy::new(input.leave_records);
            compute_forecast_with_policy(input, options, &policy)
        }
        ActivityPolicyKind::FractionalLeave => {
            let policy = FractionalLeavePolicy::new(input.leave_records);
            compute_forecast_with_policy(input, options, &policy)
        }
        ActivityPolicyKind::WorkingDays => {
            let policy = WorkingDaysPolicy::new(input.attendance, options.standard_working_days);
            compute_forecast_with_policy(input, options, &policy)
        }
    }
}

/// Computes a forecast with a caller-supplied activity policy.
///
/// `options.activity_policy` is ignored here except for option validation.
pub fn compute_forecast_with_policy(
    input: &ForecastInput<'_>,
    options: &ForecastOptions,
    policy: &dyn ActivityPolicy,
) -> EngineResult<ForecastReport> {
    options.validate()?;

    let period = options.period;
    let help_records: Vec<&HelpRecord> = input
        .help_records
        .iter()
        .filter(|h| period.matches(h.year, h.month))
        .collect();
    for help in &help_records {
        help.validate()?;
    }

    let season = period.season();
    let standards = StandardsTable::new(input.standards);
    let mut ledger = HelpLedger::new();
    let mut diagnostics = ForecastDiagnostics::default();

    debug!(
        period = %period,
        season = %season,
        policy = policy.name(),
        locations = input.locations.len(),
        employees = input.employees.len(),
        help_records = help_records.len(),
        "Starting forecast"
    );

    // Phase 1: home forecasts, crediting the ledger as help records are seen.
    let mut drafts = Vec::with_capacity(input.locations.len());
    for location in input.locations {
        let mut employee_forecasts = Vec::new();

        for employee in input.employees.iter().filter(|e| e.works_at(&location.id)) {
            let activity_ratio = policy.activity_ratio(employee, period)?;
            if activity_ratio.is_zero() {
                employee_forecasts.push(on_leave_forecast(employee));
                continue;
            }

            let Some(standard) = standards.lookup(employee.role, employee.rank, season) else {
                warn!(
                    employee_id = %employee.id,
                    role = %employee.role,
                    rank = %employee.rank,
                    season = %season,
                    "No baseline standard, employee excluded from forecast"
                );
                diagnostics.missing_standards.push(MissingStandard {
                    employee_id: employee.id.clone(),
                    role: employee.role,
                    rank: employee.rank,
                    season,
                });
                continue;
            };

            let base_sales = baseline_sales(standard, activity_ratio, options.promo_period)?;

            let employee_helps: Vec<&HelpRecord> = help_records
                .iter()
                .copied()
                .filter(|h| h.employee_id == employee.id)
                .collect();
            let mut help_transfers = Vec::with_capacity(employee_helps.len());
            for help in &employee_helps {
                if help.from_location_id != employee.location_id {
                    debug!(
                        help_id = %help.id,
                        employee_id = %employee.id,
                        from_location_id = %help.from_location_id,
                        "Help record origin differs from the employee's current location"
                    );
                }
                help_transfers.push(ledger.credit(help, base_sales)?);
            }

            let help_deduction_percent = total_deduction(employee_helps.iter().copied());
            let adjusted_sales = apply_deduction(
                base_sales,
                help_deduction_percent,
                options.deduction_overflow,
                &employee.id,
            )?;

            employee_forecasts.push(EmployeeForecast {
                employee_id: employee.id.clone(),
                employee_name: employee.name.clone(),
                role: employee.role,
                rank: employee.rank,
                activity_ratio,
                base_sales,
                adjusted_sales,
                help_deduction_percent,
                help_transfers,
                on_leave: false,
            });
        }

        let pre_help_sales =
            SalesBreakdown::checked_sum(employee_forecasts.iter().map(|f| f.adjusted_sales))?;
        drafts.push((location, employee_forecasts, pre_help_sales));
    }

    // Phase 2: fold received help into each location.
    let ledger = ledger.close();
    let locations: Vec<LocationForecast> = drafts
        .into_iter()
        .map(|(location, employee_forecasts, pre_help_sales)| -> EngineResult<LocationForecast> {
            let help_received = ledger.received_by(&location.id);
            Ok(LocationForecast {
                location_id: location.id.clone(),
                location_name: location.name.clone(),
                employee_forecasts,
                pre_help_sales,
                help_received,
                final_sales: pre_help_sales.checked_add(help_received)?,
            })
        })
        .collect::<EngineResult<_>>()?;

    diagnostics.unmatched_receivers = ledger.unmatched_receivers(input.locations);
    if !diagnostics.unmatched_receivers.is_empty() {
        warn!(
            receivers = ?diagnostics.unmatched_receivers,
            "Help credited to locations outside the forecast"
        );
    }

    let grand_total = SalesBreakdown::checked_sum(locations.iter().map(|l| l.final_sales))?;
    debug!(
        period = %period,
        grand_total = grand_total.total,
        missing_standards = diagnostics.missing_standards.len(),
        "Forecast completed"
    );

    Ok(ForecastReport {
        period,
        season,
        promo_period: options.promo_period,
        locations,
        grand_total,
        diagnostics,
    })
}

fn on_leave_forecast(employee: &Employee) -> EmployeeForecast {
    EmployeeForecast {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        role: employee.role,
        rank: employee.rank,
        activity_ratio: Decimal::ZERO,
        base_sales: SalesBreakdown::ZERO,
        adjusted_sales: SalesBreakdown::ZERO,
        help_deduction_percent: Decimal::ZERO,
        help_transfers: Vec::new(),
        on_leave: true,
    }
}

//! Request types for the forecast API.
//!
//! This module defines the JSON request structure for the `/forecast` endpoint.

use serde::{Deserialize, Serialize};

use crate::calculation::{
    ActivityPolicyKind, DeductionOverflowPolicy, ForecastInput, ForecastOptions,
};
use crate::config::ConfigLoader;
use crate::models::{
    AttendanceRecord, BaselineRevenueStandard, Employee, ForecastPeriod, HelpRecord, LeaveRecord,
    Location,
};

/// Request body for the `/forecast` endpoint.
///
/// Carries the target period, optional overrides of the configured policies,
/// and every collection the engine reads. When `standards` is omitted the
/// configured standards table is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// Double retail baselines for a promotional month.
    #[serde(default)]
    pub promo_period: bool,
    /// Overrides the configured activity policy.
    #[serde(default)]
    pub activity_policy: Option<ActivityPolicyKind>,
    /// Overrides the configured deduction overflow policy.
    #[serde(default)]
    pub deduction_overflow: Option<DeductionOverflowPolicy>,
    /// Locations to forecast, in output order.
    pub locations: Vec<Location>,
    /// The roster.
    pub employees: Vec<Employee>,
    /// Overrides the configured standards table.
    #[serde(default)]
    pub standards: Option<Vec<BaselineRevenueStandard>>,
    /// Help records for the period.
    #[serde(default)]
    pub help_records: Vec<HelpRecord>,
    /// Leave records for the period.
    #[serde(default)]
    pub leave_records: Vec<LeaveRecord>,
    /// Attendance records for the period.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

impl ForecastRequest {
    /// Resolves the forecast options against the configured defaults.
    pub fn options(&self, config: &ConfigLoader) -> ForecastOptions {
        let mut options = config.options_for(ForecastPeriod {
            year: self.year,
            month: self.month,
        });
        options.promo_period = self.promo_period;
        if let Some(policy) = self.activity_policy {
            options.activity_policy = policy;
        }
        if let Some(overflow) = self.deduction_overflow {
            options.deduction_overflow = overflow;
        }
        options
    }

    /// Borrows the request's collections as engine input.
    pub fn input<'a>(&'a self, config: &'a ConfigLoader) -> ForecastInput<'a> {
        ForecastInput {
            locations: &self.locations,
            employees: &self.employees,
            standards: self.standards.as_deref().unwrap_or(config.standards()),
            help_records: &self.help_records,
            leave_records: &self.leave_records,
            attendance: &self.attendance,
        }
    }
}

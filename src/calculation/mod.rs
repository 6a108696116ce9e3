//! Calculation logic for the salon revenue forecast engine.
//!
//! This module contains season classification, baseline standard lookup,
//! activity policies for leave and attendance, help deduction and addition
//! accounting, rounding, and the forecast engine that ties them together.

mod activity;
mod deduction;
mod engine;
mod help_transfer;
mod rounding;
mod season;
mod standards;

pub use activity::{
    ACTIVITY_RATIO_STEP, ActivityPolicy, ActivityPolicyKind, BinaryLeavePolicy,
    DEFAULT_STANDARD_WORKING_DAYS, FractionalLeavePolicy, WorkingDaysPolicy,
};
pub use deduction::{DeductionOverflowPolicy, apply_deduction};
pub use engine::{ForecastInput, ForecastOptions, compute_forecast, compute_forecast_with_policy};
pub use help_transfer::{ClosedHelpLedger, HelpLedger, total_deduction};
pub use rounding::{percent_of, round_amount, scale_sales};
pub use season::{SeasonCategory, classify};
pub use standards::{StandardsTable, baseline_sales};

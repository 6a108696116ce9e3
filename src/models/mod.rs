//! Core data models for the salon revenue forecast engine.
//!
//! This module contains the input records consumed by the engine, the
//! forecast results it produces, and the history snapshots saved from them.

mod employee;
mod forecast;
mod help_record;
mod leave;
mod location;
mod period;
mod snapshot;
mod standard;

pub use employee::{Employee, Rank, Role};
pub use forecast::{
    EmployeeForecast, ForecastDiagnostics, ForecastReport, HelpTransfer, LocationForecast,
    MissingStandard, SalesBreakdown,
};
pub use help_record::HelpRecord;
pub use leave::{AttendanceRecord, LeaveRecord};
pub use location::Location;
pub use period::ForecastPeriod;
pub use snapshot::{ForecastSnapshot, HistoryYear, MonthHistory};
pub use standard::BaselineRevenueStandard;

//! Activity policies: how much of a month an employee is expected to work.
//!
//! An [`ActivityPolicy`] returns a ratio in [0, 1] that scales the baseline
//! standard. A ratio of zero fully excludes the employee from the forecast.
//! Three policies are provided:
//!
//! - [`BinaryLeavePolicy`]: any leave record excludes the employee.
//! - [`FractionalLeavePolicy`]: a leave record supplies a ratio in 0.05 steps.
//! - [`WorkingDaysPolicy`]: scheduled working days over a standard month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Employee, ForecastPeriod, LeaveRecord};

/// Standard working days in a month under the working-days policy.
pub const DEFAULT_STANDARD_WORKING_DAYS: Decimal = Decimal::from_parts(22, 0, 0, false, 0);

/// Fractional leave ratios must be a multiple of this step.
pub const ACTIVITY_RATIO_STEP: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Supplies the activity ratio for an employee in a period.
pub trait ActivityPolicy {
    /// A short name for logging.
    fn name(&self) -> &'static str;

    /// Returns the ratio in [0, 1] to apply to the employee's baseline.
    fn activity_ratio(&self, employee: &Employee, period: ForecastPeriod)
    -> EngineResult<Decimal>;
}

/// Selects one of the built-in policies from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityPolicyKind {
    /// Any leave record fully excludes the employee.
    #[default]
    BinaryLeave,
    /// Leave records carry a fractional activity ratio.
    FractionalLeave,
    /// Attendance records carry scheduled working days.
    WorkingDays,
}

/// Any leave record in the period fully excludes the employee.
#[derive(Debug, Clone, Copy)]
pub struct BinaryLeavePolicy<'a> {
    leave_records: &'a [LeaveRecord],
}

impl<'a> BinaryLeavePolicy<'a> {
    /// Creates the policy over a set of leave records.
    pub fn new(leave_records: &'a [LeaveRecord]) -> Self {
        Self { leave_records }
    }
}

impl ActivityPolicy for BinaryLeavePolicy<'_> {
    fn name(&self) -> &'static str {
        "binary_leave"
    }

    fn activity_ratio(
        &self,
        employee: &Employee,
        period: ForecastPeriod,
    ) -> EngineResult<Decimal> {
        let on_leave = self
            .leave_records
            .iter()
            .any(|r| r.applies_to(&employee.id, period));
        Ok(if on_leave { Decimal::ZERO } else { Decimal::ONE })
    }
}

/// A leave record in the period supplies the employee's activity ratio.
///
/// A record without a ratio counts as full leave. Ratios must lie in [0, 1]
/// on a 0.05 step.
#[derive(Debug, Clone, Copy)]
pub struct FractionalLeavePolicy<'a> {
    leave_records: &'a [LeaveRecord],
}

impl<'a> FractionalLeavePolicy<'a> {
    /// Creates the policy over a set of leave records.
    pub fn new(leave_records: &'a [LeaveRecord]) -> Self {
        Self { leave_records }
    }
}

impl ActivityPolicy for FractionalLeavePolicy<'_> {
    fn name(&self) -> &'static str {
        "fractional_leave"
    }

    fn activity_ratio(
        &self,
        employee: &Employee,
        period: ForecastPeriod,
    ) -> EngineResult<Decimal> {
        let Some(record) = self
            .leave_records
            .iter()
            .find(|r| r.applies_to(&employee.id, period))
        else {
            return Ok(Decimal::ONE);
        };

        let ratio = record.activity_ratio.unwrap_or(Decimal::ZERO);
        let on_step = (ratio % ACTIVITY_RATIO_STEP).is_zero();
        if ratio < Decimal::ZERO || ratio > Decimal::ONE || !on_step {
            return Err(EngineError::InvalidActivityRatio {
                employee_id: employee.id.clone(),
                value: ratio,
            });
        }
        Ok(ratio)
    }
}

/// Scheduled working days over a standard working month, capped at 1.
#[derive(Debug, Clone, Copy)]
pub struct WorkingDaysPolicy<'a> {
    attendance: &'a [AttendanceRecord],
    standard_working_days: Decimal,
}

impl<'a> WorkingDaysPolicy<'a> {
    /// Creates the policy over a set of attendance records.
    pub fn new(attendance: &'a [AttendanceRecord], standard_working_days: Decimal) -> Self {
        Self {
            attendance,
            standard_working_days,
        }
    }
}

impl ActivityPolicy for WorkingDaysPolicy<'_> {
    fn name(&self) -> &'static str {
        "working_days"
    }

    fn activity_ratio(
        &self,
        employee: &Employee,
        period: ForecastPeriod,
    ) -> EngineResult<Decimal> {
        let Some(record) = self
            .attendance
            .iter()
            .find(|r| r.applies_to(&employee.id, period))
        else {
            return Ok(Decimal::ONE);
        };

        if record.working_days < Decimal::ZERO {
            return Err(EngineError::InvalidWorkingDays {
                employee_id: employee.id.clone(),
                value: record.working_days,
            });
        }
        if self.standard_working_days <= Decimal::ZERO {
            return Err(EngineError::IncompatibleOptions {
                message: format!(
                    "standard working days must be positive, got {}",
                    self.standard_working_days
                ),
            });
        }
        Ok((record.working_days / self.standard_working_days).min(Decimal::ONE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Rank, Role};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn period() -> ForecastPeriod {
        ForecastPeriod { year: 2026, month: 2 }
    }

    fn employee(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: id.to_string(),
            location_id: "a".to_string(),
            role: Role::Eyelist,
            rank: Rank::J1,
        }
    }

    fn leave(employee_id: &str, month: u32, ratio: Option<&str>) -> LeaveRecord {
        LeaveRecord {
            id: format!("leave_{}_{}", employee_id, month),
            employee_id: employee_id.to_string(),
            year: 2026,
            month,
            activity_ratio: ratio.map(dec),
        }
    }

    fn attendance(employee_id: &str, days: &str) -> AttendanceRecord {
        AttendanceRecord {
            id: format!("att_{}", employee_id),
            employee_id: employee_id.to_string(),
            year: 2026,
            month: 2,
            working_days: dec(days),
        }
    }

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_STANDARD_WORKING_DAYS, dec("22"));
        assert_eq!(ACTIVITY_RATIO_STEP, dec("0.05"));
    }

    #[test]
    fn test_binary_without_record_is_full_activity() {
        let records = vec![leave("emp_002", 2, None)];
        let policy = BinaryLeavePolicy::new(&records);
        assert_eq!(policy.activity_ratio(&employee("emp_001"), period()).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_binary_with_record_excludes() {
        let records = vec![leave("emp_001", 2, None)];
        let policy = BinaryLeavePolicy::new(&records);
        assert_eq!(policy.activity_ratio(&employee("emp_001"), period()).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_binary_ignores_ratio_on_record() {
        let records = vec![leave("emp_001", 2, Some("0.5"))];
        let policy = BinaryLeavePolicy::new(&records);
        assert_eq!(policy.activity_ratio(&employee("emp_001"), period()).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_binary_ignores_other_months() {
        let records = vec![leave("emp_001", 3, None)];
        let policy = BinaryLeavePolicy::new(&records);
        assert_eq!(policy.activity_ratio(&employee("emp_001"), period()).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_fractional_uses_record_ratio() {
        let records = vec![leave("emp_001", 2, Some("0.55"))];
        let policy = FractionalLeavePolicy::new(&records);
        assert_eq!(policy.activity_ratio(&employee("emp_001"), period()).unwrap(), dec("0.55"));
    }

    #[test]
    fn test_fractional_without_record_is_full_activity() {
        let policy = FractionalLeavePolicy::new(&[]);
        assert_eq!(policy.activity_ratio(&employee("emp_001"), period()).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_fractional_record_without_ratio_is_full_leave() {
        let records = vec![leave("emp_001", 2, None)];
        let policy = FractionalLeavePolicy::new(&records);
        assert_eq!(policy.activity_ratio(&employee("emp_001"), period()).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_fractional_rejects_ratio_above_one() {
        let records = vec![leave("emp_001", 2, Some("1.05"))];
        let policy = FractionalLeavePolicy::new(&records);
        match policy.activity_ratio(&employee("emp_001"), period()) {
            Err(EngineError::InvalidActivityRatio { employee_id, value }) => {
                assert_eq!(employee_id, "emp_001");
                assert_eq!(value, dec("1.05"));
            }
            other => panic!("Expected InvalidActivityRatio, got {:?}", other),
        }
    }

    #[test]
    fn test_fractional_rejects_off_step_ratio() {
        let records = vec![leave("emp_001", 2, Some("0.33"))];
        let policy = FractionalLeavePolicy::new(&records);
        assert!(policy.activity_ratio(&employee("emp_001"), period()).is_err());
    }

    #[test]
    fn test_fractional_rejects_negative_ratio() {
        let records = vec![leave("emp_001", 2, Some("-0.05"))];
        let policy = FractionalLeavePolicy::new(&records);
        assert!(policy.activity_ratio(&employee("emp_001"), period()).is_err());
    }

    #[test]
    fn test_working_days_ratio() {
        let records = vec![attendance("emp_001", "11")];
        let policy = WorkingDaysPolicy::new(&records, DEFAULT_STANDARD_WORKING_DAYS);
        assert_eq!(policy.activity_ratio(&employee("emp_001"), period()).unwrap(), dec("0.5"));
    }

    #[test]
    fn test_working_days_capped_at_one() {
        let records = vec![attendance("emp_001", "25")];
        let policy = WorkingDaysPolicy::new(&records, DEFAULT_STANDARD_WORKING_DAYS);
        assert_eq!(policy.activity_ratio(&employee("emp_001"), period()).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_working_days_zero_excludes() {
        let records = vec![attendance("emp_001", "0")];
        let policy = WorkingDaysPolicy::new(&records, DEFAULT_STANDARD_WORKING_DAYS);
        assert!(policy.activity_ratio(&employee("emp_001"), period()).unwrap().is_zero());
    }

    #[test]
    fn test_working_days_rejects_negative() {
        let records = vec![attendance("emp_001", "-1")];
        let policy = WorkingDaysPolicy::new(&records, DEFAULT_STANDARD_WORKING_DAYS);
        assert!(matches!(
            policy.activity_ratio(&employee("emp_001"), period()),
            Err(EngineError::InvalidWorkingDays { .. })
        ));
    }

    #[test]
    fn test_policy_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&ActivityPolicyKind::FractionalLeave).unwrap(),
            "\"fractional_leave\""
        );
        assert_eq!(ActivityPolicyKind::default(), ActivityPolicyKind::BinaryLeave);
    }
}

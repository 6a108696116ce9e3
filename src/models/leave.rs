//! Leave and attendance records.
//!
//! These records feed the [`crate::calculation::ActivityPolicy`]
//! implementations. Which of them matters depends on the configured policy:
//! leave records for the binary and fractional leave policies, attendance
//! records for the working-days policy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ForecastPeriod;

/// Marks an employee as on leave, or working at reduced activity, for a month.
///
/// A record without an `activity_ratio` is a plain leave marker. At most one
/// record is expected per (employee, year, month); absence of a record means
/// full activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee on leave.
    pub employee_id: String,
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// Activity ratio in [0, 1] in steps of 0.05, where 1 is full activity.
    #[serde(default)]
    pub activity_ratio: Option<Decimal>,
}

impl LeaveRecord {
    /// Returns true if this record belongs to the employee in the period.
    pub fn applies_to(&self, employee_id: &str, period: ForecastPeriod) -> bool {
        self.employee_id == employee_id && period.matches(self.year, self.month)
    }
}

/// The number of days an employee is scheduled to work in a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The scheduled employee.
    pub employee_id: String,
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// Scheduled working days (fractional half-days allowed).
    pub working_days: Decimal,
}

impl AttendanceRecord {
    /// Returns true if this record belongs to the employee in the period.
    pub fn applies_to(&self, employee_id: &str, period: ForecastPeriod) -> bool {
        self.employee_id == employee_id && period.matches(self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_record_without_ratio_deserializes() {
        let json = r#"{
            "id": "leave_001",
            "employee_id": "emp_001",
            "year": 2026,
            "month": 2
        }"#;

        let record: LeaveRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.activity_ratio, None);
        assert!(record.applies_to("emp_001", ForecastPeriod { year: 2026, month: 2 }));
        assert!(!record.applies_to("emp_001", ForecastPeriod { year: 2026, month: 3 }));
        assert!(!record.applies_to("emp_002", ForecastPeriod { year: 2026, month: 2 }));
    }

    #[test]
    fn test_leave_record_with_ratio_deserializes() {
        let json = r#"{
            "id": "leave_002",
            "employee_id": "emp_001",
            "year": 2026,
            "month": 2,
            "activity_ratio": "0.55"
        }"#;

        let record: LeaveRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.activity_ratio, Some(Decimal::new(55, 2)));
    }

    #[test]
    fn test_attendance_record_applies_to_period() {
        let record = AttendanceRecord {
            id: "att_001".to_string(),
            employee_id: "emp_001".to_string(),
            year: 2025,
            month: 12,
            working_days: Decimal::new(205, 1),
        };
        assert!(record.applies_to("emp_001", ForecastPeriod { year: 2025, month: 12 }));
        assert!(!record.applies_to("emp_001", ForecastPeriod { year: 2026, month: 12 }));
    }
}

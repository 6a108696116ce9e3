//! Employee model and related types.
//!
//! This module defines the Employee struct together with the [`Role`] and
//! [`Rank`] enums that key the baseline revenue standards.

use serde::{Deserialize, Serialize};

/// The service specialization of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Eyelash treatment specialist.
    Eyelist,
    /// Nail treatment specialist.
    Nailist,
}

/// The seniority tier of an employee, ordered from junior to master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    /// Junior, first tier.
    #[serde(rename = "J-1")]
    J1,
    /// Junior, second tier.
    #[serde(rename = "J-2")]
    J2,
    /// Junior, third tier.
    #[serde(rename = "J-3")]
    J3,
    /// Senior, first tier.
    #[serde(rename = "S-1")]
    S1,
    /// Senior, second tier.
    #[serde(rename = "S-2")]
    S2,
    /// Senior, third tier.
    #[serde(rename = "S-3")]
    S3,
    /// Master.
    #[serde(rename = "M")]
    M,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 7] = [
        Rank::J1,
        Rank::J2,
        Rank::J3,
        Rank::S1,
        Rank::S2,
        Rank::S3,
        Rank::M,
    ];

    /// Returns the rank code as stored in records (e.g. "S-2").
    pub fn code(&self) -> &'static str {
        match self {
            Rank::J1 => "J-1",
            Rank::J2 => "J-2",
            Rank::J3 => "J-3",
            Rank::S1 => "S-1",
            Rank::S2 => "S-2",
            Rank::S3 => "S-3",
            Rank::M => "M",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Eyelist => write!(f, "eyelist"),
            Role::Nailist => write!(f, "nailist"),
        }
    }
}

/// An employee on the roster of exactly one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The ID of the owning location.
    pub location_id: String,
    /// The employee's service specialization.
    pub role: Role,
    /// The employee's seniority tier.
    pub rank: Rank,
}

impl Employee {
    /// Returns true if the employee belongs to the given location.
    ///
    /// # Examples
    ///
    /// ```
    /// use salon_forecast::models::{Employee, Rank, Role};
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Aoi".to_string(),
    ///     location_id: "shibuya".to_string(),
    ///     role: Role::Eyelist,
    ///     rank: Rank::S1,
    /// };
    /// assert!(employee.works_at("shibuya"));
    /// assert!(!employee.works_at("ginza"));
    /// ```
    pub fn works_at(&self, location_id: &str) -> bool {
        self.location_id == location_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "emp_001",
            "name": "Aoi",
            "location_id": "shibuya",
            "role": "eyelist",
            "rank": "J-2"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.role, Role::Eyelist);
        assert_eq!(employee.rank, Rank::J2);
        assert!(employee.works_at("shibuya"));
    }

    #[test]
    fn test_rank_serialization_uses_codes() {
        assert_eq!(serde_json::to_string(&Rank::S3).unwrap(), "\"S-3\"");
        assert_eq!(serde_json::to_string(&Rank::M).unwrap(), "\"M\"");
        let rank: Rank = serde_json::from_str("\"J-1\"").unwrap();
        assert_eq!(rank, Rank::J1);
    }

    #[test]
    fn test_unknown_rank_is_rejected() {
        let result: Result<Rank, _> = serde_json::from_str("\"S-4\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_ranks_are_ordered() {
        assert!(Rank::J1 < Rank::J3);
        assert!(Rank::S3 < Rank::M);
        let mut sorted = Rank::ALL;
        sorted.sort();
        assert_eq!(sorted, Rank::ALL);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Nailist).unwrap(), "\"nailist\"");
        assert_eq!(Role::Eyelist.to_string(), "eyelist");
    }
}

//! Baseline revenue standard lookup.
//!
//! This module provides the [`StandardsTable`] used to find the baseline
//! standard for an employee's role and rank in a season.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::SeasonCategory;
use super::rounding::scale_sales;
use crate::error::{EngineError, EngineResult};
use crate::models::{BaselineRevenueStandard, Rank, Role, SalesBreakdown};

/// Lookup table of baseline standards keyed by (role, rank, season).
///
/// When the input holds duplicate keys, the first standard wins.
///
/// # Example
///
/// ```
/// use salon_forecast::calculation::{SeasonCategory, StandardsTable};
/// use salon_forecast::models::{BaselineRevenueStandard, Rank, Role};
///
/// let standards = vec![BaselineRevenueStandard {
///     role: Role::Nailist,
///     rank: Rank::J3,
///     season: SeasonCategory::Slow,
///     treatment: 400_000,
///     retail: 20_000,
/// }];
/// let table = StandardsTable::new(&standards);
///
/// assert!(table.lookup(Role::Nailist, Rank::J3, SeasonCategory::Slow).is_some());
/// assert!(table.lookup(Role::Nailist, Rank::J3, SeasonCategory::Busy).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StandardsTable<'a> {
    entries: HashMap<(Role, Rank, SeasonCategory), &'a BaselineRevenueStandard>,
}

impl<'a> StandardsTable<'a> {
    /// Indexes a slice of standards.
    pub fn new(standards: &'a [BaselineRevenueStandard]) -> Self {
        let mut entries = HashMap::with_capacity(standards.len());
        for standard in standards {
            entries
                .entry((standard.role, standard.rank, standard.season))
                .or_insert(standard);
        }
        Self { entries }
    }

    /// Finds the standard for a role, rank and season.
    pub fn lookup(
        &self,
        role: Role,
        rank: Rank,
        season: SeasonCategory,
    ) -> Option<&'a BaselineRevenueStandard> {
        self.entries.get(&(role, rank, season)).copied()
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no standards.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Computes an employee's baseline sales from a standard.
///
/// With `promo_period` set, retail is doubled first. Both streams are then
/// scaled by the activity ratio and rounded independently.
pub fn baseline_sales(
    standard: &BaselineRevenueStandard,
    activity_ratio: Decimal,
    promo_period: bool,
) -> EngineResult<SalesBreakdown> {
    let retail = if promo_period {
        standard
            .retail
            .checked_mul(2)
            .ok_or_else(|| EngineError::CalculationError {
                message: format!("promotional retail of {} overflows", standard.retail),
            })?
    } else {
        standard.retail
    };
    scale_sales(SalesBreakdown::try_new(standard.treatment, retail)?, activity_ratio)
}

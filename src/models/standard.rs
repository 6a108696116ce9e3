//! Baseline revenue standard model.

use serde::{Deserialize, Serialize};

use super::{Rank, Role};
use crate::calculation::SeasonCategory;

/// Expected monthly revenue for a fully active employee of a given role and
/// rank in a given season.
///
/// Standards are static reference data, unique per (role, rank, season).
///
/// # Example
///
/// ```
/// use salon_forecast::calculation::SeasonCategory;
/// use salon_forecast::models::{BaselineRevenueStandard, Rank, Role};
///
/// let standard = BaselineRevenueStandard {
///     role: Role::Eyelist,
///     rank: Rank::J1,
///     season: SeasonCategory::Normal,
///     treatment: 500_000,
///     retail: 30_000,
/// };
/// assert_eq!(standard.treatment + standard.retail, 530_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineRevenueStandard {
    /// The role this standard applies to.
    pub role: Role,
    /// The rank this standard applies to.
    pub rank: Rank,
    /// The season this standard applies to.
    pub season: SeasonCategory,
    /// Treatment revenue for a full month.
    pub treatment: i64,
    /// Retail revenue for a full month.
    pub retail: i64,
}

//! Accumulation of help additions across locations.
//!
//! Additions are credited to receiving locations while home locations are
//! still being processed, so the ledger must be complete before any
//! location reads what it received. [`HelpLedger::close`] marks that
//! boundary: only a [`ClosedHelpLedger`] can be queried.

use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;

use super::rounding::percent_of;
use crate::error::EngineResult;
use crate::models::{HelpRecord, HelpTransfer, Location, SalesBreakdown};

/// Open ledger of additions keyed by receiving location.
#[derive(Debug, Clone, Default)]
pub struct HelpLedger {
    received: BTreeMap<String, SalesBreakdown>,
}

impl HelpLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits the receiving location of `help` with its addition percentage
    /// of the employee's baseline sales.
    ///
    /// Returns the transfer so it can be reported on the employee.
    pub fn credit(&mut self, help: &HelpRecord, baseline: SalesBreakdown) -> EngineResult<HelpTransfer> {
        let addition = percent_of(baseline, help.addition_percent)?;
        let received = self
            .received
            .entry(help.to_location_id.clone())
            .or_default();
        *received = received.checked_add(addition)?;

        Ok(HelpTransfer {
            help_id: help.id.clone(),
            to_location_id: help.to_location_id.clone(),
            deduction_percent: help.deduction_percent,
            addition_percent: help.addition_percent,
            addition,
        })
    }

    /// Ends accumulation.
    pub fn close(self) -> ClosedHelpLedger {
        ClosedHelpLedger {
            received: self.received,
        }
    }
}

/// Complete ledger, readable by receiving location.
#[derive(Debug, Clone, Default)]
pub struct ClosedHelpLedger {
    received: BTreeMap<String, SalesBreakdown>,
}

impl ClosedHelpLedger {
    /// Returns everything credited to a location, zero if nothing was.
    pub fn received_by(&self, location_id: &str) -> SalesBreakdown {
        self.received
            .get(location_id)
            .copied()
            .unwrap_or(SalesBreakdown::ZERO)
    }

    /// Returns credited location IDs that are not in `locations`, sorted.
    pub fn unmatched_receivers(&self, locations: &[Location]) -> Vec<String> {
        let known: HashSet<&str> = locations.iter().map(|l| l.id.as_str()).collect();
        self.received
            .keys()
            .filter(|id| !known.contains(id.as_str()))
            .cloned()
            .collect()
    }
}

/// Sums the deduction percentages of a set of help records.
pub fn total_deduction<'a>(helps: impl IntoIterator<Item = &'a HelpRecord>) -> Decimal {
    helps.into_iter().map(|h| h.deduction_percent).sum()
}

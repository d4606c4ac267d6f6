//! Blood inventory analytics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::base::types::BloodType;

/// Expected demand for a blood type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Demand {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Demand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Demand::Low => "low",
            Demand::Medium => "medium",
            Demand::High => "high",
            Demand::Critical => "critical",
        })
    }
}

/// Stock status as assessed by the blood bank, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Critical,
    Low,
    Medium,
    Good,
}

impl StockStatus {
    pub fn needs_attention(&self) -> bool {
        matches!(self, StockStatus::Critical | StockStatus::Low)
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            StockStatus::Critical => "CRITICAL",
            StockStatus::Low => "LOW",
            StockStatus::Medium => "MEDIUM",
            StockStatus::Good => "GOOD",
        })
    }
}

/// Units on hand for one blood type.
///
/// Status is recorded by the bank alongside the count, not computed from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLevel {
    pub blood_type: BloodType,
    pub units: u32,
    pub demand: Demand,
    pub status: StockStatus,
}

impl fmt::Display for InventoryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<4} {:>4} units  demand {:<8} {}", self.blood_type, self.units, self.demand, self.status)
    }
}

/// Totals across all blood types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySummary {
    pub total_units: u32,
    /// Types at low or critical stock, most urgent first.
    pub attention: Vec<BloodType>,
}

pub fn summarize(levels: &[InventoryLevel]) -> InventorySummary {
    let total_units = levels.iter().map(|l| l.units).sum();

    let mut flagged = levels.iter().filter(|l| l.status.needs_attention()).collect::<Vec<_>>();
    flagged.sort_by(|a, b| a.status.cmp(&b.status).then(b.demand.cmp(&a.demand)));

    InventorySummary {
        total_units,
        attention: flagged.into_iter().map(|l| l.blood_type).collect(),
    }
}

/// Order levels in the conventional blood type order.
pub fn sort_levels(levels: &mut [InventoryLevel]) {
    levels.sort_by_key(|l| BloodType::ALL.iter().position(|t| *t == l.blood_type));
}

// Tests.

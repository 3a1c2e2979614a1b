//! Models for the recovery pipeline: configuration, percentage cells,
//! report rows, and the assembled report.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::TOTAL_ROW_NAME;
use crate::errors::{Error, Result};

/// Configuration bundle for one recovery run.
///
/// Passed into the service at construction time; the pipeline never reads
/// ambient/global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryConfig {
    /// Total R$ to distribute across eligible assets.
    pub available_budget: Decimal,
    /// Asset names never eligible for allocation (case-sensitive).
    #[serde(default)]
    pub excluded_assets: HashSet<String>,
    /// When true (the default), only strictly loss-making assets are
    /// eligible.
    #[serde(default = "default_exclude_positive")]
    pub exclude_positive_profit: bool,
}

fn default_exclude_positive() -> bool {
    true
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            available_budget: Decimal::ZERO,
            excluded_assets: HashSet::new(),
            exclude_positive_profit: true,
        }
    }
}

impl RecoveryConfig {
    /// Rejects configuration-level problems before any allocation begins.
    pub fn validate(&self) -> Result<()> {
        if self.available_budget < Decimal::ZERO {
            return Err(Error::InvalidConfigValue(format!(
                "available budget must be non-negative, got {}",
                self.available_budget
            )));
        }
        if self
            .excluded_assets
            .iter()
            .any(|name| name.trim().is_empty())
        {
            return Err(Error::InvalidConfigValue(
                "excluded asset names must be non-empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// A percentage cell that may be undefined: the TOTAL row and any asset
/// with a zero cost basis carry `NotApplicable` instead of a number.
///
/// Serialized as a nullable number; rendered as a dash only at the
/// presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PercentValue {
    Value(Decimal),
    NotApplicable,
}

impl PercentValue {
    /// The numeric value, if the cell is applicable.
    pub fn value(&self) -> Option<Decimal> {
        match self {
            PercentValue::Value(v) => Some(*v),
            PercentValue::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, PercentValue::Value(_))
    }
}

impl From<Option<Decimal>> for PercentValue {
    fn from(value: Option<Decimal>) -> Self {
        match value {
            Some(v) => PercentValue::Value(v),
            None => PercentValue::NotApplicable,
        }
    }
}

impl Serialize for PercentValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PercentValue {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        Ok(Option::<Decimal>::deserialize(deserializer)?.into())
    }
}

/// One row of the final report. Asset rows carry a 1-based `index`; the
/// synthetic TOTAL row carries `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRow {
    pub index: Option<usize>,
    pub name: String,
    /// The asset's profit (negative for a loss); summed on the TOTAL row.
    pub current_loss: Decimal,
    /// Budget slice allocated to this asset, never negative.
    pub investment: Decimal,
    pub old_loss_percent: PercentValue,
    pub new_loss_percent: PercentValue,
    pub improvement_percent: PercentValue,
}

impl AllocationRow {
    pub fn is_total(&self) -> bool {
        self.index.is_none() && self.name == TOTAL_ROW_NAME
    }
}

/// The assembled report: one row per eligible asset in input order,
/// followed by the TOTAL row. Created once per run, never mutated after
/// assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryReport {
    pub rows: Vec<AllocationRow>,
    pub total_current_loss: Decimal,
    pub total_investment: Decimal,
    /// Budget left undistributed when no asset carries a loss. Reported
    /// as-is, never redistributed.
    pub unallocated_budget: Decimal,
}

impl RecoveryReport {
    /// Asset rows only, excluding the TOTAL row.
    pub fn asset_rows(&self) -> impl Iterator<Item = &AllocationRow> {
        self.rows.iter().filter(|r| !r.is_total())
    }

    /// The synthetic TOTAL row.
    pub fn total_row(&self) -> Option<&AllocationRow> {
        self.rows.iter().find(|r| r.is_total())
    }
}

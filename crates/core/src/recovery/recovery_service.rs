//! Service orchestrating the recovery pipeline:
//! filter -> allocate -> project -> assemble.

use log::debug;
use rust_decimal::Decimal;

use crate::assets::AssetRecord;
use crate::constants::TOTAL_ROW_NAME;
use crate::errors::Result;
use crate::recovery::allocator::allocate_proportional;
use crate::recovery::eligibility::filter_eligible;
use crate::recovery::projector::{project_recovery, Projection};
use crate::recovery::recovery_model::{
    AllocationRow, PercentValue, RecoveryConfig, RecoveryReport,
};

/// Trait for the recovery service.
pub trait RecoveryServiceTrait: Send + Sync {
    /// Runs the full pipeline over one snapshot of records.
    fn calculate(&self, records: &[AssetRecord]) -> Result<RecoveryReport>;
}

/// Stateless recovery calculator. Each call operates on its own copy of
/// the eligible records and produces a freshly allocated report; nothing
/// is retained across runs.
pub struct RecoveryService {
    config: RecoveryConfig,
}

impl RecoveryService {
    /// Validates the configuration and builds the service. A negative
    /// budget or a malformed exclusion set fails here, before any
    /// allocation.
    pub fn new(config: RecoveryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RecoveryConfig {
        &self.config
    }
}

impl RecoveryServiceTrait for RecoveryService {
    fn calculate(&self, records: &[AssetRecord]) -> Result<RecoveryReport> {
        debug!(
            "Calculating recovery plan for {} records with budget {}",
            records.len(),
            self.config.available_budget
        );

        let eligible = filter_eligible(
            records,
            &self.config.excluded_assets,
            self.config.exclude_positive_profit,
        );
        debug!("{} of {} records eligible", eligible.len(), records.len());

        let investments = allocate_proportional(&eligible, self.config.available_budget);
        let projections: Vec<Projection> = eligible
            .iter()
            .zip(&investments)
            .map(|(record, investment)| project_recovery(record, *investment))
            .collect();

        Ok(assemble_report(
            &eligible,
            &investments,
            &projections,
            self.config.available_budget,
        ))
    }
}

/// Assembles the ordered report: one row per eligible asset in
/// filter-preserved order with a 1-based index, then the TOTAL row with
/// summed money columns and not-applicable percentage cells.
pub fn assemble_report(
    eligible: &[AssetRecord],
    investments: &[Decimal],
    projections: &[Projection],
    budget: Decimal,
) -> RecoveryReport {
    let mut rows: Vec<AllocationRow> = eligible
        .iter()
        .zip(investments)
        .zip(projections)
        .enumerate()
        .map(|(i, ((record, investment), projection))| AllocationRow {
            index: Some(i + 1),
            name: record.name.clone(),
            current_loss: record.profit,
            investment: *investment,
            old_loss_percent: projection.old_loss_percent,
            new_loss_percent: projection.new_loss_percent,
            improvement_percent: projection.improvement_percent,
        })
        .collect();

    let total_current_loss: Decimal = rows.iter().map(|r| r.current_loss).sum();
    let total_investment: Decimal = rows.iter().map(|r| r.investment).sum();
    let unallocated_budget = budget - total_investment;

    rows.push(AllocationRow {
        index: None,
        name: TOTAL_ROW_NAME.to_string(),
        current_loss: total_current_loss,
        investment: total_investment,
        old_loss_percent: PercentValue::NotApplicable,
        new_loss_percent: PercentValue::NotApplicable,
        improvement_percent: PercentValue::NotApplicable,
    });

    RecoveryReport {
        rows,
        total_current_loss,
        total_investment,
        unallocated_budget,
    }
}

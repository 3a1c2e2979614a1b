//! File reporters: delimited text and JSON renditions of the report.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use recoup_core::constants::DISPLAY_DECIMAL_PRECISION;
use recoup_core::{PercentValue, RecoveryReport};

use crate::render::{row_cells, REPORT_HEADERS};

/// Writes the report as CSV with the same columns as the terminal table.
pub fn write_csv(report: &RecoveryReport, path: &Path) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("cannot create CSV report at '{}'", path.display()))?;

    writer.write_record(REPORT_HEADERS)?;
    for row in &report.rows {
        writer.write_record(row_cells(row))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the report as pretty-printed JSON, with money and percentage
/// values rounded to display precision.
pub fn write_json(report: &RecoveryReport, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create JSON report at '{}'", path.display()))?;
    serde_json::to_writer_pretty(file, &rounded_report(report))?;
    Ok(())
}

/// A presentation copy of the report with all values at display precision.
fn rounded_report(report: &RecoveryReport) -> RecoveryReport {
    let mut rounded = report.clone();
    for row in &mut rounded.rows {
        row.current_loss = row.current_loss.round_dp(DISPLAY_DECIMAL_PRECISION);
        row.investment = row.investment.round_dp(DISPLAY_DECIMAL_PRECISION);
        row.old_loss_percent = round_percent(row.old_loss_percent);
        row.new_loss_percent = round_percent(row.new_loss_percent);
        row.improvement_percent = round_percent(row.improvement_percent);
    }
    rounded.total_current_loss = rounded.total_current_loss.round_dp(DISPLAY_DECIMAL_PRECISION);
    rounded.total_investment = rounded.total_investment.round_dp(DISPLAY_DECIMAL_PRECISION);
    rounded.unallocated_budget = rounded.unallocated_budget.round_dp(DISPLAY_DECIMAL_PRECISION);
    rounded
}

fn round_percent(value: PercentValue) -> PercentValue {
    value
        .value()
        .map(|v| v.round_dp(DISPLAY_DECIMAL_PRECISION))
        .into()
}

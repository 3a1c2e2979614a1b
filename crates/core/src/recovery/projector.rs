//! Recovery projector: computes the post-investment loss percentage and
//! the improvement for a single asset.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::AssetRecord;
use crate::recovery::recovery_model::PercentValue;

/// Projected loss percentages for one asset after its allocated investment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub old_loss_percent: PercentValue,
    pub new_loss_percent: PercentValue,
    /// `new - old` in percentage points; non-negative for any positive
    /// investment on a positive cost basis, zero when the investment is
    /// zero.
    pub improvement_percent: PercentValue,
}

/// Projects the loss percentage of `record` as if `investment` had been
/// added to its cost basis at the current price.
///
/// Dilution-only semantics: injecting fresh capital leaves the absolute
/// profit unchanged and enlarges `total_spent`, so
/// `new = profit / (total_spent + investment) * 100`. A zero denominator
/// degrades the cell to `NotApplicable` rather than failing the run.
pub fn project_recovery(record: &AssetRecord, investment: Decimal) -> Projection {
    let old_loss_percent = PercentValue::from(record.profit_percent);

    let new_total_spent = record.total_spent + investment;
    let new_loss_percent = if new_total_spent.is_zero() {
        PercentValue::NotApplicable
    } else {
        PercentValue::Value(record.profit / new_total_spent * dec!(100))
    };

    let improvement_percent = match (new_loss_percent.value(), old_loss_percent.value()) {
        (Some(new), Some(old)) => PercentValue::Value(new - old),
        _ => PercentValue::NotApplicable,
    };

    Projection {
        old_loss_percent,
        new_loss_percent,
        improvement_percent,
    }
}

//! Proportional allocator: distributes the budget across eligible assets
//! in proportion to each asset's absolute loss.

use rust_decimal::Decimal;

use crate::assets::AssetRecord;

/// Splits `budget` across `eligible` proportionally to loss magnitude.
///
/// Returns one investment per eligible asset, parallel to the input slice.
/// With `L = sum of |profit_i|`, each asset receives
/// `budget * |profit_i| / L`. When `L` is zero (empty set, or no losses)
/// every investment is zero and the budget stays unallocated.
///
/// Strict single-pass proportional allocation: no caps, no minimum-ticket
/// rounding, no rebalancing. Values keep full precision; rounding happens
/// only at the presentation boundary.
pub fn allocate_proportional(eligible: &[AssetRecord], budget: Decimal) -> Vec<Decimal> {
    let total_loss: Decimal = eligible.iter().map(|r| r.loss_magnitude()).sum();

    if total_loss.is_zero() {
        return vec![Decimal::ZERO; eligible.len()];
    }

    eligible
        .iter()
        .map(|record| budget * (record.loss_magnitude() / total_loss))
        .collect()
}

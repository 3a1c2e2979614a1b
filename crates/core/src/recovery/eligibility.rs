//! Eligibility filter: selects the assets that participate in allocation.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::assets::AssetRecord;

/// Filters `records` down to the assets eligible for allocation.
///
/// Removes records whose name is in `excluded_names` (case-sensitive exact
/// match) and, when `exclude_positive` is set, records with `profit >= 0`.
/// Relative input order is preserved; an empty result is valid and handled
/// downstream as a zero-allocation run.
pub fn filter_eligible(
    records: &[AssetRecord],
    excluded_names: &HashSet<String>,
    exclude_positive: bool,
) -> Vec<AssetRecord> {
    records
        .iter()
        .filter(|record| !excluded_names.contains(&record.name))
        .filter(|record| !exclude_positive || record.profit < Decimal::ZERO)
        .cloned()
        .collect()
}

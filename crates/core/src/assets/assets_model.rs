use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One portfolio line item: what was spent on an asset and what it is
/// currently worth.
///
/// `profit` and `profit_percent` are derived at construction and never
/// independently mutated afterwards. `profit_percent` is `None` when
/// `total_spent` is zero (the percentage is undefined, not zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    /// Asset symbol or display name, unique within a run.
    pub name: String,
    /// Monetary amount invested (R$).
    pub total_spent: Decimal,
    /// Current market value (R$).
    pub current_amount: Decimal,
    /// current_amount - total_spent.
    pub profit: Decimal,
    /// profit / total_spent * 100; None when total_spent is zero.
    pub profit_percent: Option<Decimal>,
}

impl AssetRecord {
    /// Builds a record from its independent fields, deriving `profit` and
    /// `profit_percent`.
    pub fn new(name: impl Into<String>, total_spent: Decimal, current_amount: Decimal) -> Self {
        let profit = current_amount - total_spent;
        let profit_percent = if total_spent.is_zero() {
            None
        } else {
            Some(profit / total_spent * dec!(100))
        };

        Self {
            name: name.into(),
            total_spent,
            current_amount,
            profit,
            profit_percent,
        }
    }

    /// Whether the asset currently sits at a strict loss.
    pub fn is_loss(&self) -> bool {
        self.profit < Decimal::ZERO
    }

    /// Absolute loss magnitude (zero for profitable assets is not clamped;
    /// callers filter first).
    pub fn loss_magnitude(&self) -> Decimal {
        self.profit.abs()
    }
}

//! Tests for the AssetRecord domain model.

#[cfg(test)]
mod tests {
    use crate::assets::AssetRecord;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_profit_fields_are_derived() {
        let record = AssetRecord::new("BTC", dec!(10000), dec!(8704.61));

        assert_eq!(record.profit, dec!(-1295.39));
        assert_eq!(record.profit_percent, Some(dec!(-12.9539)));
        assert!(record.is_loss());
    }

    #[test]
    fn test_profitable_asset() {
        let record = AssetRecord::new("SOL", dec!(100), dec!(150));

        assert_eq!(record.profit, dec!(50));
        assert_eq!(record.profit_percent, Some(dec!(50)));
        assert!(!record.is_loss());
    }

    #[test]
    fn test_zero_total_spent_has_no_percent() {
        let record = AssetRecord::new("AIRDROP", Decimal::ZERO, dec!(42));

        assert_eq!(record.profit, dec!(42));
        assert_eq!(record.profit_percent, None);
    }

    #[test]
    fn test_break_even_is_not_a_loss() {
        let record = AssetRecord::new("USDC", dec!(200), dec!(200));

        assert_eq!(record.profit, Decimal::ZERO);
        assert!(!record.is_loss());
    }

    #[test]
    fn test_loss_magnitude() {
        let record = AssetRecord::new("XRP", dec!(2000), dec!(1497.90));

        assert_eq!(record.loss_magnitude(), dec!(502.10));
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let record = AssetRecord::new("BTC", dec!(10), dec!(5));
        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("totalSpent").is_some());
        assert!(json.get("currentAmount").is_some());
        assert!(json.get("profitPercent").is_some());
    }
}

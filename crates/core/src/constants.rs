/// Name of the synthetic totals row appended to every report.
pub const TOTAL_ROW_NAME: &str = "TOTAL";

/// Decimal precision for display.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Aggregate row label some spreadsheets carry; always dropped at import.
pub const SHEET_SUM_ROW: &str = "SUM";

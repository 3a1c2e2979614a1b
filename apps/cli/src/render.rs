//! Colored terminal table for the recovery report.
//!
//! Loss columns render red, investment and improvement cyan, index and
//! asset name green. NotApplicable percentage cells render as a dash.
//! All numbers are rounded to two decimals here, at the presentation
//! boundary only.

use console::style;
use recoup_core::constants::DISPLAY_DECIMAL_PRECISION;
use recoup_core::{AllocationRow, PercentValue, RecoveryReport};
use rust_decimal::Decimal;

pub const REPORT_HEADERS: [&str; 7] = [
    "#",
    "Asset",
    "Current Loss (R$)",
    "Investment (R$)",
    "Old Loss %",
    "New Loss %",
    "Improvement %",
];

/// Renders the report as an aligned, colored table.
pub fn render_table(report: &RecoveryReport) -> String {
    let rows: Vec<[String; 7]> = report.rows.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = REPORT_HEADERS.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (j, cell) in row.iter().enumerate() {
            widths[j] = widths[j].max(cell.len());
        }
    }

    let header_cells = REPORT_HEADERS.map(String::from);
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_line(&header_cells, &widths));
    for row in &rows {
        lines.push(format_line(row, &widths));
    }
    lines.join("\n")
}

/// The report row as plain display strings, uncolored.
pub fn row_cells(row: &AllocationRow) -> [String; 7] {
    [
        row.index.map(|i| i.to_string()).unwrap_or_default(),
        row.name.clone(),
        format_amount(row.current_loss),
        format_amount(row.investment),
        format_percent(row.old_loss_percent),
        format_percent(row.new_loss_percent),
        format_percent(row.improvement_percent),
    ]
}

fn format_line(cells: &[String; 7], widths: &[usize]) -> String {
    let styled: Vec<String> = cells
        .iter()
        .enumerate()
        .map(|(j, cell)| {
            let padded = format!("{:<width$}", cell, width = widths[j]);
            match j {
                0 | 1 => style(padded).green().to_string(),
                2 | 4 | 5 => style(padded).red().to_string(),
                _ => style(padded).cyan().to_string(),
            }
        })
        .collect();
    styled.join("  ")
}

/// Formats a monetary value with two decimals and thousands grouping.
pub fn format_amount(value: Decimal) -> String {
    group_thousands(&format!(
        "{:.prec$}",
        value.round_dp(DISPLAY_DECIMAL_PRECISION),
        prec = DISPLAY_DECIMAL_PRECISION as usize
    ))
}

/// Formats a percentage cell, rendering NotApplicable as a dash.
pub fn format_percent(value: PercentValue) -> String {
    match value.value() {
        Some(v) => format_amount(v),
        None => "-".to_string(),
    }
}

fn group_thousands(raw: &str) -> String {
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw, None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(d) => ("-", d),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount_rounds_to_two_decimals() {
        assert_eq!(format_amount(dec!(360.333)), "360.33");
        assert_eq!(format_amount(dec!(500)), "500.00");
        assert_eq!(format_amount(dec!(-1297.494)), "-1,297.49");
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_amount(dec!(-1797.49)), "-1,797.49");
    }

    #[test]
    fn test_format_percent_not_applicable_is_a_dash() {
        assert_eq!(format_percent(PercentValue::NotApplicable), "-");
        assert_eq!(format_percent(PercentValue::Value(dec!(-12.9539))), "-12.95");
    }

    #[test]
    fn test_row_cells_for_total_row() {
        let row = AllocationRow {
            index: None,
            name: "TOTAL".to_string(),
            current_loss: dec!(-1797.49),
            investment: dec!(500),
            old_loss_percent: PercentValue::NotApplicable,
            new_loss_percent: PercentValue::NotApplicable,
            improvement_percent: PercentValue::NotApplicable,
        };

        let cells = row_cells(&row);

        assert_eq!(cells[0], "");
        assert_eq!(cells[1], "TOTAL");
        assert_eq!(cells[2], "-1,797.49");
        assert_eq!(cells[3], "500.00");
        assert_eq!(&cells[4..], ["-", "-", "-"]);
    }
}

//! Maps cleaned spreadsheet rows onto `AssetRecord` values.
//!
//! Column names are matched after normalization, so `Data`,
//! `Total Spent - R$` and `Current Amount - R$` resolve regardless of
//! case, punctuation, or currency suffix. Money cells tolerate `R$`
//! prefixes, thousands separators, and either decimal comma or point.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{error, warn};
use rust_decimal::Decimal;

use crate::assets::AssetRecord;
use crate::constants::SHEET_SUM_ROW;
use crate::errors::{Error, Result, ValidationError};
use crate::importer::csv_parser::{parse_csv, ParsedCsv};

/// Trait for portfolio loaders.
pub trait PortfolioImporterTrait: Send + Sync {
    /// Loads an ordered sequence of cleaned records from a file.
    fn load(&self, path: &Path) -> Result<Vec<AssetRecord>>;
}

/// Loads portfolio records from delimited text files.
#[derive(Debug, Clone, Default)]
pub struct CsvPortfolioImporter {
    delimiter: Option<char>,
}

impl CsvPortfolioImporter {
    /// `delimiter: None` auto-detects among `,`, `;` and tab.
    pub fn new(delimiter: Option<char>) -> Self {
        Self { delimiter }
    }

    /// Parses raw CSV bytes into records, preserving row order.
    pub fn load_from_bytes(&self, content: &[u8]) -> Result<Vec<AssetRecord>> {
        let parsed = parse_csv(content, self.delimiter)?;
        map_rows(&parsed)
    }
}

impl PortfolioImporterTrait for CsvPortfolioImporter {
    fn load(&self, path: &Path) -> Result<Vec<AssetRecord>> {
        let content = fs::read(path).map_err(|e| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Cannot read input file '{}': {}",
                path.display(),
                e
            )))
        })?;
        self.load_from_bytes(&content)
    }
}

fn map_rows(parsed: &ParsedCsv) -> Result<Vec<AssetRecord>> {
    let name_idx = find_column(&parsed.headers, &["data", "name", "asset", "cryptocurrency", "coin", "symbol"])
        .ok_or_else(|| ValidationError::MissingColumn("name".to_string()))?;
    let spent_idx = find_column_containing(&parsed.headers, &["totalspent", "spent", "invested"])
        .ok_or_else(|| ValidationError::MissingColumn("total spent".to_string()))?;
    let current_idx =
        find_column_containing(&parsed.headers, &["currentamount", "currentvalue", "current"])
            .ok_or_else(|| ValidationError::MissingColumn("current amount".to_string()))?;

    let mut records: Vec<AssetRecord> = Vec::with_capacity(parsed.rows.len());
    for row in &parsed.rows {
        let name = row[name_idx].trim();
        if name.is_empty() {
            continue;
        }
        // Spreadsheets often carry their own aggregate row; drop it here so
        // the pipeline's TOTAL row is the only aggregate.
        if name == SHEET_SUM_ROW {
            continue;
        }
        if records.iter().any(|r| r.name == name) {
            warn!("Duplicate asset name '{}' in input", name);
        }

        let total_spent = parse_money_tolerant(&row[spent_idx], "total spent");
        let current_amount = parse_money_tolerant(&row[current_idx], "current amount");
        // Profit columns in the sheet, if any, are ignored: profit and
        // profit percent are derived from spent/current at construction.
        records.push(AssetRecord::new(name, total_spent, current_amount));
    }

    Ok(records)
}

/// Finds a header whose normalized form equals one of `candidates`.
fn find_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| candidates.contains(&normalize_header(h).as_str()))
}

/// Finds a header whose normalized form contains one of `candidates`.
fn find_column_containing(headers: &[String], candidates: &[&str]) -> Option<usize> {
    for candidate in candidates {
        if let Some(idx) = headers
            .iter()
            .position(|h| normalize_header(h).contains(candidate))
        {
            return Some(idx);
        }
    }
    None
}

/// Lowercases and drops everything but ASCII alphanumerics, so
/// `"Total Spent - R$"` becomes `"totalspentr"`.
fn normalize_header(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Parses a money cell, tolerating currency symbols and locale formatting.
///
/// An empty cell (or a bare dash) is zero. A cell that still fails to
/// parse after normalization is logged and degrades to zero rather than
/// aborting the run.
pub fn parse_money_tolerant(raw: &str, field_name: &str) -> Decimal {
    let cleaned = normalize_money_string(raw);
    if cleaned.is_empty() || cleaned == "-" {
        return Decimal::ZERO;
    }

    match Decimal::from_str(&cleaned) {
        Ok(d) => d,
        Err(e_decimal) => match Decimal::from_scientific(&cleaned) {
            Ok(d) => d,
            Err(e_scientific) => {
                error!(
                    "Failed to parse {} '{}': as Decimal (err: {}), and as scientific (err: {}). Falling back to ZERO.",
                    field_name, raw, e_decimal, e_scientific
                );
                Decimal::ZERO
            }
        },
    }
}

/// Strips currency decoration and rewrites locale separators so the value
/// parses as a plain decimal.
///
/// When both separators appear, the rightmost one is the decimal
/// separator. A lone separator followed by exactly three digits after a
/// short integer part is read as a thousands separator (`1.234` -> 1234);
/// one or two trailing digits mean a decimal separator (`8704,61`).
fn normalize_money_string(raw: &str) -> String {
    let mut s = raw.trim().to_string();
    for symbol in ["R$", "r$", "$", "%"] {
        s = s.replace(symbol, "");
    }
    s.retain(|c| !c.is_whitespace());

    let dots = s.matches('.').count();
    let commas = s.matches(',').count();

    if dots > 0 && commas > 0 {
        if s.rfind(',') > s.rfind('.') {
            let without_dots: String = s.chars().filter(|&c| c != '.').collect();
            keep_last_as_point(&without_dots, ',')
        } else {
            let without_commas: String = s.chars().filter(|&c| c != ',').collect();
            keep_last_as_point(&without_commas, '.')
        }
    } else if commas > 0 {
        if commas == 1 && !is_group_separator(&s, ',') {
            s.replace(',', ".")
        } else {
            s.chars().filter(|&c| c != ',').collect()
        }
    } else if dots > 1 || (dots == 1 && is_group_separator(&s, '.')) {
        s.chars().filter(|&c| c != '.').collect()
    } else {
        s
    }
}

/// A lone separator reads as a thousands separator when exactly three
/// digits follow it and the integer part is a plausible leading group.
fn is_group_separator(s: &str, sep: char) -> bool {
    let Some(pos) = s.rfind(sep) else {
        return false;
    };
    let fractional = &s[pos + sep.len_utf8()..];
    let integer: String = s[..pos].chars().filter(|c| c.is_ascii_digit()).collect();

    fractional.len() == 3
        && fractional.chars().all(|c| c.is_ascii_digit())
        && (1..=3).contains(&integer.len())
        && integer != "0"
}

/// Keeps only the last occurrence of `sep`, rewritten as a point.
fn keep_last_as_point(s: &str, sep: char) -> String {
    let last = s.rfind(sep);
    s.char_indices()
        .filter_map(|(i, c)| {
            if c == sep {
                (Some(i) == last).then_some('.')
            } else {
                Some(c)
            }
        })
        .collect()
}

//! CSV parsing with delimiter auto-detection.
//!
//! Handles the formatting quirks of exported spreadsheets: UTF-8 BOM,
//! `,`/`;`/tab delimiters, empty rows, and ragged row lengths.

use csv::{ReaderBuilder, Terminator};
use log::warn;

use crate::errors::{Error, Result, ValidationError};

/// Headers plus data rows, all as trimmed strings.
#[derive(Debug, Clone)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parses CSV content into headers and rows.
///
/// The first non-empty row is the header row. When `delimiter` is `None`
/// the delimiter is auto-detected by scoring `,`, `;` and tab for
/// consistent column counts. Rows shorter than the header are padded with
/// empty cells; longer rows are truncated.
pub fn parse_csv(content: &[u8], delimiter: Option<char>) -> Result<ParsedCsv> {
    let content_str = decode_content(content);
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content_str));

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(false) // headers handled manually
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(content_str.as_bytes());

    let mut records: Vec<Vec<String>> = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                let row: Vec<String> = record.iter().map(|s| s.trim().to_string()).collect();
                if !row.iter().all(|cell| cell.is_empty()) {
                    records.push(row);
                }
            }
            Err(e) => warn!("Skipping unreadable row {}: {}", idx + 1, e),
        }
    }

    if records.is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "CSV input is empty or contains no valid records".to_string(),
        )));
    }

    let headers = records.remove(0);
    let header_count = headers.len();

    let rows: Vec<Vec<String>> = records
        .into_iter()
        .enumerate()
        .map(|(idx, mut row)| {
            if row.len() > header_count {
                warn!(
                    "Row {} has {} columns, expected {}; extra columns ignored",
                    idx + 1,
                    row.len(),
                    header_count
                );
            }
            row.resize(header_count, String::new());
            row
        })
        .collect();

    Ok(ParsedCsv { headers, rows })
}

/// Decodes content bytes to a UTF-8 string, handling a BOM if present.
fn decode_content(content: &[u8]) -> String {
    let content = content.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(content);
    match std::str::from_utf8(content) {
        Ok(s) => s.to_string(),
        Err(e) => {
            warn!(
                "Invalid UTF-8 encoding at byte {}; some characters may be replaced",
                e.valid_up_to()
            );
            String::from_utf8_lossy(content).into_owned()
        }
    }
}

/// Picks the delimiter whose column counts are most consistent over the
/// first lines of the content.
fn detect_delimiter(content: &str) -> char {
    let lines: Vec<&str> = content.lines().take(10).collect();
    let mut best = ',';
    let mut best_score = 0usize;

    for candidate in [',', ';', '\t'] {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| line.matches(candidate).count())
            .collect();
        let first = counts.first().copied().unwrap_or(0);
        if first == 0 {
            continue;
        }
        let consistent = counts.iter().filter(|&&c| c == first).count();
        let score = first * consistent;
        if score > best_score {
            best_score = score;
            best = candidate;
        }
    }

    best
}

//! Importer module - loads and cleans the tabular portfolio input.

mod csv_parser;
mod importer_service;

pub use csv_parser::{parse_csv, ParsedCsv};
pub use importer_service::{CsvPortfolioImporter, PortfolioImporterTrait};

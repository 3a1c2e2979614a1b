//! End-to-end test: import a portfolio CSV, run the pipeline, and verify
//! the exported report files.

use std::fs;
use std::io::Write;

use rust_decimal_macros::dec;

use recoup_cli::{export, render};
use recoup_core::importer::{CsvPortfolioImporter, PortfolioImporterTrait};
use recoup_core::{RecoveryConfig, RecoveryService, RecoveryServiceTrait};

const PORTFOLIO_CSV: &[u8] = b"Data,Total Spent - R$,Current Amount - R$\n\
    BTC,\"10.000,00\",\"8.704,61\"\n\
    XRP,\"2.000,00\",\"1.497,90\"\n\
    SUM,\"12.000,00\",\"10.202,51\"\n";

fn calculate_report() -> recoup_core::RecoveryReport {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    input.write_all(PORTFOLIO_CSV).unwrap();

    let records = CsvPortfolioImporter::new(None).load(input.path()).unwrap();
    assert_eq!(records.len(), 2); // the sheet's SUM row is dropped

    let service = RecoveryService::new(RecoveryConfig {
        available_budget: dec!(500),
        ..Default::default()
    })
    .unwrap();
    service.calculate(&records).unwrap()
}

#[test]
fn exports_csv_report() {
    let report = calculate_report();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");

    export::write_csv(&report, &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4); // header + 2 assets + TOTAL
    assert!(lines[0].starts_with("#,Asset,Current Loss (R$)"));
    assert_eq!(lines[1], "1,BTC,\"-1,295.39\",360.33,-12.95,-12.50,0.45");
    assert!(lines[2].starts_with("2,XRP,"));
    assert!(lines[3].contains("TOTAL"));
    assert!(lines[3].contains("-1,797.49"));
    assert!(lines[3].ends_with("-,-,-"));
}

#[test]
fn exports_json_report() {
    let report = calculate_report();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    export::write_json(&report, &path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["name"], "BTC");
    assert_eq!(rows[0]["index"], 1);
    assert!(rows[2]["index"].is_null());
    assert!(rows[2]["oldLossPercent"].is_null());
    assert_eq!(json["totalInvestment"], serde_json::json!(500.0));
}

#[test]
fn renders_terminal_table() {
    console::set_colors_enabled(false);
    let report = calculate_report();

    let table = render::render_table(&report);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("Improvement %"));
    assert!(lines[1].contains("BTC"));
    assert!(lines[1].contains("360.33"));
    assert!(lines[3].contains("TOTAL"));
    assert!(lines[3].contains('-'));
}

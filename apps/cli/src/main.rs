use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recoup_cli::{export, render};
use recoup_core::importer::{CsvPortfolioImporter, PortfolioImporterTrait};
use recoup_core::{RecoveryConfig, RecoveryService, RecoveryServiceTrait};

/// Distributes a fixed recovery budget across the loss-making assets of a
/// portfolio, proportionally to each asset's loss.
#[derive(Parser, Debug)]
#[command(name = "recoup", version, about)]
struct Cli {
    /// Portfolio CSV file (asset name, total spent, current amount columns)
    input: PathBuf,

    /// Total budget (R$) to distribute across eligible assets
    #[arg(long)]
    budget: Decimal,

    /// Asset name to exclude from allocation; repeatable
    #[arg(long = "exclude", value_name = "NAME")]
    excluded: Vec<String>,

    /// Also keep assets currently in profit eligible for allocation
    #[arg(long)]
    include_positive: bool,

    /// Input delimiter (auto-detected among ',', ';' and tab when omitted)
    #[arg(long)]
    delimiter: Option<char>,

    /// Write the report as CSV to this path
    #[arg(long, value_name = "PATH")]
    csv_out: Option<PathBuf>,

    /// Write the report as JSON to this path
    #[arg(long, value_name = "PATH")]
    json_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();
    let started = Instant::now();

    let importer = CsvPortfolioImporter::new(cli.delimiter);
    let records = importer.load(&cli.input)?;
    tracing::info!("Loaded {} records from {}", records.len(), cli.input.display());

    let config = RecoveryConfig {
        available_budget: cli.budget,
        excluded_assets: cli.excluded.into_iter().collect(),
        exclude_positive_profit: !cli.include_positive,
    };
    let service = RecoveryService::new(config)?;
    let report = service.calculate(&records)?;

    println!("{}", render::render_table(&report));
    if report.total_investment.is_zero() && report.unallocated_budget > Decimal::ZERO {
        tracing::info!(
            "No losses to recover; {} of the budget stays unallocated",
            render::format_amount(report.unallocated_budget)
        );
    }

    if let Some(path) = &cli.csv_out {
        export::write_csv(&report, path)?;
        tracing::info!("Wrote CSV report to {}", path.display());
    }
    if let Some(path) = &cli.json_out {
        export::write_json(&report, path)?;
        tracing::info!("Wrote JSON report to {}", path.display());
    }

    tracing::info!("Finished in {:.2?}", started.elapsed());
    Ok(())
}

fn init_tracing() {
    let log_format = std::env::var("RECOUP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}

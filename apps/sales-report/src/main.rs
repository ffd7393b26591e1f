//! # Sales Report CLI
//!
//! Prints the seller performance report for a dataset file.
//!
//! ## Usage
//! ```bash
//! # Full report, pretty JSON
//! cargo run -p sales-report -- ./data/dataset.json
//!
//! # Top 3 products per seller, one line, with debug logs on stderr
//! RUST_LOG=debug cargo run -p sales-report -- ./data/dataset.json --top 3 --compact
//! ```
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize Logging      tracing-subscriber, RUST_LOG, stderr        │
//! │  2. Parse Arguments         dataset path, --top, --compact              │
//! │  3. Load Configuration      SALES_REPORT_* env, then --top override     │
//! │  4. Read + Parse Dataset    structural validation                       │
//! │  5. Analyze                 standard revenue and bonus policies         │
//! │  6. Print                   report JSON on stdout                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cli;
mod error;

use std::process::ExitCode;

use sales_core::{analyze_sales_data, parse_sales_data, AnalysisOptions, ReportConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{parse_args, Command, ReportArgs, USAGE};
use crate::error::CliError;

fn main() -> ExitCode {
    init_tracing();

    let result = parse_args(std::env::args().skip(1)).and_then(|command| match command {
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
        Command::Report(args) => run(args),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "sales report failed");
            eprintln!("error: {e}");
            if matches!(e, CliError::Usage(_)) {
                eprintln!();
                eprintln!("{USAGE}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: ReportArgs) -> Result<(), CliError> {
    let mut config = ReportConfig::from_env()?;
    if let Some(top) = args.top {
        config = config.with_top_products_limit(top);
    }
    info!(
        dataset = %args.dataset.display(),
        top_products = config.top_products_limit,
        precision = config.precision,
        "Configuration loaded"
    );

    let json = std::fs::read_to_string(&args.dataset).map_err(|source| CliError::Read {
        path: args.dataset.display().to_string(),
        source,
    })?;
    let data = parse_sales_data(&json)?;

    let options = AnalysisOptions::standard().with_config(config);
    let report = analyze_sales_data(&data, &options)?;

    let output = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{output}");

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=sales_core=trace` - Show trace for the core only
/// - Default: INFO, DEBUG for sales_core
///
/// Logs go to stderr so the report on stdout stays valid JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sales_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SAMPLE: &str = include_str!("../data/sample_dataset.json");

    #[test]
    fn test_sample_dataset_report() {
        let data = parse_sales_data(SAMPLE).unwrap();
        let report = analyze_sales_data(&data, &AnalysisOptions::standard()).unwrap();

        let ids: Vec<&str> = report.iter().map(|r| r.seller_id.as_str()).collect();
        assert_eq!(ids, vec!["seller_1", "seller_2", "seller_3"]);

        let best = &report[0];
        assert_eq!(best.name, "Alexey Petrov");
        assert_eq!(best.revenue, 241.0);
        assert_eq!(best.profit, 85.5);
        assert_eq!(best.sales_count, 2);
        // 85.5 × 0.15 is stored just below 12.825.
        assert_eq!(best.bonus, 12.82);
        let skus: Vec<&str> = best.top_products.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["SKU_004", "SKU_001", "SKU_003"]);

        assert_eq!(report[1].profit, 50.0);
        assert_eq!(report[1].bonus, 5.0);
        assert_eq!(report[2].profit, 12.0);
        assert_eq!(report[2].bonus, 1.2);

        let sales: usize = report.iter().map(|r| r.sales_count).sum();
        assert_eq!(sales, data.purchase_records.len());
    }

    #[test]
    fn test_missing_dataset_file() {
        let err = run(ReportArgs {
            dataset: PathBuf::from("does/not/exist.json"),
            top: None,
            compact: true,
        })
        .unwrap_err();

        assert!(matches!(err, CliError::Read { .. }));
        assert_eq!(err.exit_code(), 3);
    }
}

//! Command-line argument parsing.

use std::path::PathBuf;

use crate::error::CliError;

pub const USAGE: &str = "\
Seller performance report

Usage: sales-report <DATASET.json> [OPTIONS]

Options:
  -t, --top <N>      Best-selling products per seller (default: 10)
      --compact      Print the report on one line
  -h, --help         Show this help message

Environment:
  SALES_REPORT_TOP_PRODUCTS   Same as --top
  SALES_REPORT_PRECISION      Fractional digits in amounts (default: 2)
  RUST_LOG                    Log filter, logs go to stderr";

/// What the user asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Report(ReportArgs),
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReportArgs {
    pub dataset: PathBuf,
    pub top: Option<usize>,
    pub compact: bool,
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut dataset = None;
    let mut top = None;
    let mut compact = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--compact" => compact = true,
            "--top" | "-t" => {
                let raw = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--top needs a value".to_string()))?;
                let n = raw
                    .parse()
                    .map_err(|_| CliError::Usage(format!("--top expects a number, got '{raw}'")))?;
                top = Some(n);
            }
            flag if flag.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown option '{flag}'")));
            }
            path => {
                if dataset.is_some() {
                    return Err(CliError::Usage(format!("unexpected argument '{path}'")));
                }
                dataset = Some(PathBuf::from(path));
            }
        }
    }

    let dataset = dataset.ok_or_else(|| CliError::Usage("missing dataset path".to_string()))?;

    Ok(Command::Report(ReportArgs {
        dataset,
        top,
        compact,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, CliError> {
        parse_args(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn test_dataset_only() {
        assert_eq!(
            parse(&["data.json"]).unwrap(),
            Command::Report(ReportArgs {
                dataset: PathBuf::from("data.json"),
                top: None,
                compact: false,
            })
        );
    }

    #[test]
    fn test_all_options() {
        assert_eq!(
            parse(&["--top", "3", "data.json", "--compact"]).unwrap(),
            Command::Report(ReportArgs {
                dataset: PathBuf::from("data.json"),
                top: Some(3),
                compact: true,
            })
        );
    }

    #[test]
    fn test_help_wins() {
        assert_eq!(parse(&["data.json", "-h"]).unwrap(), Command::Help);
    }

    #[test]
    fn test_usage_errors() {
        assert!(matches!(parse(&[]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["--top"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["--top", "many", "d.json"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["--verbose", "d.json"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["a.json", "b.json"]), Err(CliError::Usage(_))));
    }
}

//! # CLI Error Type
//!
//! Everything that can stop `sales-report`, with a process exit code per
//! failure class.
//!
//! ```text
//! ┌──────────────────────────────┬──────┐
//! │ failure                      │ exit │
//! ├──────────────────────────────┼──────┤
//! │ bad arguments                │  2   │
//! │ bad configuration            │  2   │
//! │ dataset unreadable           │  3   │
//! │ dataset invalid              │  4   │
//! │ unknown seller / product     │  5   │
//! │ anything else                │  1   │
//! └──────────────────────────────┴──────┘
//! ```

use sales_core::{ConfigError, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Cannot serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) | CliError::Config(_) => 2,
            CliError::Core(e) if e.is_invalid_config() => 2,
            CliError::Read { .. } => 3,
            CliError::Core(e) if e.is_invalid_input() => 4,
            CliError::Core(e) if e.is_unresolved_reference() => 5,
            CliError::Core(_) | CliError::Serialize(_) => 1,
        }
    }
}

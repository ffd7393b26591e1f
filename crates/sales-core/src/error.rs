//! # Error Types
//!
//! Domain-specific error types for sales-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sales-core errors (this file)                                         │
//! │  ├── CoreError        - Everything that aborts a report                │
//! │  │   ├── InvalidInput      (wraps ValidationError)                     │
//! │  │   ├── MissingPolicy     revenue / bonus policy not supplied         │
//! │  │   ├── InvalidConfig     (wraps ConfigError)                         │
//! │  │   ├── UnknownSeller     record → seller id not in sellers           │
//! │  │   └── UnknownProduct    item → sku not in products                  │
//! │  └── ValidationError  - Structural problems with the input collections │
//! │                                                                         │
//! │  sales-report errors (binary)                                          │
//! │  └── CliError         - I/O, config, usage                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is fatal to the call that produced it. There is no
//! partial-result mode.

use thiserror::Error;

use crate::config::ConfigError;

// =============================================================================
// Core Error
// =============================================================================

/// Errors that abort report generation.
#[derive(Debug, Error)]
pub enum CoreError {
    /// One of the input collections is missing, not a sequence, or empty.
    #[error("Invalid input data: {0}")]
    InvalidInput(#[from] ValidationError),

    /// A revenue or bonus policy was not supplied.
    #[error("Policy function is not defined: {policy}")]
    MissingPolicy { policy: &'static str },

    /// Report options are out of range, e.g. a precision above the maximum.
    #[error("Invalid report configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// A purchase record names a seller that is not in the seller list.
    ///
    /// ## When This Occurs
    /// ```text
    /// purchase_records[7].seller_id = "seller_9"
    ///      │
    ///      ▼
    /// seller index lookup ──► miss
    ///      │
    ///      ▼
    /// UnknownSeller { seller_id: "seller_9", record_index: 7, .. }
    /// ```
    #[error("Purchase record {record_index}{} references unknown seller: {seller_id}", receipt_suffix(.receipt_id))]
    UnknownSeller {
        seller_id: String,
        record_index: usize,
        receipt_id: Option<String>,
    },

    /// A purchase item names a SKU that is not in the product list.
    #[error("Purchase record {record_index}{} references unknown product: {sku}", receipt_suffix(.receipt_id))]
    UnknownProduct {
        sku: String,
        record_index: usize,
        receipt_id: Option<String>,
    },
}

fn receipt_suffix(receipt_id: &Option<String>) -> String {
    match receipt_id {
        Some(id) => format!(" ({id})"),
        None => String::new(),
    }
}

impl CoreError {
    /// Input collections failed the structural checks.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CoreError::InvalidInput(_))
    }

    /// A policy function was absent.
    pub fn is_missing_policy(&self) -> bool {
        matches!(self, CoreError::MissingPolicy { .. })
    }

    /// Report options failed their range checks.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, CoreError::InvalidConfig(_))
    }

    /// A record or item pointed at a seller or product that does not exist.
    pub fn is_unresolved_reference(&self) -> bool {
        matches!(
            self,
            CoreError::UnknownSeller { .. } | CoreError::UnknownProduct { .. }
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Structural input validation errors.
///
/// `field` names the offending collection: `sellers`, `products` or
/// `purchase_records` (or `dataset` for the document root).
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The collection is absent.
    #[error("{field} is required")]
    Required { field: String },

    /// The collection is present but has no elements.
    #[error("{field} must not be empty")]
    Empty { field: String },

    /// The value has the wrong shape (not an array, malformed JSON, ...).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownProduct {
            sku: "SKU_404".to_string(),
            record_index: 3,
            receipt_id: Some("receipt_12".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Purchase record 3 (receipt_12) references unknown product: SKU_404"
        );

        let err = CoreError::UnknownSeller {
            seller_id: "seller_9".to_string(),
            record_index: 0,
            receipt_id: None,
        };
        assert_eq!(
            err.to_string(),
            "Purchase record 0 references unknown seller: seller_9"
        );

        let err = CoreError::MissingPolicy {
            policy: "calculate_bonus",
        };
        assert_eq!(
            err.to_string(),
            "Policy function is not defined: calculate_bonus"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Empty {
            field: "sellers".to_string(),
        };
        assert_eq!(err.to_string(), "sellers must not be empty");

        let err = ValidationError::Required {
            field: "products".to_string(),
        };
        assert_eq!(err.to_string(), "products is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Empty {
            field: "purchase_records".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(core_err.is_invalid_input());
        assert!(!core_err.is_missing_policy());
        assert!(!core_err.is_unresolved_reference());
    }

    #[test]
    fn test_config_error_converts_to_core_error() {
        let core_err: CoreError = ConfigError::OutOfRange {
            name: "SALES_REPORT_PRECISION".to_string(),
            max: 10,
        }
        .into();
        assert!(core_err.is_invalid_config());
        assert!(!core_err.is_invalid_input());
        assert_eq!(
            core_err.to_string(),
            "Invalid report configuration: SALES_REPORT_PRECISION must be at most 10"
        );
    }

    #[test]
    fn test_unresolved_reference_classification() {
        let err = CoreError::UnknownSeller {
            seller_id: "x".to_string(),
            record_index: 0,
            receipt_id: None,
        };
        assert!(err.is_unresolved_reference());
        assert!(!err.is_invalid_input());
    }
}

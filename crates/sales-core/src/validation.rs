//! # Validation Module
//!
//! Structural checks that run before any aggregation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Raw JSON (validate_json_dataset)                             │
//! │  ├── root is an object                                                 │
//! │  ├── sellers / products / purchase_records present                     │
//! │  ├── each one is an array                                              │
//! │  └── each one is non-empty                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Typed data (validate_sales_data)                             │
//! │  └── non-empty collections (callers that build SalesData in code       │
//! │      skip layer 1 entirely)                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Aggregation                                                  │
//! │  └── seller ids and SKUs resolve (UnknownSeller / UnknownProduct)      │
//! │                                                                         │
//! │  Nothing here looks at values: prices, quantities and discounts are    │
//! │  taken as given.                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sales_core::validation::parse_sales_data;
//!
//! let err = parse_sales_data(r#"{"sellers": [], "products": [], "purchase_records": []}"#)
//!     .unwrap_err();
//! assert!(err.is_invalid_input());
//! ```

use serde_json::Value;

use crate::error::{CoreResult, ValidationError};
use crate::types::SalesData;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// The input collections, in the order they are checked.
pub const DATASET_FIELDS: [&str; 3] = ["sellers", "products", "purchase_records"];

// =============================================================================
// Typed Validators
// =============================================================================

/// Checks that every collection in `data` has at least one element.
///
/// Reports the first empty collection in [`DATASET_FIELDS`] order.
pub fn validate_sales_data(data: &SalesData) -> ValidationResult<()> {
    let lengths = [
        data.sellers.len(),
        data.products.len(),
        data.purchase_records.len(),
    ];

    for (field, len) in DATASET_FIELDS.iter().zip(lengths) {
        validate_not_empty(field, len)?;
    }

    Ok(())
}

fn validate_not_empty(field: &str, len: usize) -> ValidationResult<()> {
    if len == 0 {
        return Err(ValidationError::Empty {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// JSON Validators
// =============================================================================

/// Checks the shape of an untyped dataset document.
///
/// ## Rules
/// - Root must be a JSON object
/// - `sellers`, `products`, `purchase_records` must be present
/// - each must be an array
/// - each must be non-empty
///
/// Element shapes are left to deserialization.
pub fn validate_json_dataset(value: &Value) -> ValidationResult<()> {
    let root = value.as_object().ok_or_else(|| ValidationError::InvalidFormat {
        field: "dataset".to_string(),
        reason: "must be an object".to_string(),
    })?;

    for field in DATASET_FIELDS {
        let collection = match root.get(field) {
            None | Some(Value::Null) => {
                return Err(ValidationError::Required {
                    field: field.to_string(),
                })
            }
            Some(collection) => collection,
        };

        let elements = collection
            .as_array()
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: field.to_string(),
                reason: "must be an array".to_string(),
            })?;

        validate_not_empty(field, elements.len())?;
    }

    Ok(())
}

/// Parses a dataset document, validating its structure first.
///
/// Malformed JSON and elements that don't match the expected shape are
/// reported as `InvalidInput` too, so callers see a single error class for
/// "the data is unusable".
pub fn parse_sales_data(json: &str) -> CoreResult<SalesData> {
    let value: Value = serde_json::from_str(json).map_err(|e| ValidationError::InvalidFormat {
        field: "dataset".to_string(),
        reason: e.to_string(),
    })?;

    validate_json_dataset(&value)?;

    let data = serde_json::from_value(value).map_err(|e| ValidationError::InvalidFormat {
        field: "dataset".to_string(),
        reason: e.to_string(),
    })?;

    Ok(data)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Product, PurchaseItem, PurchaseRecord, Seller};
    use serde_json::json;

    fn minimal_data() -> SalesData {
        SalesData {
            sellers: vec![Seller {
                id: "s1".to_string(),
                first_name: "A".to_string(),
                last_name: "B".to_string(),
            }],
            products: vec![Product {
                sku: "SKU_001".to_string(),
                purchase_price: 1.0,
            }],
            purchase_records: vec![PurchaseRecord {
                receipt_id: None,
                seller_id: "s1".to_string(),
                total_amount: 2.0,
                items: vec![PurchaseItem {
                    sku: "SKU_001".to_string(),
                    quantity: 1.0,
                    sale_price: 2.0,
                    discount: 0.0,
                }],
            }],
        }
    }

    fn minimal_json() -> Value {
        json!({
            "sellers": [{"id": "s1", "first_name": "A", "last_name": "B"}],
            "products": [{"sku": "SKU_001", "purchase_price": 1.0}],
            "purchase_records": [{
                "seller_id": "s1",
                "total_amount": 2.0,
                "items": [{"sku": "SKU_001", "quantity": 1, "sale_price": 2.0, "discount": 0}]
            }]
        })
    }

    fn empty_field(err: ValidationError) -> String {
        match err {
            ValidationError::Empty { field } => field,
            other => panic!("expected Empty, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_sales_data() {
        assert!(validate_sales_data(&minimal_data()).is_ok());

        let mut data = minimal_data();
        data.sellers.clear();
        assert_eq!(empty_field(validate_sales_data(&data).unwrap_err()), "sellers");

        let mut data = minimal_data();
        data.products.clear();
        assert_eq!(empty_field(validate_sales_data(&data).unwrap_err()), "products");

        let mut data = minimal_data();
        data.purchase_records.clear();
        assert_eq!(
            empty_field(validate_sales_data(&data).unwrap_err()),
            "purchase_records"
        );

        assert_eq!(
            empty_field(validate_sales_data(&SalesData::default()).unwrap_err()),
            "sellers"
        );
    }

    #[test]
    fn test_validate_json_dataset() {
        assert!(validate_json_dataset(&minimal_json()).is_ok());

        let err = validate_json_dataset(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { ref field, .. } if field == "dataset"));

        let mut missing = minimal_json();
        missing.as_object_mut().unwrap().remove("products");
        let err = validate_json_dataset(&missing).unwrap_err();
        assert!(matches!(err, ValidationError::Required { ref field } if field == "products"));

        let mut null = minimal_json();
        null["sellers"] = Value::Null;
        let err = validate_json_dataset(&null).unwrap_err();
        assert!(matches!(err, ValidationError::Required { ref field } if field == "sellers"));

        let mut not_array = minimal_json();
        not_array["purchase_records"] = json!({"seller_id": "s1"});
        let err = validate_json_dataset(&not_array).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidFormat { ref field, .. } if field == "purchase_records"
        ));

        let mut empty = minimal_json();
        empty["sellers"] = json!([]);
        let err = validate_json_dataset(&empty).unwrap_err();
        assert_eq!(empty_field(err), "sellers");
    }

    #[test]
    fn test_parse_sales_data() {
        let data = parse_sales_data(&minimal_json().to_string()).unwrap();
        assert_eq!(data, minimal_data());

        let err = parse_sales_data("{ not json").unwrap_err();
        assert!(err.is_invalid_input());

        let mut bad_element = minimal_json();
        bad_element["products"] = json!([{"sku": "SKU_001"}]);
        let err = parse_sales_data(&bad_element.to_string()).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_parse_accepts_float_quantities() {
        let mut whole = minimal_json();
        whole["purchase_records"][0]["items"][0]["quantity"] = json!(2.0);
        let data = parse_sales_data(&whole.to_string()).unwrap();
        assert_eq!(data.purchase_records[0].items[0].quantity, 2.0);

        let mut fractional = minimal_json();
        fractional["purchase_records"][0]["items"][0]["quantity"] = json!(1.5);
        let data = parse_sales_data(&fractional.to_string()).unwrap();
        assert_eq!(data.purchase_records[0].items[0].quantity, 1.5);
    }
}
